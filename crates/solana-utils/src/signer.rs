use std::rc::Rc;

use solana_sdk::{
    pubkey::Pubkey,
    signature::Signature,
    signer::{Signer, SignerError},
};

/// Boxed Signer.
pub type BoxSigner = Box<dyn Signer>;

/// Local dyn signer.
pub struct LocalDynSigner(BoxSigner);

impl Signer for LocalDynSigner {
    fn pubkey(&self) -> Pubkey {
        self.0.pubkey()
    }

    fn try_pubkey(&self) -> Result<Pubkey, SignerError> {
        self.0.try_pubkey()
    }

    fn sign_message(&self, message: &[u8]) -> Signature {
        self.0.sign_message(message)
    }

    fn try_sign_message(&self, message: &[u8]) -> Result<Signature, SignerError> {
        self.0.try_sign_message(message)
    }

    fn is_interactive(&self) -> bool {
        self.0.is_interactive()
    }
}

/// Local Signer.
pub type LocalSignerRef = Rc<LocalDynSigner>;

/// Create a new local signer.
pub fn local_signer(signer: impl Signer + 'static) -> LocalSignerRef {
    LocalSignerRef::new(LocalDynSigner(Box::new(signer)))
}
