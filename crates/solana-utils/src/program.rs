use std::ops::Deref;

use solana_sdk::{pubkey::Pubkey, signer::Signer};

use crate::transaction_builder::{Config, TransactionBuilder};

/// Program.
pub struct Program<C> {
    program_id: Pubkey,
    cfg: Config<C>,
}

impl<C> Program<C> {
    /// Create a new [`Program`].
    pub fn new(program_id: Pubkey, cfg: Config<C>) -> Self {
        Self { program_id, cfg }
    }

    /// Get the program id.
    pub fn id(&self) -> &Pubkey {
        &self.program_id
    }
}

impl<C: Deref<Target = impl Signer> + Clone> Program<C> {
    /// Create a [`TransactionBuilder`].
    pub fn transaction(&self) -> TransactionBuilder<C> {
        TransactionBuilder::new(self.program_id, &self.cfg)
    }
}
