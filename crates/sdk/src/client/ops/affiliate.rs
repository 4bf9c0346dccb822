use std::ops::Deref;

use reflink_programs::reflink::client::{accounts, args};
use reflink_solana_utils::{transaction_builder::TransactionBuilder, transport::Transport};
use solana_sdk::{
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
    system_program,
};

use crate::client::Client;

/// Operations for affiliate records.
pub trait AffiliateOps<C> {
    /// Register the wallet as an affiliate.
    ///
    /// The output is the address of the new affiliate record, a freshly generated
    /// keypair that co-signs the transaction.
    fn register_affiliate(&self) -> crate::Result<TransactionBuilder<C, Pubkey>>;
}

impl<C: Deref<Target = impl Signer> + Clone, R: Transport> AffiliateOps<C> for Client<C, R> {
    fn register_affiliate(&self) -> crate::Result<TransactionBuilder<C, Pubkey>> {
        let authority = self.payer()?;
        let affiliate = Keypair::new();
        let address = affiliate.pubkey();
        tracing::debug!(%address, %authority, "building affiliate registration");
        Ok(self
            .transaction()
            .anchor_accounts(accounts::RegisterAffiliate {
                affiliate: address,
                authority,
                system_program: system_program::ID,
            })
            .anchor_args(args::RegisterAffiliate {})
            .owned_signer(affiliate)
            .output(address))
    }
}
