use std::ops::Deref;

use anchor_spl::associated_token::spl_associated_token_account;
use reflink_solana_utils::{transaction_builder::TransactionBuilder, transport::Transport};
use solana_sdk::{pubkey::Pubkey, signer::Signer};

use crate::client::Client;

/// Token account operations.
pub trait TokenAccountOps<C> {
    /// Prepare associated token account.
    ///
    /// Creates the associated token account of `owner` (defaults to the wallet)
    /// if it does not exist yet.
    fn prepare_associated_token_account(
        &self,
        mint: &Pubkey,
        token_program_id: &Pubkey,
        owner: Option<&Pubkey>,
    ) -> crate::Result<TransactionBuilder<C, Pubkey>>;
}

impl<C: Deref<Target = impl Signer> + Clone, R: Transport> TokenAccountOps<C> for Client<C, R> {
    fn prepare_associated_token_account(
        &self,
        mint: &Pubkey,
        token_program_id: &Pubkey,
        owner: Option<&Pubkey>,
    ) -> crate::Result<TransactionBuilder<C, Pubkey>> {
        let payer = self.payer()?;
        let owner = owner.copied().unwrap_or(payer);
        let address =
            super::referral::resolve_associated_token_account(&owner, mint, token_program_id)?;
        let ix =
            spl_associated_token_account::instruction::create_associated_token_account_idempotent(
                &payer,
                &owner,
                mint,
                token_program_id,
            );
        Ok(self
            .transaction()
            .pre_instruction(ix, true)
            .output(address))
    }
}
