use std::ops::Deref;

use reflink_programs::reflink::client::{accounts, args};
use reflink_solana_utils::{transaction_builder::TransactionBuilder, transport::Transport};
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer, system_program};

use crate::{client::Client, constants::MAX_COMMISSION_BPS};

/// Check that the commission rate is in `[0, MAX_COMMISSION_BPS]`.
pub fn validate_commission(commission_bps: u16) -> crate::Result<u16> {
    if commission_bps > MAX_COMMISSION_BPS {
        return Err(crate::Error::InvalidCommission(commission_bps));
    }
    Ok(commission_bps)
}

/// Operations for merchant records.
pub trait MerchantOps<C> {
    /// Register the wallet as a merchant.
    ///
    /// The output is the address of the new merchant record.
    fn register_merchant(&self, commission_bps: u16)
        -> crate::Result<TransactionBuilder<C, Pubkey>>;

    /// Update the commission rate of the merchant.
    ///
    /// The wallet must be the authority of the merchant.
    fn update_merchant_commission(
        &self,
        merchant: &Pubkey,
        new_commission_bps: u16,
    ) -> crate::Result<TransactionBuilder<C>>;

    /// Flip the active flag of the merchant.
    ///
    /// The wallet must be the authority of the merchant.
    fn toggle_merchant_status(&self, merchant: &Pubkey) -> crate::Result<TransactionBuilder<C>>;
}

impl<C: Deref<Target = impl Signer> + Clone, R: Transport> MerchantOps<C> for Client<C, R> {
    fn register_merchant(
        &self,
        commission_bps: u16,
    ) -> crate::Result<TransactionBuilder<C, Pubkey>> {
        let commission_bps = validate_commission(commission_bps)?;
        let authority = self.payer()?;
        let merchant = Keypair::new();
        let address = merchant.pubkey();
        tracing::debug!(%address, %authority, commission_bps, "building merchant registration");
        Ok(self
            .transaction()
            .anchor_accounts(accounts::RegisterMerchant {
                merchant: address,
                authority,
                system_program: system_program::ID,
            })
            .anchor_args(args::RegisterMerchant { commission_bps })
            .owned_signer(merchant)
            .output(address))
    }

    fn update_merchant_commission(
        &self,
        merchant: &Pubkey,
        new_commission_bps: u16,
    ) -> crate::Result<TransactionBuilder<C>> {
        let new_commission_bps = validate_commission(new_commission_bps)?;
        let authority = self.payer()?;
        Ok(self
            .transaction()
            .anchor_accounts(accounts::UpdateMerchantCommission {
                merchant: *merchant,
                authority,
            })
            .anchor_args(args::UpdateMerchantCommission { new_commission_bps }))
    }

    fn toggle_merchant_status(&self, merchant: &Pubkey) -> crate::Result<TransactionBuilder<C>> {
        let authority = self.payer()?;
        Ok(self
            .transaction()
            .anchor_accounts(accounts::ToggleMerchantStatus {
                merchant: *merchant,
                authority,
            })
            .anchor_args(args::ToggleMerchantStatus {}))
    }
}
