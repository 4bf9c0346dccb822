use std::ops::Deref;

use anchor_spl::associated_token::get_associated_token_address_with_program_id;
use reflink_programs::reflink::client::{accounts, args};
use reflink_solana_utils::{transaction_builder::TransactionBuilder, transport::Transport};
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer, system_program};
use typed_builder::TypedBuilder;

use crate::client::Client;

/// Params of a referral paid in SOL.
#[derive(Debug, Clone, TypedBuilder)]
pub struct SolReferralParams {
    /// The merchant record.
    pub merchant: Pubkey,
    /// The affiliate record.
    pub affiliate: Pubkey,
    /// Wallet receiving the merchant's share.
    pub merchant_wallet: Pubkey,
    /// Wallet receiving the commission.
    pub affiliate_wallet: Pubkey,
    /// Amount in lamports.
    pub amount: u64,
}

/// Params of a referral paid in tokens.
#[derive(Debug, Clone, TypedBuilder)]
pub struct TokenReferralParams {
    /// The merchant record.
    pub merchant: Pubkey,
    /// The affiliate record.
    pub affiliate: Pubkey,
    /// Token mint of the payment.
    pub token_mint: Pubkey,
    /// Token account receiving the merchant's share.
    pub merchant_token_account: Pubkey,
    /// Token account receiving the commission.
    pub affiliate_token_account: Pubkey,
    /// Amount in the smallest unit of the token.
    pub amount: u64,
    /// Source token account of the payer.
    ///
    /// Defaults to the associated token account of the wallet.
    #[builder(default, setter(strip_option))]
    pub payer_token_account: Option<Pubkey>,
    /// Token program of the mint. Defaults to the SPL Token program.
    #[builder(default, setter(strip_option))]
    pub token_program: Option<Pubkey>,
}

impl TokenReferralParams {
    /// Get the token program.
    pub fn token_program(&self) -> Pubkey {
        self.token_program.unwrap_or(anchor_spl::token::ID)
    }
}

/// Find the associated token account of `owner` for `mint`.
///
/// Fails with [`TokenAccountResolutionFailed`](crate::Error::TokenAccountResolutionFailed)
/// if `owner` is off-curve, since no associated token account can be created for it.
pub fn resolve_associated_token_account(
    owner: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> crate::Result<Pubkey> {
    if !owner.is_on_curve() {
        return Err(crate::Error::TokenAccountResolutionFailed(format!(
            "`{owner}` is off-curve, it cannot own an associated token account of `{mint}`"
        )));
    }
    Ok(get_associated_token_address_with_program_id(
        owner,
        mint,
        token_program,
    ))
}

/// Operations for referral payments.
pub trait ReferralOps<C> {
    /// Pay a referral in SOL.
    ///
    /// The output is the address of the new referral record. The split between the
    /// merchant and the affiliate is computed by the program.
    fn process_referral_sol(
        &self,
        params: &SolReferralParams,
    ) -> crate::Result<TransactionBuilder<C, Pubkey>>;

    /// Pay a referral in tokens.
    ///
    /// The output is the address of the new referral record.
    fn process_referral_token(
        &self,
        params: &TokenReferralParams,
    ) -> crate::Result<TransactionBuilder<C, Pubkey>>;
}

impl<C: Deref<Target = impl Signer> + Clone, R: Transport> ReferralOps<C> for Client<C, R> {
    fn process_referral_sol(
        &self,
        params: &SolReferralParams,
    ) -> crate::Result<TransactionBuilder<C, Pubkey>> {
        let payer = self.payer()?;
        let referral = Keypair::new();
        let address = referral.pubkey();
        tracing::debug!(referral=%address, ?params, "building SOL referral");
        Ok(self
            .transaction()
            .anchor_accounts(accounts::RegisterReferralSol {
                affiliate: params.affiliate,
                referral: address,
                merchant: params.merchant,
                merchant_wallet: params.merchant_wallet,
                affiliate_wallet: params.affiliate_wallet,
                payer,
                system_program: system_program::ID,
            })
            .anchor_args(args::RegisterReferralSol {
                amount: params.amount,
            })
            .owned_signer(referral)
            .output(address))
    }

    fn process_referral_token(
        &self,
        params: &TokenReferralParams,
    ) -> crate::Result<TransactionBuilder<C, Pubkey>> {
        let payer = self.payer()?;
        let token_program = params.token_program();
        let payer_token_account = match params.payer_token_account {
            Some(account) => account,
            None => resolve_associated_token_account(&payer, &params.token_mint, &token_program)?,
        };
        let referral = Keypair::new();
        let address = referral.pubkey();
        tracing::debug!(
            referral=%address,
            %payer_token_account,
            ?params,
            "building token referral"
        );
        Ok(self
            .transaction()
            .anchor_accounts(accounts::RegisterReferralToken {
                affiliate: params.affiliate,
                referral: address,
                merchant: params.merchant,
                token_mint: params.token_mint,
                merchant_token_account: params.merchant_token_account,
                affiliate_token_account: params.affiliate_token_account,
                payer_token_account,
                payer,
                token_program,
                system_program: system_program::ID,
            })
            .anchor_args(args::RegisterReferralToken {
                amount: params.amount,
            })
            .owned_signer(referral)
            .output(address))
    }
}
