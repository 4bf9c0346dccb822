/// Utilities for program accounts.
pub mod accounts;

/// Operations.
pub mod ops;

use std::ops::Deref;

use accounts::{account_with_context, accounts_with_context, ProgramAccountsConfig};
use reflink_programs::{
    anchor_lang::{AccountDeserialize, Discriminator},
    constants::{REFERRAL_AFFILIATE_OFFSET, REFERRAL_MERCHANT_OFFSET},
    reflink::accounts::{Affiliate, Merchant, Referral},
};
use reflink_solana_utils::{
    cluster::Cluster,
    program::Program,
    transaction_builder::{Config, TransactionBuilder},
    transport::Transport,
    utils::WithSlot,
};
use solana_client::{
    nonblocking::rpc_client::RpcClient,
    rpc_config::{RpcAccountInfoConfig, RpcSendTransactionConfig},
    rpc_filter::{Memcmp, RpcFilterType},
};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    pubkey::Pubkey,
    signature::Signature,
    signer::{Signer, SignerError},
};
use typed_builder::TypedBuilder;

use ops::{AffiliateOps, MerchantOps, ReferralOps, SolReferralParams, TokenReferralParams};

/// Options for [`Client`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct ClientOptions {
    /// Override the bundled program id.
    #[builder(default)]
    program_id: Option<Pubkey>,
    #[builder(default)]
    commitment: CommitmentConfig,
    /// Config for sending transactions, e.g. to skip preflight.
    #[builder(default)]
    send_config: RpcSendTransactionConfig,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Client for interacting with the Reflink program.
///
/// Bound to one ledger connection and one wallet. The configuration is
/// immutable, create another client to use a different connection or wallet.
pub struct Client<C, R = RpcClient> {
    cfg: Config<C>,
    program: Program<C>,
    rpc: R,
    send_config: RpcSendTransactionConfig,
}

impl<C: Clone + Deref<Target = impl Signer>> Client<C> {
    /// Create a new [`Client`] with the given options.
    pub fn new_with_options(
        cluster: Cluster,
        payer: C,
        options: ClientOptions,
    ) -> crate::Result<Self> {
        let rpc = cluster.rpc(options.commitment);
        tracing::debug!(%cluster, "created rpc client");
        Ok(Self::new_with_transport(rpc, payer, options))
    }

    /// Create a new [`Client`] with default options.
    pub fn new(cluster: Cluster, payer: C) -> crate::Result<Self> {
        Self::new_with_options(cluster, payer, ClientOptions::default())
    }
}

impl<C: Clone + Deref<Target = impl Signer>, R: Transport> Client<C, R> {
    /// Create a new [`Client`] over the given transport.
    pub fn new_with_transport(rpc: R, payer: C, options: ClientOptions) -> Self {
        let ClientOptions {
            program_id,
            commitment,
            send_config,
        } = options;
        let cfg = Config::new(payer, commitment);
        Self {
            program: Program::new(program_id.unwrap_or(reflink_programs::ID), cfg.clone()),
            cfg,
            rpc,
            send_config,
        }
    }

    /// Get the program.
    pub fn program(&self) -> &Program<C> {
        &self.program
    }

    /// Get the program id.
    pub fn program_id(&self) -> &Pubkey {
        self.program.id()
    }

    /// Get current commitment config.
    pub fn commitment(&self) -> CommitmentConfig {
        *self.cfg.commitment()
    }

    /// Get the pubkey of the wallet.
    ///
    /// Returns [`AuthorityMissing`](crate::Error::AuthorityMissing) if the wallet
    /// cannot provide one.
    pub fn payer(&self) -> crate::Result<Pubkey> {
        self.cfg.try_payer().map_err(crate::Error::AuthorityMissing)
    }

    /// Get the transport.
    pub fn rpc(&self) -> &R {
        &self.rpc
    }

    /// Create a transaction builder for the program.
    pub fn transaction(&self) -> TransactionBuilder<C> {
        self.program.transaction()
    }

    /// Find the affiliate lookup address of the given authority.
    pub fn find_affiliate_address(&self, authority: &Pubkey) -> crate::Result<Pubkey> {
        Ok(crate::pda::find_affiliate_address(authority, self.program_id())?.0)
    }

    /// Find the merchant lookup address of the given authority.
    pub fn find_merchant_address(&self, authority: &Pubkey) -> crate::Result<Pubkey> {
        Ok(crate::pda::find_merchant_address(authority, self.program_id())?.0)
    }

    /// Sign and send the transaction, returning the signature and the output of the builder.
    ///
    /// The signature is returned once the ledger accepts the transaction,
    /// it is not necessarily finalized. The transaction is sent at most once.
    pub async fn send_with_output<T>(
        &self,
        tx: TransactionBuilder<C, T>,
    ) -> crate::Result<(Signature, T)> {
        let payer = tx.try_payer().map_err(crate::Error::AuthorityMissing)?;
        let (tx, output) = tx.swap_output(());
        let latest_hash = self.rpc.latest_blockhash().await?;
        let signed = tx
            .signed_transaction_with_blockhash(latest_hash)
            .map_err(|err| match err {
                reflink_solana_utils::Error::Signer(err) if !is_malformed(&err) => {
                    crate::Error::AuthorityMissing(err)
                }
                err => err.into(),
            })?;
        let signature = self
            .rpc
            .submit_transaction(&signed, self.send_config)
            .await
            .map_err(crate::Error::SubmissionRejected)?;
        tracing::info!(%signature, %payer, "transaction submitted");
        Ok((signature, output))
    }

    /// Sign and send the transaction.
    pub async fn send<T>(&self, tx: TransactionBuilder<C, T>) -> crate::Result<Signature> {
        Ok(self.send_with_output(tx).await?.0)
    }

    /// Register the wallet as an affiliate.
    ///
    /// Returns the signature and the address of the new affiliate record.
    pub async fn submit_register_affiliate(&self) -> crate::Result<(Signature, Pubkey)> {
        let tx = self.register_affiliate()?;
        let (signature, affiliate) = self.send_with_output(tx).await?;
        tracing::info!(%affiliate, "registered affiliate");
        Ok((signature, affiliate))
    }

    /// Register the wallet as a merchant.
    ///
    /// Returns the signature and the address of the new merchant record.
    pub async fn submit_register_merchant(
        &self,
        commission_bps: u16,
    ) -> crate::Result<(Signature, Pubkey)> {
        let tx = self.register_merchant(commission_bps)?;
        let (signature, merchant) = self.send_with_output(tx).await?;
        tracing::info!(%merchant, commission_bps, "registered merchant");
        Ok((signature, merchant))
    }

    /// Pay a referral in SOL.
    ///
    /// Returns the signature and the address of the new referral record.
    pub async fn submit_referral_sol(
        &self,
        params: &SolReferralParams,
    ) -> crate::Result<(Signature, Pubkey)> {
        let tx = self.process_referral_sol(params)?;
        let (signature, referral) = self.send_with_output(tx).await?;
        tracing::info!(%referral, amount = params.amount, "processed SOL referral");
        Ok((signature, referral))
    }

    /// Pay a referral in tokens.
    ///
    /// Returns the signature and the address of the new referral record.
    pub async fn submit_referral_token(
        &self,
        params: &TokenReferralParams,
    ) -> crate::Result<(Signature, Pubkey)> {
        let tx = self.process_referral_token(params)?;
        let (signature, referral) = self.send_with_output(tx).await?;
        tracing::info!(
            %referral,
            mint = %params.token_mint,
            amount = params.amount,
            "processed token referral"
        );
        Ok((signature, referral))
    }

    /// Update the commission rate of a merchant.
    pub async fn submit_update_merchant_commission(
        &self,
        merchant: &Pubkey,
        new_commission_bps: u16,
    ) -> crate::Result<Signature> {
        let tx = self.update_merchant_commission(merchant, new_commission_bps)?;
        self.send(tx).await
    }

    /// Flip the active flag of a merchant.
    pub async fn submit_toggle_merchant_status(
        &self,
        merchant: &Pubkey,
    ) -> crate::Result<Signature> {
        let tx = self.toggle_merchant_status(merchant)?;
        self.send(tx).await
    }

    fn account_config(&self) -> RpcAccountInfoConfig {
        RpcAccountInfoConfig {
            commitment: Some(self.commitment()),
            ..Default::default()
        }
    }

    /// Fetch the record of type `T` at the given address with config.
    ///
    /// The value inside the returned context will be `None` if the account does not
    /// exist, is not owned by the program or holds another kind of record.
    pub async fn account_with_config<T>(
        &self,
        address: &Pubkey,
        config: RpcAccountInfoConfig,
    ) -> crate::Result<WithSlot<Option<T>>>
    where
        T: AccountDeserialize + Discriminator,
    {
        account_with_context(&self.rpc, self.program_id(), address, config).await
    }

    /// Fetch the record of type `T` at the given address.
    pub async fn account<T>(&self, address: &Pubkey) -> crate::Result<Option<T>>
    where
        T: AccountDeserialize + Discriminator,
    {
        Ok(self
            .account_with_config(address, self.account_config())
            .await?
            .into_value())
    }

    async fn expect_account<T>(&self, address: &Pubkey) -> crate::Result<T>
    where
        T: AccountDeserialize + Discriminator,
    {
        self.account(address)
            .await?
            .ok_or(crate::Error::AccountNotFound(*address))
    }

    /// Fetch all records of type `T` matching the filters, along with context.
    pub async fn accounts_with_config<T>(
        &self,
        filters: impl IntoIterator<Item = RpcFilterType>,
        config: ProgramAccountsConfig,
    ) -> crate::Result<WithSlot<Vec<(Pubkey, T)>>>
    where
        T: AccountDeserialize + Discriminator,
    {
        accounts_with_context(&self.rpc, self.program_id(), filters, config).await
    }

    /// Fetch all records of type `T` matching the filters.
    pub async fn accounts<T>(
        &self,
        filters: impl IntoIterator<Item = RpcFilterType>,
    ) -> crate::Result<Vec<(Pubkey, T)>>
    where
        T: AccountDeserialize + Discriminator,
    {
        let config = ProgramAccountsConfig {
            commitment: Some(self.commitment()),
            ..Default::default()
        };
        let res = self.accounts_with_config(filters, config).await?;
        tracing::debug!(slot=%res.slot(), "accounts fetched");
        Ok(res.into_value())
    }

    /// Fetch [`Affiliate`] record with its address.
    pub async fn affiliate(&self, address: &Pubkey) -> crate::Result<Affiliate> {
        self.expect_account(address).await
    }

    /// Fetch [`Merchant`] record with its address.
    pub async fn merchant(&self, address: &Pubkey) -> crate::Result<Merchant> {
        self.expect_account(address).await
    }

    /// Fetch [`Referral`] record with its address.
    pub async fn referral(&self, address: &Pubkey) -> crate::Result<Referral> {
        self.expect_account(address).await
    }

    /// Fetch all referrals credited to the given affiliate.
    ///
    /// The order of the records is unspecified.
    pub async fn referrals_by_affiliate(
        &self,
        affiliate: &Pubkey,
    ) -> crate::Result<Vec<(Pubkey, Referral)>> {
        self.accounts(Some(RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
            REFERRAL_AFFILIATE_OFFSET,
            affiliate.as_ref(),
        ))))
        .await
    }

    /// Fetch all referrals paid by the given merchant.
    ///
    /// The order of the records is unspecified.
    pub async fn referrals_by_merchant(
        &self,
        merchant: &Pubkey,
    ) -> crate::Result<Vec<(Pubkey, Referral)>> {
        self.accounts(Some(RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
            REFERRAL_MERCHANT_OFFSET,
            merchant.as_ref(),
        ))))
        .await
    }
}

/// Signer errors raised by the shape of the transaction rather than by the wallet.
fn is_malformed(err: &SignerError) -> bool {
    matches!(
        err,
        SignerError::NotEnoughSigners
            | SignerError::TooManySigners
            | SignerError::KeypairPubkeyMismatch
            | SignerError::InvalidInput(_)
    )
}
