use serde_json::json;
use solana_account_decoder::{UiAccount, UiAccountEncoding};
use solana_client::{
    client_error::ClientError,
    nonblocking::rpc_client::RpcClient,
    rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig, RpcSendTransactionConfig},
    rpc_filter::RpcFilterType,
    rpc_request::{RpcError, RpcRequest},
    rpc_response::{Response, RpcKeyedAccount},
};
use solana_sdk::{
    account::Account, hash::Hash, pubkey::Pubkey, signature::Signature,
    transaction::VersionedTransaction,
};

use crate::utils::WithSlot;

/// Program Accounts Config.
#[derive(Debug, Default, Clone)]
pub struct ProgramAccountsConfigForRpc {
    /// Filters.
    pub filters: Option<Vec<RpcFilterType>>,
    /// Account Config.
    pub account_config: RpcAccountInfoConfig,
}

/// The ledger RPC collaborator.
///
/// Every method is a single request-response exchange. Implementations must not
/// retry submissions on their own.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Get the latest blockhash.
    async fn latest_blockhash(&self) -> crate::Result<Hash>;

    /// Submit a signed transaction.
    ///
    /// Returns the signature once the transaction is accepted by the node,
    /// it is not necessarily finalized.
    async fn submit_transaction(
        &self,
        transaction: &VersionedTransaction,
        config: RpcSendTransactionConfig,
    ) -> crate::Result<Signature>;

    /// Get account with context.
    ///
    /// The value inside the context will be `None` if the account does not exist.
    async fn fetch_account(
        &self,
        address: &Pubkey,
        config: RpcAccountInfoConfig,
    ) -> crate::Result<WithSlot<Option<Account>>>;

    /// Get program accounts matching the filters, with context.
    async fn fetch_program_accounts(
        &self,
        program: &Pubkey,
        config: ProgramAccountsConfigForRpc,
    ) -> crate::Result<WithSlot<Vec<(Pubkey, Account)>>>;
}

impl Transport for RpcClient {
    async fn latest_blockhash(&self) -> crate::Result<Hash> {
        Ok(self.get_latest_blockhash().await?)
    }

    async fn submit_transaction(
        &self,
        transaction: &VersionedTransaction,
        mut config: RpcSendTransactionConfig,
    ) -> crate::Result<Signature> {
        config.preflight_commitment = config
            .preflight_commitment
            .or(Some(self.commitment().commitment));
        tracing::debug!(?config, "sending transaction");
        Ok(self
            .send_transaction_with_config(transaction, config)
            .await?)
    }

    async fn fetch_account(
        &self,
        address: &Pubkey,
        mut config: RpcAccountInfoConfig,
    ) -> crate::Result<WithSlot<Option<Account>>> {
        config.encoding = Some(config.encoding.unwrap_or(UiAccountEncoding::Base64));
        let commitment = config
            .commitment
            .unwrap_or_else(|| self.commitment());
        config.commitment = Some(commitment);
        tracing::debug!(%address, ?config, "fetching account");
        let res = self
            .send::<Response<Option<UiAccount>>>(
                RpcRequest::GetAccountInfo,
                json!([address.to_string(), config]),
            )
            .await?;
        WithSlot::new(res.context.slot, res.value)
            .map(|value| {
                value
                    .map(|account| decode_account(account, RpcRequest::GetAccountInfo))
                    .transpose()
            })
            .transpose()
    }

    /// Get program accounts with context.
    ///
    /// # Note
    /// This function only supports RPC Node versions `>= 1.17`.
    async fn fetch_program_accounts(
        &self,
        program: &Pubkey,
        mut config: ProgramAccountsConfigForRpc,
    ) -> crate::Result<WithSlot<Vec<(Pubkey, Account)>>> {
        let commitment = config
            .account_config
            .commitment
            .unwrap_or_else(|| self.commitment());
        config.account_config.commitment = Some(commitment);
        let config = RpcProgramAccountsConfig {
            filters: config.filters,
            account_config: config.account_config,
            with_context: Some(true),
            sort_results: None,
        };
        tracing::debug!(%program, ?config, "fetching program accounts");
        let res = self
            .send::<Response<Vec<RpcKeyedAccount>>>(
                RpcRequest::GetProgramAccounts,
                json!([program.to_string(), config]),
            )
            .await?;
        WithSlot::new(res.context.slot, res.value)
            .map(|accounts| parse_keyed_accounts(accounts, RpcRequest::GetProgramAccounts))
            .transpose()
    }
}

fn parse_keyed_accounts(
    accounts: Vec<RpcKeyedAccount>,
    request: RpcRequest,
) -> crate::Result<Vec<(Pubkey, Account)>> {
    let mut pubkey_accounts: Vec<(Pubkey, Account)> = Vec::with_capacity(accounts.len());
    for RpcKeyedAccount { pubkey, account } in accounts.into_iter() {
        let pubkey = pubkey.parse().map_err(|_| {
            ClientError::new_with_request(
                RpcError::ParseError("Pubkey".to_string()).into(),
                request,
            )
        })?;
        pubkey_accounts.push((pubkey, decode_account(account, request)?));
    }
    Ok(pubkey_accounts)
}

/// Decode an account returned by the node.
///
/// Undecodable data is an error, never a missing account.
fn decode_account(account: UiAccount, request: RpcRequest) -> crate::Result<Account> {
    account.decode().ok_or_else(|| {
        ClientError::new_with_request(
            RpcError::ParseError("Account from rpc".to_string()).into(),
            request,
        )
        .into()
    })
}
