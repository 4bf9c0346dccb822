use reflink_programs::anchor_lang::{AccountDeserialize, Discriminator};
use reflink_solana_utils::{
    transport::{ProgramAccountsConfigForRpc, Transport},
    utils::WithSlot,
};
use solana_account_decoder::UiAccountEncoding;
use solana_client::{
    rpc_config::RpcAccountInfoConfig,
    rpc_filter::{Memcmp, RpcFilterType},
};
use solana_sdk::{account::Account, commitment_config::CommitmentConfig, pubkey::Pubkey};

/// Program Accounts Config.
#[derive(Debug, Default, Clone)]
pub struct ProgramAccountsConfig {
    /// Commitment.
    pub commitment: Option<CommitmentConfig>,
    /// Min context slot.
    pub min_context_slot: Option<u64>,
}

/// Returns whether the account holds a record of type `T` owned by the program.
pub fn is_record_of<T: Discriminator>(program_id: &Pubkey, account: &Account) -> bool {
    account.owner == *program_id && account.data.starts_with(T::DISCRIMINATOR)
}

/// Decode the record of type `T`.
///
/// Returns `None` if the account is not owned by the program or holds another
/// kind of record.
pub fn decode_record<T>(program_id: &Pubkey, account: &Account) -> crate::Result<Option<T>>
where
    T: AccountDeserialize + Discriminator,
{
    if !is_record_of::<T>(program_id, account) {
        return Ok(None);
    }
    Ok(Some(T::try_deserialize(&mut (&account.data as &[u8]))?))
}

/// Returns all records of the given type matching the specified filters, along with context.
///
/// A filter on the discriminator of `T` is always prepended, so other kinds of
/// records are never returned.
pub async fn accounts_with_context<T>(
    transport: &impl Transport,
    program_id: &Pubkey,
    filters: impl IntoIterator<Item = RpcFilterType>,
    config: ProgramAccountsConfig,
) -> crate::Result<WithSlot<Vec<(Pubkey, T)>>>
where
    T: AccountDeserialize + Discriminator,
{
    let ProgramAccountsConfig {
        commitment,
        min_context_slot,
    } = config;
    let filters = std::iter::once(RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
        0,
        T::DISCRIMINATOR,
    )))
    .chain(filters)
    .collect::<Vec<_>>();
    let config = ProgramAccountsConfigForRpc {
        filters: Some(filters),
        account_config: RpcAccountInfoConfig {
            encoding: Some(UiAccountEncoding::Base64),
            commitment,
            min_context_slot,
            ..Default::default()
        },
    };
    let res = transport.fetch_program_accounts(program_id, config).await?;
    res.map(|accounts| {
        accounts
            .into_iter()
            .map(|(key, account)| {
                Ok((key, T::try_deserialize(&mut (&account.data as &[u8]))?))
            })
            .collect::<crate::Result<Vec<_>>>()
    })
    .transpose()
}

/// Return the decoded record at the given address, along with context.
///
/// The value inside the context will be `None` if the account does not exist,
/// is not owned by the program or holds another kind of record.
pub async fn account_with_context<T>(
    transport: &impl Transport,
    program_id: &Pubkey,
    address: &Pubkey,
    config: RpcAccountInfoConfig,
) -> crate::Result<WithSlot<Option<T>>>
where
    T: AccountDeserialize + Discriminator,
{
    let res = transport.fetch_account(address, config).await?;
    res.map(|account| match account {
        Some(account) => decode_record(program_id, &account),
        None => Ok(None),
    })
    .transpose()
}
