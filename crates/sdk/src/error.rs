use solana_sdk::{pubkey::Pubkey, signer::SignerError};

pub(crate) use anchor_lang::prelude::Error as AnchorLangError;

/// SDK Error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Commission rate out of bounds.
    #[error("invalid commission: {0} bps exceeds the maximum of 10000 bps")]
    InvalidCommission(u16),
    /// Amount cannot be represented in the smallest unit.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    /// The wallet cannot provide its public key.
    #[error("authority missing: {0}")]
    AuthorityMissing(#[source] SignerError),
    /// The address holds no record of the expected kind.
    #[error("account not found: {0}")]
    AccountNotFound(Pubkey),
    /// Failed to resolve the associated token account.
    #[error("token account resolution failed: {0}")]
    TokenAccountResolutionFailed(String),
    /// The ledger rejected the transaction.
    #[error("submission rejected: {0}")]
    SubmissionRejected(#[source] reflink_solana_utils::Error),
    /// No valid bump seed found.
    #[error("no valid program address found for `{0}` seeds")]
    DerivationExhausted(&'static str),
    /// Error from [`reflink_solana_utils`].
    #[error("utils: {0}")]
    SolanaUtils(#[from] reflink_solana_utils::Error),
    /// Error from [`reflink_programs`].
    #[error("programs: {0}")]
    Programs(#[from] reflink_programs::Error),
    /// Anchor Error.
    #[error("anchor: {0}")]
    Anchor(Box<AnchorLangError>),
    /// Parse Pubkey Error.
    #[error("parse pubkey error: {0}")]
    ParsePubkey(#[from] solana_sdk::pubkey::ParsePubkeyError),
}

impl Error {
    /// Create an invalid amount error.
    pub fn invalid_amount(msg: impl ToString) -> Self {
        Self::InvalidAmount(msg.to_string())
    }

    /// Returns whether the error is raised by local validation,
    /// i.e., before any request is made.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidCommission(_) | Self::InvalidAmount(_))
    }
}

impl From<AnchorLangError> for Error {
    fn from(value: AnchorLangError) -> Self {
        Self::Anchor(Box::new(value))
    }
}
