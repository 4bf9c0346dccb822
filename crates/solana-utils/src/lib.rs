#![deny(missing_docs)]
#![deny(unreachable_pub)]

//! # Reflink Solana Utils

/// Error type.
pub mod error;

/// Cluster.
pub mod cluster;

/// Signer.
pub mod signer;

/// Program.
pub mod program;

/// Transaction builder.
pub mod transaction_builder;

/// Ledger transport.
pub mod transport;

/// Utils.
pub mod utils;

pub use crate::error::Error;

/// Result type.
pub type Result<T> = std::result::Result<T, Error>;

pub use anchor_lang;
pub use solana_client;
pub use solana_sdk;
