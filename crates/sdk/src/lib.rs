//! # Reflink SDK
//!
//! Client for the Reflink referral-commission program: derives record
//! addresses, builds and submits referral transactions, and queries
//! on-chain records.

/// Error type.
pub mod error;

/// Constants.
pub mod constants;

/// Functions for constructing Program Derived Addresses.
pub mod pda;

/// Utils.
pub mod utils;

/// Serialization support.
pub mod serde;

/// Client.
pub mod client;

pub use client::{ops, Client, ClientOptions};
pub use error::Error;

/// Result type.
pub type Result<T> = std::result::Result<T, Error>;

pub use reflink_programs as programs;
pub use reflink_solana_utils as solana_utils;
