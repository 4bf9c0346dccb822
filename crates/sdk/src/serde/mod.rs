/// Pubkey serialization.
pub mod string_pubkey;

/// Record serialization.
pub mod serde_records;

#[cfg(feature = "serde")]
pub use string_pubkey::pubkey;
pub use string_pubkey::StringPubkey;

pub use serde_records::{SerdeAffiliate, SerdeMerchant, SerdeReferral};
