#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Client-side description of the Reflink program interface.

anchor_lang::declare_program!(reflink);

// `declare_program!` does not derive `PartialEq`; this is the derive-equivalent impl.
impl PartialEq for reflink::accounts::Affiliate {
    fn eq(&self, other: &Self) -> bool {
        self.authority == other.authority
            && self.total_referrals == other.total_referrals
            && self.total_earnings == other.total_earnings
    }
}

/// Constants.
pub mod constants;

/// Decoding of instruction data.
pub mod instruction;

/// Utilities.
pub mod utils;

/// Error.
pub mod error;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

pub use anchor_lang;
pub use reflink::ID;
