/// Affiliate operations.
pub mod affiliate;

/// Merchant operations.
pub mod merchant;

/// Referral payment operations.
pub mod referral;

/// Token account operations.
pub mod token_account;

pub use self::{
    affiliate::AffiliateOps,
    merchant::MerchantOps,
    referral::{ReferralOps, SolReferralParams, TokenReferralParams},
    token_account::TokenAccountOps,
};
