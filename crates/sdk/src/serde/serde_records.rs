use reflink_programs::reflink::accounts::{Affiliate, Merchant, Referral};

use crate::utils::amount::Lamport;

use super::StringPubkey;

/// Serializable version of [`Affiliate`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SerdeAffiliate {
    /// Authority.
    pub authority: StringPubkey,
    /// Number of referrals.
    pub total_referrals: u64,
    /// Lifetime earnings in the smallest unit.
    pub total_earnings: u64,
}

impl From<&Affiliate> for SerdeAffiliate {
    fn from(affiliate: &Affiliate) -> Self {
        Self {
            authority: affiliate.authority.into(),
            total_referrals: affiliate.total_referrals,
            total_earnings: affiliate.total_earnings,
        }
    }
}

/// Serializable version of [`Merchant`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SerdeMerchant {
    /// Authority.
    pub authority: StringPubkey,
    /// Commission rate in basis points.
    pub commission_bps: u16,
    /// Whether the merchant is active.
    pub is_active: bool,
    /// Number of referrals.
    pub total_referrals: u64,
}

impl From<&Merchant> for SerdeMerchant {
    fn from(merchant: &Merchant) -> Self {
        Self {
            authority: merchant.authority.into(),
            commission_bps: merchant.commission_bps,
            is_active: merchant.is_active,
            total_referrals: merchant.total_referrals,
        }
    }
}

/// Serializable version of [`Referral`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SerdeReferral {
    /// Affiliate address.
    pub affiliate: StringPubkey,
    /// Merchant address.
    pub merchant: StringPubkey,
    /// Amount in the smallest unit.
    pub amount: u64,
    /// Amount in SOL, only present for native payments.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub amount_in_sol: Option<Lamport>,
    /// Token mint, absent for native payments.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub token_mint: Option<StringPubkey>,
    /// Unix timestamp.
    pub timestamp: i64,
}

impl From<&Referral> for SerdeReferral {
    fn from(referral: &Referral) -> Self {
        Self {
            affiliate: referral.affiliate.into(),
            merchant: referral.merchant.into(),
            amount: referral.amount,
            amount_in_sol: referral
                .is_native()
                .then(|| Lamport::from_lamports(referral.amount)),
            token_mint: referral.token_mint.map(Into::into),
            timestamp: referral.timestamp,
        }
    }
}
