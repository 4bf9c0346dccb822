use anchor_lang::Discriminator;

use crate::reflink::accounts::Referral;

/// Max commission rate in basis points (100%).
pub const MAX_COMMISSION_BPS: u16 = 10_000;

/// Offset of the affiliate address in a serialized [`Referral`].
pub const REFERRAL_AFFILIATE_OFFSET: usize = Referral::DISCRIMINATOR.len();

/// Offset of the merchant address in a serialized [`Referral`].
pub const REFERRAL_MERCHANT_OFFSET: usize = REFERRAL_AFFILIATE_OFFSET + 32;
