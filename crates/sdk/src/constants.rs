pub use reflink_programs::constants::{
    MAX_COMMISSION_BPS, REFERRAL_AFFILIATE_OFFSET, REFERRAL_MERCHANT_OFFSET,
};

/// Decimals of SOL.
pub const LAMPORT_DECIMALS: u8 = 9;

/// Number of lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 10u64.pow(LAMPORT_DECIMALS as u32);
