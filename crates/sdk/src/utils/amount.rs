use std::{fmt, str::FromStr};

use rust_decimal::{prelude::ToPrimitive, Decimal};

use crate::constants::{LAMPORTS_PER_SOL, LAMPORT_DECIMALS};

/// Convert a decimal amount into an integer amount with the given decimals.
///
/// Fails if the amount is negative, has more decimal places than `decimals`,
/// or does not fit in a `u64`.
pub fn decimal_to_amount(value: Decimal, decimals: u8) -> crate::Result<u64> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(crate::Error::invalid_amount("amount must not be negative"));
    }
    let unit = 10u64
        .checked_pow(decimals.into())
        .ok_or_else(|| crate::Error::invalid_amount("decimals too large"))?;
    let scaled = value
        .checked_mul(Decimal::from(unit))
        .ok_or_else(|| crate::Error::invalid_amount("amount overflow"))?;
    if !scaled.fract().is_zero() {
        return Err(crate::Error::invalid_amount(format!(
            "{value} has more than {decimals} decimal places"
        )));
    }
    scaled
        .to_u64()
        .ok_or_else(|| crate::Error::invalid_amount("amount overflow"))
}

/// Convert SOL into lamports.
///
/// The conversion is lossy, the result is rounded to the nearest lamport.
/// Use [`Lamport`] for exact conversions.
pub fn sol_to_lamports(sol: f64) -> crate::Result<u64> {
    if !sol.is_finite() {
        return Err(crate::Error::invalid_amount(format!(
            "{sol} is not a finite amount"
        )));
    }
    if sol < 0.0 {
        return Err(crate::Error::invalid_amount("amount must not be negative"));
    }
    let lamports = (sol * LAMPORTS_PER_SOL as f64).round();
    if lamports >= u64::MAX as f64 {
        return Err(crate::Error::invalid_amount("amount overflow"));
    }
    Ok(lamports as u64)
}

/// Convert lamports into SOL.
///
/// The result is only suitable for display.
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Amount of SOL, kept exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lamport(pub Decimal);

impl fmt::Display for Lamport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Lamport {
    type Err = <Decimal as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl Lamport {
    /// Zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create from an amount in lamports.
    pub fn from_lamports(lamports: u64) -> Self {
        Self(Decimal::from(lamports) / Decimal::from(LAMPORTS_PER_SOL))
    }

    /// Convert to `u64` lamports.
    pub fn to_u64(&self) -> crate::Result<u64> {
        decimal_to_amount(self.0, LAMPORT_DECIMALS)
    }

    /// Returns whether the amount is zero.
    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}
