use solana_sdk::pubkey::Pubkey;

/// Seed for [`Affiliate`](reflink_programs::reflink::accounts::Affiliate) lookup address.
pub const AFFILIATE_SEED: &[u8] = b"affiliate";

/// Seed for [`Merchant`](reflink_programs::reflink::accounts::Merchant) lookup address.
pub const MERCHANT_SEED: &[u8] = b"merchant";

/// Kinds of derivable lookup addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AddressKind {
    /// Affiliate.
    Affiliate,
    /// Merchant.
    Merchant,
}

impl AddressKind {
    /// Domain-separation seed.
    pub const fn seed(&self) -> &'static [u8] {
        match self {
            Self::Affiliate => AFFILIATE_SEED,
            Self::Merchant => MERCHANT_SEED,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Affiliate => "affiliate",
            Self::Merchant => "merchant",
        }
    }
}

/// Find the lookup PDA of the given kind for `owner`.
///
/// Returns [`DerivationExhausted`](crate::Error::DerivationExhausted) if no bump
/// seed yields an off-curve address.
pub fn find_address(
    kind: AddressKind,
    owner: &Pubkey,
    program_id: &Pubkey,
) -> crate::Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[kind.seed(), owner.as_ref()], program_id)
        .ok_or(crate::Error::DerivationExhausted(kind.name()))
}

/// Find the PDA for affiliate lookup.
pub fn find_affiliate_address(
    authority: &Pubkey,
    program_id: &Pubkey,
) -> crate::Result<(Pubkey, u8)> {
    find_address(AddressKind::Affiliate, authority, program_id)
}

/// Find the PDA for merchant lookup.
pub fn find_merchant_address(
    authority: &Pubkey,
    program_id: &Pubkey,
) -> crate::Result<(Pubkey, u8)> {
    find_address(AddressKind::Merchant, authority, program_id)
}
