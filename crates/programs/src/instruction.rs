use anchor_lang::{AnchorDeserialize, Discriminator};

use crate::reflink::client::args;

/// A decoded Reflink instruction.
pub enum ReflinkInstruction {
    /// Register an affiliate.
    RegisterAffiliate(args::RegisterAffiliate),
    /// Register a merchant.
    RegisterMerchant(args::RegisterMerchant),
    /// Pay a referral in SOL.
    RegisterReferralSol(args::RegisterReferralSol),
    /// Pay a referral in tokens.
    RegisterReferralToken(args::RegisterReferralToken),
    /// Update the commission rate of a merchant.
    UpdateMerchantCommission(args::UpdateMerchantCommission),
    /// Flip the active flag of a merchant.
    ToggleMerchantStatus(args::ToggleMerchantStatus),
}

impl ReflinkInstruction {
    /// Decode from instruction data.
    pub fn decode(data: &[u8]) -> crate::Result<Self> {
        fn parse<T: AnchorDeserialize + Discriminator>(data: &[u8]) -> Option<crate::Result<T>> {
            let rest = data.strip_prefix(T::DISCRIMINATOR)?;
            Some(T::deserialize(&mut &rest[..]).map_err(crate::Error::from))
        }

        if let Some(ix) = parse(data) {
            return ix.map(Self::RegisterAffiliate);
        }
        if let Some(ix) = parse(data) {
            return ix.map(Self::RegisterMerchant);
        }
        if let Some(ix) = parse(data) {
            return ix.map(Self::RegisterReferralSol);
        }
        if let Some(ix) = parse(data) {
            return ix.map(Self::RegisterReferralToken);
        }
        if let Some(ix) = parse(data) {
            return ix.map(Self::UpdateMerchantCommission);
        }
        if let Some(ix) = parse(data) {
            return ix.map(Self::ToggleMerchantStatus);
        }

        Err(crate::Error::UnknownInstruction(
            data.iter().take(8).copied().collect(),
        ))
    }
}
