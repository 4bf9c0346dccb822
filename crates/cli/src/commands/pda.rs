use reflink_sdk::{
    pda::{find_address, AddressKind},
    programs::anchor_lang::prelude::Pubkey,
    serde::StringPubkey,
};

/// Derive the lookup address of an authority.
#[derive(Debug, clap::Args)]
pub struct Pda {
    #[arg(value_enum)]
    kind: Kind,
    /// The authority wallet.
    authority: Pubkey,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Kind {
    Affiliate,
    Merchant,
}

impl From<Kind> for AddressKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Affiliate => Self::Affiliate,
            Kind::Merchant => Self::Merchant,
        }
    }
}

#[derive(serde::Serialize)]
struct Derived {
    address: StringPubkey,
    bump: u8,
}

impl super::Command for Pda {
    async fn execute(&self, ctx: super::Context<'_>) -> eyre::Result<()> {
        let program_id = ctx.config().program_id();
        let (address, bump) = find_address(self.kind.into(), &self.authority, program_id)?;
        let derived = Derived {
            address: address.into(),
            bump,
        };
        println!("{}", ctx.output().display_one(derived)?);
        Ok(())
    }
}
