use eyre::OptionExt;
use reflink_sdk::{
    programs::anchor_lang::prelude::Pubkey,
    serde::{SerdeAffiliate, SerdeMerchant, SerdeReferral},
};

use crate::config::DisplayOptions;

/// Inspects Reflink records.
#[derive(Debug, clap::Args)]
pub struct Inspect {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Inspect an affiliate record.
    Affiliate { address: Pubkey },
    /// Inspect a merchant record.
    Merchant { address: Pubkey },
    /// Inspect a referral record.
    Referral { address: Pubkey },
    /// List referrals of an affiliate or a merchant.
    Referrals {
        #[command(flatten)]
        party: Party,
    },
}

#[derive(Debug, clap::Args)]
#[group(required = true, multiple = false)]
struct Party {
    /// Referrals credited to this affiliate record.
    #[arg(long)]
    affiliate: Option<Pubkey>,
    /// Referrals paid by this merchant record.
    #[arg(long)]
    merchant: Option<Pubkey>,
}

impl super::Command for Inspect {
    fn is_client_required(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: super::Context<'_>) -> eyre::Result<()> {
        let client = ctx.client()?;
        let output = ctx.output();
        match &self.command {
            Command::Affiliate { address } => {
                let affiliate = client.affiliate(address).await?;
                println!(
                    "{}",
                    output.display_keyed_account(address, SerdeAffiliate::from(&affiliate))?
                );
            }
            Command::Merchant { address } => {
                let merchant = client.merchant(address).await?;
                println!(
                    "{}",
                    output.display_keyed_account(address, SerdeMerchant::from(&merchant))?
                );
            }
            Command::Referral { address } => {
                let referral = client.referral(address).await?;
                println!(
                    "{}",
                    output.display_keyed_account(address, SerdeReferral::from(&referral))?
                );
            }
            Command::Referrals { party } => {
                let referrals = match (&party.affiliate, &party.merchant) {
                    (Some(affiliate), None) => client.referrals_by_affiliate(affiliate).await?,
                    (None, Some(merchant)) => client.referrals_by_merchant(merchant).await?,
                    _ => None
                        .ok_or_eyre("exactly one of `--affiliate` or `--merchant` is required")?,
                };
                let mut referrals = referrals
                    .iter()
                    .map(|(address, referral)| (*address, SerdeReferral::from(referral)))
                    .collect::<Vec<_>>();
                referrals.sort_by_key(|(_, referral)| referral.timestamp);
                println!(
                    "{}",
                    output.display_keyed_accounts(
                        referrals,
                        DisplayOptions::table_projection([
                            ("pubkey", "Referral"),
                            ("affiliate", "Affiliate"),
                            ("merchant", "Merchant"),
                            ("amount", "Amount"),
                            ("token_mint", "Mint"),
                            ("timestamp", "Time"),
                        ]),
                    )?
                );
            }
        }
        Ok(())
    }
}
