use reflink_sdk::programs::anchor_lang::prelude::Pubkey;

/// Merchant commands.
#[derive(Debug, clap::Args)]
pub struct Merchant {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Register the wallet as a merchant.
    Register {
        /// Commission paid to affiliates, in basis points.
        commission_bps: u16,
    },
    /// Update the commission rate.
    UpdateCommission {
        /// The merchant record.
        merchant: Pubkey,
        /// New commission, in basis points.
        commission_bps: u16,
    },
    /// Flip the active flag.
    ToggleStatus {
        /// The merchant record.
        merchant: Pubkey,
    },
}

impl super::Command for Merchant {
    fn is_client_required(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: super::Context<'_>) -> eyre::Result<()> {
        let client = ctx.client()?;
        match &self.command {
            Command::Register { commission_bps } => {
                let (signature, merchant) =
                    client.submit_register_merchant(*commission_bps).await?;
                ctx.print_submitted(&signature, Some(("merchant", &merchant)))?;
            }
            Command::UpdateCommission {
                merchant,
                commission_bps,
            } => {
                let signature = client
                    .submit_update_merchant_commission(merchant, *commission_bps)
                    .await?;
                ctx.print_submitted(&signature, None)?;
            }
            Command::ToggleStatus { merchant } => {
                let signature = client.submit_toggle_merchant_status(merchant).await?;
                ctx.print_submitted(&signature, None)?;
            }
        }
        Ok(())
    }
}
