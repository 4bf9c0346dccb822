/// Affiliate commands.
#[derive(Debug, clap::Args)]
pub struct Affiliate {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Register the wallet as an affiliate.
    Register,
}

impl super::Command for Affiliate {
    fn is_client_required(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: super::Context<'_>) -> eyre::Result<()> {
        let client = ctx.client()?;
        match &self.command {
            Command::Register => {
                let (signature, affiliate) = client.submit_register_affiliate().await?;
                ctx.print_submitted(&signature, Some(("affiliate", &affiliate)))?;
            }
        }
        Ok(())
    }
}
