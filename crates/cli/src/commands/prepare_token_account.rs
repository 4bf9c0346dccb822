use reflink_sdk::{ops::TokenAccountOps, programs::anchor_lang::prelude::Pubkey};

/// Create the associated token account of an owner if it does not exist.
#[derive(Debug, clap::Args)]
pub struct PrepareTokenAccount {
    /// Token mint.
    mint: Pubkey,
    /// Owner of the account, defaults to the wallet.
    #[arg(long)]
    owner: Option<Pubkey>,
    /// Token program of the mint.
    #[arg(long, default_value = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA")]
    token_program: Pubkey,
}

impl super::Command for PrepareTokenAccount {
    fn is_client_required(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: super::Context<'_>) -> eyre::Result<()> {
        let client = ctx.client()?;
        let tx = client.prepare_associated_token_account(
            &self.mint,
            &self.token_program,
            self.owner.as_ref(),
        )?;
        let (signature, address) = client.send_with_output(tx).await?;
        ctx.print_submitted(&signature, Some(("token_account", &address)))?;
        Ok(())
    }
}
