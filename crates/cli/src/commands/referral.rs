use reflink_sdk::{
    ops::{SolReferralParams, TokenReferralParams},
    programs::anchor_lang::prelude::Pubkey,
    utils::Lamport,
};

/// Referral payments.
#[derive(Debug, clap::Args)]
pub struct Referral {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Pay a referral in SOL.
    Sol {
        /// The merchant record.
        #[arg(long)]
        merchant: Pubkey,
        /// The affiliate record.
        #[arg(long)]
        affiliate: Pubkey,
        /// Wallet receiving the merchant's share.
        #[arg(long)]
        merchant_wallet: Pubkey,
        /// Wallet receiving the commission.
        #[arg(long)]
        affiliate_wallet: Pubkey,
        #[command(flatten)]
        amount: SolAmount,
    },
    /// Pay a referral in tokens.
    Token {
        /// The merchant record.
        #[arg(long)]
        merchant: Pubkey,
        /// The affiliate record.
        #[arg(long)]
        affiliate: Pubkey,
        /// Token mint of the payment.
        #[arg(long)]
        mint: Pubkey,
        /// Token account receiving the merchant's share.
        #[arg(long)]
        merchant_token_account: Pubkey,
        /// Token account receiving the commission.
        #[arg(long)]
        affiliate_token_account: Pubkey,
        /// Source token account, defaults to the associated token account of the wallet.
        #[arg(long)]
        payer_token_account: Option<Pubkey>,
        /// Token program of the mint, defaults to SPL Token.
        #[arg(long)]
        token_program: Option<Pubkey>,
        /// Amount in the smallest unit of the token.
        amount: u64,
    },
}

#[derive(Debug, clap::Args)]
#[group(required = true, multiple = false)]
struct SolAmount {
    /// Amount in SOL.
    amount: Option<Lamport>,
    /// Amount in lamports.
    #[arg(long)]
    lamports: Option<u64>,
}

impl SolAmount {
    fn to_lamports(&self) -> eyre::Result<u64> {
        match (self.amount, self.lamports) {
            (Some(amount), None) => Ok(amount.to_u64()?),
            (None, Some(lamports)) => Ok(lamports),
            _ => eyre::bail!("exactly one of the amount in SOL or `--lamports` is required"),
        }
    }
}

impl super::Command for Referral {
    fn is_client_required(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: super::Context<'_>) -> eyre::Result<()> {
        let client = ctx.client()?;
        let (signature, referral) = match &self.command {
            Command::Sol {
                merchant,
                affiliate,
                merchant_wallet,
                affiliate_wallet,
                amount,
            } => {
                let params = SolReferralParams::builder()
                    .merchant(*merchant)
                    .affiliate(*affiliate)
                    .merchant_wallet(*merchant_wallet)
                    .affiliate_wallet(*affiliate_wallet)
                    .amount(amount.to_lamports()?)
                    .build();
                client.submit_referral_sol(&params).await?
            }
            Command::Token {
                merchant,
                affiliate,
                mint,
                merchant_token_account,
                affiliate_token_account,
                payer_token_account,
                token_program,
                amount,
            } => {
                let params = TokenReferralParams {
                    merchant: *merchant,
                    affiliate: *affiliate,
                    token_mint: *mint,
                    merchant_token_account: *merchant_token_account,
                    affiliate_token_account: *affiliate_token_account,
                    amount: *amount,
                    payer_token_account: *payer_token_account,
                    token_program: *token_program,
                };
                client.submit_referral_token(&params).await?
            }
        };
        ctx.print_submitted(&signature, Some(("referral", &referral)))?;
        Ok(())
    }
}
