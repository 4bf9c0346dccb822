use std::path::Path;

use enum_dispatch::enum_dispatch;
use eyre::OptionExt;
use reflink_sdk::{programs::anchor_lang::prelude::Pubkey, serde::StringPubkey};
use reflink_sdk::solana_utils::solana_sdk::signature::Signature;

use crate::config::{CommandClient, Config, OutputFormat};

use affiliate::Affiliate;
use get_pubkey::GetPubkey;
use init_config::InitConfig;
use inspect::Inspect;
use merchant::Merchant;
use pda::Pda;
use prepare_token_account::PrepareTokenAccount;
use referral::Referral;

mod affiliate;
mod get_pubkey;
mod init_config;
mod inspect;
mod merchant;
mod pda;
mod prepare_token_account;
mod referral;

/// Commands.
#[enum_dispatch]
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Initialize config file.
    InitConfig(InitConfig),
    /// Get pubkey of the wallet.
    GetPubkey(GetPubkey),
    /// Affiliate commands.
    Affiliate(Affiliate),
    /// Merchant commands.
    Merchant(Merchant),
    /// Referral payments.
    Referral(Referral),
    /// Inspect records.
    Inspect(Inspect),
    /// Derive lookup addresses.
    Pda(Pda),
    /// Create an associated token account if it does not exist.
    PrepareTokenAccount(PrepareTokenAccount),
}

#[enum_dispatch(Commands)]
pub(crate) trait Command {
    fn is_client_required(&self) -> bool {
        false
    }

    async fn execute(&self, ctx: Context<'_>) -> eyre::Result<()>;
}

/// Execution context of a command.
pub struct Context<'a> {
    config_path: &'a Path,
    config: &'a Config,
    client: Option<&'a CommandClient>,
}

impl<'a> Context<'a> {
    pub(crate) fn new(
        config_path: &'a Path,
        config: &'a Config,
        client: Option<&'a CommandClient>,
    ) -> Self {
        Self {
            config_path,
            config,
            client,
        }
    }

    pub(crate) fn config_path(&self) -> &Path {
        self.config_path
    }

    pub(crate) fn config(&self) -> &Config {
        self.config
    }

    pub(crate) fn client(&self) -> eyre::Result<&CommandClient> {
        self.client.ok_or_eyre("client is not provided")
    }

    pub(crate) fn output(&self) -> OutputFormat {
        self.config.output()
    }

    /// Print the result of a submitted transaction.
    pub(crate) fn print_submitted(
        &self,
        signature: &Signature,
        created: Option<(&str, &Pubkey)>,
    ) -> eyre::Result<()> {
        let mut item = serde_json::Map::new();
        item.insert("signature".to_string(), signature.to_string().into());
        if let Some((name, address)) = created {
            item.insert(
                name.to_string(),
                serde_json::to_value(StringPubkey::from(*address))?,
            );
        }
        println!("{}", self.output().display_one(item)?);
        Ok(())
    }
}
