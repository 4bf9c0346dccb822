mod output;

use reflink_sdk::{
    programs::anchor_lang::prelude::Pubkey,
    serde::StringPubkey,
    solana_utils::{
        cluster::Cluster,
        signer::LocalSignerRef,
        solana_client::rpc_config::RpcSendTransactionConfig,
        solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel},
    },
    Client, ClientOptions,
};

pub use output::{DisplayOptions, OutputFormat};

use crate::wallet::signer_from_source;

const DEFAULT_WALLET: &str = "~/.config/solana/id.json";

/// Client used by the commands.
pub type CommandClient = Client<LocalSignerRef>;

/// Configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Path to the wallet.
    wallet: String,
    /// Cluster to connect to.
    cluster: Cluster,
    /// Commitment level.
    commitment: CommitmentLevel,
    /// Program ID override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    program: Option<StringPubkey>,
    /// Output format.
    #[serde(default)]
    output: OutputFormat,
    /// Skip the preflight check when sending transactions.
    #[serde(default)]
    skip_preflight: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wallet: DEFAULT_WALLET.to_string(),
            cluster: Cluster::Devnet,
            commitment: CommitmentLevel::Confirmed,
            program: None,
            output: OutputFormat::Table,
            skip_preflight: false,
        }
    }
}

/// Configuration overrides from the command line.
#[derive(Debug, Default, clap::Args, serde::Serialize)]
pub struct ConfigArgs {
    /// Path to the wallet.
    #[arg(long, short)]
    #[serde(skip_serializing_if = "Option::is_none")]
    wallet: Option<String>,
    /// Cluster to connect to.
    #[arg(long = "url", short = 'u')]
    #[serde(skip_serializing_if = "Option::is_none")]
    cluster: Option<Cluster>,
    /// Commitment level.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    commitment: Option<CommitmentLevel>,
    /// Program ID override.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    program: Option<StringPubkey>,
    /// Output format.
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<OutputFormat>,
    /// Skip the preflight check when sending transactions.
    #[arg(long)]
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    skip_preflight: bool,
}

impl Config {
    /// Creates a wallet based on the config.
    pub fn wallet(&self) -> eyre::Result<LocalSignerRef> {
        signer_from_source(&self.wallet)
    }

    /// Returns the cluster.
    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    /// Returns the program ID.
    pub fn program_id(&self) -> &Pubkey {
        self.program
            .as_deref()
            .unwrap_or(&reflink_sdk::programs::ID)
    }

    /// Returns the output format.
    pub fn output(&self) -> OutputFormat {
        self.output
    }

    /// Returns the client options.
    pub fn options(&self) -> ClientOptions {
        ClientOptions::builder()
            .program_id(self.program.map(Pubkey::from))
            .commitment(CommitmentConfig {
                commitment: self.commitment,
            })
            .send_config(RpcSendTransactionConfig {
                skip_preflight: self.skip_preflight,
                ..Default::default()
            })
            .build()
    }

    /// Creates a client based on the config.
    pub fn client(&self) -> eyre::Result<CommandClient> {
        let wallet = self.wallet()?;
        Ok(Client::new_with_options(
            self.cluster.clone(),
            wallet,
            self.options(),
        )?)
    }
}
