/// Configuration.
pub mod config;

/// Utils for wallet.
pub mod wallet;

/// Commands.
pub mod commands;

use std::path::PathBuf;

use clap::Parser;
use commands::{Command, Commands, Context};
use config::{Config, ConfigArgs};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

const ENV_PREFIX: &str = "REFLINK_";
const CONFIG_DIR: &str = "reflink";

/// We use `__` in the name of environment variable as an alias of `.`.
///
/// See [`Env`] for more infomation.
const DOT_ALIAS: &str = "__";

/// Command-line interface for Reflink.
#[derive(Debug)]
pub struct Cli {
    config_path: PathBuf,
    config: Config,
    command: Commands,
}

impl Cli {
    /// Creates from the command line arguments.
    pub fn init() -> eyre::Result<Self> {
        Self::from_args(Inner::parse())
    }

    /// Layer the config file, the environment and the flags, in this order.
    fn from_args(cli: Inner) -> eyre::Result<Self> {
        let config_path = cli.find_config()?;
        let Inner {
            config, command, ..
        } = cli;

        let config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed(ENV_PREFIX).split(DOT_ALIAS))
            .merge(Serialized::defaults(config))
            .extract()?;

        Ok(Self {
            config_path,
            config,
            command,
        })
    }

    /// Get the resolved config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute command.
    pub async fn execute(&self) -> eyre::Result<()> {
        let client = if self.command.is_client_required() {
            Some(self.config.client()?)
        } else {
            None
        };
        self.command
            .execute(Context::new(&self.config_path, &self.config, client.as_ref()))
            .await
    }
}

/// Command-line interface for Reflink.
#[derive(Debug, Parser)]
#[command(name = "reflink", version)]
struct Inner {
    /// Path to the config file.
    #[clap(long = "config", short)]
    config_path: Option<PathBuf>,
    /// Config.
    #[command(flatten)]
    config: ConfigArgs,
    /// Commands.
    #[command(subcommand)]
    command: Commands,
}

impl Inner {
    fn find_config(&self) -> eyre::Result<PathBuf> {
        use etcetera::{choose_base_strategy, BaseStrategy};

        match self.config_path.as_ref() {
            Some(path) => Ok(path.clone()),
            None => {
                let strategy = choose_base_strategy()?;
                Ok(strategy.config_dir().join(CONFIG_DIR).join("config.toml"))
            }
        }
    }
}
