use std::{fmt, str::FromStr};

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use url::Url;

/// Cluster to connect to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cluster {
    /// Mainnet beta.
    Mainnet,
    /// Devnet.
    #[default]
    Devnet,
    /// Testnet.
    Testnet,
    /// Local validator.
    Localnet,
    /// Custom cluster with the given RPC and websocket urls.
    Custom(String, String),
}

impl Cluster {
    /// Get the RPC url.
    pub fn url(&self) -> &str {
        match self {
            Self::Mainnet => "https://api.mainnet-beta.solana.com",
            Self::Devnet => "https://api.devnet.solana.com",
            Self::Testnet => "https://api.testnet.solana.com",
            Self::Localnet => "http://127.0.0.1:8899",
            Self::Custom(url, _) => url,
        }
    }

    /// Get the websocket url.
    pub fn ws_url(&self) -> &str {
        match self {
            Self::Mainnet => "wss://api.mainnet-beta.solana.com",
            Self::Devnet => "wss://api.devnet.solana.com",
            Self::Testnet => "wss://api.testnet.solana.com",
            Self::Localnet => "ws://127.0.0.1:8900",
            Self::Custom(_, ws_url) => ws_url,
        }
    }

    /// Create a Solana RPC Client.
    pub fn rpc(&self, commitment: CommitmentConfig) -> RpcClient {
        RpcClient::new_with_commitment(self.url().to_string(), commitment)
    }
}

impl FromStr for Cluster {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "m" | "mainnet" | "mainnet-beta" => Ok(Self::Mainnet),
            "d" | "devnet" => Ok(Self::Devnet),
            "t" | "testnet" => Ok(Self::Testnet),
            "l" | "localnet" | "localhost" => Ok(Self::Localnet),
            _ => {
                let mut url = Url::parse(s)?;
                let ws_scheme = match url.scheme() {
                    "http" => "ws",
                    "https" => "wss",
                    _ => return Err(crate::Error::ParseCluster("unsupported url scheme")),
                };
                let rpc = url.to_string();
                url.set_scheme(ws_scheme)
                    .map_err(|_| crate::Error::ParseCluster("failed to derive websocket url"))?;
                // The websocket port is the RPC port plus one by convention.
                if let Some(port) = url.port() {
                    let ws_port = port.checked_add(1).ok_or(crate::Error::ParseCluster(
                        "no websocket port after the RPC port",
                    ))?;
                    url.set_port(Some(ws_port))
                        .map_err(|_| crate::Error::ParseCluster("invalid port"))?;
                }
                Ok(Self::Custom(rpc, url.to_string()))
            }
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mainnet => write!(f, "mainnet"),
            Self::Devnet => write!(f, "devnet"),
            Self::Testnet => write!(f, "testnet"),
            Self::Localnet => write!(f, "localnet"),
            Self::Custom(url, _) => write!(f, "{url}"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Cluster {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Cluster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
