//! Supported networks and the client handle used to reach them

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    MainNet,
    #[default]
    TestNet,
    BetaNet,
    FNet,
    LocalNet,
}

impl NetworkId {
    /// Every supported network
    pub const ALL: [NetworkId; 5] = [
        NetworkId::MainNet,
        NetworkId::TestNet,
        NetworkId::BetaNet,
        NetworkId::FNet,
        NetworkId::LocalNet,
    ];

    /// Wire name of the network
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkId::MainNet => "mainnet",
            NetworkId::TestNet => "testnet",
            NetworkId::BetaNet => "betanet",
            NetworkId::FNet => "fnet",
            NetworkId::LocalNet => "localnet",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NetworkId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown network id: {}", s))
    }
}

/// Connection handle for a network's node API.
///
/// The state layer never talks to the node; it only keeps the handle that
/// matches the active network so readers can hand it to signing logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkClient {
    /// Node base URL
    pub base_server: String,
    /// Node port, if not implied by the URL
    pub port: Option<u16>,
    /// API token (if required)
    pub token: Option<String>,
    /// Timeout in seconds
    pub timeout: Option<u64>,
}

impl NetworkClient {
    pub fn new(base_server: impl Into<String>) -> Self {
        Self {
            base_server: base_server.into(),
            port: None,
            token: None,
            timeout: Some(30),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Built-in endpoint for a network
    pub fn for_network(network: NetworkId) -> Self {
        match network {
            NetworkId::MainNet => Self::new("https://mainnet-api.4160.nodely.dev"),
            NetworkId::TestNet => Self::new("https://testnet-api.4160.nodely.dev"),
            NetworkId::BetaNet => Self::new("https://betanet-api.4160.nodely.dev"),
            NetworkId::FNet => Self::new("https://fnet-api.4160.nodely.dev"),
            // Sandbox defaults
            NetworkId::LocalNet => Self::new("http://localhost")
                .with_port(4001)
                .with_token("a".repeat(64)),
        }
    }

    /// Full endpoint URL including the port
    pub fn url(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{}", self.base_server, port),
            None => self.base_server.clone(),
        }
    }
}
