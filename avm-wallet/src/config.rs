//! Store configuration
//!
//! Controls the persisted storage key, the network selected at startup and
//! the node endpoint used for each network.

use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::str::FromStr;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::network::{NetworkClient, NetworkId};

/// Storage key for persisted state, versioned with the persisted layout
pub const DEFAULT_STORAGE_KEY: &str = "avm-wallet:v3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key the persisted snapshot is stored under
    pub storage_key: String,
    /// Network selected when no persisted state is adopted
    pub default_network: NetworkId,
    /// Whether wallet support is switched on for the host application
    pub wallet_feature_enabled: bool,
    /// Node endpoint per network
    pub networks: BTreeMap<NetworkId, NetworkClient>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        let networks = NetworkId::ALL
            .iter()
            .map(|id| (*id, NetworkClient::for_network(*id)))
            .collect();

        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_network: NetworkId::default(),
            wallet_feature_enabled: true,
            networks,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `AVM_WALLET_STORAGE_KEY`: persisted state key (default `avm-wallet:v3`)
    /// - `AVM_WALLET_NETWORK`: startup network (default `testnet`)
    /// - `AVM_WALLET_ENABLED`: `true`/`false` (default `true`)
    /// - `AVM_WALLET_ALGOD_URL`: node URL for the startup network
    /// - `AVM_WALLET_ALGOD_TOKEN`: node token for the startup network
    ///
    /// Invalid values are reported and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from a variable lookup, see [`StoreConfig::from_env`]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(key) = lookup("AVM_WALLET_STORAGE_KEY") {
            config.storage_key = key;
        }

        match parse_var::<NetworkId, _>(&lookup, "AVM_WALLET_NETWORK") {
            Ok(Some(id)) => config.default_network = id,
            Ok(None) => {}
            Err(e) => warn!("{}, defaulting to {}", e, config.default_network),
        }

        match parse_var::<bool, _>(&lookup, "AVM_WALLET_ENABLED") {
            Ok(Some(enabled)) => config.wallet_feature_enabled = enabled,
            Ok(None) => {}
            Err(e) => warn!("{}, defaulting to {}", e, config.wallet_feature_enabled),
        }

        let mut client = config.client_for(config.default_network);
        if let Some(url) = lookup("AVM_WALLET_ALGOD_URL") {
            client.base_server = url;
            client.port = None;
        }
        if let Some(token) = lookup("AVM_WALLET_ALGOD_TOKEN") {
            client.token = Some(token);
        }
        config.networks.insert(config.default_network, client);

        info!(
            "Wallet store configured for {} ({})",
            config.default_network, config.storage_key
        );
        config
    }

    /// Client for a network, falling back to the built-in endpoint
    pub fn client_for(&self, network: NetworkId) -> NetworkClient {
        self.networks
            .get(&network)
            .cloned()
            .unwrap_or_else(|| NetworkClient::for_network(network))
    }
}

/// Parse an optional variable, lowercased
fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| {
            value
                .trim()
                .to_lowercase()
                .parse::<T>()
                .map_err(|e| Error::Config(format!("invalid {} '{}': {}", name, value, e)))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();

        assert_eq!(config.storage_key, "avm-wallet:v3");
        assert_eq!(config.default_network, NetworkId::TestNet);
        assert!(config.wallet_feature_enabled);
        assert_eq!(config.networks.len(), NetworkId::ALL.len());
    }

    #[test]
    fn test_client_for_falls_back_to_builtin() {
        let mut config = StoreConfig::default();
        config.networks.clear();

        assert_eq!(
            config.client_for(NetworkId::MainNet),
            NetworkClient::for_network(NetworkId::MainNet)
        );
    }

    #[test]
    fn test_client_for_uses_override() {
        let mut config = StoreConfig::default();
        let custom = NetworkClient::new("https://node.example.com").with_token("secret");
        config.networks.insert(NetworkId::BetaNet, custom.clone());

        assert_eq!(config.client_for(NetworkId::BetaNet), custom);
    }

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_without_vars_is_default() {
        assert_eq!(StoreConfig::from_lookup(lookup(&[])), StoreConfig::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("AVM_WALLET_STORAGE_KEY", "avm-wallet:custom"),
            ("AVM_WALLET_NETWORK", "MainNet"),
            ("AVM_WALLET_ENABLED", "false"),
        ]));

        assert_eq!(config.storage_key, "avm-wallet:custom");
        assert_eq!(config.default_network, NetworkId::MainNet);
        assert!(!config.wallet_feature_enabled);
    }

    #[test]
    fn test_from_lookup_invalid_values_keep_defaults() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("AVM_WALLET_NETWORK", "devnet"),
            ("AVM_WALLET_ENABLED", "0"),
        ]));

        assert_eq!(config.default_network, NetworkId::TestNet);
        assert!(config.wallet_feature_enabled);
    }

    #[test]
    fn test_from_lookup_overrides_default_network_client() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("AVM_WALLET_NETWORK", "localnet"),
            ("AVM_WALLET_ALGOD_URL", "http://node.internal:8080"),
            ("AVM_WALLET_ALGOD_TOKEN", "secret"),
        ]));

        let client = config.client_for(NetworkId::LocalNet);
        assert_eq!(client.url(), "http://node.internal:8080");
        assert_eq!(client.token.as_deref(), Some("secret"));

        // Other networks keep their built-in endpoints
        assert_eq!(
            config.client_for(NetworkId::TestNet),
            NetworkClient::for_network(NetworkId::TestNet)
        );
    }

    #[test]
    fn test_parse_var_reports_config_error() {
        let vars = lookup(&[("AVM_WALLET_ENABLED", "0")]);

        let result = parse_var::<bool, _>(&vars, "AVM_WALLET_ENABLED");
        assert!(matches!(result, Err(Error::Config(message)) if message.contains("AVM_WALLET_ENABLED")));
        assert!(matches!(parse_var::<bool, _>(&vars, "AVM_WALLET_MISSING"), Ok(None)));
    }
}
