//! Persisted wallet state
//!
//! Only wallets, the active wallet and the active network are persisted.
//! Reading and writing the payload is left to the host through
//! [`StateStorage`]; this module validates what comes back before it is
//! adopted and rebuilds the parts that are not stored.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::network::NetworkId;
use crate::state::Snapshot;
use crate::validation::is_snapshot;
use crate::wallet::{WalletId, WalletState};

/// Serializable subset of a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub wallets: BTreeMap<WalletId, WalletState>,
    #[serde(default)]
    pub active_wallet_id: Option<WalletId>,
    pub active_network_id: NetworkId,
}

impl From<&Snapshot> for PersistedState {
    fn from(state: &Snapshot) -> Self {
        Self {
            wallets: state.wallets.clone(),
            active_wallet_id: state.active_wallet_id,
            active_network_id: state.active_network_id,
        }
    }
}

impl PersistedState {
    /// Full snapshot, with the client and feature flag taken from `config`
    pub fn into_snapshot(self, config: &StoreConfig) -> Snapshot {
        Snapshot {
            wallet_feature_enabled: config.wallet_feature_enabled,
            wallets: self.wallets,
            active_wallet_id: self.active_wallet_id,
            active_network_id: self.active_network_id,
            network_client: config.client_for(self.active_network_id),
        }
    }
}

/// Key/value storage the host provides for persisted state
pub trait StateStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// In-process storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self
            .items
            .read()
            .map_err(|e| Error::Storage(e.to_string()))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self
            .items
            .write()
            .map_err(|e| Error::Storage(e.to_string()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Build a snapshot from an untrusted value
///
/// # Errors
/// * `Error::InvalidSnapshot` - If the value does not have the persisted layout
pub fn rehydrate(value: &Value, config: &StoreConfig) -> Result<Snapshot> {
    if !is_snapshot(value) {
        return Err(Error::InvalidSnapshot(
            "value does not have the layout of a persisted snapshot".to_string(),
        ));
    }

    let persisted: PersistedState = serde_json::from_value(value.clone())?;
    Ok(persisted.into_snapshot(config))
}

/// Load the persisted snapshot, falling back to the process-start snapshot
pub fn load_snapshot(storage: &dyn StateStorage, config: &StoreConfig) -> Snapshot {
    match read_snapshot(storage, config) {
        Ok(Some(state)) => {
            info!(
                "Restored {} wallet(s) on {} from {}",
                state.wallets.len(),
                state.active_network_id,
                config.storage_key
            );
            state
        }
        Ok(None) => {
            debug!("No persisted wallet state under {}", config.storage_key);
            Snapshot::initial(config)
        }
        Err(e) => {
            warn!("Discarding persisted wallet state: {}", e);
            Snapshot::initial(config)
        }
    }
}

fn read_snapshot(storage: &dyn StateStorage, config: &StoreConfig) -> Result<Option<Snapshot>> {
    let Some(raw) = storage.get_item(&config.storage_key)? else {
        return Ok(None);
    };

    let value: Value = serde_json::from_str(&raw)?;
    rehydrate(&value, config).map(Some)
}

/// Write the persisted subset of a snapshot
pub fn persist_snapshot(
    storage: &dyn StateStorage,
    config: &StoreConfig,
    state: &Snapshot,
) -> Result<()> {
    let payload = serde_json::to_string(&PersistedState::from(state))?;
    storage.set_item(&config.storage_key, &payload)?;
    debug!("Persisted wallet state under {}", config.storage_key);
    Ok(())
}
