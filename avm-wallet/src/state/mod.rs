//! Global wallet state
//!
//! A `Snapshot` is one complete value of the shared state. Snapshots are
//! never modified after being published; every operation builds a successor.
//!
//! # Invariants
//!
//! - Every key of `wallets` is a supported `WalletId`
//! - A wallet's `active_account`, when set by a transition, is one of its `accounts`
//! - Removing the active wallet clears `active_wallet_id`
//! - `active_network_id` and `network_client` always change together

pub mod transition;

use std::collections::BTreeMap;

use crate::config::StoreConfig;
use crate::network::{NetworkClient, NetworkId};
use crate::wallet::{Account, WalletId, WalletState};

/// Connected wallets, selections and the active network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub wallet_feature_enabled: bool,
    pub wallets: BTreeMap<WalletId, WalletState>,
    pub active_wallet_id: Option<WalletId>,
    pub active_network_id: NetworkId,
    pub network_client: NetworkClient,
}

impl Snapshot {
    /// Process-start state for a configuration
    pub fn initial(config: &StoreConfig) -> Self {
        Self {
            wallet_feature_enabled: config.wallet_feature_enabled,
            wallets: BTreeMap::new(),
            active_wallet_id: None,
            active_network_id: config.default_network,
            network_client: config.client_for(config.default_network),
        }
    }

    /// State of the active wallet, if it is connected
    pub fn active_wallet(&self) -> Option<&WalletState> {
        self.active_wallet_id.and_then(|id| self.wallets.get(&id))
    }

    /// Accounts of the active wallet
    pub fn active_wallet_accounts(&self) -> &[Account] {
        self.active_wallet()
            .map(|wallet| wallet.accounts.as_slice())
            .unwrap_or(&[])
    }

    /// Selected account of the active wallet
    pub fn active_account(&self) -> Option<&Account> {
        self.active_wallet()
            .and_then(|wallet| wallet.active_account.as_ref())
    }

    pub fn active_address(&self) -> Option<&str> {
        self.active_account().map(|account| account.address.as_str())
    }

    pub fn is_connected(&self, wallet_id: WalletId) -> bool {
        self.wallets.contains_key(&wallet_id)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial(&StoreConfig::default())
    }
}
