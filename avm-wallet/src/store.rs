//! Shared state container
//!
//! `WalletStore` holds the latest published snapshot. Writers go through
//! `mutations`; readers take copies or subscribe for changes.

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::error::TransitionError;
use crate::persistence::{load_snapshot, StateStorage};
use crate::state::Snapshot;

/// Shared handle to the latest published wallet state
pub struct WalletStore {
    sender: watch::Sender<Snapshot>,
}

impl WalletStore {
    /// Create a store publishing `initial`
    pub fn new(initial: Snapshot) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Create a store holding the process-start snapshot for `config`
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(Snapshot::initial(config))
    }

    /// Copy of the current snapshot
    pub fn snapshot(&self) -> Snapshot {
        self.sender.borrow().clone()
    }

    /// Receiver notified on every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.sender.subscribe()
    }

    /// Publish a wholesale replacement
    pub fn replace(&self, snapshot: Snapshot) {
        self.sender.send_replace(snapshot);
        debug!("Wallet state replaced");
    }

    /// Adopt the persisted snapshot, or the default one if it is unusable
    pub fn hydrate(&self, storage: &dyn StateStorage, config: &StoreConfig) {
        self.replace(load_snapshot(storage, config));
    }

    /// Run a transition against the latest snapshot and publish the result.
    ///
    /// The successor is published only when it differs from the current
    /// snapshot. A refused transition leaves the store untouched and is
    /// reported as a diagnostic. Returns whether a snapshot was published.
    pub(crate) fn apply<F>(&self, operation: &'static str, transition: F) -> bool
    where
        F: FnOnce(&Snapshot) -> Result<Snapshot, TransitionError>,
    {
        self.sender.send_if_modified(|state| match transition(&*state) {
            Ok(next) if next == *state => {
                debug!(operation, "Wallet state unchanged");
                false
            }
            Ok(next) => {
                *state = next;
                debug!(operation, "Wallet state published");
                true
            }
            Err(e) => {
                warn!(operation, error = %e, "Wallet state update ignored");
                false
            }
        })
    }
}

impl Default for WalletStore {
    fn default() -> Self {
        Self::new(Snapshot::default())
    }
}
