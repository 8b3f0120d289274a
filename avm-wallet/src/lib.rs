//! AVM Wallet State - connected wallet providers and the active network
//!
//! This library keeps the shared state a client application reads to know
//! which wallet providers are connected, which accounts they expose, which
//! provider/account pair is active and which network is targeted. Provider
//! connection logic reports events through the operations in [`mutations`];
//! persisted state is checked by [`validation`] before it is adopted.

pub mod config;
pub mod error;
pub mod mutations;
pub mod network;
pub mod persistence;
pub mod state;
pub mod store;
pub mod validation;
pub mod wallet;

// Re-export commonly used types for convenience
pub use config::StoreConfig;
pub use error::{Error, Result, TransitionError};
pub use network::{NetworkClient, NetworkId};
pub use state::Snapshot;
pub use store::WalletStore;
pub use wallet::{Account, WalletId, WalletState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
