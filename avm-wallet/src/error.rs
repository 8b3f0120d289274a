//! Error types for the avm-wallet library

use thiserror::Error;

use crate::wallet::WalletId;

/// Custom error type for avm-wallet operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Reasons a state transition is refused.
///
/// These never reach callers of the public mutation operations; the store
/// turns them into diagnostics and keeps the current snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Wallet not found: {0}")]
    WalletNotFound(WalletId),

    #[error("Account {address} not found in wallet {wallet_id}")]
    AccountNotFound {
        wallet_id: WalletId,
        address: String,
    },
}

/// Result type for avm-wallet operations
pub type Result<T> = std::result::Result<T, Error>;
