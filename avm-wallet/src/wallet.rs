//! Wallet providers and their accounts
//!
//! A `WalletState` is the record kept for one connected provider: the
//! accounts it exposes and the one currently selected for signing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported wallet providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WalletId {
    #[serde(rename = "biatec")]
    Biatec,
    #[serde(rename = "defly")]
    Defly,
    #[serde(rename = "defly-web")]
    DeflyWeb,
    #[serde(rename = "exodus")]
    Exodus,
    #[serde(rename = "kibisis")]
    Kibisis,
    #[serde(rename = "kmd")]
    Kmd,
    #[serde(rename = "lute")]
    Lute,
    #[serde(rename = "magic")]
    Magic,
    #[serde(rename = "mnemonic")]
    Mnemonic,
    #[serde(rename = "pera")]
    Pera,
    #[serde(rename = "walletconnect")]
    WalletConnect,
    #[serde(rename = "w3-wallet")]
    W3Wallet,
    #[serde(rename = "custom")]
    Custom,
}

impl WalletId {
    /// Every supported provider
    pub const ALL: [WalletId; 13] = [
        WalletId::Biatec,
        WalletId::Defly,
        WalletId::DeflyWeb,
        WalletId::Exodus,
        WalletId::Kibisis,
        WalletId::Kmd,
        WalletId::Lute,
        WalletId::Magic,
        WalletId::Mnemonic,
        WalletId::Pera,
        WalletId::WalletConnect,
        WalletId::W3Wallet,
        WalletId::Custom,
    ];

    /// Wire name of the provider
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletId::Biatec => "biatec",
            WalletId::Defly => "defly",
            WalletId::DeflyWeb => "defly-web",
            WalletId::Exodus => "exodus",
            WalletId::Kibisis => "kibisis",
            WalletId::Kmd => "kmd",
            WalletId::Lute => "lute",
            WalletId::Magic => "magic",
            WalletId::Mnemonic => "mnemonic",
            WalletId::Pera => "pera",
            WalletId::WalletConnect => "walletconnect",
            WalletId::W3Wallet => "w3-wallet",
            WalletId::Custom => "custom",
        }
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WalletId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WalletId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown wallet id: {}", s))
    }
}

/// An account exposed by a wallet provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    /// Display name reported by the provider
    pub name: String,
    /// Account address, unique within a wallet's account list
    pub address: String,
}

impl Account {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// Accounts of one connected wallet and its selected account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletState {
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub active_account: Option<Account>,
}

impl WalletState {
    pub fn new(accounts: Vec<Account>, active_account: Option<Account>) -> Self {
        Self {
            accounts,
            active_account,
        }
    }

    /// Find an account by address
    pub fn find_account(&self, address: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.address == address)
    }

    /// Address of the selected account
    pub fn active_address(&self) -> Option<&str> {
        self.active_account.as_ref().map(|account| account.address.as_str())
    }
}
