//! Shape checks for untrusted state
//!
//! Values read back from storage are plain JSON. These predicates decide
//! whether such a value has the layout of a persisted snapshot before it is
//! deserialized and adopted. They check structure only: a value may pass
//! while naming an active wallet that is not connected, or an active account
//! missing from its wallet's list.

use serde_json::{Map, Value};

use crate::network::NetworkId;
use crate::wallet::WalletId;

pub fn is_wallet_id(value: &Value) -> bool {
    value
        .as_str()
        .map_or(false, |s| s.parse::<WalletId>().is_ok())
}

pub fn is_network_id(value: &Value) -> bool {
    value
        .as_str()
        .map_or(false, |s| s.parse::<NetworkId>().is_ok())
}

/// An object with string `name` and `address` fields
pub fn is_account(value: &Value) -> bool {
    value.as_object().map_or(false, |account| {
        is_string_field(account, "name") && is_string_field(account, "address")
    })
}

/// An object with an `accounts` array of accounts and an optional `activeAccount`
pub fn is_wallet_state(value: &Value) -> bool {
    let Some(wallet) = value.as_object() else {
        return false;
    };

    let accounts_ok = wallet
        .get("accounts")
        .and_then(Value::as_array)
        .map_or(false, |accounts| accounts.iter().all(is_account));

    accounts_ok && is_optional(wallet, "activeAccount", is_account)
}

/// A persisted snapshot: `wallets` keyed by supported providers, an optional
/// `activeWalletId` and a supported `activeNetworkId`
pub fn is_snapshot(value: &Value) -> bool {
    let Some(state) = value.as_object() else {
        return false;
    };

    let wallets_ok = state
        .get("wallets")
        .and_then(Value::as_object)
        .map_or(false, |wallets| {
            wallets.iter().all(|(id, wallet)| {
                id.parse::<WalletId>().is_ok() && is_wallet_state(wallet)
            })
        });

    wallets_ok
        && is_optional(state, "activeWalletId", is_wallet_id)
        && state.get("activeNetworkId").map_or(false, is_network_id)
}

fn is_string_field(object: &Map<String, Value>, field: &str) -> bool {
    object.get(field).map_or(false, Value::is_string)
}

// Absent and null both count as "not set"
fn is_optional(object: &Map<String, Value>, field: &str, check: fn(&Value) -> bool) -> bool {
    match object.get(field) {
        None | Some(Value::Null) => true,
        Some(value) => check(value),
    }
}
