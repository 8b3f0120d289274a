//! Write operations on the shared wallet state
//!
//! Each operation reads the latest snapshot from the store, applies one
//! transition and publishes the successor. Operations never fail from the
//! caller's point of view: a request naming an unknown wallet or account is
//! dropped with a warning and the store keeps its current snapshot.

use crate::network::{NetworkClient, NetworkId};
use crate::state::transition::{
    apply_add_wallet, apply_remove_wallet, apply_set_accounts, apply_set_active_account,
    apply_set_active_network, apply_set_active_wallet,
};
use crate::store::WalletStore;
use crate::wallet::{Account, WalletId, WalletState};

#[derive(Debug, Clone)]
pub struct AddWalletParams {
    pub wallet_id: WalletId,
    pub wallet: WalletState,
}

#[derive(Debug, Clone, Copy)]
pub struct RemoveWalletParams {
    pub wallet_id: WalletId,
}

#[derive(Debug, Clone, Copy)]
pub struct SetActiveWalletParams {
    pub wallet_id: Option<WalletId>,
}

#[derive(Debug, Clone)]
pub struct SetActiveAccountParams {
    pub wallet_id: WalletId,
    pub address: String,
}

#[derive(Debug, Clone)]
pub struct SetAccountsParams {
    pub wallet_id: WalletId,
    pub accounts: Vec<Account>,
}

#[derive(Debug, Clone)]
pub struct SetActiveNetworkParams {
    pub network_id: NetworkId,
    pub network_client: NetworkClient,
}

/// Connect (or reconnect) a wallet and make it active
pub fn add_wallet(store: &WalletStore, params: AddWalletParams) {
    store.apply("add_wallet", |state| {
        Ok(apply_add_wallet(state, params.wallet_id, &params.wallet))
    });
}

/// Disconnect a wallet
pub fn remove_wallet(store: &WalletStore, params: RemoveWalletParams) {
    store.apply("remove_wallet", |state| {
        Ok(apply_remove_wallet(state, params.wallet_id))
    });
}

/// Select the active wallet.
///
/// The wallet does not have to be connected; readers resolving the active
/// wallet through `Snapshot::active_wallet` see `None` in that case.
pub fn set_active_wallet(store: &WalletStore, params: SetActiveWalletParams) {
    store.apply("set_active_wallet", |state| {
        Ok(apply_set_active_wallet(state, params.wallet_id))
    });
}

/// Select one of a connected wallet's accounts
pub fn set_active_account(store: &WalletStore, params: SetActiveAccountParams) {
    store.apply("set_active_account", |state| {
        apply_set_active_account(state, params.wallet_id, &params.address)
    });
}

/// Replace a connected wallet's accounts
pub fn set_accounts(store: &WalletStore, params: SetAccountsParams) {
    store.apply("set_accounts", |state| {
        apply_set_accounts(state, params.wallet_id, &params.accounts)
    });
}

/// Switch the active network together with its client
pub fn set_active_network(store: &WalletStore, params: SetActiveNetworkParams) {
    store.apply("set_active_network", |state| {
        Ok(apply_set_active_network(
            state,
            params.network_id,
            params.network_client,
        ))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pera_store() -> WalletStore {
        let store = WalletStore::default();
        add_wallet(
            &store,
            AddWalletParams {
                wallet_id: WalletId::Pera,
                wallet: WalletState::new(vec![Account::new("A", "X")], None),
            },
        );
        store
    }

    #[test]
    fn test_add_wallet_copies_input() {
        let mut input = WalletState::new(vec![Account::new("A", "X")], Some(Account::new("A", "X")));
        let store = WalletStore::default();

        add_wallet(
            &store,
            AddWalletParams {
                wallet_id: WalletId::Defly,
                wallet: input.clone(),
            },
        );
        input.accounts[0].name = "changed".to_string();
        input.active_account = None;

        let state = store.snapshot();
        let stored = &state.wallets[&WalletId::Defly];
        assert_eq!(stored.accounts, vec![Account::new("A", "X")]);
        assert_eq!(stored.active_account, Some(Account::new("A", "X")));
        assert_eq!(state.active_wallet_id, Some(WalletId::Defly));
    }

    #[test]
    fn test_set_active_account_unknown_address_is_noop() {
        let store = pera_store();
        let before = store.snapshot();

        set_active_account(
            &store,
            SetActiveAccountParams {
                wallet_id: WalletId::Pera,
                address: "missing".to_string(),
            },
        );

        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_set_active_account_unknown_wallet_is_noop() {
        let store = pera_store();
        let before = store.snapshot();

        set_active_account(
            &store,
            SetActiveAccountParams {
                wallet_id: WalletId::Kibisis,
                address: "X".to_string(),
            },
        );

        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_set_accounts_unknown_wallet_is_noop() {
        let store = pera_store();
        let before = store.snapshot();

        set_accounts(
            &store,
            SetAccountsParams {
                wallet_id: WalletId::Lute,
                accounts: vec![Account::new("B", "Y")],
            },
        );

        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_set_active_network() {
        let store = pera_store();
        let client = NetworkClient::for_network(NetworkId::MainNet);

        set_active_network(
            &store,
            SetActiveNetworkParams {
                network_id: NetworkId::MainNet,
                network_client: client.clone(),
            },
        );

        let state = store.snapshot();
        assert_eq!(state.active_network_id, NetworkId::MainNet);
        assert_eq!(state.network_client, client);
    }

    #[test]
    fn test_set_active_wallet_then_clear() {
        let store = pera_store();

        set_active_wallet(&store, SetActiveWalletParams { wallet_id: None });
        assert_eq!(store.snapshot().active_wallet_id, None);

        set_active_wallet(
            &store,
            SetActiveWalletParams {
                wallet_id: Some(WalletId::Pera),
            },
        );
        assert_eq!(store.snapshot().active_address(), None);
        assert_eq!(store.snapshot().active_wallet_accounts().len(), 1);
    }
}
