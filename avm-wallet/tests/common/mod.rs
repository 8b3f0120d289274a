//! Shared helpers for integration tests

use tracing_subscriber::EnvFilter;

use avm_wallet::mutations::{add_wallet, AddWalletParams};
use avm_wallet::{Account, WalletId, WalletState, WalletStore};

/// Route diagnostics to the test output, honouring `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn connect(store: &WalletStore, wallet_id: WalletId, accounts: &[(&str, &str)]) {
    let accounts = accounts
        .iter()
        .map(|(name, address)| Account::new(*name, *address))
        .collect();

    add_wallet(
        store,
        AddWalletParams {
            wallet_id,
            wallet: WalletState::new(accounts, None),
        },
    );
}
