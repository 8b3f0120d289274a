//! State transition logic
//!
//! Pure functions computing the successor of a snapshot. None of them touch
//! the shared store; `mutations` runs them against the latest snapshot and
//! publishes the result.

use crate::error::TransitionError;
use crate::network::{NetworkClient, NetworkId};
use crate::state::Snapshot;
use crate::wallet::{Account, WalletId, WalletState};

/// Inserts or replaces a wallet and makes it the active wallet
///
/// # Arguments
/// * `state` - The current snapshot
/// * `wallet_id` - The provider being connected
/// * `wallet` - Accounts and selected account reported by the provider
///
/// # Examples
///
/// ```rust
/// use avm_wallet::state::{transition::apply_add_wallet, Snapshot};
/// use avm_wallet::wallet::{Account, WalletId, WalletState};
///
/// let wallet = WalletState::new(vec![Account::new("A", "X")], None);
/// let state = apply_add_wallet(&Snapshot::default(), WalletId::Pera, &wallet);
///
/// assert_eq!(state.wallets[&WalletId::Pera], wallet);
/// assert_eq!(state.active_wallet_id, Some(WalletId::Pera));
/// ```
pub fn apply_add_wallet(state: &Snapshot, wallet_id: WalletId, wallet: &WalletState) -> Snapshot {
    let mut next = state.clone();
    next.wallets.insert(
        wallet_id,
        WalletState::new(wallet.accounts.clone(), wallet.active_account.clone()),
    );
    next.active_wallet_id = Some(wallet_id);
    next
}

/// Removes a wallet, clearing the active wallet if it was the one removed
///
/// Removing a wallet that is not connected yields an identical snapshot.
pub fn apply_remove_wallet(state: &Snapshot, wallet_id: WalletId) -> Snapshot {
    let mut next = state.clone();
    next.wallets.remove(&wallet_id);
    if next.active_wallet_id == Some(wallet_id) {
        next.active_wallet_id = None;
    }
    next
}

/// Sets the active wallet without checking that it is connected
pub fn apply_set_active_wallet(state: &Snapshot, wallet_id: Option<WalletId>) -> Snapshot {
    Snapshot {
        active_wallet_id: wallet_id,
        ..state.clone()
    }
}

/// Selects one of a wallet's accounts
///
/// # Errors
/// * `TransitionError::WalletNotFound` - If the wallet is not connected
/// * `TransitionError::AccountNotFound` - If no account of the wallet has `address`
pub fn apply_set_active_account(
    state: &Snapshot,
    wallet_id: WalletId,
    address: &str,
) -> Result<Snapshot, TransitionError> {
    let wallet = state
        .wallets
        .get(&wallet_id)
        .ok_or(TransitionError::WalletNotFound(wallet_id))?;

    let active = wallet
        .find_account(address)
        .cloned()
        .ok_or_else(|| TransitionError::AccountNotFound {
            wallet_id,
            address: address.to_string(),
        })?;

    let mut next = state.clone();
    next.wallets.insert(
        wallet_id,
        WalletState::new(wallet.accounts.clone(), Some(active)),
    );
    Ok(next)
}

/// Replaces a wallet's accounts and reconciles its selected account
///
/// See [`reconcile_active_account`] for how the selection is carried over.
///
/// # Errors
/// * `TransitionError::WalletNotFound` - If the wallet is not connected
///
/// # Examples
///
/// ```rust
/// use avm_wallet::state::{transition::{apply_add_wallet, apply_set_accounts}, Snapshot};
/// use avm_wallet::wallet::{Account, WalletId, WalletState};
///
/// let x = Account::new("A", "X");
/// let state = apply_add_wallet(
///     &Snapshot::default(),
///     WalletId::Pera,
///     &WalletState::new(vec![x.clone()], Some(x)),
/// );
///
/// let y = Account::new("B", "Y");
/// let state = apply_set_accounts(&state, WalletId::Pera, &[y.clone()])?;
/// assert_eq!(state.wallets[&WalletId::Pera].active_account, Some(y));
/// # Ok::<(), avm_wallet::TransitionError>(())
/// ```
pub fn apply_set_accounts(
    state: &Snapshot,
    wallet_id: WalletId,
    accounts: &[Account],
) -> Result<Snapshot, TransitionError> {
    let wallet = state
        .wallets
        .get(&wallet_id)
        .ok_or(TransitionError::WalletNotFound(wallet_id))?;

    let active = reconcile_active_account(wallet.active_account.as_ref(), accounts);

    let mut next = state.clone();
    next.wallets
        .insert(wallet_id, WalletState::new(accounts.to_vec(), active));
    Ok(next)
}

/// Switches network and client in one step
pub fn apply_set_active_network(
    state: &Snapshot,
    network_id: NetworkId,
    network_client: NetworkClient,
) -> Snapshot {
    Snapshot {
        active_network_id: network_id,
        network_client,
        ..state.clone()
    }
}

/// Picks the selected account after a wallet's account list changed
///
/// In order: the previous selection if its address is still listed (taken
/// from the new list), else the first new account, else none.
pub fn reconcile_active_account(previous: Option<&Account>, accounts: &[Account]) -> Option<Account> {
    previous
        .and_then(|prev| accounts.iter().find(|account| account.address == prev.address))
        .or_else(|| accounts.first())
        .cloned()
}
