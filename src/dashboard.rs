//! Dashboard controller: the owner of the wallet list and the selection.
//!
//! Holds the canonical snapshot of a user's wallets. Child panels read the
//! selected wallet from here and never change it; after a mutation they ask
//! for a refetch, which is the only way a balance change becomes visible.

use tracing::{debug, info, warn};

use crate::Result;
use crate::fetch::{FetchSequence, FetchTicket};
use crate::models::{Wallet, WalletKey};

/// Shown for application-level failures without a service message.
const FETCH_REJECTED: &str = "Failed to fetch wallets.";

/// Shown when the service could not be reached or answered garbage.
const FETCH_UNREACHABLE: &str =
    "An error occurred while fetching wallets. Make sure your backend server is running.";

/// Load state of the wallet list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    /// First fetch not yet answered.
    Loading,
    /// The list reflects the last successful fetch.
    Ready,
    /// The last fetch failed.
    Failed(String),
}

/// What the dashboard area should display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardView<'a> {
    Loading,
    Failed(&'a str),
    Empty(String),
    Wallets,
}

/// Wallet list, selection, and load status for one user.
#[derive(Debug)]
pub struct Dashboard {
    username: String,
    wallets: Vec<Wallet>,
    selected: Option<WalletKey>,
    status: LoadStatus,
    refreshing: bool,
    sequence: FetchSequence,
}

impl Dashboard {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            wallets: Vec::new(),
            selected: None,
            status: LoadStatus::Loading,
            refreshing: false,
            sequence: FetchSequence::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Last fetched wallets, in backend order.
    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Whether a fetch is in flight.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn selected_key(&self) -> Option<&WalletKey> {
        self.selected.as_ref()
    }

    /// The selected wallet's latest snapshot.
    pub fn selected_wallet(&self) -> Option<&Wallet> {
        let key = self.selected.as_ref()?;
        self.wallets.iter().find(|w| w.matches(key))
    }

    /// Index of the selected wallet in [`Self::wallets`].
    pub fn selected_index(&self) -> Option<usize> {
        let key = self.selected.as_ref()?;
        self.wallets.iter().position(|w| w.matches(key))
    }

    /// Starts a fetch of the wallet list.
    ///
    /// Before the first successful fetch the view shows loading; later
    /// fetches keep the current snapshot visible until they resolve.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.refreshing = true;
        if matches!(self.status, LoadStatus::Failed(_)) && self.wallets.is_empty() {
            self.status = LoadStatus::Loading;
        }
        self.sequence.issue()
    }

    /// Applies a wallet fetch result.
    ///
    /// Returns `true` when the selected wallet changed identity, which the
    /// caller uses to reload the transaction history. Results for
    /// superseded tickets are ignored.
    pub fn apply_wallets(&mut self, ticket: FetchTicket, result: Result<Vec<Wallet>>) -> bool {
        if !self.sequence.is_current(ticket) {
            debug!(?ticket, "discarding superseded wallet fetch");
            return false;
        }
        self.refreshing = false;

        match result {
            Ok(wallets) => {
                info!(count = wallets.len(), user = %self.username, "wallets loaded");
                let previous = self.selected.take();
                self.selected = reconcile_selection(previous.as_ref(), &wallets);
                self.wallets = wallets;
                self.status = LoadStatus::Ready;
                previous != self.selected
            }
            Err(e) => {
                warn!(user = %self.username, "wallet fetch failed: {e}");
                self.status = LoadStatus::Failed(e.user_message(FETCH_REJECTED, FETCH_UNREACHABLE));
                false
            }
        }
    }

    /// Selects the wallet at `index`. Returns `true` if the selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(wallet) = self.wallets.get(index) else {
            return false;
        };
        let key = wallet.key();
        if self.selected.as_ref() == Some(&key) {
            return false;
        }
        self.selected = Some(key);
        true
    }

    /// Moves the selection down one wallet, stopping at the last.
    pub fn select_next(&mut self) -> bool {
        match self.selected_index() {
            Some(i) => self.select((i + 1).min(self.wallets.len().saturating_sub(1))),
            None => self.select(0),
        }
    }

    /// Moves the selection up one wallet, stopping at the first.
    pub fn select_previous(&mut self) -> bool {
        match self.selected_index() {
            Some(i) => self.select(i.saturating_sub(1)),
            None => self.select(0),
        }
    }

    /// What the dashboard area should show. A failed fetch hides the
    /// stale list even though it stays in memory.
    pub fn view(&self) -> DashboardView<'_> {
        match &self.status {
            LoadStatus::Loading => DashboardView::Loading,
            LoadStatus::Failed(message) => DashboardView::Failed(message),
            LoadStatus::Ready if self.wallets.is_empty() => DashboardView::Empty(format!(
                "No wallets found for {}. Please create one from your backend.",
                self.username
            )),
            LoadStatus::Ready => DashboardView::Wallets,
        }
    }
}

/// Picks the selection after a fresh fetch.
///
/// Keeps `previous` when the same `(id, type)` is still present; otherwise
/// falls back to the first wallet, or none for an empty list.
pub fn reconcile_selection(previous: Option<&WalletKey>, wallets: &[Wallet]) -> Option<WalletKey> {
    previous
        .and_then(|key| wallets.iter().find(|w| w.matches(key)))
        .or_else(|| wallets.first())
        .map(Wallet::key)
}
