//! Transaction list for the selected wallet.
//!
//! Reloads whenever the selected `(type, id)` changes and after every
//! successful deposit or transfer, replacing its list wholesale. Rows are
//! shown in the order the service returns them.

use tracing::{debug, info, warn};

use crate::Result;
use crate::fetch::{FetchSequence, FetchTicket};
use crate::models::{Transaction, WalletKey};

const FETCH_REJECTED: &str = "Failed to fetch transactions.";
const FETCH_UNREACHABLE: &str = "An error occurred while fetching transactions.";

/// Transaction history state for at most one wallet.
#[derive(Debug, Default)]
pub struct TransactionHistory {
    wallet: Option<WalletKey>,
    transactions: Vec<Transaction>,
    loading: bool,
    error: Option<String>,
    sequence: FetchSequence,
}

/// What the history panel should display.
#[derive(Debug, PartialEq, Eq)]
pub enum HistoryView<'a> {
    NoWallet,
    Loading,
    Failed(&'a str),
    Empty,
    Rows(&'a [Transaction]),
}

impl TransactionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The wallet whose history is shown.
    pub fn wallet(&self) -> Option<&WalletKey> {
        self.wallet.as_ref()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Points the panel at `wallet`.
    ///
    /// Returns a ticket when a fetch must start: the first time a wallet is
    /// shown and on every change of `(type, id)`. Showing the same wallet
    /// again does nothing. `None` empties the panel.
    pub fn show_wallet(&mut self, wallet: Option<&WalletKey>) -> Option<FetchTicket> {
        if self.wallet.as_ref() == wallet {
            return None;
        }
        self.wallet = wallet.cloned();
        self.transactions.clear();
        self.error = None;

        match self.wallet {
            Some(_) => Some(self.begin_fetch()),
            None => {
                // Invalidate anything still in flight for the old wallet.
                self.sequence.issue();
                self.loading = false;
                None
            }
        }
    }

    /// Refetches the current wallet's history, if one is shown.
    pub fn reload(&mut self) -> Option<FetchTicket> {
        self.wallet.as_ref()?;
        Some(self.begin_fetch())
    }

    fn begin_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        self.error = None;
        self.sequence.issue()
    }

    /// Applies a fetch result for `wallet`.
    ///
    /// Results for superseded tickets, or for a wallet no longer shown, are
    /// discarded.
    pub fn apply_transactions(
        &mut self,
        ticket: FetchTicket,
        wallet: &WalletKey,
        result: Result<Vec<Transaction>>,
    ) {
        if !self.sequence.is_current(ticket) || self.wallet.as_ref() != Some(wallet) {
            debug!(%wallet, ?ticket, "discarding superseded transaction fetch");
            return;
        }
        self.loading = false;

        match result {
            Ok(transactions) => {
                info!(%wallet, count = transactions.len(), "transactions loaded");
                self.transactions = transactions;
                self.error = None;
            }
            Err(e) => {
                warn!(%wallet, "transaction fetch failed: {e}");
                self.error = Some(e.user_message(FETCH_REJECTED, FETCH_UNREACHABLE));
            }
        }
    }

    pub fn view(&self) -> HistoryView<'_> {
        if self.wallet.is_none() {
            HistoryView::NoWallet
        } else if self.loading {
            HistoryView::Loading
        } else if let Some(error) = &self.error {
            HistoryView::Failed(error)
        } else if self.transactions.is_empty() {
            HistoryView::Empty
        } else {
            HistoryView::Rows(&self.transactions)
        }
    }
}
