//! Application state for the TUI.

use std::time::{Duration, Instant};

use crate::actions::ActionPanel;
use crate::dashboard::{Dashboard, DashboardView};
use crate::history::TransactionHistory;
use crate::tui::event::Action;
use crate::text_input::TextInput;

/// How long a status bar notice stays visible.
const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Central application state container.
pub struct App {
    // -- Components --
    /// Wallet list and selection owner.
    pub dashboard: Dashboard,
    /// Deposit and transfer forms.
    pub actions: ActionPanel,
    /// History of the selected wallet.
    pub history: TransactionHistory,

    // -- UI State --
    pub focus: Focus,
    pub mode: Mode,
    /// Wallet service root, shown in the status bar.
    pub base_url: String,
    /// Transient notice in the status bar.
    pub notice: Option<Notice>,

    // -- Internal --
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    pub fn new(username: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            dashboard: Dashboard::new(username),
            actions: ActionPanel::new(),
            history: TransactionHistory::new(),
            focus: Focus::Wallets,
            mode: Mode::Normal,
            base_url: base_url.into(),
            notice: None,
            should_quit: false,
        }
    }

    /// Actions to run at startup: the initial wallet fetch.
    pub fn start(&mut self) -> Vec<Action> {
        vec![self.fetch_wallets()]
    }

    /// Starts a wallet list fetch.
    pub fn fetch_wallets(&mut self) -> Action {
        Action::FetchWallets {
            ticket: self.dashboard.begin_fetch(),
            username: self.dashboard.username().to_string(),
        }
    }

    /// Refetches the wallet list and reloads the shown history.
    ///
    /// If the refetch moves the selection, the history fetch it triggers
    /// supersedes this reload.
    pub fn refresh(&mut self) -> Vec<Action> {
        let mut actions = vec![self.fetch_wallets()];
        if let Some(ticket) = self.history.reload()
            && let Some(wallet) = self.history.wallet().cloned()
        {
            actions.push(Action::FetchTransactions { ticket, wallet });
        }
        actions
    }

    /// Points the history panel at the current selection, fetching if it
    /// changed.
    pub fn sync_history(&mut self) -> Option<Action> {
        let wallet = self.dashboard.selected_key().cloned();
        let ticket = self.history.show_wallet(wallet.as_ref())?;
        Some(Action::FetchTransactions {
            ticket,
            wallet: wallet?,
        })
    }

    /// Whether the wallet panels (rather than a loading, error, or empty
    /// screen) are on display.
    pub fn shows_wallets(&self) -> bool {
        self.dashboard.view() == DashboardView::Wallets
    }

    /// The text field under focus, if focus is on one.
    pub fn focused_input(&self) -> Option<&TextInput> {
        match self.focus {
            Focus::DepositAmount => Some(&self.actions.deposit_amount),
            Focus::TransferAmount => Some(&self.actions.transfer_amount),
            Focus::ReceiverId => Some(&self.actions.receiver_id),
            Focus::Wallets | Focus::ReceiverType => None,
        }
    }

    /// Mutable access to the text field under focus.
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::DepositAmount => Some(&mut self.actions.deposit_amount),
            Focus::TransferAmount => Some(&mut self.actions.transfer_amount),
            Focus::ReceiverId => Some(&mut self.actions.receiver_id),
            Focus::Wallets | Focus::ReceiverType => None,
        }
    }

    /// Sets a notice to display.
    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            message: message.into(),
            timestamp: Instant::now(),
        });
    }

    /// Clears notices older than [`NOTICE_TTL`].
    pub fn clear_stale_notice(&mut self) {
        if let Some(ref notice) = self.notice
            && notice.timestamp.elapsed() > NOTICE_TTL
        {
            self.notice = None;
        }
    }
}

/// UI focus targets, in Tab order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Wallets,
    DepositAmount,
    TransferAmount,
    ReceiverType,
    ReceiverId,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Wallets => Focus::DepositAmount,
            Focus::DepositAmount => Focus::TransferAmount,
            Focus::TransferAmount => Focus::ReceiverType,
            Focus::ReceiverType => Focus::ReceiverId,
            Focus::ReceiverId => Focus::Wallets,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Wallets => Focus::ReceiverId,
            Focus::DepositAmount => Focus::Wallets,
            Focus::TransferAmount => Focus::DepositAmount,
            Focus::ReceiverType => Focus::TransferAmount,
            Focus::ReceiverId => Focus::ReceiverType,
        }
    }

    /// Whether this target is a text field.
    pub fn is_text_field(self) -> bool {
        matches!(
            self,
            Focus::DepositAmount | Focus::TransferAmount | Focus::ReceiverId
        )
    }
}

/// Input mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
}

/// Status bar notice with timestamp for auto-clear.
#[derive(Clone, Debug)]
pub struct Notice {
    pub message: String,
    pub timestamp: Instant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_ring_wraps_both_ways() {
        let mut focus = Focus::Wallets;
        for _ in 0..5 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Wallets);
        assert_eq!(Focus::Wallets.previous(), Focus::ReceiverId);
    }

    #[test]
    fn start_issues_wallet_fetch_for_user() {
        let mut app = App::new("alice", "http://localhost:4000");
        let actions = app.start();
        assert!(matches!(
            actions.as_slice(),
            [Action::FetchWallets { username, .. }] if username == "alice"
        ));
        assert!(app.dashboard.is_refreshing());
    }

    #[test]
    fn fresh_notice_survives_tick() {
        let mut app = App::new("alice", "http://localhost:4000");
        app.show_notice("Select a wallet first.");
        app.clear_stale_notice();
        assert!(app.notice.is_some());
    }
}
