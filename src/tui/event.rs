//! Event handling for the TUI.
//!
//! Terminal input, timer ticks, and completed API calls all arrive as
//! [`Message`]s. [`update`] applies one message to the [`App`] and returns
//! the [`Action`]s (API calls) it requires.

use std::time::Duration;

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::warn;

use crate::Result;
use crate::fetch::FetchTicket;
use crate::models::{
    DepositRequest, DepositResponse, Transaction, TransferRequest, TransferResponse, Wallet,
    WalletKey,
};

use super::app::{App, Focus, Mode};

/// Events that can occur in the terminal.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),

    /// Wallet list fetch finished.
    WalletsLoaded {
        ticket: FetchTicket,
        result: Result<Vec<Wallet>>,
    },
    /// Deposit request finished.
    DepositFinished {
        request: DepositRequest,
        result: Result<DepositResponse>,
    },
    /// Transfer request finished.
    TransferFinished {
        request: TransferRequest,
        result: Result<TransferResponse>,
    },
    /// Transaction history fetch finished.
    TransactionsLoaded {
        ticket: FetchTicket,
        wallet: WalletKey,
        result: Result<Vec<Transaction>>,
    },

    /// Request to quit the application.
    Quit,
}

/// Wallet service calls requested by [`update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch the wallet list for `username`.
    FetchWallets {
        ticket: FetchTicket,
        username: String,
    },
    /// Submit a deposit.
    Deposit(DepositRequest),
    /// Submit a transfer.
    Transfer(TransferRequest),
    /// Fetch the history of `wallet`.
    FetchTransactions {
        ticket: FetchTicket,
        wallet: WalletKey,
    },
}

/// How long one blocking poll waits before checking whether the app quit.
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Spawns a task that forwards terminal input until the receiver is dropped.
///
/// Crossterm polling blocks, so each poll runs on the blocking pool.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        while !tx.is_closed() {
            let polled = tokio::task::spawn_blocking(|| {
                match event::poll(POLL_TIMEOUT) {
                    Ok(true) => event::read().map(Some),
                    Ok(false) => Ok(None),
                    Err(e) => Err(e),
                }
            })
            .await;

            let raw = match polled {
                Ok(Ok(Some(raw))) => raw,
                Ok(Ok(None)) => continue,
                Ok(Err(e)) => {
                    warn!("terminal input failed: {e}");
                    let _ = tx.send(Message::Quit);
                    break;
                }
                Err(_) => break,
            };

            if let Some(event) = translate(raw)
                && tx.send(Message::Input(event)).is_err()
            {
                break;
            }
        }
    });
}

/// Keeps key presses and resizes.
///
/// Release and repeat reports are dropped, so a keystroke is handled once
/// on terminals that report all three.
fn translate(raw: CrosstermEvent) -> Option<Event> {
    match raw {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    }
}

/// Spawns a task that drives notice expiry. Missed ticks are skipped rather
/// than replayed in a burst.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Vec<Action> {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::WalletsLoaded { ticket, result } => {
            if app.dashboard.apply_wallets(ticket, result) {
                app.sync_history().into_iter().collect()
            } else {
                Vec::new()
            }
        }
        Message::DepositFinished { request, result } => {
            if app.actions.finish_deposit(&request, result) {
                app.refresh()
            } else {
                Vec::new()
            }
        }
        Message::TransferFinished { request, result } => {
            if app.actions.finish_transfer(&request, result) {
                app.refresh()
            } else {
                Vec::new()
            }
        }
        Message::TransactionsLoaded {
            ticket,
            wallet,
            result,
        } => {
            app.history.apply_transactions(ticket, &wallet, result);
            Vec::new()
        }
        Message::Quit => {
            app.should_quit = true;
            Vec::new()
        }
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) -> Vec<Action> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => Vec::new(),
        Event::Tick => {
            app.clear_stale_notice();
            Vec::new()
        }
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Vec<Action> {
    // Global keys (work in any mode)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return Vec::new();
        }
        KeyCode::Char('q') if key.modifiers.is_empty() && app.mode == Mode::Normal => {
            app.should_quit = true;
            return Vec::new();
        }
        KeyCode::Esc => {
            app.mode = Mode::Normal;
            return Vec::new();
        }
        _ => {}
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Insert => handle_insert_mode(app, key),
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.focus = app.focus.previous();
            } else {
                app.focus = app.focus.next();
            }
            Vec::new()
        }
        KeyCode::BackTab => {
            app.focus = app.focus.previous();
            Vec::new()
        }

        KeyCode::Char('r') => app.refresh(),

        _ if !app.shows_wallets() => Vec::new(),

        _ => match app.focus {
            Focus::Wallets => handle_wallet_keys(app, key),
            Focus::ReceiverType => {
                match key.code {
                    KeyCode::Char(' ') | KeyCode::Char('l') | KeyCode::Right => {
                        app.actions.receiver_type = app.actions.receiver_type.next();
                    }
                    KeyCode::Char('h') | KeyCode::Left => {
                        app.actions.receiver_type = app.actions.receiver_type.previous();
                    }
                    _ => {}
                }
                Vec::new()
            }
            Focus::DepositAmount | Focus::TransferAmount | Focus::ReceiverId => {
                if matches!(key.code, KeyCode::Char('i') | KeyCode::Enter) {
                    enter_insert_mode(app);
                }
                Vec::new()
            }
        },
    }
}

/// Handles keys while the wallet list has focus.
fn handle_wallet_keys(app: &mut App, key: KeyEvent) -> Vec<Action> {
    let changed = match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.dashboard.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.dashboard.select_previous(),
        KeyCode::Enter => {
            app.focus = Focus::DepositAmount;
            false
        }
        _ => false,
    };

    if changed {
        app.sync_history().into_iter().collect()
    } else {
        Vec::new()
    }
}

/// Switches to insert mode unless the focused field is disabled.
fn enter_insert_mode(app: &mut App) {
    if app.focus == Focus::DepositAmount && app.actions.is_depositing() {
        app.show_notice("Deposit in progress.");
        return;
    }
    app.mode = Mode::Insert;
}

/// Handles keys in insert mode (text input).
fn handle_insert_mode(app: &mut App, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            app.mode = Mode::Normal;
            submit_focused_form(app).into_iter().collect()
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.mode = Mode::Normal;
            handle_normal_mode(app, key)
        }
        _ => {
            if let Some(input) = app.focused_input_mut() {
                match key.code {
                    KeyCode::Char(c) => input.insert(c),
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Delete => input.delete(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_home(),
                    KeyCode::End => input.move_end(),
                    _ => {}
                }
            }
            Vec::new()
        }
    }
}

/// Validates and submits the form owning the focused field.
fn submit_focused_form(app: &mut App) -> Option<Action> {
    let Some(sender) = app.dashboard.selected_key().cloned() else {
        app.show_notice("Select a wallet first.");
        return None;
    };

    match app.focus {
        Focus::DepositAmount => app.actions.submit_deposit(&sender).map(Action::Deposit),
        Focus::TransferAmount | Focus::ReceiverType | Focus::ReceiverId => {
            app.actions.submit_transfer(&sender).map(Action::Transfer)
        }
        Focus::Wallets => None,
    }
}
