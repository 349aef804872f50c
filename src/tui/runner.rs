//! Main loop: draws, receives messages, and runs API actions.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};

use crate::Result;
use crate::client::{HttpWalletClient, WalletApi};
use crate::config::ServiceConfig;

use super::app::App;
use super::event::{Action, Message, spawn_event_reader, spawn_tick_timer, update};
use super::terminal::{restore_terminal, setup_terminal};
use super::ui::render;

/// Tick interval for notice expiry.
const TICK_INTERVAL_MS: u64 = 250;

/// Runs one action against the wallet service and wraps the outcome as a
/// message for [`update`].
pub async fn perform(api: &dyn WalletApi, action: Action) -> Message {
    match action {
        Action::FetchWallets { ticket, username } => Message::WalletsLoaded {
            ticket,
            result: api.wallets(&username).await,
        },
        Action::Deposit(request) => {
            let result = api.deposit(&request).await;
            Message::DepositFinished { request, result }
        }
        Action::Transfer(request) => {
            let result = api.transfer(&request).await;
            Message::TransferFinished { request, result }
        }
        Action::FetchTransactions { ticket, wallet } => {
            let result = api.transactions(&wallet).await;
            Message::TransactionsLoaded {
                ticket,
                wallet,
                result,
            }
        }
    }
}

/// Spawns `action` and feeds its outcome back into the message channel.
fn spawn_action(api: Arc<dyn WalletApi>, tx: mpsc::UnboundedSender<Message>, action: Action) {
    tokio::spawn(async move {
        let message = perform(api.as_ref(), action).await;
        // The receiver is gone only when the app is shutting down.
        let _ = tx.send(message);
    });
}

/// Runs the dashboard until the user quits.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the terminal
/// cannot be set up, drawn to, or restored.
pub async fn run(config: &ServiceConfig) -> Result<()> {
    let api: Arc<dyn WalletApi> = Arc::new(HttpWalletClient::new(config)?);
    let mut app = App::new(&config.username, &config.base_url);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut terminal = setup_terminal()?;
    spawn_event_reader(tx.clone());
    spawn_tick_timer(tx.clone(), TICK_INTERVAL_MS);

    info!(user = %config.username, base_url = %config.base_url, "dashboard started");
    for action in app.start() {
        spawn_action(api.clone(), tx.clone(), action);
    }

    let outcome = loop {
        if let Err(e) = terminal.draw(|frame| render(frame, &app)) {
            error!("failed to draw: {e}");
            break Err(crate::WalletDashError::Io(format!("failed to draw: {e}")));
        }

        let Some(message) = rx.recv().await else {
            break Ok(());
        };
        for action in update(&mut app, message) {
            spawn_action(api.clone(), tx.clone(), action);
        }
        if app.should_quit {
            break Ok(());
        }
    };

    restore_terminal(&mut terminal)?;
    info!("dashboard stopped");
    outcome
}
