//! Shared test utilities: fixtures and a scripted wallet service.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use walletdash::client::{WalletApi, decode_response};
use walletdash::models::{
    DepositRequest, DepositResponse, Transaction, TransferRequest, TransferResponse, Wallet,
    WalletKey,
};
use walletdash::tui::{Action, App, perform, update};
use walletdash::{Result, WalletDashError};

pub const WALLETS: &str = include_str!("../fixtures/wallets.json");
pub const TRANSACTIONS: &str = include_str!("../fixtures/transactions.json");
pub const DEPOSIT_SUCCESS: &str = include_str!("../fixtures/deposit_success.json");
pub const TRANSFER_SUCCESS: &str = include_str!("../fixtures/transfer_success.json");
pub const ERROR: &str = include_str!("../fixtures/error.json");

/// A call received by [`MockWalletApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Wallets(String),
    Deposit(DepositRequest),
    Transfer(TransferRequest),
    Transactions(WalletKey),
}

/// One scripted reply.
#[derive(Debug, Clone)]
enum Reply {
    Http(u16, String),
    Unreachable,
}

/// Wallet service double that answers from per-endpoint queues.
///
/// Replies pass through the same decoding as the HTTP client. The last
/// reply queued for an endpoint is repeated once the queue runs dry; an
/// endpoint with nothing queued answers `[]` (or `{}` for writes).
#[derive(Default)]
pub struct MockWalletApi {
    replies: Mutex<HashMap<&'static str, VecDeque<Reply>>>,
    calls: Mutex<Vec<Call>>,
}

impl MockWalletApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an HTTP reply for `endpoint` (`wallets`, `deposit`,
    /// `transfer` or `transactions`).
    pub fn reply(self, endpoint: &'static str, status: u16, body: &str) -> Self {
        self.push(endpoint, Reply::Http(status, body.to_string()));
        self
    }

    /// Queues a transport failure for `endpoint`.
    pub fn unreachable(self, endpoint: &'static str) -> Self {
        self.push(endpoint, Reply::Unreachable);
        self
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn push(&self, endpoint: &'static str, reply: Reply) {
        self.replies
            .lock()
            .unwrap()
            .entry(endpoint)
            .or_default()
            .push_back(reply);
    }

    fn answer<T: DeserializeOwned>(&self, endpoint: &'static str, call: Call, empty: &str) -> Result<T> {
        self.calls.lock().unwrap().push(call);

        let reply = {
            let mut replies = self.replies.lock().unwrap();
            let queue = replies.entry(endpoint).or_default();
            if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            }
        };

        match reply {
            Some(Reply::Http(status, body)) => {
                let status = StatusCode::from_u16(status).unwrap();
                decode_response(status, body.as_bytes())
            }
            Some(Reply::Unreachable) => Err(WalletDashError::Io("connection refused".to_string())),
            None => decode_response(StatusCode::OK, empty.as_bytes()),
        }
    }
}

#[async_trait]
impl WalletApi for MockWalletApi {
    async fn wallets(&self, username: &str) -> Result<Vec<Wallet>> {
        self.answer("wallets", Call::Wallets(username.to_string()), "[]")
    }

    async fn deposit(&self, request: &DepositRequest) -> Result<DepositResponse> {
        self.answer("deposit", Call::Deposit(request.clone()), "{}")
    }

    async fn transfer(&self, request: &TransferRequest) -> Result<TransferResponse> {
        self.answer("transfer", Call::Transfer(request.clone()), "{}")
    }

    async fn transactions(&self, wallet: &WalletKey) -> Result<Vec<Transaction>> {
        self.answer("transactions", Call::Transactions(wallet.clone()), "[]")
    }
}

/// Runs `actions` against `api`, feeding every outcome back through
/// `update` until no further actions are requested.
pub async fn drive(app: &mut App, api: &MockWalletApi, actions: Vec<Action>) {
    let mut pending: VecDeque<Action> = actions.into();
    while let Some(action) = pending.pop_front() {
        let message = perform(api, action).await;
        pending.extend(update(app, message));
    }
}

/// A started app whose initial loads have all resolved.
pub async fn loaded_app(api: &MockWalletApi) -> App {
    let mut app = App::new("user_table_test", "http://localhost:4000");
    let actions = app.start();
    drive(&mut app, api, actions).await;
    app
}

pub fn wallets_json(balance_of_a: &str) -> String {
    format!(r#"[{{ "id": "a", "userId": "u1", "type": "dodi", "balance": {balance_of_a} }}]"#)
}
