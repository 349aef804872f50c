//! Terminal dashboard for a remote wallet service.
//!
//! Lists a user's wallets, deposits into and transfers from the selected
//! wallet, and shows its transaction history. All balances and history
//! come from the wallet service; nothing is stored locally.

pub mod actions;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod history;
pub mod models;
pub mod text_input;
pub mod tui;

pub use client::{HttpWalletClient, WalletApi};
pub use error::{Result, WalletDashError};
