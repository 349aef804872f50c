//! The three dashboard panels: wallet list, actions, and history.

pub mod actions;
pub mod transactions;
pub mod wallets;
