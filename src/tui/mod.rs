//! Terminal user interface for the wallet dashboard.
//!
//! A Ratatui front end over the dashboard state: a wallet list, the
//! deposit/transfer forms, and the selected wallet's history.

pub mod app;
pub mod components;
pub mod event;
pub mod panels;
pub mod runner;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Action, Event, Message, update};
pub use runner::{perform, run};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
