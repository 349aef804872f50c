//! Widgets shared by every screen.

pub mod status_bar;
