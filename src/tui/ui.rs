//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::{App, Focus, Mode};
use super::components::status_bar;
use super::panels::{actions, transactions, wallets};
use crate::dashboard::DashboardView;

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Min(8),    // Dashboard
            Constraint::Length(1), // Keybindings help
        ])
        .split(frame.area());

    status_bar::render(frame, main_layout[0], app);

    match app.dashboard.view() {
        DashboardView::Loading => render_message(
            frame,
            main_layout[1],
            vec![Line::from("Loading wallets...")],
            Color::White,
        ),
        DashboardView::Failed(message) => render_message(
            frame,
            main_layout[1],
            vec![Line::from(message.to_string())],
            Color::Red,
        ),
        DashboardView::Empty(message) => render_message(
            frame,
            main_layout[1],
            vec![
                Line::from(message),
                Line::from(""),
                Line::styled(
                    format!(
                        "(e.g., POST to /api/wallet/{}/create-dodi-wallet)",
                        app.dashboard.username()
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ],
            Color::White,
        ),
        DashboardView::Wallets => render_dashboard(frame, main_layout[1], app),
    }

    render_keybindings(frame, main_layout[2], app);
}

/// Renders the wallet list, action panel, and history side by side.
fn render_dashboard(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(wallets::WIDTH),
            Constraint::Percentage(45),
            Constraint::Min(30),
        ])
        .split(area);

    wallets::render(frame, columns[0], app);

    if let Some(wallet) = app.dashboard.selected_wallet() {
        actions::render(frame, columns[1], app, wallet);
    }
    transactions::render(frame, columns[2], app);
}

/// Renders a full-area status message (loading, error, empty).
fn render_message(frame: &mut Frame, area: Rect, lines: Vec<Line>, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let para = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}

/// Renders the keybindings help line.
fn render_keybindings(frame: &mut Frame, area: Rect, app: &App) {
    let help = match (app.mode, app.focus) {
        (Mode::Insert, _) => "[Esc]normal [Enter]submit",
        (Mode::Normal, Focus::Wallets) => "[j/k]select wallet [Tab]next field [r]refresh [q]quit",
        (Mode::Normal, Focus::ReceiverType) => "[Space/h/l]change type [Tab]next field [q]quit",
        (Mode::Normal, _) => "[i]edit [Tab]next field [r]refresh [q]quit",
    };

    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}
