//! Wallet selector: one button per wallet.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::models::Wallet;
use crate::tui::app::{App, Focus};

/// Column width of the wallet list.
pub const WIDTH: u16 = 24;

/// Renders the wallet list with the selected wallet highlighted.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == Focus::Wallets;
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Wallets ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let selected = app.dashboard.selected_index();
    let items: Vec<ListItem> = app
        .dashboard
        .wallets()
        .iter()
        .enumerate()
        .map(|(i, wallet)| wallet_button(wallet, Some(i) == selected))
        .collect();

    let list = List::new(items).block(block);
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

/// Two-line button: type caption and balance.
fn wallet_button(wallet: &Wallet, is_selected: bool) -> ListItem<'static> {
    let style = if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    ListItem::new(vec![
        Line::from(Span::raw(format!(" {}", wallet.title()))),
        Line::from(Span::raw(format!(" {}", wallet.balance_label()))),
    ])
    .style(style)
}
