//! Transaction history panel.

use chrono::Local;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::history::HistoryView;
use crate::models::{Direction, Transaction};
use crate::tui::app::App;

/// Renders the selected wallet's history.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let title = match app.history.wallet() {
        Some(wallet) => format!(
            " Transaction History for {} Wallet ",
            wallet.wallet_type.label()
        ),
        None => " Transaction History ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let (text, color) = match app.history.view() {
        HistoryView::Rows(transactions) => {
            let inner_width = block.inner(area).width as usize;
            let items: Vec<ListItem> = transactions
                .iter()
                .map(|tx| transaction_item(tx, inner_width))
                .collect();
            frame.render_widget(List::new(items).block(block), area);
            return;
        }
        HistoryView::NoWallet => ("Select a wallet to view transactions.".to_string(), Color::White),
        HistoryView::Loading => ("Loading transactions...".to_string(), Color::White),
        HistoryView::Failed(error) => (error.to_string(), Color::Red),
        HistoryView::Empty => (
            "No transactions found for this wallet.".to_string(),
            Color::Gray,
        ),
    };

    let para = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}

/// One history row: label and signed amount, then description (when
/// present) and local timestamp.
fn transaction_item(tx: &Transaction, width: usize) -> ListItem<'static> {
    let amount_color = match tx.direction {
        Direction::Credit => Color::Green,
        Direction::Debit => Color::Red,
    };

    let label = tx.direction.label();
    let amount = tx.signed_amount();
    let gap = width.saturating_sub(label.width() + amount.width()).max(1);

    let mut lines = vec![Line::from(vec![
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(gap)),
        Span::styled(amount, Style::default().fg(amount_color)),
    ])];

    if let Some(description) = tx.description() {
        lines.push(Line::styled(
            truncate_to_width(description, width),
            Style::default().fg(Color::Gray),
        ));
    }

    let mut detail = tx.timestamp_in(&Local);
    if let Some(counterparty) = tx.counterparty() {
        detail = format!("{detail}  {counterparty}");
    }
    lines.push(Line::styled(
        truncate_to_width(&detail, width),
        Style::default().fg(Color::DarkGray),
    ));

    ListItem::new(lines)
}

/// Cuts `text` to at most `width` terminal columns, marking the cut with `…`.
fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_columns() {
        assert_eq!(truncate_to_width("coffee", 10), "coffee");
        assert_eq!(truncate_to_width("coffee beans", 7), "coffee…");
        assert_eq!(truncate_to_width("漢字漢字", 5), "漢字…");
    }
}
