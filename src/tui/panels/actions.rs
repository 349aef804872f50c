//! Action panel layout and rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::models::wallet::format_money;
use crate::models::{Wallet, WalletType};
use crate::tui::app::{App, Focus, Mode};
use crate::text_input::TextInput;

/// Renders the action panel for `wallet`.
pub fn render(frame: &mut Frame, area: Rect, app: &App, wallet: &Wallet) {
    let block = Block::default()
        .title(format!(" Actions for {} ", wallet.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Id and balance
            Constraint::Length(1), // Status message
            Constraint::Length(4), // Deposit form
            Constraint::Length(8), // Transfer form
            Constraint::Min(0),
        ])
        .split(inner);

    let header = vec![
        Line::from(vec![
            Span::raw("id: "),
            Span::styled(wallet.id.clone(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::raw("Current Balance: "),
            Span::styled(
                format_money(wallet.balance),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(header), layout[0]);

    render_status(frame, layout[1], app);
    render_deposit(frame, layout[2], app);
    render_transfer(frame, layout[3], app);
}

/// Renders the last confirmation or error.
fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(error) = app.actions.error() {
        Line::styled(error.to_string(), Style::default().fg(Color::Red))
    } else if let Some(message) = app.actions.message() {
        Line::styled(message.to_string(), Style::default().fg(Color::Green))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Renders the deposit form.
fn render_deposit(frame: &mut Frame, area: Rect, app: &App) {
    let title = if app.actions.is_depositing() {
        " Deposit Funds (Depositing...) "
    } else {
        " Deposit Funds "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    render_field(
        frame,
        Rect { height: 1, ..inner },
        app,
        Focus::DepositAmount,
        "Amount: ",
        &app.actions.deposit_amount,
        app.actions.is_depositing(),
    );
}

/// Renders the transfer form.
fn render_transfer(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Transfer Funds ")
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_field(
        frame,
        rows[0],
        app,
        Focus::TransferAmount,
        "Transfer Amount: ",
        &app.actions.transfer_amount,
        false,
    );
    render_type_selector(frame, rows[1], app);
    render_field(
        frame,
        rows[2],
        app,
        Focus::ReceiverId,
        "Receiver Wallet ID: ",
        &app.actions.receiver_id,
        false,
    );
}

/// Renders the receiver type selector: the chosen kind is highlighted.
fn render_type_selector(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == Focus::ReceiverType;
    let mut spans = vec![Span::styled(
        "Receiver Wallet Type: ",
        label_style(is_focused),
    )];

    for wallet_type in WalletType::ALL {
        let style = if wallet_type == app.actions.receiver_type {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", wallet_type.label()), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders one labelled text field and, when editing it, the cursor.
fn render_field(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    focus: Focus,
    label: &str,
    input: &TextInput,
    disabled: bool,
) {
    let is_focused = app.focus == focus;
    let is_insert = is_focused && app.mode == Mode::Insert;

    let value_style = if disabled {
        Style::default().fg(Color::DarkGray)
    } else if is_insert {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };

    let line = Line::from(vec![
        Span::styled(label.to_string(), label_style(is_focused)),
        Span::styled(format!("[{}]", input.as_str()), value_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    if is_insert {
        let offset = u16::try_from(label.len()).unwrap_or(u16::MAX) + 1 + input.cursor_column();
        frame.set_cursor_position((area.x.saturating_add(offset), area.y));
    }
}

fn label_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}
