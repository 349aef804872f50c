//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::dashboard::LoadStatus;
use crate::tui::app::App;

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (state_label, state_color) = match app.dashboard.status() {
        _ if app.dashboard.is_refreshing() => ("Syncing...", Color::Yellow),
        LoadStatus::Loading => ("Loading...", Color::Yellow),
        LoadStatus::Ready => ("Synced", Color::Green),
        LoadStatus::Failed(_) => ("Offline", Color::Red),
    };

    let notice_span = if let Some(ref notice) = app.notice {
        Span::styled(
            format!(" {} ", notice.message),
            Style::default().fg(Color::Red),
        )
    } else {
        Span::raw("")
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.dashboard.username()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("│"),
        Span::styled(format!(" {state_label} "), Style::default().fg(state_color)),
        Span::raw("│"),
        Span::styled(
            format!(" {} ", app.base_url),
            Style::default().fg(Color::White),
        ),
        Span::raw("│"),
        notice_span,
    ]);

    let para = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
