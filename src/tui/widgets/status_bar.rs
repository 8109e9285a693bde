//! Status bar widget — persistent one-line connection context display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget; decoupled from `App` internals.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Base URL of the allocation endpoint.
    pub server_url: String,
    /// Whether a submission is currently in flight.
    pub loading: bool,
}

/// Renders a one-line status bar: endpoint URL, plus `ALLOCATING…` while a
/// request is in flight.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let yellow = Style::default().fg(Color::Yellow);

    let mut spans = vec![Span::styled(ctx.server_url.clone(), cyan)];
    if ctx.loading {
        spans.push(Span::styled("  ALLOCATING\u{2026}", yellow));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
