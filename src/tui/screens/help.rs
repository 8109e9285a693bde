//! Help screen — keybinding reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

static ENTRY_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("Enter", "validate and allocate"),
    ("Backspace", "delete"),
    ("F1", "help"),
    ("Esc", "quit"),
];

static HELP_KEYS: &[(&str, &str)] = &[("\u{2191}/\u{2193}", "scroll"), ("q / Esc", "back")];

/// State for the help screen.
#[derive(Debug, Clone, Default)]
pub struct HelpState {
    scroll: u16,
}

impl HelpState {
    /// Creates a new [`HelpState`] scrolled to the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }
}

impl ScreenState for HelpState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(Screen::Entry),
            _ => Action::None,
        }
    }
}

/// Renders the help screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = Vec::new();
    for (title, keys) in [("Entry", ENTRY_KEYS), ("Help", HELP_KEYS)] {
        lines.push(Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (key, action) in keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<18}"), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ]));
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).scroll((state.scroll(), 0)).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn starts_scrolled_to_top() {
        assert_eq!(HelpState::new().scroll(), 0);
    }

    #[test]
    fn down_and_up_adjust_scroll() {
        let mut state = HelpState::new();
        state.handle_key(press(KeyCode::Down));
        state.handle_key(press(KeyCode::Down));
        assert_eq!(state.scroll(), 2);
        state.handle_key(press(KeyCode::Up));
        assert_eq!(state.scroll(), 1);
    }

    #[test]
    fn up_at_top_saturates() {
        let mut state = HelpState::new();
        state.handle_key(press(KeyCode::Up));
        assert_eq!(state.scroll(), 0);
    }

    #[test]
    fn q_and_esc_navigate_back_to_entry() {
        let mut state = HelpState::new();
        assert_eq!(
            state.handle_key(press(KeyCode::Char('q'))),
            Action::Navigate(Screen::Entry)
        );
        assert_eq!(
            state.handle_key(press(KeyCode::Esc)),
            Action::Navigate(Screen::Entry)
        );
    }
}
