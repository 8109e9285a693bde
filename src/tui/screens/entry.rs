//! Allocation entry screen — the form that drives the whole app.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, Wrap};

use crate::api::ApiError;
use crate::model::{DiscFactor, SubmissionDraft};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{Form, FormField, draw_field};

/// Field index for the person's name.
const NAME: usize = 0;
/// Field indexes for the four DISC scores, in D, I, S, C order.
const SCORE_D: usize = 1;
/// Field index for the task description.
const TASK: usize = 5;
/// Field index for the deadline.
const DEADLINE: usize = 6;

/// Fixed message for transport-level failures; the cause goes to the log.
const TRANSPORT_NOTICE: &str = "An error occurred while allocating the task";

/// Returns the form index of a score field.
fn score_index(factor: DiscFactor) -> usize {
    SCORE_D
        + DiscFactor::all()
            .iter()
            .position(|&f| f == factor)
            .unwrap_or(0)
}

/// Category of a user-facing notice.
///
/// Exactly one category fires per submission attempt: validation before any
/// network activity, rejection or transport after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Input failed client-side validation.
    Validation,
    /// The endpoint rejected the request with its own message.
    Rejection,
    /// The request failed in transit or the reply was unreadable.
    Transport,
}

/// A non-blocking notice shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// A successful allocation kept for the recent list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationRecord {
    pub at: DateTime<Local>,
    pub name: String,
    pub task: String,
    pub allocation: String,
}

/// State for the allocation entry screen.
#[derive(Debug, Clone)]
pub struct EntryState {
    form: Form,
    loading: bool,
    allocation: String,
    notice: Option<Notice>,
    recent: Vec<AllocationRecord>,
    /// Name and task of the in-flight submission, for the recent list.
    pending: Option<(String, String)>,
}

impl Default for EntryState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryState {
    /// Creates a new entry state: empty text fields, scores prefilled to 0.
    pub fn new() -> Self {
        let mut fields = vec![FormField::new("Name")];
        fields.extend(
            DiscFactor::all()
                .iter()
                .map(|f| FormField::with_value(f.letter(), "0")),
        );
        fields.push(FormField::new("Task"));
        fields.push(FormField::new("Deadline (YYYY-MM-DD)"));

        Self {
            form: Form::new(fields),
            loading: false,
            allocation: String::new(),
            notice: None,
            recent: Vec::new(),
            pending: None,
        }
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns `true` while a submission is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Marks a submission as in flight.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Returns the last successful allocation text (empty until one arrives).
    pub fn allocation(&self) -> &str {
        &self.allocation
    }

    /// Returns the current notice, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Returns the recent successful allocations, newest first.
    pub fn recent(&self) -> &[AllocationRecord] {
        &self.recent
    }

    /// Applies a settled submission outcome.
    ///
    /// Resets `loading` on every path. Success replaces the allocation text
    /// and prepends a recent row; a rejection shows the server's message; any
    /// other failure shows the fixed transport notice.
    pub fn finish(&mut self, outcome: Result<String, ApiError>) {
        self.loading = false;
        let pending = self.pending.take();
        match outcome {
            Ok(allocation) => {
                let (name, task) = pending.unwrap_or_else(|| {
                    (
                        self.form.value(NAME).to_string(),
                        self.form.value(TASK).to_string(),
                    )
                });
                self.notice = None;
                self.allocation = allocation.clone();
                self.recent.insert(
                    0,
                    AllocationRecord {
                        at: Local::now(),
                        name,
                        task,
                        allocation,
                    },
                );
                self.recent.truncate(3);
            }
            Err(ApiError::Rejected(message)) => {
                self.notice = Some(Notice {
                    kind: NoticeKind::Rejection,
                    message,
                });
            }
            Err(_) => {
                self.notice = Some(Notice {
                    kind: NoticeKind::Transport,
                    message: TRANSPORT_NOTICE.to_string(),
                });
            }
        }
    }

    /// Validates the form and, if it passes, produces the submit action.
    fn submit(&mut self) -> Action {
        self.form.clear_errors();
        self.notice = None;

        let draft = SubmissionDraft {
            name: self.form.value(NAME),
            task: self.form.value(TASK),
            deadline: self.form.value(DEADLINE),
            scores: [
                self.form.value(SCORE_D),
                self.form.value(SCORE_D + 1),
                self.form.value(SCORE_D + 2),
                self.form.value(SCORE_D + 3),
            ],
        };

        match draft.validate() {
            Ok(request) => {
                self.pending = Some((request.name.clone(), request.task.clone()));
                Action::Submit(request)
            }
            Err(err) => {
                self.mark_fields(err);
                self.notice = Some(Notice {
                    kind: NoticeKind::Validation,
                    message: err.to_string(),
                });
                Action::None
            }
        }
    }

    /// Attaches the validation failure to the offending field(s).
    fn mark_fields(&mut self, err: crate::model::ValidationError) {
        use crate::model::ValidationError;
        match err {
            ValidationError::MissingFields => {
                for index in [NAME, TASK, DEADLINE] {
                    if self.form.value(index).is_empty() {
                        self.form.set_error(index, "required".into());
                    }
                }
            }
            ValidationError::InvalidScore { factor } => {
                self.form.set_error(score_index(factor), "0-100".into());
            }
        }
    }
}

impl ScreenState for EntryState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Backspace => {
                self.form.delete_char();
                Action::None
            }
            KeyCode::Esc => Action::Quit,
            // One submission in flight, ever: Enter is inert while loading.
            KeyCode::Enter if self.loading => Action::None,
            KeyCode::Enter => self.submit(),
            KeyCode::Char(ch) => {
                self.form.insert_char(ch);
                Action::None
            }
            _ => Action::None,
        }
    }
}

/// Renders the allocation entry screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_entry(state: &EntryState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" disctask ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [name_area, scores_area, task_area, deadline_area, notice_area, allocation_area, recent_area, footer_area] =
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(inner);

    let fields = state.form().fields();
    let focus = state.form().focus();

    draw_field(&fields[NAME], focus == NAME, frame, name_area);

    let score_areas: [Rect; 4] = Layout::horizontal([Constraint::Ratio(1, 4); 4]).areas(scores_area);
    for (offset, cell) in score_areas.iter().enumerate() {
        let index = SCORE_D + offset;
        draw_field(&fields[index], focus == index, frame, *cell);
    }

    draw_field(&fields[TASK], focus == TASK, frame, task_area);
    draw_field(&fields[DEADLINE], focus == DEADLINE, frame, deadline_area);

    // Notice line: in-flight indicator wins, then the latest notice.
    if state.loading() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Allocating task\u{2026}",
                Style::default().fg(Color::Yellow),
            )),
            notice_area,
        );
    } else if let Some(notice) = state.notice() {
        let color = match notice.kind {
            NoticeKind::Validation => Color::Yellow,
            NoticeKind::Rejection | NoticeKind::Transport => Color::Red,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                notice.message.as_str(),
                Style::default().fg(color),
            )),
            notice_area,
        );
    }

    let allocation_block = Block::default()
        .title(" Allocation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if state.allocation().is_empty() {
            Color::DarkGray
        } else {
            Color::Green
        }));
    let allocation_text = if state.allocation().is_empty() {
        Span::styled("no allocation yet", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(state.allocation())
    };
    frame.render_widget(
        Paragraph::new(Line::from(allocation_text))
            .wrap(Wrap { trim: true })
            .block(allocation_block),
        allocation_area,
    );

    let recent_block = Block::default()
        .title(" Recent allocations ")
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let recent_inner = recent_block.inner(recent_area);
    frame.render_widget(recent_block, recent_area);

    if !state.recent().is_empty() {
        let rows: Vec<Row> = state
            .recent()
            .iter()
            .map(|record| {
                Row::new(vec![
                    record.at.format("%H:%M").to_string(),
                    record.name.clone(),
                    record.task.clone(),
                    record.allocation.clone(),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Length(20),
            Constraint::Min(10),
        ];
        frame.render_widget(Table::new(rows, widths), recent_inner);
    }

    let footer = Paragraph::new(Line::from(
        "Tab: next field  Enter: allocate  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
