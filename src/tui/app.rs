use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tracing::error;

use crate::api::{AllocationClient, ApiError};
use crate::model::AllocationRequest;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::entry::{EntryState, draw_entry};
use super::screens::help::{HelpState, draw_help};
use super::widgets::status_bar::{StatusBarContext, draw_status_bar};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The allocation entry form.
    Entry,
    /// Keybinding help.
    Help,
}

/// Outcome of one submission, sent back from the worker task.
type SubmissionOutcome = Result<String, ApiError>;

/// Top-level application state.
pub struct App {
    screen: Screen,
    entry: EntryState,
    help: HelpState,
    client: AllocationClient,
    runtime: tokio::runtime::Handle,
    inflight: Option<Receiver<SubmissionOutcome>>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::Entry`] screen.
    pub fn new(client: AllocationClient, runtime: tokio::runtime::Handle) -> Self {
        Self {
            screen: Screen::Entry,
            entry: EntryState::new(),
            help: HelpState::new(),
            client,
            runtime,
            inflight: None,
            should_quit: false,
        }
    }

    /// Main event loop: draw → settle submissions → read event → dispatch.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.poll_submission();
            if event::poll(Duration::from_millis(50))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the current screen plus the status bar.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::Entry => draw_entry(&self.entry, frame, main_area),
            Screen::Help => draw_help(&self.help, frame, main_area),
        }

        let ctx = StatusBarContext {
            server_url: self.client.server_url().to_string(),
            loading: self.entry.loading(),
        };
        draw_status_bar(&ctx, frame, status_area);
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::F(1) {
            self.screen = Screen::Help;
            return;
        }

        let action = match self.screen {
            Screen::Entry => self.entry.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    /// Applies an [`Action`] returned by a screen handler.
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::Submit(request) => self.begin_submission(request),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Spawns one allocation request on the runtime.
    ///
    /// A submission already in flight wins: later submit actions are dropped
    /// until it settles.
    fn begin_submission(&mut self, request: AllocationRequest) {
        if self.inflight.is_some() {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let client = self.client.clone();
        self.runtime.spawn(async move {
            let _ = tx.send(client.allocate(&request).await);
        });
        self.inflight = Some(rx);
        self.entry.set_loading(true);
    }

    /// Drains the in-flight submission if it has settled.
    ///
    /// Transport-level causes are logged here; the entry screen only shows
    /// the fixed generic message for them.
    pub fn poll_submission(&mut self) {
        let Some(rx) = &self.inflight else {
            return;
        };
        match rx.try_recv() {
            Ok(outcome) => {
                self.inflight = None;
                if let Err(err) = &outcome
                    && err.rejection_message().is_none()
                {
                    error!(error = %err, "allocation request failed");
                }
                self.entry.finish(outcome);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                // Worker vanished without reporting; treat as transport failure.
                self.inflight = None;
                error!("allocation worker dropped before sending an outcome");
                self.entry.finish(Err(ApiError::MalformedReply));
            }
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns a reference to the entry screen state.
    pub fn entry(&self) -> &EntryState {
        &self.entry
    }
}
