//! Main TUI application state and logic

use crate::config::Config;
use crate::interpreter::router::{CommandOutcome, CommandRouter};
use crate::interpreter::store::SlotStore;
use crate::parser::command::Command;
use crate::parser::parse::{parse_initial_size, parse_line, Input, ParseError, QUIT};
use crate::slots::SlotSetView;
use crate::ui::panes::{
    render_help_pane, render_history_pane, render_input_pane, render_slots_pane,
    render_status_bar, HistoryRenderData, HistoryScrollState, SlotsRenderData, StatusKind,
    StatusRenderData,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// A replay being played back frame by frame
#[derive(Debug, Clone)]
pub struct Playback {
    /// Copies of the replayed snapshots, oldest first
    pub frames: Vec<SlotSetView>,
    /// History index of `frames[0]`
    pub start: usize,
    /// Frame currently on screen
    pub position: usize,
    /// When the current frame was shown
    pub shown_at: Instant,
}

impl Playback {
    fn new(frames: Vec<SlotSetView>, start: usize) -> Self {
        Playback {
            frames,
            start,
            position: 0,
            shown_at: Instant::now(),
        }
    }

    fn current(&self) -> Option<&SlotSetView> {
        self.frames.get(self.position)
    }
}

/// The main application state
pub struct App {
    /// The slot engine
    pub store: SlotStore,

    pub config: Config,

    /// Text typed on the command line
    pub input: String,

    /// History pane scroll position
    pub history_scroll: HistoryScrollState,

    /// Whether the help listing replaces the history pane
    pub show_help: bool,

    /// Replay in progress, if any
    pub playback: Option<Playback>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
    pub status_kind: StatusKind,
}

impl App {
    /// Create a new app around `store`
    pub fn new(store: SlotStore, config: Config) -> Self {
        App {
            store,
            config,
            input: String::new(),
            history_scroll: HistoryScrollState::new(),
            show_help: false,
            playback: None,
            should_quit: false,
            status_message: String::from("Input an integer size to initialize your SlotBot"),
            status_kind: StatusKind::Info,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.advance_playback();

            // Use poll with timeout so playback keeps moving without input
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, then the command line, then the status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        let live_view = self.store.current_view();
        let (view, replay_progress) = match &self.playback {
            Some(playback) => (
                playback.current(),
                Some((playback.position + 1, playback.frames.len())),
            ),
            None => (
                self.store.is_initialized().then_some(&live_view),
                None,
            ),
        };

        render_slots_pane(
            frame,
            columns[0],
            SlotsRenderData {
                view,
                marker: self.config.marker,
                replay_progress,
            },
        );

        if self.show_help {
            render_help_pane(frame, columns[1]);
        } else {
            render_history_pane(
                frame,
                columns[1],
                HistoryRenderData {
                    history: self.store.history(),
                    highlighted: self
                        .playback
                        .as_ref()
                        .map(|playback| playback.start + playback.position),
                },
                &mut self.history_scroll,
            );
        }

        let input_title = if self.store.is_initialized() {
            "Next Command"
        } else {
            "Initial Size"
        };
        render_input_pane(frame, main_chunks[1], input_title, &self.input);

        render_status_bar(
            frame,
            main_chunks[2],
            StatusRenderData {
                message: &self.status_message,
                kind: self.status_kind,
                snapshots: self.store.history_len(),
                memory_used: self.store.history().memory_usage(),
                memory_limit: self.store.history().memory_limit(),
                is_replaying: self.playback.is_some(),
                is_initialized: self.store.is_initialized(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.input);
                self.submit(&line);
            }
            KeyCode::Esc => {
                if self.playback.take().is_some() {
                    self.set_status(StatusKind::Info, "Replay stopped");
                } else if self.show_help {
                    self.show_help = false;
                } else {
                    self.input.clear();
                }
            }
            KeyCode::Up => {
                self.history_scroll.offset = self.history_scroll.offset.saturating_sub(1);
            }
            KeyCode::Down => {
                self.history_scroll.offset = self.history_scroll.offset.saturating_add(1);
            }
            _ => {}
        }
    }

    /// Handle one submitted line
    pub fn submit(&mut self, line: &str) {
        // A new line always ends a running replay
        self.playback = None;

        if !self.store.is_initialized() {
            if line.trim() == QUIT {
                self.should_quit = true;
                return;
            }
            match parse_initial_size(line) {
                Ok(command) => {
                    if self.execute(command) {
                        self.set_status(StatusKind::Info, "SlotBot initialized!");
                    }
                }
                Err(err) => self.set_status(StatusKind::Error, err.to_string()),
            }
            return;
        }

        match parse_line(line) {
            Ok(Input::Command(command)) => {
                self.execute(command);
            }
            Ok(Input::Help) => {
                self.show_help = !self.show_help;
            }
            Ok(Input::Quit) => {
                self.should_quit = true;
            }
            Err(ParseError::Empty) => {}
            Err(err) => self.set_status(StatusKind::Error, err.to_string()),
        }
    }

    /// Run a command and report its outcome; returns whether it succeeded
    fn execute(&mut self, command: Command) -> bool {
        let result = CommandRouter::new(&mut self.store)
            .execute(command)
            .map(|outcome| match outcome {
                CommandOutcome::Applied => (StatusKind::Info, command.to_string(), None),
                CommandOutcome::Notice(notice) => (StatusKind::Notice, notice.to_string(), None),
                CommandOutcome::Replay(frames) => {
                    let start = frames.start();
                    let frames: Vec<SlotSetView> = frames.collect();
                    let message = format!("Replaying {} states", frames.len());
                    (StatusKind::Info, message, Some(Playback::new(frames, start)))
                }
            });

        match result {
            Ok((kind, message, playback)) => {
                self.set_status(kind, message);
                self.playback = playback;
                true
            }
            Err(err) => {
                self.set_status(StatusKind::Error, err.to_string());
                false
            }
        }
    }

    /// Move a running replay forward once its frame has been shown long enough
    pub fn advance_playback(&mut self) {
        let Some(playback) = self.playback.as_mut() else {
            return;
        };
        if playback.shown_at.elapsed() < self.config.replay_delay {
            return;
        }

        if playback.position + 1 < playback.frames.len() {
            playback.position += 1;
            playback.shown_at = Instant::now();
            debug!(position = playback.position, "replay frame");
        } else {
            self.playback = None;
            self.set_status(StatusKind::Info, "Replay complete");
        }
    }

    fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status_kind = kind;
        self.status_message = message.into();
    }
}
