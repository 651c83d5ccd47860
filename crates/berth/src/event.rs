//! A slim Elm-style runner for a single synchronous screen.
//!
//! The form is event-driven on user input with no background work, so the
//! runner is a plain poll/update/draw loop: raw mode plus the alternate
//! screen buffer on the way in, both restored on the way out.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use thiserror::Error;

/// How long one poll waits before looping again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Errors from the terminal runner.
#[derive(Error, Debug)]
pub enum ProgramError {
    /// Terminal I/O failed during setup, polling or drawing.
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized [`Result`] type for runner operations.
pub type Result<T> = std::result::Result<T, ProgramError>;

/// What the screen wants the runner to do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep polling.
    Continue,
    /// Tear down the terminal and return.
    Quit,
}

/// A message delivered to the screen's update function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A key press (repeats included, releases filtered out).
    Key(KeyEvent),
    /// The terminal was resized to (columns, rows).
    Resize(u16, u16),
}

/// A synchronous update/view screen.
pub trait Screen {
    /// Processes one message and reports whether to keep running.
    fn update(&mut self, msg: Msg) -> Flow;

    /// Renders the whole frame as a string.
    fn view(&self) -> String;
}

/// Runs a [`Screen`] until it quits, restoring the terminal afterwards.
pub struct Program<S: Screen> {
    screen: S,
    alt_screen: bool,
}

impl<S: Screen> Program<S> {
    /// Creates a runner for the given screen.
    pub fn new(screen: S) -> Self {
        Self {
            screen,
            alt_screen: true,
        }
    }

    /// Chooses between the alternate screen buffer and the main one.
    #[must_use]
    pub fn alt_screen(mut self, alt_screen: bool) -> Self {
        self.alt_screen = alt_screen;
        self
    }

    /// Enters raw mode, runs the loop, and hands the final screen back.
    pub fn run(mut self) -> Result<S> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        if self.alt_screen {
            execute!(out, EnterAlternateScreen)?;
        }
        execute!(out, Hide)?;

        let result = event_loop(&mut self.screen, &mut out);

        // Teardown mirrors setup in reverse; failures here are ignored so
        // the loop's own error survives.
        let _ = execute!(out, Show);
        if self.alt_screen {
            let _ = execute!(out, LeaveAlternateScreen);
        }
        let _ = disable_raw_mode();

        result.map(|()| self.screen)
    }
}

fn event_loop<S: Screen>(screen: &mut S, out: &mut impl Write) -> Result<()> {
    draw(screen, out)?;
    loop {
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let flow = match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => screen.update(Msg::Key(key)),
            Event::Resize(width, height) => screen.update(Msg::Resize(width, height)),
            _ => Flow::Continue,
        };
        draw(screen, out)?;
        if flow == Flow::Quit {
            return Ok(());
        }
    }
}

fn draw<S: Screen>(screen: &S, out: &mut impl Write) -> Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    for (row, line) in screen.view().lines().enumerate() {
        let Ok(row) = u16::try_from(row) else { break };
        queue!(out, MoveTo(0, row))?;
        write!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
