//! Console collaborator: the only way the game talks to the players.
//!
//! The series controller never deals in colors or escape codes. It tags each
//! piece of text with a [`Tone`] and leaves styling to the [`Console`]
//! implementation.

mod input;
mod scripted;
mod terminal;
mod view;

pub use input::{InputError, parse_move, parse_name, parse_yes_no};
pub use scripted::ScriptedConsole;
pub use terminal::{TerminalConsole, TerminalGuard};
pub use view::{render_board, render_final_scores, render_header};

use crate::games::tictactoe::Symbol;
use derive_more::{Display, Error};
use std::time::Duration;
use tracing::instrument;

/// Semantic category of a piece of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Unstyled text.
    Plain,
    /// Neutral information (scores, legend).
    Info,
    /// Text asking the player for input.
    Prompt,
    /// Rejected input or an illegal move.
    Error,
    /// Section banners and frames.
    Banner,
    /// A round or series winner announcement.
    Winner,
    /// A tied round or series.
    Tie,
    /// A mark on the winning line.
    Highlight,
    /// Anything belonging to the player holding this symbol.
    Mark(Symbol),
    /// De-emphasised text such as empty-cell numbers.
    Muted,
}

/// Blocking, line-oriented console.
pub trait Console {
    /// Clears the visible screen.
    fn clear(&mut self) -> Result<(), ConsoleError>;

    /// Writes `text` without a trailing newline.
    fn write(&mut self, tone: Tone, text: &str) -> Result<(), ConsoleError>;

    /// Reads one line, without its line terminator.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError>;

    /// Holds the current screen for `duration` so a message can be read.
    fn pause(&mut self, duration: Duration) -> Result<(), ConsoleError>;

    /// Writes `text` followed by a newline.
    fn line(&mut self, tone: Tone, text: &str) -> Result<(), ConsoleError> {
        self.write(tone, text)?;
        self.write(Tone::Plain, "\n")
    }
}

/// Console I/O error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", message, file, line)]
pub struct ConsoleError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}
