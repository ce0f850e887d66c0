//! Parsing of raw console lines.
//!
//! These functions never touch the console, so the retry loops in the
//! player and series code stay thin.

use crate::games::tictactoe::{MoveRequest, Position};
use tracing::instrument;

/// Why a line of input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Move input that is not a number.
    #[display("Invalid input! Please enter a number.")]
    NotANumber(String),

    /// Move input that is a number, but not one of 1-9.
    #[display("Please enter a number between 1-9!")]
    OutOfRange(String),

    /// Anything other than y/n at the replay prompt.
    #[display("Invalid choice! Please enter 'y' or 'n'.")]
    UnrecognizedAnswer(String),

    /// A blank player name.
    #[display("Name cannot be empty!")]
    EmptyName,
}

impl std::error::Error for InputError {}

/// Parses a move prompt answer.
///
/// `q`/`Q` quits; a single digit 1-9 places a mark. Surrounding whitespace
/// is ignored.
///
/// # Errors
///
/// [`InputError::NotANumber`] for non-numeric input and
/// [`InputError::OutOfRange`] for any other number, signed ones included.
#[instrument(level = "debug")]
pub fn parse_move(raw: &str) -> Result<MoveRequest, InputError> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("q") {
        return Ok(MoveRequest::Quit);
    }

    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(trimmed.to_string()));
    }

    trimmed
        .parse::<u8>()
        .ok()
        .filter(|_| trimmed.len() == 1)
        .and_then(Position::from_number)
        .map(MoveRequest::Place)
        .ok_or_else(|| InputError::OutOfRange(trimmed.to_string()))
}

/// Parses a play-again answer: `y`/`Y` is yes, `n`/`N` is no.
///
/// # Errors
///
/// [`InputError::UnrecognizedAnswer`] for anything else.
#[instrument(level = "debug")]
pub fn parse_yes_no(raw: &str) -> Result<bool, InputError> {
    match raw.trim() {
        "y" | "Y" => Ok(true),
        "n" | "N" => Ok(false),
        other => Err(InputError::UnrecognizedAnswer(other.to_string())),
    }
}

/// Accepts any name with at least one visible character, verbatim.
///
/// # Errors
///
/// [`InputError::EmptyName`] for blank input.
pub fn parse_name(raw: &str) -> Result<String, InputError> {
    if raw.trim().is_empty() {
        Err(InputError::EmptyName)
    } else {
        Ok(raw.to_string())
    }
}
