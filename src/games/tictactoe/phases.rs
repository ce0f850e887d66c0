//! How a round and a series can end.

use super::Symbol;
use serde::{Deserialize, Serialize};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// A symbol completed a line.
    Won(Symbol),
    /// The board filled with no line completed.
    Drawn,
    /// A player quit mid-round.
    Abandoned,
}

impl RoundOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            RoundOutcome::Won(symbol) => Some(*symbol),
            RoundOutcome::Drawn | RoundOutcome::Abandoned => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, RoundOutcome::Drawn)
    }

    /// Returns true if a player quit during the round.
    pub fn is_abandoned(&self) -> bool {
        matches!(self, RoundOutcome::Abandoned)
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::Won(symbol) => write!(f, "{} wins", symbol),
            RoundOutcome::Drawn => write!(f, "Draw"),
            RoundOutcome::Abandoned => write!(f, "Abandoned"),
        }
    }
}

/// Why the series stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesEnd {
    /// Players answered "no" to playing again.
    Declined,
    /// A player quit during a move, or input ran out.
    Quit,
}
