//! What a player asks for on their turn, and why the board can refuse it.

use super::Position;
use serde::{Deserialize, Serialize};

/// A validated request from the player whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRequest {
    /// Occupy a position.
    Place(Position),
    /// Abandon the round and end the series.
    Quit,
}

impl std::fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRequest::Place(pos) => write!(f, "place at {}", pos),
            MoveRequest::Quit => write!(f, "quit"),
        }
    }
}

/// Error that can occur when applying a move to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Position is not in 1-9.
    #[display("Position {} is outside 1-9", _0)]
    OutOfRange(u8),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}
