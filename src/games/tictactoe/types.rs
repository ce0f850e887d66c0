//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use super::rules::{self, WinLine};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Mark a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Symbol {
    /// Player X (goes first in the opening round).
    #[display("X")]
    X,
    /// Player O.
    #[display("O")]
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a symbol.
    Occupied(Symbol),
}

/// 3x3 tic-tac-toe board.
///
/// Once a square is occupied it stays occupied until [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
        debug!("Board reset");
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Positions that can still be played.
    pub fn open_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// True iff `position` is in `1..=9` and that square is empty.
    pub fn is_valid_move(&self, position: u8) -> bool {
        Position::from_number(position).is_some_and(|pos| self.is_empty(pos))
    }

    /// Places `symbol` at the 1-indexed `position`.
    ///
    /// The board is left untouched on error.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if `position` is not in `1..=9`.
    /// - [`MoveError::SquareOccupied`] if the square already holds a mark.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, position: u8, symbol: Symbol) -> Result<Position, MoveError> {
        let pos = Position::from_number(position).ok_or(MoveError::OutOfRange(position))?;
        self.place(pos, symbol)?;
        Ok(pos)
    }

    /// Places `symbol` at `pos` if the square is empty.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the square already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, symbol: Symbol) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            debug!(?pos, "Rejected move onto occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(symbol);
        Ok(())
    }

    /// True iff no square is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// True iff `symbol` holds a complete row, column or diagonal.
    pub fn check_winner(&self, symbol: Symbol) -> bool {
        rules::check_winner(self, symbol)
    }

    /// The first line (rows, then columns, then diagonals) held by `symbol`.
    pub fn winning_line(&self, symbol: Symbol) -> Option<WinLine> {
        rules::winning_line(self, symbol)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, square) in self.squares.iter().enumerate() {
            match square {
                Square::Empty => write!(f, "{}", idx + 1)?,
                Square::Occupied(symbol) => write!(f, "{}", symbol)?,
            }
            match idx {
                2 | 5 => f.write_str("/")?,
                8 => {}
                _ => f.write_str("|")?,
            }
        }
        Ok(())
    }
}
