//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square, Symbol};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board where neither symbol holds a line.
#[instrument(level = "debug", skip(board), ret)]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !check_winner(board, Symbol::X) && !check_winner(board, Symbol::O)
}
