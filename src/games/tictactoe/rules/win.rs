//! Win detection logic for tic-tac-toe.

use super::super::{Board, Position, Square, Symbol};
use tracing::instrument;

/// Three positions that win when held by one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Every winning line, in the order they are checked.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinLine([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    WinLine([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    WinLine([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    WinLine([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    WinLine([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    WinLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first line fully held by `symbol`.
///
/// A single move can complete two lines at once (e.g. a corner finishing
/// a row and a diagonal); the earlier line in [`WIN_LINES`] is reported.
#[instrument(level = "debug", skip(board), ret)]
pub fn winning_line(board: &Board, symbol: Symbol) -> Option<WinLine> {
    let mark = Square::Occupied(symbol);
    WIN_LINES
        .into_iter()
        .find(|line| line.0.iter().all(|pos| board.get(*pos) == mark))
}

/// Checks whether `symbol` has three in a row.
pub fn check_winner(board: &Board, symbol: Symbol) -> bool {
    winning_line(board, symbol).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(symbol: Symbol, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.place(*pos, symbol).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!check_winner(&board, Symbol::X));
        assert!(!check_winner(&board, Symbol::O));
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_LINES {
            for symbol in [Symbol::X, Symbol::O] {
                let board = board_with(symbol, &line.positions());
                assert_eq!(winning_line(&board, symbol), Some(line));
                assert!(!check_winner(&board, symbol.opponent()));
            }
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(
            Symbol::O,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
        );
        assert!(check_winner(&board, Symbol::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Symbol::X, &[Position::TopLeft, Position::TopCenter]);
        assert!(!check_winner(&board, Symbol::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Symbol::X, &[Position::TopLeft, Position::TopCenter]);
        board.place(Position::TopRight, Symbol::O).unwrap();
        assert!(!check_winner(&board, Symbol::X));
        assert!(!check_winner(&board, Symbol::O));
    }

    #[test]
    fn test_double_line_reports_row_first() {
        // Top row and main diagonal both complete
        let board = board_with(
            Symbol::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::Center,
                Position::BottomRight,
            ],
        );
        assert_eq!(winning_line(&board, Symbol::X), Some(WIN_LINES[0]));
    }
}
