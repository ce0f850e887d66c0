//! Tests for board rules through the public API.

use hotseat_tictactoe::{Board, MoveError, Position, Square, Symbol, rules::WIN_LINES};

fn play(board: &mut Board, moves: &[(u8, Symbol)]) {
    for (number, symbol) in moves {
        board.apply_move(*number, *symbol).expect("legal move");
    }
}

#[test]
fn test_fresh_board_is_empty_and_open() {
    let board = Board::new();
    assert!(board.squares().iter().all(|s| *s == Square::Empty));
    assert!(!board.is_full());
    assert!(!board.check_winner(Symbol::X));
    assert!(!board.check_winner(Symbol::O));
    assert_eq!(board.open_positions(), Position::ALL.to_vec());
}

#[test]
fn test_occupied_square_rejected_for_either_symbol() {
    let mut board = Board::new();
    board.apply_move(7, Symbol::O).unwrap();

    for symbol in [Symbol::X, Symbol::O] {
        assert_eq!(
            board.apply_move(7, symbol),
            Err(MoveError::SquareOccupied(Position::BottomLeft))
        );
    }
    assert_eq!(board.get(Position::BottomLeft), Square::Occupied(Symbol::O));
}

#[test]
fn test_win_lines_are_rows_columns_diagonals() {
    let numbers: Vec<[u8; 3]> = WIN_LINES
        .iter()
        .map(|line| line.positions().map(Position::number))
        .collect();
    assert_eq!(
        numbers,
        vec![
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
            [1, 4, 7],
            [2, 5, 8],
            [3, 6, 9],
            [1, 5, 9],
            [3, 5, 7],
        ]
    );
}

#[test]
fn test_winner_only_on_complete_lines() {
    // Every pair of cells is short of a line
    for a in 1..=9u8 {
        for b in (a + 1)..=9 {
            let mut board = Board::new();
            play(&mut board, &[(a, Symbol::X), (b, Symbol::X)]);
            assert!(!board.check_winner(Symbol::X), "{a},{b} is not a line");
        }
    }
}

#[test]
fn test_scenario_a_intermediate_position() {
    let mut board = Board::new();
    play(
        &mut board,
        &[
            (5, Symbol::X),
            (1, Symbol::O),
            (9, Symbol::X),
            (2, Symbol::O),
            (3, Symbol::X),
        ],
    );

    assert!(!board.is_full());
    assert!(!board.check_winner(Symbol::X));
    assert!(!board.check_winner(Symbol::O));
    assert_eq!(board.open_positions().len(), 4);
}

#[test]
fn test_scenario_b_main_diagonal() {
    let mut board = Board::new();
    play(
        &mut board,
        &[
            (1, Symbol::X),
            (2, Symbol::O),
            (5, Symbol::X),
            (3, Symbol::O),
            (9, Symbol::X),
        ],
    );

    assert!(board.check_winner(Symbol::X));
    assert!(!board.check_winner(Symbol::O));
    let line = board.winning_line(Symbol::X).unwrap();
    assert_eq!(
        line.positions(),
        [Position::TopLeft, Position::Center, Position::BottomRight]
    );
}

#[test]
fn test_scenario_c_full_board_draw() {
    let mut board = Board::new();
    play(
        &mut board,
        &[
            (1, Symbol::X),
            (3, Symbol::O),
            (2, Symbol::X),
            (5, Symbol::O),
            (7, Symbol::X),
            (4, Symbol::O),
            (6, Symbol::X),
            (9, Symbol::O),
            (8, Symbol::X),
        ],
    );

    assert!(board.is_full());
    assert!(!board.check_winner(Symbol::X));
    assert!(!board.check_winner(Symbol::O));
    assert!(hotseat_tictactoe::rules::is_draw(&board));
    for number in 1..=9u8 {
        assert!(!board.is_valid_move(number));
    }
}

#[test]
fn test_same_moves_same_result() {
    let moves = [
        (3, Symbol::X),
        (1, Symbol::O),
        (5, Symbol::X),
        (9, Symbol::O),
        (7, Symbol::X),
    ];
    let mut first = Board::new();
    let mut second = Board::new();
    play(&mut first, &moves);
    play(&mut second, &moves);

    assert_eq!(first, second);
    assert_eq!(first.winning_line(Symbol::X), second.winning_line(Symbol::X));
    assert!(first.check_winner(Symbol::X));
}
