//! Stateless rendering of the header, board and final scores.

use super::{Console, ConsoleError, Tone};
use crate::games::tictactoe::{Board, Position, Square, WinLine};
use crate::player::{Player, series_leader};
use strum::IntoEnumIterator;

const RULE_WIDTH: usize = 40;

/// Renders the round banner with both players' running scores.
pub fn render_header(
    console: &mut dyn Console,
    round: u32,
    players: &[Player; 2],
) -> Result<(), ConsoleError> {
    let rule = "=".repeat(RULE_WIDTH);
    console.line(Tone::Banner, &rule)?;
    console.line(Tone::Banner, &format!("  TIC-TAC-TOE | GAME {}", round))?;
    console.line(Tone::Banner, &rule)?;

    let [first, second] = players;
    console.write(
        Tone::Mark(*first.symbol()),
        &format!("  {}: {} ", first.name(), first.score()),
    )?;
    console.write(Tone::Plain, "vs ")?;
    console.line(
        Tone::Mark(*second.symbol()),
        &format!("{}: {}", second.name(), second.score()),
    )?;

    console.line(Tone::Banner, &rule)
}

/// Renders the position legend and the current board.
///
/// Squares on `highlight` are drawn with [`Tone::Highlight`].
pub fn render_board(
    console: &mut dyn Console,
    board: &Board,
    highlight: Option<WinLine>,
) -> Result<(), ConsoleError> {
    console.line(Tone::Prompt, "\n   TIC-TAC-TOE   \n")?;
    for row in 0..3u8 {
        let n = row * 3;
        console.line(Tone::Info, &format!("    {} | {} | {} ", n + 1, n + 2, n + 3))?;
        if row < 2 {
            console.line(Tone::Muted, "   -----------")?;
        }
    }

    console.line(Tone::Plain, "")?;
    console.line(Tone::Plain, "  Current Board:")?;
    for pos in Position::iter() {
        let col = pos.to_index() % 3;
        if col == 0 {
            console.write(Tone::Plain, "  ")?;
        }

        match board.get(pos) {
            Square::Empty => console.write(Tone::Plain, "   ")?,
            Square::Occupied(symbol) => {
                let tone = if highlight.is_some_and(|line| line.contains(pos)) {
                    Tone::Highlight
                } else {
                    Tone::Mark(symbol)
                };
                console.write(tone, &format!(" {} ", symbol))?;
            }
        }

        if col < 2 {
            console.write(Tone::Plain, "|")?;
        } else {
            console.line(Tone::Plain, "")?;
            if pos != Position::BottomRight {
                console.line(Tone::Plain, "  ----------")?;
            }
        }
    }
    console.line(Tone::Plain, "")
}

/// Renders the final standings and the series result.
pub fn render_final_scores(
    console: &mut dyn Console,
    players: &[Player; 2],
) -> Result<(), ConsoleError> {
    console.line(Tone::Banner, "\nFINAL SCORES:")?;
    for player in players {
        console.line(Tone::Info, &format!("{}: {}", player.name(), player.score()))?;
    }

    match series_leader(players) {
        Some(leader) => console.line(
            Tone::Winner,
            &format!("\n{} WINS THE SERIES!", leader.name()),
        ),
        None => console.line(Tone::Tie, "\nTHE SERIES ENDED IN A TIE!"),
    }
}
