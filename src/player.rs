//! Players sitting at the shared terminal.

use crate::console::{Console, ConsoleError, Tone, parse_move};
use crate::games::tictactoe::{MoveRequest, Symbol};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A human player: display name, fixed symbol and rounds won so far.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name, as typed at setup.
    name: String,
    /// Mark this player places, fixed for the series.
    symbol: Symbol,
    /// Rounds won in this series.
    score: u32,
}

impl Player {
    /// Creates a player with a score of zero.
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            name: name.into(),
            symbol,
            score: 0,
        }
    }

    /// Credits this player with a round win.
    #[instrument(skip(self), fields(player = %self.name, symbol = %self.symbol))]
    pub fn record_win(&mut self) {
        self.score += 1;
        info!(score = self.score, "Round won");
    }

    /// Output tone for anything belonging to this player.
    pub fn tone(&self) -> Tone {
        Tone::Mark(self.symbol)
    }

    /// Prompts until the player enters a position 1-9 or quits.
    ///
    /// Malformed input is reported and re-prompted without limit. Exhausted
    /// input is treated as a quit.
    #[instrument(skip(self, console), fields(player = %self.name, symbol = %self.symbol))]
    pub fn request_move(&self, console: &mut dyn Console) -> Result<MoveRequest, ConsoleError> {
        loop {
            console.write(self.tone(), &format!("{}'s turn ({}): ", self.name, self.symbol))?;
            console.write(Tone::Prompt, "Enter position (1-9)")?;
            console.write(Tone::Plain, ": ")?;

            let Some(raw) = console.read_line()? else {
                warn!("Input closed while waiting for a move");
                return Ok(MoveRequest::Quit);
            };

            match parse_move(&raw) {
                Ok(request) => {
                    debug!(%request, "Move requested");
                    return Ok(request);
                }
                Err(e) => {
                    debug!(input = %raw, error = ?e, "Rejected move input");
                    console.line(Tone::Error, &e.to_string())?;
                }
            }
        }
    }
}

/// The player with strictly more round wins, or `None` on a tie.
pub fn series_leader(players: &[Player; 2]) -> Option<&Player> {
    let [first, second] = players;
    match first.score.cmp(&second.score) {
        std::cmp::Ordering::Greater => Some(first),
        std::cmp::Ordering::Less => Some(second),
        std::cmp::Ordering::Equal => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_new_player_starts_at_zero() {
        let player = Player::new("Ada", Symbol::X);
        assert_eq!(player.name(), "Ada");
        assert_eq!(*player.symbol(), Symbol::X);
        assert_eq!(*player.score(), 0);
    }

    #[test]
    fn test_request_move_retries_until_valid() {
        let mut console = ScriptedConsole::new(["abc", "15", "4"]);
        let player = Player::new("Ada", Symbol::X);

        let request = player.request_move(&mut console).unwrap();

        assert_eq!(request, MoveRequest::Place(Position::MiddleLeft));
        assert_eq!(console.count("Ada's turn (X): "), 3);
        assert!(console.wrote(Tone::Error, "Invalid input! Please enter a number."));
        assert!(console.wrote(Tone::Error, "Please enter a number between 1-9!"));
        assert_eq!(console.remaining_inputs(), 0);
    }

    #[test]
    fn test_request_move_quit() {
        let mut console = ScriptedConsole::new(["Q"]);
        let player = Player::new("Bo", Symbol::O);
        assert_eq!(player.request_move(&mut console).unwrap(), MoveRequest::Quit);
    }

    #[test]
    fn test_closed_input_quits() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let player = Player::new("Bo", Symbol::O);
        assert_eq!(player.request_move(&mut console).unwrap(), MoveRequest::Quit);
    }

    #[test]
    fn test_series_leader() {
        let mut players = [Player::new("Ada", Symbol::X), Player::new("Bo", Symbol::O)];
        assert!(series_leader(&players).is_none());

        players[1].record_win();
        assert_eq!(series_leader(&players).map(|p| p.name().as_str()), Some("Bo"));

        players[0].record_win();
        players[0].record_win();
        assert_eq!(series_leader(&players).map(|p| p.name().as_str()), Some("Ada"));
    }
}
