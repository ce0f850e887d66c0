//! Series orchestration: rounds, turns and the running score.

use crate::config::SeriesConfig;
use crate::console::{
    Console, ConsoleError, Tone, parse_name, parse_yes_no, render_board, render_final_scores,
    render_header,
};
use crate::games::tictactoe::{
    Board, MoveRequest, RoundOutcome, SeriesEnd, Symbol, WinLine, rules,
};
use crate::player::{Player, series_leader};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// One finished round: who opened it and how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number, starting at 1.
    round: u32,
    /// Symbol of the player who moved first.
    starter: Symbol,
    /// How the round ended.
    outcome: RoundOutcome,
}

/// Summary handed back once the series stops.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SeriesReport {
    /// Both players with their final scores, X first.
    players: [Player; 2],
    /// Every round played, including an abandoned last one.
    rounds: Vec<RoundRecord>,
    /// Why the series stopped.
    ending: SeriesEnd,
}

impl SeriesReport {
    /// The player with the most round wins, or `None` on a tie.
    pub fn leader(&self) -> Option<&Player> {
        series_leader(&self.players)
    }

    /// Score of the player holding `symbol`.
    pub fn score(&self, symbol: Symbol) -> u32 {
        self.players
            .iter()
            .find(|p| *p.symbol() == symbol)
            .map(|p| *p.score())
            .unwrap_or_default()
    }
}

enum Turn {
    Continue,
    Finished(RoundOutcome),
}

/// A series of rounds between two players at one console.
pub struct Series<'c> {
    console: &'c mut dyn Console,
    config: SeriesConfig,
    board: Board,
    players: [Player; 2],
    /// Index into `players` of whoever moves next.
    current: usize,
    /// Index into `players` of whoever opens the current round.
    starter: usize,
    round: u32,
    highlight: Option<WinLine>,
    rounds: Vec<RoundRecord>,
}

impl<'c> Series<'c> {
    /// Creates a series with known names. X opens the first round.
    #[instrument(skip(console, config, x_name, o_name))]
    pub fn new(
        console: &'c mut dyn Console,
        config: SeriesConfig,
        x_name: impl Into<String>,
        o_name: impl Into<String>,
    ) -> Self {
        let players = [
            Player::new(x_name, Symbol::X),
            Player::new(o_name, Symbol::O),
        ];
        info!(x = %players[0].name(), o = %players[1].name(), "Series created");
        Self {
            console,
            config,
            board: Board::new(),
            players,
            current: 0,
            starter: 0,
            round: 1,
            highlight: None,
            rounds: Vec::new(),
        }
    }

    /// Prompts for both names, then creates the series.
    ///
    /// Returns `Ok(None)` if input closes before both names are given.
    #[instrument(skip(console, config))]
    pub fn setup(
        console: &'c mut dyn Console,
        config: SeriesConfig,
    ) -> Result<Option<Self>, ConsoleError> {
        console.line(Tone::Prompt, "\nPLAYER SETUP\n")?;
        let Some(x_name) = prompt_name(console, "Enter Player 1 name (X): ", Symbol::X)? else {
            return Ok(None);
        };
        let Some(o_name) = prompt_name(console, "Enter Player 2 name (O): ", Symbol::O)? else {
            return Ok(None);
        };
        Ok(Some(Self::new(console, config, x_name, o_name)))
    }

    /// Both players, X first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The board as it stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current round number, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The player who moves next.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Plays rounds until the players decline a rematch or someone quits.
    #[instrument(skip(self))]
    pub fn play(&mut self) -> Result<SeriesReport, ConsoleError> {
        let ending = loop {
            let outcome = self.play_round()?;
            if outcome.is_abandoned() {
                info!(round = self.round, "Series abandoned");
                break SeriesEnd::Quit;
            }

            match self.ask_play_again()? {
                Some(true) => self.start_next_round(),
                Some(false) => break SeriesEnd::Declined,
                None => break SeriesEnd::Quit,
            }
        };

        render_final_scores(self.console, &self.players)?;
        info!(
            ?ending,
            rounds = self.rounds.len(),
            x = self.players[0].score(),
            o = self.players[1].score(),
            "Series finished"
        );

        Ok(SeriesReport {
            players: self.players.clone(),
            rounds: self.rounds.clone(),
            ending,
        })
    }

    /// Plays one round from an empty board and records its outcome.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn play_round(&mut self) -> Result<RoundOutcome, ConsoleError> {
        self.board.reset();
        self.highlight = None;
        self.current = self.starter;
        let starter = *self.players[self.starter].symbol();
        info!(%starter, "Round started");

        let outcome = loop {
            if let Turn::Finished(outcome) = self.play_turn()? {
                break outcome;
            }
        };

        info!(%outcome, "Round finished");
        self.rounds.push(RoundRecord {
            round: self.round,
            starter,
            outcome,
        });
        Ok(outcome)
    }

    fn play_turn(&mut self) -> Result<Turn, ConsoleError> {
        self.redraw()?;

        let player = &self.players[self.current];
        let symbol = *player.symbol();
        let pos = match player.request_move(self.console)? {
            MoveRequest::Quit => {
                info!(player = %player.name(), "Player quit");
                return Ok(Turn::Finished(RoundOutcome::Abandoned));
            }
            MoveRequest::Place(pos) => pos,
        };

        match self.board.apply_move(pos.number(), symbol) {
            Ok(_) => debug!(%pos, %symbol, board = %self.board, "Move applied"),
            Err(e) => {
                warn!(error = %e, "Move rejected, same player retries");
                self.console
                    .line(Tone::Error, "\nThat position is already taken or invalid!")?;
                self.console.pause(self.config.conflict_pause())?;
                return Ok(Turn::Continue);
            }
        }

        if let Some(line) = self.board.winning_line(symbol) {
            self.highlight = Some(line);
            self.players[self.current].record_win();
            self.redraw()?;
            let winner = &self.players[self.current];
            self.console.line(
                Tone::Winner,
                &format!("\nCONGRATULATIONS {}! YOU WON!", winner.name()),
            )?;
            return Ok(Turn::Finished(RoundOutcome::Won(symbol)));
        }

        if self.board.is_full() {
            debug_assert!(rules::is_draw(&self.board));
            self.redraw()?;
            self.console.line(Tone::Tie, "\nIT'S A TIE!")?;
            return Ok(Turn::Finished(RoundOutcome::Drawn));
        }

        self.current = 1 - self.current;
        Ok(Turn::Continue)
    }

    fn redraw(&mut self) -> Result<(), ConsoleError> {
        self.console.clear()?;
        render_header(self.console, self.round, &self.players)?;
        render_board(self.console, &self.board, self.highlight)
    }

    /// `Some(answer)`, or `None` if input closed.
    fn ask_play_again(&mut self) -> Result<Option<bool>, ConsoleError> {
        self.console.line(Tone::Plain, "\nGame Over!")?;
        loop {
            self.console.write(Tone::Info, "Play again? (y/n): ")?;
            let Some(raw) = self.console.read_line()? else {
                warn!("Input closed at replay prompt");
                return Ok(None);
            };
            match parse_yes_no(&raw) {
                Ok(answer) => {
                    debug!(answer, "Replay answered");
                    return Ok(Some(answer));
                }
                Err(e) => self.console.line(Tone::Error, &e.to_string())?,
            }
        }
    }

    fn start_next_round(&mut self) {
        self.round += 1;
        self.starter = 1 - self.starter;
        debug!(
            round = self.round,
            starter = %self.players[self.starter].symbol(),
            "Next round"
        );
    }
}

fn prompt_name(
    console: &mut dyn Console,
    prompt: &str,
    symbol: Symbol,
) -> Result<Option<String>, ConsoleError> {
    loop {
        console.write(Tone::Mark(symbol), prompt)?;
        let Some(raw) = console.read_line()? else {
            warn!(%symbol, "Input closed during player setup");
            return Ok(None);
        };
        match parse_name(&raw) {
            Ok(name) => return Ok(Some(name)),
            Err(e) => console.line(Tone::Error, &e.to_string())?,
        }
    }
}
