//! Hot-seat tic-tac-toe: two players, one terminal, a running score.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, move validation, win/draw detection
//! - **Player**: name, symbol and score; asks the console for a move
//! - **Series**: rounds, turn order, scoring and the play-again loop
//! - **Console**: the presentation collaborator (terminal or scripted)
//!
//! # Example
//!
//! ```
//! use hotseat_tictactoe::{ScriptedConsole, Series, SeriesConfig, SeriesEnd, Symbol};
//!
//! // X takes the main diagonal, then the players stop.
//! let mut console = ScriptedConsole::new(["1", "2", "5", "3", "9", "n"]);
//! let report = Series::new(&mut console, SeriesConfig::default(), "Ada", "Bo")
//!     .play()
//!     .unwrap();
//!
//! assert_eq!(report.score(Symbol::X), 1);
//! assert_eq!(*report.ending(), SeriesEnd::Declined);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;
mod player;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, SeriesConfig};

// Crate-level exports - Console collaborator
pub use console::{
    Console, ConsoleError, InputError, ScriptedConsole, TerminalConsole, TerminalGuard, Tone,
    parse_move, parse_name, parse_yes_no,
};

// Crate-level exports - Players and series
pub use player::{Player, series_leader};
pub use session::{RoundRecord, Series, SeriesReport};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, MoveError, MoveRequest, Position, RoundOutcome, SeriesEnd, Square, Symbol, WinLine,
    rules,
};
