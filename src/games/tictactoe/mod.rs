mod action;
mod phases;
mod position;
mod types;

pub mod rules;

pub use action::{MoveError, MoveRequest};
pub use phases::{RoundOutcome, SeriesEnd};
pub use position::Position;
pub use rules::WinLine;
pub use types::{Board, Square, Symbol};
