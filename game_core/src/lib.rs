//! Board model and outcome rules for a human-versus-computer game of tic-tac-toe.

pub mod board;
pub mod grid;
pub mod outcome;

mod error;
mod mark;

pub use board::{Board, EmptyCells, TrialMove, BOARD_SIZE};
pub use error::GameError;
pub use mark::{BoardCell, Mark};
pub use outcome::{evaluate, winning_line, GameStatus, WINNING_LINES};

pub type GameResult<T> = Result<T, GameError>;
