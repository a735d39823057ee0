//! Human-versus-computer tic-tac-toe: the game controller, its session state,
//! move history and the terminal front end.

pub mod cli;
pub mod history;
pub mod settings;

mod controller;
mod session;

pub use controller::{Command, Controller};
pub use session::{GameSession, Phase, ScoreTally, Snapshot};
