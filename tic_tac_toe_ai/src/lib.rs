//! Computer opponents for tic-tac-toe: uniform random, a random/minimax blend
//! and full-depth minimax, selected by [`Difficulty`].

pub mod blended;
pub mod minimax;
pub mod random;

mod difficulty;
mod strategy;

pub use blended::{Blended, MINIMAX_PROBABILITY};
pub use difficulty::{Difficulty, ParseDifficultyError};
pub use minimax::{Minimax, MoveScores, Score, WIN_SCORE};
pub use random::Random;
pub use strategy::{ChooseMove, MoveStrategy};
