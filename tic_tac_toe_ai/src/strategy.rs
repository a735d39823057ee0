use game_core::{Board, GameResult};
use rand::Rng;

use crate::blended::Blended;
use crate::minimax::Minimax;
use crate::random::Random;
use crate::Difficulty;

/// Picks a cell for the computer's next mark.
///
/// Implementations only read `board`; any randomness comes from `rng`, which
/// the caller owns so games can be replayed from a seed.
pub trait ChooseMove {
    /// Returns an empty cell index, or [`game_core::GameError::NoMoveAvailable`]
    /// when the board is full.
    fn choose_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> GameResult<usize>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveStrategy {
    Random(Random),
    Blended(Blended),
    Minimax(Minimax),
}

impl From<Difficulty> for MoveStrategy {
    fn from(value: Difficulty) -> Self {
        match value {
            Difficulty::Easy => MoveStrategy::Random(Random),
            Difficulty::Medium => MoveStrategy::Blended(Blended),
            Difficulty::Hard => MoveStrategy::Minimax(Minimax),
        }
    }
}

impl ChooseMove for MoveStrategy {
    fn choose_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> GameResult<usize> {
        match self {
            MoveStrategy::Random(strategy) => strategy.choose_move(board, rng),
            MoveStrategy::Blended(strategy) => strategy.choose_move(board, rng),
            MoveStrategy::Minimax(strategy) => strategy.choose_move(board, rng),
        }
    }
}
