use game_core::{Board, GameError, GameResult};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::strategy::ChooseMove;

/// Picks any empty cell with equal probability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Random;

impl ChooseMove for Random {
    fn choose_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> GameResult<usize> {
        board
            .empty_cells()
            .choose(rng)
            .copied()
            .ok_or(GameError::NoMoveAvailable)
    }
}
