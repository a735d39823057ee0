use game_core::{Board, GameResult};
use rand::Rng;

use crate::minimax::Minimax;
use crate::random::Random;
use crate::strategy::ChooseMove;

/// Chance that a blended move comes from [`Minimax`] rather than [`Random`].
pub const MINIMAX_PROBABILITY: f64 = 0.5;

/// Flips a coin on every call: heads plays the [`Minimax`] move, tails a [`Random`] one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Blended;

impl ChooseMove for Blended {
    fn choose_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> GameResult<usize> {
        if rng.gen_bool(MINIMAX_PROBABILITY) {
            tracing::trace!("blended move delegated to minimax");
            Minimax.choose_move(board, rng)
        } else {
            tracing::trace!("blended move delegated to random");
            Random.choose_move(board, rng)
        }
    }
}
