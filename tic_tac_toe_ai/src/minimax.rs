//! Exhaustive minimax search for the computer's mark.
//!
//! Scores are from the computer's point of view: a win found `depth` plies
//! into the search is worth `WIN_SCORE - depth`, a loss `depth - WIN_SCORE`,
//! and a draw zero. Quick wins therefore outrank slow ones and slow losses
//! outrank quick ones. There is no pruning, the whole tree is at most 9! leaves.

use game_core::{evaluate, Board, GameError, GameResult, GameStatus, Mark, BOARD_SIZE};
use rand::Rng;
use smallvec::SmallVec;

use crate::strategy::ChooseMove;

pub type Score = i32;

/// Base score of a won position before the depth penalty.
pub const WIN_SCORE: Score = 10;

/// Scores of every empty cell, in ascending cell order.
pub type MoveScores = SmallVec<[(usize, Score); BOARD_SIZE]>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Minimax;

impl Minimax {
    /// Scores each empty cell as a move for [`Mark::Opponent`].
    ///
    /// The search runs on a scratch copy, `board` is never modified.
    pub fn score_moves(&self, board: &Board) -> GameResult<MoveScores> {
        let mut scratch = board.clone();
        let mut scores = MoveScores::new();
        for index in board.empty_cells() {
            let mut trial = scratch.trial(index, Mark::Opponent)?;
            scores.push((index, search(&mut trial, 0, Mark::Player)?));
        }
        Ok(scores)
    }

    /// Returns the lowest cell index with the highest score.
    pub fn best_move(&self, board: &Board) -> GameResult<usize> {
        let mut best: Option<(usize, Score)> = None;
        for (index, score) in self.score_moves(board)? {
            // strictly greater only, so ties keep the lower index
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }
        let (index, score) = best.ok_or(GameError::NoMoveAvailable)?;
        tracing::trace!(index, score, "minimax picked move");
        Ok(index)
    }
}

impl ChooseMove for Minimax {
    fn choose_move<R: Rng + ?Sized>(&self, board: &Board, _rng: &mut R) -> GameResult<usize> {
        self.best_move(board)
    }
}

fn terminal_score(status: GameStatus, depth: Score) -> Option<Score> {
    match status {
        GameStatus::OpponentWon => Some(WIN_SCORE - depth),
        GameStatus::PlayerWon => Some(depth - WIN_SCORE),
        GameStatus::Draw => Some(0),
        GameStatus::InProgress => None,
    }
}

/// Value of `board` with `to_move` about to play. The opponent maximizes, the player minimizes.
fn search(board: &mut Board, depth: Score, to_move: Mark) -> GameResult<Score> {
    if let Some(score) = terminal_score(evaluate(board), depth) {
        return Ok(score);
    }

    let maximizing = to_move == Mark::Opponent;
    let mut best = if maximizing { Score::MIN } else { Score::MAX };
    for index in board.empty_cells() {
        let mut trial = board.trial(index, to_move)?;
        let score = search(&mut trial, depth + 1, to_move.other())?;
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    Ok(best)
}
