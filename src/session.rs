use game_core::{evaluate, winning_line, Board, GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tic_tac_toe_ai::Difficulty;

/// Where the controller is in the turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingPlayerMove,
    AwaitingOpponentMove,
    Terminal,
}

impl Phase {
    /// The mark expected to move next, or [`None`] once the game is over.
    pub fn turn(&self) -> Option<Mark> {
        match self {
            Phase::AwaitingPlayerMove => Some(Mark::Player),
            Phase::AwaitingOpponentMove => Some(Mark::Opponent),
            Phase::Terminal => None,
        }
    }

    pub(crate) fn after(mark: Mark) -> Self {
        match mark {
            Mark::Player => Phase::AwaitingOpponentMove,
            Mark::Opponent => Phase::AwaitingPlayerMove,
        }
    }
}

/// Results across games of the same session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    pub player_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
}

impl ScoreTally {
    /// Counts a finished game. `InProgress` is ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::PlayerWon => self.player_wins += 1,
            GameStatus::OpponentWon => self.opponent_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn games(&self) -> u32 {
        self.player_wins + self.opponent_wins + self.draws
    }
}

/// All mutable game state, owned by [`crate::Controller`].
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) phase: Phase,
    pub(crate) difficulty: Difficulty,
    pub(crate) score: ScoreTally,
}

impl GameSession {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            phase: Phase::AwaitingPlayerMove,
            difficulty,
            score: ScoreTally::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> ScoreTally {
        self.score
    }

    /// Always recomputed from the board.
    pub fn status(&self) -> GameStatus {
        evaluate(&self.board)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            status: self.status(),
            phase: self.phase,
            difficulty: self.difficulty,
            score: self.score,
            winning_line: winning_line(&self.board).map(|(line, _)| line),
        }
    }
}

/// Read-only view handed to the display layer after every command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub status: GameStatus,
    pub phase: Phase,
    pub difficulty: Difficulty,
    pub score: ScoreTally,
    pub winning_line: Option<[usize; 3]>,
}

impl Snapshot {
    pub fn status_line(&self) -> &'static str {
        match (self.status, self.phase) {
            (GameStatus::PlayerWon, _) => "You win!",
            (GameStatus::OpponentWon, _) => "The computer wins.",
            (GameStatus::Draw, _) => "Draw!",
            (GameStatus::InProgress, Phase::AwaitingOpponentMove) => "Computer (O) is thinking...",
            (GameStatus::InProgress, _) => "You are X, your move.",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tally_counts_only_terminal_results() {
        let mut score = ScoreTally::default();
        score.record(GameStatus::PlayerWon);
        score.record(GameStatus::Draw);
        score.record(GameStatus::Draw);
        score.record(GameStatus::InProgress);
        assert_eq!(
            score,
            ScoreTally {
                player_wins: 1,
                opponent_wins: 0,
                draws: 2
            }
        );
        assert_eq!(score.games(), 3);
        score.reset();
        assert_eq!(score, ScoreTally::default());
    }

    #[test]
    fn phase_turns() {
        assert_eq!(Phase::AwaitingPlayerMove.turn(), Some(Mark::Player));
        assert_eq!(Phase::after(Mark::Player), Phase::AwaitingOpponentMove);
        assert_eq!(Phase::after(Mark::Opponent), Phase::AwaitingPlayerMove);
        assert_eq!(Phase::Terminal.turn(), None);
    }

    #[test]
    fn snapshot_reports_winning_line() {
        let mut session = GameSession::new(Difficulty::Hard);
        session.board = "XXX OO. ...".parse().unwrap();
        session.phase = Phase::Terminal;
        let snapshot = session.snapshot();
        assert_eq!(snapshot.status, GameStatus::PlayerWon);
        assert_eq!(snapshot.winning_line, Some([0, 1, 2]));
        assert_eq!(snapshot.status_line(), "You win!");
    }
}
