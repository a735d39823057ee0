use game_core::{evaluate, Board, GameError, GameResult, GameStatus, Mark};
use rand::rngs::StdRng;
use rand::Rng;
use tic_tac_toe_ai::{ChooseMove, Difficulty, MoveStrategy};

use crate::history::{MemoryLog, MoveLog, MoveRecord};
use crate::session::{GameSession, Phase, ScoreTally, Snapshot};

/// Input delivered to [`Controller::handle`] by the front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    PlayerMoveRequested(usize),
    Reset,
    ResetScore,
    SetDifficulty(Difficulty),
}

/// Runs the turn cycle: player move, computer reply, outcome and score keeping.
///
/// Rejected moves return an error and change nothing.
pub struct Controller<R = StdRng> {
    session: GameSession,
    rng: R,
    history: Box<dyn MoveLog>,
}

impl<R: Rng> Controller<R> {
    pub fn new(difficulty: Difficulty, rng: R, history: Box<dyn MoveLog>) -> Self {
        Self {
            session: GameSession::new(difficulty),
            rng,
            history,
        }
    }

    /// Controller with an in-memory history.
    pub fn with_rng(difficulty: Difficulty, rng: R) -> Self {
        Self::new(difficulty, rng, Box::new(MemoryLog::new()))
    }

    /// Continues a game from `board` with the player to move.
    ///
    /// The board must have as many player marks as computer marks and no
    /// finished line.
    pub fn resume(
        board: Board,
        difficulty: Difficulty,
        rng: R,
        history: Box<dyn MoveLog>,
    ) -> GameResult<Self> {
        if evaluate(&board).is_terminal() {
            return Err(GameError::invalid_board("the game is already over"));
        }
        let (player, opponent) = (board.count(Mark::Player), board.count(Mark::Opponent));
        if player != opponent {
            return Err(GameError::invalid_board(format!(
                "player to move needs equal mark counts (X: {player}, O: {opponent})"
            )));
        }
        let mut controller = Self::new(difficulty, rng, history);
        controller.session.board = board;
        Ok(controller)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn handle(&mut self, command: Command) -> GameResult<GameStatus> {
        match command {
            Command::PlayerMoveRequested(index) => return self.player_move(index),
            Command::Reset => self.reset(),
            Command::ResetScore => self.reset_score(),
            Command::SetDifficulty(difficulty) => self.set_difficulty(difficulty),
        }
        Ok(self.status())
    }

    /// Applies the player's mark at `index` and, if the game goes on, lets the
    /// computer answer straight away.
    pub fn player_move(&mut self, index: usize) -> GameResult<GameStatus> {
        let status = self.submit_move(Mark::Player, index)?;
        if self.session.phase == Phase::AwaitingOpponentMove {
            return self.opponent_turn();
        }
        Ok(status)
    }

    /// Applies a single mark without triggering the computer's reply.
    pub fn submit_move(&mut self, mark: Mark, index: usize) -> GameResult<GameStatus> {
        let expected = self.session.phase.turn().ok_or_else(|| {
            tracing::debug!(index, %mark, "move rejected, game is finished");
            GameError::GameIsFinished
        })?;
        if expected != mark {
            tracing::debug!(index, %mark, "move rejected, not this mark's turn");
            return Err(GameError::not_your_turn(expected, mark));
        }
        if let Err(err) = self.session.board.place_mark(index, mark) {
            tracing::debug!(index, %mark, %err, "move rejected");
            return Err(err);
        }
        tracing::debug!(index, %mark, "move applied");
        self.record_move(index, mark);
        Ok(self.advance(mark))
    }

    /// Lets the strategy for the current difficulty place the computer's mark.
    pub fn opponent_turn(&mut self) -> GameResult<GameStatus> {
        match self.session.phase {
            Phase::AwaitingOpponentMove => {}
            Phase::AwaitingPlayerMove => {
                return Err(GameError::not_your_turn(Mark::Player, Mark::Opponent))
            }
            Phase::Terminal => return Err(GameError::GameIsFinished),
        }

        let strategy = MoveStrategy::from(self.session.difficulty);
        match strategy.choose_move(&self.session.board, &mut self.rng) {
            Ok(index) => self.submit_move(Mark::Opponent, index),
            Err(GameError::NoMoveAvailable) => {
                tracing::warn!(board = %self.session.board, "no move for the computer, ending as a draw");
                self.finish(GameStatus::Draw);
                Ok(GameStatus::Draw)
            }
            Err(err) => Err(err),
        }
    }

    /// Starts a new game. The score is kept.
    pub fn reset(&mut self) {
        self.session.board.clear();
        self.session.phase = Phase::AwaitingPlayerMove;
        tracing::debug!("game reset");
    }

    pub fn reset_score(&mut self) {
        self.session.score.reset();
        self.reset();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        tracing::info!(%difficulty, "difficulty changed");
        self.session.difficulty = difficulty;
        self.reset();
    }

    pub fn clear_history(&mut self) {
        if let Err(err) = self.history.clear() {
            tracing::warn!(%err, "failed to clear move history");
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn board(&self) -> &Board {
        self.session.board()
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn status(&self) -> GameStatus {
        self.session.status()
    }

    pub fn score(&self) -> ScoreTally {
        self.session.score()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.session.difficulty()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    pub fn history(&self) -> &[MoveRecord] {
        self.history.records()
    }

    fn advance(&mut self, moved: Mark) -> GameStatus {
        let status = self.session.status();
        if status.is_terminal() {
            self.finish(status);
        } else {
            self.session.phase = Phase::after(moved);
        }
        status
    }

    fn finish(&mut self, status: GameStatus) {
        self.session.phase = Phase::Terminal;
        self.session.score.record(status);
        tracing::info!(?status, score = ?self.session.score, "game finished");
    }

    fn record_move(&mut self, index: usize, mark: Mark) {
        if let Err(err) = self.history.append(MoveRecord::new(index, mark)) {
            tracing::warn!(%err, "failed to save move history");
        }
    }
}
