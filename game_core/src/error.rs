use crate::Mark;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("cell {index} is out of range (expected: 0-{max_expected})")]
    IndexOutOfRange { index: usize, max_expected: usize },
    #[error("cell {index} is occupied")]
    CellIsOccupied { index: usize },
    #[error("other player's turn (expected: {expected}, found: {found})")]
    NotYourTurn { expected: Mark, found: Mark },
    #[error("can't make turn on a finished game")]
    GameIsFinished,
    #[error("no move available, the board is full")]
    NoMoveAvailable,
    #[error("invalid board: {reason}")]
    InvalidBoard { reason: String },
}

impl GameError {
    pub fn index_out_of_range(index: usize) -> Self {
        Self::IndexOutOfRange {
            index,
            max_expected: crate::BOARD_SIZE - 1,
        }
    }

    pub fn cell_is_occupied(index: usize) -> Self {
        Self::CellIsOccupied { index }
    }

    pub fn not_your_turn(expected: Mark, found: Mark) -> Self {
        Self::NotYourTurn { expected, found }
    }

    pub fn invalid_board(reason: impl Into<String>) -> Self {
        Self::InvalidBoard {
            reason: reason.into(),
        }
    }

    /// Returns `true` for the errors that reject a single move and leave the game untouched.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. }
                | Self::CellIsOccupied { .. }
                | Self::NotYourTurn { .. }
                | Self::GameIsFinished
        )
    }
}
