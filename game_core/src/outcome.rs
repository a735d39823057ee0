use serde::{Deserialize, Serialize};

use crate::{Board, BoardCell, Mark};

/// The lines that win the game, checked in this order: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    PlayerWon,
    OpponentWon,
    Draw,
}

impl GameStatus {
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::Player => Self::PlayerWon,
            Mark::Opponent => Self::OpponentWon,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Self::PlayerWon => Some(Mark::Player),
            Self::OpponentWon => Some(Mark::Opponent),
            Self::InProgress | Self::Draw => None,
        }
    }
}

/// Returns the first line in [`WINNING_LINES`] whose three cells hold the same mark.
pub fn winning_line(board: &Board) -> Option<([usize; 3], Mark)> {
    WINNING_LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.map(|index| board.cell(index));
        match (a, b, c) {
            (Some(BoardCell(Some(m1))), Some(BoardCell(Some(m2))), Some(BoardCell(Some(m3))))
                if m1 == m2 && m2 == m3 =>
            {
                Some((line, m1))
            }
            _ => None,
        }
    })
}

/// Derives the [`GameStatus`] from the board contents alone.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((_, mark)) = winning_line(board) {
        return GameStatus::won_by(mark);
    }
    if board.is_full() {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}

#[cfg(test)]
mod test {
    use super::*;

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    #[test]
    fn empty_board_is_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn row_win_for_player() {
        let b = board("XXX OO. ...");
        assert_eq!(evaluate(&b), GameStatus::PlayerWon);
        assert_eq!(winning_line(&b), Some(([0, 1, 2], Mark::Player)));
    }

    #[test]
    fn column_and_diagonal_wins_for_opponent() {
        assert_eq!(evaluate(&board("OX. OX. O.X")), GameStatus::OpponentWon);
        assert_eq!(
            winning_line(&board("XXO .O. OX.")),
            Some(([2, 4, 6], Mark::Opponent))
        );
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let b = board("XOX XOO OXX");
        assert_eq!(evaluate(&b), GameStatus::Draw);
        assert!(evaluate(&b).is_terminal());
        assert_eq!(evaluate(&b).winner(), None);
    }

    #[test]
    fn win_on_last_cell_is_not_a_draw() {
        assert_eq!(evaluate(&board("XOX OXO OXX")), GameStatus::PlayerWon);
    }

    #[test]
    fn lines_are_checked_in_fixed_order() {
        // Not reachable in play, but the first line in order must decide.
        let b = board("XXX ... OOO");
        assert_eq!(winning_line(&b), Some(([0, 1, 2], Mark::Player)));
        assert_eq!(evaluate(&b), GameStatus::PlayerWon);
    }
}
