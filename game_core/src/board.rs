use std::fmt::{Display, Formatter};
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use generic_array::typenum::U3;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::grid::Grid;
use crate::{BoardCell, GameError, GameResult, Mark};

pub const BOARD_SIZE: usize = 9;

/// Ascending list of empty cell indices.
pub type EmptyCells = SmallVec<[usize; BOARD_SIZE]>;

type Cells = Grid<BoardCell, U3, U3>;

/// 3x3 tic-tac-toe board addressed by a row-major index in `0..BOARD_SIZE`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "[BoardCell; BOARD_SIZE]", from = "[BoardCell; BOARD_SIZE]")]
pub struct Board {
    cells: Cells,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `index`, or [`None`] if the index is out of range.
    pub fn cell(&self, index: usize) -> Option<BoardCell> {
        self.cells.get_flat(index).copied()
    }

    /// Returns `true` if `index` is in range and nobody has marked it yet.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.cell(index), Some(BoardCell(None)))
    }

    /// Puts `mark` into the cell at `index`.
    ///
    /// Fails with [`GameError::IndexOutOfRange`] or [`GameError::CellIsOccupied`]
    /// and leaves the board untouched in both cases.
    pub fn place_mark(&mut self, index: usize, mark: Mark) -> GameResult<()> {
        let cell = self.empty_slot_mut(index)?;
        *cell = mark.into();
        Ok(())
    }

    /// Places `mark` for the lifetime of the returned guard.
    ///
    /// The cell goes back to empty when the guard is dropped, whichever way the
    /// enclosing scope is left.
    pub fn trial(&mut self, index: usize, mark: Mark) -> GameResult<TrialMove<'_>> {
        self.place_mark(index, mark)?;
        Ok(TrialMove { board: self, index })
    }

    pub fn is_full(&self) -> bool {
        self.cells.cells().all(|cell| cell.is_some())
    }

    pub fn clear(&mut self) {
        self.cells.cells_mut().for_each(|cell| *cell = BoardCell(None));
    }

    pub fn empty_cells(&self) -> EmptyCells {
        self.cells()
            .enumerate()
            .filter_map(|(index, cell)| cell.is_none().then_some(index))
            .collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells().filter(|cell| cell.0 == Some(mark)).count()
    }

    pub fn marks_placed(&self) -> usize {
        self.cells().filter(|cell| cell.is_some()).count()
    }

    /// Iterates over the cells in index order.
    pub fn cells(&self) -> impl Iterator<Item = BoardCell> + '_ {
        self.cells.cells().copied()
    }

    fn empty_slot_mut(&mut self, index: usize) -> GameResult<&mut BoardCell> {
        let cell = self
            .cells
            .get_flat_mut(index)
            .ok_or_else(|| GameError::index_out_of_range(index))?;
        if cell.is_some() {
            return Err(GameError::cell_is_occupied(index));
        }
        Ok(cell)
    }
}

impl From<[BoardCell; BOARD_SIZE]> for Board {
    fn from(value: [BoardCell; BOARD_SIZE]) -> Self {
        let mut board = Board::new();
        for (slot, cell) in board.cells.cells_mut().zip(value) {
            *slot = cell;
        }
        board
    }
}

impl From<Board> for [BoardCell; BOARD_SIZE] {
    fn from(value: Board) -> Self {
        let mut out = [BoardCell::default(); BOARD_SIZE];
        for (slot, cell) in out.iter_mut().zip(value.cells()) {
            *slot = cell;
        }
        out
    }
}

/// Parses the compact notation used in tests and saved positions: nine cells
/// of `X`, `O` or `.` (`_` and `-` also mean empty). Whitespace, `|` and `/`
/// are ignored so rows can be separated for readability.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [BoardCell::default(); BOARD_SIZE];
        let mut count = 0;
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => BoardCell(Some(Mark::Player)),
                'O' | 'o' => BoardCell(Some(Mark::Opponent)),
                '.' | '_' | '-' => BoardCell(None),
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(GameError::invalid_board(format!("unexpected character {c:?}"))),
            };
            if count == BOARD_SIZE {
                return Err(GameError::invalid_board(format!(
                    "more than {BOARD_SIZE} cells"
                )));
            }
            cells[count] = cell;
            count += 1;
        }
        if count != BOARD_SIZE {
            return Err(GameError::invalid_board(format!(
                "expected {BOARD_SIZE} cells, found {count}"
            )));
        }
        Ok(cells.into())
    }
}

/// Empty cells show their index so a player can read the move to type.
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, cell) in self.cells().enumerate() {
            let col = index % Cells::cols();
            if col == 0 && index > 0 {
                f.write_str("\n---+---+---\n")?;
            }
            match cell.0 {
                Some(mark) => write!(f, " {} ", mark)?,
                None => write!(f, " {} ", index)?,
            }
            if col + 1 < Cells::cols() {
                f.write_str("|")?;
            }
        }
        Ok(())
    }
}

/// A mark placed by [`Board::trial`]; removed again on drop.
#[derive(Debug)]
pub struct TrialMove<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        if let Some(cell) = self.board.cells.get_flat_mut(self.index) {
            *cell = BoardCell(None);
        }
    }
}
