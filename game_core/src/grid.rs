use generic_array::typenum::Unsigned;
use generic_array::{ArrayLength, GenericArray};
use std::ops::{Index, IndexMut};

/// Index struct to access elements in the [`Grid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridIndex {
    row: usize,
    col: usize,
}

impl GridIndex {
    /// Constructs a new [`GridIndex`].
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts a row-major flat index into a [`GridIndex`] for a grid with `cols` columns.
    pub fn from_flat(index: usize, cols: usize) -> Self {
        Self::new(index / cols, index % cols)
    }

    /// Returns value of `self.col`
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns value of `self.row`
    pub fn row(&self) -> usize {
        self.row
    }
}

/// Two-dimensional fixed-length array that stores values and allows to mutate them.
/// Length of array is defined by generic parameters `R` and `C`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T, R: ArrayLength, C: ArrayLength> {
    contents: GenericArray<GenericArray<T, C>, R>,
}

impl<T: Default, R: ArrayLength, C: ArrayLength> Default for Grid<T, R, C> {
    fn default() -> Self {
        Self {
            contents: Default::default(),
        }
    }
}

impl<T, R: ArrayLength, C: ArrayLength> Index<GridIndex> for Grid<T, R, C> {
    type Output = T;

    fn index(&self, index: GridIndex) -> &Self::Output {
        &self.contents[index.row()][index.col()]
    }
}

impl<T, R: ArrayLength, C: ArrayLength> IndexMut<GridIndex> for Grid<T, R, C> {
    fn index_mut(&mut self, index: GridIndex) -> &mut Self::Output {
        &mut self.contents[index.row()][index.col()]
    }
}

impl<T, R: ArrayLength, C: ArrayLength> Grid<T, R, C> {
    /// Number of rows.
    pub fn rows() -> usize {
        R::to_usize()
    }

    /// Number of columns.
    pub fn cols() -> usize {
        C::to_usize()
    }

    /// Returns `true` if `index` points inside the grid.
    pub fn contains(&self, index: GridIndex) -> bool {
        index.row() < Self::rows() && index.col() < Self::cols()
    }

    /// Returns the element at row-major position `index`, or [`None`] when out of range.
    pub fn get_flat(&self, index: usize) -> Option<&T> {
        let pos = GridIndex::from_flat(index, Self::cols());
        self.contains(pos).then(|| &self[pos])
    }

    /// Mutable counterpart of [`Grid::get_flat`].
    pub fn get_flat_mut(&mut self, index: usize) -> Option<&mut T> {
        let pos = GridIndex::from_flat(index, Self::cols());
        if self.contains(pos) {
            Some(&mut self[pos])
        } else {
            None
        }
    }

    /// Returns an iterator to grid elements row by row
    pub fn cells(&self) -> impl Iterator<Item = &T> {
        self.contents.iter().flat_map(|row| row.iter())
    }

    /// Returns a mutable iterator to grid elements row by row
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.contents.iter_mut().flat_map(|row| row.iter_mut())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use generic_array::typenum;

    #[test]
    fn test_flat_index_conversion() {
        assert_eq!(GridIndex::from_flat(0, 3), GridIndex::new(0, 0));
        assert_eq!(GridIndex::from_flat(5, 3), GridIndex::new(1, 2));
        assert_eq!(GridIndex::from_flat(7, 3), GridIndex::new(2, 1));
    }

    #[test]
    fn test_get_flat_out_of_range() {
        let mut grid = Grid::<usize, typenum::U3, typenum::U3>::default();
        *grid.get_flat_mut(4).unwrap() = 7;
        assert_eq!(grid.get_flat(4), Some(&7));
        assert_eq!(grid.get_flat(9), None);
        assert!(grid.get_flat_mut(12).is_none());
    }
}
