//! Square grid of cells.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};
use crate::core::PlayerId;

/// Largest side length a board may have.
pub const MAX_BOARD_SIZE: usize = 256;

/// Row/column position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `distance` cells along `(dr, dc)`, or `None` if that leaves the
    /// board.
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize, distance: isize, size: usize) -> Option<Coord> {
        let row = self.row as isize + dr * distance;
        let col = self.col as isize + dc * distance;
        let size = size as isize;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Coord::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Occupancy of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PlayerId),
}

/// N×N board.
///
/// Cells live in a persistent `im::Vector` in row-major order, so snapshots
/// of the board clone in O(1). Once a game starts the size is fixed and an
/// occupied cell is never cleared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vector<Cell>,
    occupied: usize,
}

impl Board {
    /// Create an empty `size`×`size` board, `size` in `1..=MAX_BOARD_SIZE`.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(EngineError::InvalidSize(size));
        }
        Ok(Self::with_size(size))
    }

    /// Empty board of a size already checked against `MAX_BOARD_SIZE`.
    pub(crate) fn with_size(size: usize) -> Self {
        Self {
            size,
            cells: std::iter::repeat(Cell::Empty).take(size * size).collect(),
            occupied: 0,
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    #[must_use]
    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.size && at.col < self.size
    }

    fn index(&self, at: Coord) -> Result<usize> {
        if self.contains(at) {
            Ok(at.row * self.size + at.col)
        } else {
            Err(EngineError::OutOfBounds {
                row: at.row,
                col: at.col,
                size: self.size,
            })
        }
    }

    /// Cell at `at`. Out-of-bounds reads as `Empty`.
    #[must_use]
    pub fn cell(&self, at: Coord) -> Cell {
        self.index(at)
            .ok()
            .and_then(|i| self.cells.get(i).copied())
            .unwrap_or_default()
    }

    /// Player occupying `at`, if any.
    #[must_use]
    pub fn occupant_at(&self, at: Coord) -> Option<PlayerId> {
        match self.cell(at) {
            Cell::Occupied(player) => Some(player),
            Cell::Empty => None,
        }
    }

    #[must_use]
    pub fn is_empty_at(&self, at: Coord) -> bool {
        self.cell(at) == Cell::Empty
    }

    /// Place a marker. Either fully succeeds or leaves the board unchanged.
    pub fn place(&mut self, at: Coord, player: PlayerId) -> Result<()> {
        let index = self.index(at)?;
        if self.cells[index] != Cell::Empty {
            return Err(EngineError::CellOccupied {
                row: at.row,
                col: at.col,
            });
        }
        self.cells.set(index, Cell::Occupied(player));
        self.occupied += 1;
        Ok(())
    }

    /// Every empty coordinate in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.coords_where(|cell| cell == Cell::Empty)
    }

    /// Every occupied coordinate in row-major order.
    pub fn occupied_cells(&self) -> Vec<Coord> {
        self.coords_where(|cell| cell != Cell::Empty)
    }

    fn coords_where(&self, keep: impl Fn(Cell) -> bool) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| keep(cell))
            .map(|(i, _)| Coord::new(i / self.size, i % self.size))
            .collect()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied == self.cell_count()
    }

    /// Fraction of cells occupied.
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        self.occupied as f64 / self.cell_count() as f64
    }

    /// Fresh empty board `by` cells larger per side.
    ///
    /// The new size must lie in `(min_size, max_size]`. Phase checks belong
    /// to the caller; this only validates the sizes.
    pub fn extend(&self, by: usize, min_size: usize, max_size: usize) -> Result<Board> {
        let max_size = max_size.min(MAX_BOARD_SIZE);
        let new_size = self
            .size
            .checked_add(by)
            .filter(|&n| by > 0 && n > min_size && n <= max_size);
        match new_size {
            Some(n) => Ok(Board::with_size(n)),
            None => Err(EngineError::InvalidExtension {
                size: self.size,
                by,
                min: min_size,
                max: max_size,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(12).unwrap();
        assert_eq!(board.size(), 12);
        assert_eq!(board.empty_cells().len(), 144);
        assert!(board.occupied_cells().is_empty());
        assert_eq!(board.occupant_at(Coord::new(5, 5)), None);
    }

    #[test]
    fn test_size_limits() {
        assert_eq!(Board::new(0), Err(EngineError::InvalidSize(0)));
        assert_eq!(
            Board::new(MAX_BOARD_SIZE + 1),
            Err(EngineError::InvalidSize(MAX_BOARD_SIZE + 1))
        );
        assert_eq!(Board::new(usize::MAX), Err(EngineError::InvalidSize(usize::MAX)));
    }

    #[test]
    fn test_place_and_read_back() {
        let mut board = Board::new(12).unwrap();
        board.place(Coord::new(3, 4), P1).unwrap();

        assert_eq!(board.occupant_at(Coord::new(3, 4)), Some(P1));
        assert_eq!(board.cell(Coord::new(3, 4)), Cell::Occupied(P1));
        assert_eq!(board.occupied_count(), 1);
        assert_eq!(board.occupied_cells(), vec![Coord::new(3, 4)]);
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut board = Board::new(12).unwrap();
        let err = board.place(Coord::new(12, 0), P0).unwrap_err();
        assert_eq!(err, EngineError::OutOfBounds { row: 12, col: 0, size: 12 });
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_place_twice_leaves_board_unchanged() {
        let mut board = Board::new(12).unwrap();
        board.place(Coord::new(0, 0), P0).unwrap();
        let before = board.clone();

        let err = board.place(Coord::new(0, 0), P1).unwrap_err();
        assert_eq!(err, EngineError::CellOccupied { row: 0, col: 0 });
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = Board::new(12).unwrap();
        board.place(Coord::new(0, 0), P0).unwrap();
        let empty = board.empty_cells();
        assert_eq!(empty[0], Coord::new(0, 1));
        assert_eq!(empty[11], Coord::new(1, 0));
        assert_eq!(empty.last(), Some(&Coord::new(11, 11)));
    }

    #[test]
    fn test_fill_ratio() {
        let mut board = Board::new(12).unwrap();
        for col in 0..12 {
            board.place(Coord::new(0, col), P0).unwrap();
        }
        assert!((board.fill_ratio() - 12.0 / 144.0).abs() < f64::EPSILON);
        assert!(!board.is_full());
    }

    #[test]
    fn test_extend() {
        let board = Board::new(12).unwrap();
        let bigger = board.extend(2, 12, 64).unwrap();
        assert_eq!(bigger.size(), 14);
        assert_eq!(bigger.empty_cells().len(), 196);

        assert!(matches!(board.extend(0, 12, 64), Err(EngineError::InvalidExtension { .. })));
        assert_eq!(board.extend(52, 12, 64).map(|b| b.size()), Ok(64));
        assert!(matches!(board.extend(53, 12, 64), Err(EngineError::InvalidExtension { .. })));
    }

    #[test]
    fn test_extend_overflow_is_an_error() {
        let board = Board::new(12).unwrap();
        assert_eq!(
            board.extend(usize::MAX, 12, usize::MAX),
            Err(EngineError::InvalidExtension {
                size: 12,
                by: usize::MAX,
                min: 12,
                max: MAX_BOARD_SIZE,
            })
        );
        assert!(board.extend(1 << 33, 12, usize::MAX).is_err());
    }

    #[test]
    fn test_coord_offset() {
        let at = Coord::new(0, 5);
        assert_eq!(at.offset(1, 1, 2, 12), Some(Coord::new(2, 7)));
        assert_eq!(at.offset(-1, 0, 1, 12), None);
        assert_eq!(at.offset(0, 1, 7, 12), None);
    }
}
