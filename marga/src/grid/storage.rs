//! Grid storage for the planning map.
//!
//! Cells are kept in a single row-major `Vec<CellStatus>`. The shape is
//! fixed at construction; only cell contents change afterwards.

use std::fmt;

use crate::core::{CellStatus, Position};

/// Fixed-shape 2-D map of cell statuses.
///
/// Coordinates follow the map text layout:
/// - (0, 0) is the top-left cell
/// - Row grows downwards, column grows to the right
///
/// Any query outside `rows × cols` reports [`CellStatus::Impassable`], so
/// planners never need a separate bounds check.
///
/// The grid is not synchronised. Planners borrow it immutably; the driving
/// loop is the only mutator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Cell statuses, row-major
    cells: Vec<CellStatus>,
    /// Number of rows
    rows: usize,
    /// Number of columns
    cols: usize,
}

impl Grid {
    /// Create a grid with every cell set to `fill`
    pub fn new(rows: usize, cols: usize, fill: CellStatus) -> Self {
        Self {
            cells: vec![fill; rows * cols],
            rows,
            cols,
        }
    }

    /// Create a grid from row-major cells.
    ///
    /// Returns `None` if `cells.len() != rows * cols`.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<CellStatus>) -> Option<Self> {
        if cells.len() != rows * cols {
            return None;
        }
        Some(Self { cells, rows, cols })
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if a position lies inside the grid
    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    /// Convert a position to a linear index (None if out of bounds)
    #[inline]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        if self.in_bounds(pos) {
            Some(pos.row as usize * self.cols + pos.col as usize)
        } else {
            None
        }
    }

    /// Convert a linear index back to a position
    #[inline]
    pub fn position_of(&self, index: usize) -> Position {
        Position::new((index / self.cols) as i32, (index % self.cols) as i32)
    }

    /// Status of the cell at (row, col); out of bounds is `Impassable`
    #[inline]
    pub fn status(&self, row: i32, col: i32) -> CellStatus {
        self.status_at(Position::new(row, col))
    }

    /// Status of the cell at `pos`; out of bounds is `Impassable`
    #[inline]
    pub fn status_at(&self, pos: Position) -> CellStatus {
        match self.index_of(pos) {
            Some(i) => self.cells[i],
            None => CellStatus::Impassable,
        }
    }

    /// Can the robot stand on `pos`?
    #[inline]
    pub fn is_passable(&self, pos: Position) -> bool {
        self.status_at(pos).is_passable()
    }

    /// Set the status of a cell.
    ///
    /// Returns true if the status changed. Out-of-bounds writes are ignored
    /// and return false.
    pub fn set_status(&mut self, row: i32, col: i32, status: CellStatus) -> bool {
        match self.index_of(Position::new(row, col)) {
            Some(i) => {
                let changed = self.cells[i] != status;
                self.cells[i] = status;
                changed
            }
            None => false,
        }
    }

    /// Set the status of the cell at `pos`
    #[inline]
    pub fn set_status_at(&mut self, pos: Position, status: CellStatus) -> bool {
        self.set_status(pos.row, pos.col, status)
    }

    /// Clean a goal cell. Returns true if something was cleaned.
    pub fn clean(&mut self, pos: Position) -> bool {
        if self.status_at(pos).is_goal() {
            self.set_status_at(pos, CellStatus::Clean)
        } else {
            false
        }
    }

    /// Mark a clean cell dirty. Walls and targets are left alone.
    pub fn soil(&mut self, pos: Position) -> bool {
        if self.status_at(pos) == CellStatus::Clean {
            self.set_status_at(pos, CellStatus::Dirty)
        } else {
            false
        }
    }

    /// Number of cells with the given status
    pub fn count(&self, status: CellStatus) -> usize {
        self.cells.iter().filter(|&&s| s == status).count()
    }

    /// Cell counts for every status in one pass
    pub fn counts(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for &status in &self.cells {
            match status {
                CellStatus::Clean => counts.clean += 1,
                CellStatus::Dirty => counts.dirty += 1,
                CellStatus::Impassable => counts.impassable += 1,
                CellStatus::Target => counts.target += 1,
            }
        }
        counts
    }

    /// Number of cells that are not walls
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_passable()).count()
    }

    /// Positions with the given status, row-major
    pub fn positions_with(&self, status: CellStatus) -> Vec<Position> {
        self.iter()
            .filter(|&(_, s)| s == status)
            .map(|(p, _)| p)
            .collect()
    }

    /// Dirty and Target positions, row-major
    pub fn goal_cells(&self) -> Vec<Position> {
        self.iter()
            .filter(|&(_, s)| s.is_goal())
            .map(|(p, _)| p)
            .collect()
    }

    /// Iterate over all cells as (position, status), row-major
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellStatus)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &s)| (self.position_of(i), s))
    }

    /// Raw row-major cell slice
    #[inline]
    pub fn cells(&self) -> &[CellStatus] {
        &self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let line: String = row.iter().map(|s| s.as_char()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Cell counts by status
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    /// Clean floor cells
    pub clean: usize,
    /// Dirty floor cells
    pub dirty: usize,
    /// Walls
    pub impassable: usize,
    /// Search targets
    pub target: usize,
}

impl CellCounts {
    /// Cells the robot can stand on
    pub fn passable(&self) -> usize {
        self.clean + self.dirty + self.target
    }

    /// Cells still to be reached
    pub fn goals(&self) -> usize {
        self.dirty + self.target
    }

    /// Total cells
    pub fn total(&self) -> usize {
        self.passable() + self.impassable
    }
}
