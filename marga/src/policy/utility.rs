//! Utility surface over the grid.

use std::fmt;

use super::model::TransitionModel;
use crate::core::{Direction, Position};
use crate::grid::Grid;

/// Row-major utility value per cell
#[derive(Clone, Debug, PartialEq)]
pub struct UtilityMatrix {
    values: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl UtilityMatrix {
    /// Wrap row-major values; `values.len()` must equal `rows * cols`
    pub(crate) fn from_values(rows: usize, cols: usize, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), rows * cols);
        Self { values, rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Utility at `pos` (0.0 outside the matrix)
    #[inline]
    pub fn get(&self, pos: Position) -> f64 {
        if pos.row < 0 || pos.col < 0 {
            return 0.0;
        }
        let (row, col) = (pos.row as usize, pos.col as usize);
        if row >= self.rows || col >= self.cols {
            return 0.0;
        }
        self.values[row * self.cols + col]
    }

    /// Raw row-major values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Utility of the cell a move in `direction` lands on.
    ///
    /// Moves into walls or off the grid bounce back to `pos`.
    #[inline]
    fn landing_value(&self, grid: &Grid, pos: Position, direction: Direction) -> f64 {
        let next = pos.step(direction);
        if grid.is_passable(next) {
            self.get(next)
        } else {
            self.get(pos)
        }
    }

    /// Expected utility of trying to move in `direction` from `pos`
    pub fn q_value(
        &self,
        grid: &Grid,
        pos: Position,
        direction: Direction,
        transition: &TransitionModel,
    ) -> f64 {
        transition
            .outcomes(direction)
            .iter()
            .map(|&(d, p)| p * self.landing_value(grid, pos, d))
            .sum()
    }

    /// Best expected utility over all four directions
    pub fn best_q(&self, grid: &Grid, pos: Position, transition: &TransitionModel) -> f64 {
        Direction::ALL
            .iter()
            .map(|&d| self.q_value(grid, pos, d, transition))
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

impl fmt::Display for UtilityMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.values.chunks(self.cols.max(1)) {
            let line: Vec<String> = row.iter().map(|v| format!("{:8.4}", v)).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
