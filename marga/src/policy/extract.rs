//! Policy extraction from a converged utility surface.

use std::collections::HashSet;
use std::fmt;

use super::model::TransitionModel;
use super::utility::UtilityMatrix;
use crate::core::{Direction, Position};
use crate::grid::Grid;

/// Q-value a direction must beat to be chosen at all
pub const POLICY_FLOOR: f64 = -10.0;

/// One action per cell: a direction, or `None` for no movement.
///
/// Immutable once extracted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Policy {
    actions: Vec<Option<Direction>>,
    blocked: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Policy {
    /// Derive the greedy policy for `utilities`.
    ///
    /// Directions are tried up, down, left, right; a later direction
    /// replaces an earlier one only when its Q-value is strictly greater.
    /// Directions whose destination is impassable are never chosen.
    /// Cells listed in `terminals` get no movement.
    pub fn extract(
        grid: &Grid,
        utilities: &UtilityMatrix,
        transition: &TransitionModel,
        terminals: &[Position],
    ) -> Self {
        let terminals: HashSet<Position> = terminals.iter().copied().collect();
        let mut actions = vec![None; grid.cell_count()];
        let mut blocked = vec![false; grid.cell_count()];

        for (i, (pos, status)) in grid.iter().enumerate() {
            if !status.is_passable() {
                blocked[i] = true;
                continue;
            }
            if terminals.contains(&pos) {
                continue;
            }
            actions[i] = best_action(grid, utilities, transition, pos);
        }

        Self {
            actions,
            blocked,
            rows: grid.rows(),
            cols: grid.cols(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Action at `pos` (`None` outside the grid, on walls and terminals)
    pub fn action_at(&self, pos: Position) -> Option<Direction> {
        if pos.row < 0 || pos.col < 0 {
            return None;
        }
        let (row, col) = (pos.row as usize, pos.col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.actions[row * self.cols + col]
    }

    /// Row-major actions
    pub fn actions(&self) -> &[Option<Direction>] {
        &self.actions
    }
}

fn best_action(
    grid: &Grid,
    utilities: &UtilityMatrix,
    transition: &TransitionModel,
    pos: Position,
) -> Option<Direction> {
    let mut best = POLICY_FLOOR;
    let mut choice = None;
    for direction in Direction::ALL {
        if !grid.is_passable(pos.step(direction)) {
            continue;
        }
        let q = utilities.q_value(grid, pos, direction, transition);
        if q > best {
            best = q;
            choice = Some(direction);
        }
    }
    choice
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.cols.max(1);
        for (actions, blocked) in self.actions.chunks(width).zip(self.blocked.chunks(width)) {
            let line: String = actions
                .iter()
                .zip(blocked)
                .map(|(action, &wall)| match action {
                    _ if wall => '#',
                    Some(d) => d.as_char(),
                    None => '.',
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
