//! Goal selection for single-target solving.

use crate::core::Position;
use crate::grid::Grid;
use crate::pathfinding::reachable_from;

/// Goal cell nearest to `from` by Manhattan distance.
///
/// Ties go to the first goal in row-major order. Returns `None` when the
/// grid has no Dirty or Target cells.
pub fn closest_goal(grid: &Grid, from: Position) -> Option<Position> {
    grid.goal_cells()
        .into_iter()
        .min_by_key(|goal| from.manhattan_distance(goal))
}

/// Like [`closest_goal`], but only among goals connected to `from`.
///
/// Returns `None` when every goal is walled off from the agent.
pub fn closest_reachable_goal(grid: &Grid, from: Position) -> Option<Position> {
    let reachable = reachable_from(grid, from);
    grid.goal_cells()
        .into_iter()
        .filter(|goal| reachable.contains(goal))
        .min_by_key(|goal| from.manhattan_distance(goal))
}
