//! Path search over the planning grid.
//!
//! All searches borrow the grid read-only and report unreachable goals
//! through [`SearchResult::found`] rather than an error.
//!
//! - **Nearest target** ([`nearest_target`]): BFS to the first Target cell
//! - **Point to point** ([`find_path`]): A* with a Manhattan heuristic
//! - **Joint target** ([`joint_search`]): one path through a whole
//!   [`TargetSet`], BFS or best-first
//!
//! ```rust,ignore
//! use marga::pathfinding::{SearchConfig, SearchMode, SearchPlanner};
//!
//! let planner = SearchPlanner::new(SearchConfig::with_mode(SearchMode::AStar));
//! let result = planner.search(&grid, start, grid.goal_cells());
//! if result.found {
//!     println!("{} moves, {} states opened", result.path_length(), result.nodes_opened);
//! }
//! ```

pub mod astar;
pub mod bfs;
pub mod joint;
mod target_set;
mod types;

pub use astar::find_path;
pub use bfs::{nearest_target, reachable_from};
pub use joint::joint_search;
pub use target_set::TargetSet;
pub use types::{SearchConfig, SearchFailure, SearchMode, SearchResult};

use crate::core::Position;
use crate::grid::Grid;

/// Search front end holding one configuration
#[derive(Clone, Debug, Default)]
pub struct SearchPlanner {
    config: SearchConfig,
}

impl SearchPlanner {
    /// Create a planner
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Planner configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Joint search through `targets` using the configured mode
    pub fn search(
        &self,
        grid: &Grid,
        start: Position,
        targets: impl IntoIterator<Item = Position>,
    ) -> SearchResult {
        joint_search(grid, start, targets, &self.config)
    }

    /// BFS to the first Target cell
    pub fn nearest_target(&self, grid: &Grid, start: Position) -> SearchResult {
        nearest_target(grid, start, &self.config)
    }

    /// Shortest path to a single cell
    pub fn path_to(&self, grid: &Grid, start: Position, goal: Position) -> SearchResult {
        find_path(grid, start, goal, &self.config)
    }
}

/// Joint search with default limits
pub fn search(
    grid: &Grid,
    start: Position,
    targets: impl IntoIterator<Item = Position>,
    mode: SearchMode,
) -> SearchResult {
    joint_search(grid, start, targets, &SearchConfig::with_mode(mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellStatus;

    #[test]
    fn test_planner_uses_configured_mode() {
        let mut grid = Grid::new(5, 5, CellStatus::Clean);
        grid.set_status(4, 4, CellStatus::Target);
        grid.set_status(0, 4, CellStatus::Dirty);
        let start = Position::new(2, 0);

        let planner = SearchPlanner::new(SearchConfig::with_mode(SearchMode::AStar));
        assert_eq!(planner.config().mode, SearchMode::AStar);

        let joint = planner.search(&grid, start, grid.goal_cells());
        let free = search(&grid, start, grid.goal_cells(), SearchMode::AStar);
        assert_eq!(joint, free);
        assert!(joint.found);

        let nearest = planner.nearest_target(&grid, start);
        assert_eq!(nearest.path.last(), Some(&Position::new(4, 4)));

        let direct = planner.path_to(&grid, start, Position::new(0, 4));
        assert_eq!(direct.path_length(), 6);
    }
}
