//! A* search between two cells.
//!
//! 4-connected, unit step cost, Manhattan heuristic. Equal-priority nodes
//! come off the heap in insertion order so results are reproducible.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use log::{debug, trace};

use super::types::{SearchConfig, SearchFailure, SearchResult};
use crate::core::Position;
use crate::grid::Grid;

/// A node in the A* search
#[derive(Clone, Debug)]
struct AStarNode {
    position: Position,
    g_cost: u32, // Moves from start
    f_cost: u32, // g_cost + heuristic
    seq: u64,    // Insertion order
}

impl Eq for AStarNode {}

impl PartialEq for AStarNode {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.seq == other.seq
    }
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a shortest path from `start` to `goal`.
///
/// Any passable cell may be crossed, goal cells included.
pub fn find_path(
    grid: &Grid,
    start: Position,
    goal: Position,
    config: &SearchConfig,
) -> SearchResult {
    trace!("[AStar] find_path: start={} goal={}", start, goal);

    if !grid.is_passable(start) {
        debug!("[AStar] FAILED: StartBlocked at {}", start);
        return SearchResult::failed(SearchFailure::StartBlocked, 0);
    }
    if !grid.is_passable(goal) {
        debug!("[AStar] FAILED: GoalBlocked at {}", goal);
        return SearchResult::failed(SearchFailure::GoalBlocked, 0);
    }

    let mut open_set = BinaryHeap::new();
    let mut closed_set = HashSet::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut g_scores: HashMap<Position, u32> = HashMap::new();
    let mut seq: u64 = 0;

    open_set.push(AStarNode {
        position: start,
        g_cost: 0,
        f_cost: start.manhattan_distance(&goal),
        seq,
    });
    g_scores.insert(start, 0);
    let mut nodes_opened: u64 = 1;

    while let Some(current) = open_set.pop() {
        if current.position == goal {
            return reconstruct_path(&came_from, goal, current.g_cost, nodes_opened);
        }

        if !closed_set.insert(current.position) {
            continue;
        }

        for (_, neighbor) in current.position.neighbors_4() {
            if closed_set.contains(&neighbor) || !grid.is_passable(neighbor) {
                continue;
            }

            let tentative_g = current.g_cost + 1;
            let known_g = g_scores.get(&neighbor).copied().unwrap_or(u32::MAX);
            if tentative_g >= known_g {
                continue;
            }

            if nodes_opened >= config.max_open_nodes {
                debug!(
                    "[AStar] FAILED: OpenLimitExceeded ({} nodes)",
                    nodes_opened
                );
                return SearchResult::failed(SearchFailure::OpenLimitExceeded, nodes_opened);
            }

            came_from.insert(neighbor, current.position);
            g_scores.insert(neighbor, tentative_g);
            seq += 1;
            nodes_opened += 1;
            open_set.push(AStarNode {
                position: neighbor,
                g_cost: tentative_g,
                f_cost: tentative_g + neighbor.manhattan_distance(&goal),
                seq,
            });
        }
    }

    debug!(
        "[AStar] FAILED: NoPath after opening {} nodes",
        nodes_opened
    );
    SearchResult::failed(SearchFailure::NoPath, nodes_opened)
}

/// Reconstruct the path from came_from map
fn reconstruct_path(
    came_from: &HashMap<Position, Position>,
    goal: Position,
    cost: u32,
    nodes_opened: u64,
) -> SearchResult {
    let mut path = Vec::with_capacity(cost as usize + 1);
    let mut current = goal;

    while let Some(&prev) = came_from.get(&current) {
        path.push(current);
        current = prev;
    }
    path.push(current); // Add start
    path.reverse();

    trace!(
        "[AStar] SUCCESS: moves={}, nodes_opened={}",
        cost,
        nodes_opened
    );
    SearchResult::found(path, nodes_opened)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellStatus;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_straight_line() {
        let grid = Grid::new(1, 6, CellStatus::Clean);
        let result = find_path(&grid, p(0, 0), p(0, 5), &SearchConfig::default());
        assert!(result.found);
        assert_eq!(result.path_length(), 5);
        assert_eq!(result.path.len(), 6);
    }

    #[test]
    fn test_same_start_and_goal() {
        let grid = Grid::new(2, 2, CellStatus::Clean);
        let result = find_path(&grid, p(1, 1), p(1, 1), &SearchConfig::default());
        assert!(result.found);
        assert_eq!(result.path, vec![p(1, 1)]);
        assert_eq!(result.nodes_opened, 1);
    }

    #[test]
    fn test_detour_around_wall() {
        // C C C C
        // C W W C
        // C W G C
        let mut grid = Grid::new(3, 4, CellStatus::Clean);
        grid.set_status(1, 1, CellStatus::Impassable);
        grid.set_status(1, 2, CellStatus::Impassable);
        grid.set_status(2, 1, CellStatus::Impassable);

        let result = find_path(&grid, p(2, 0), p(2, 2), &SearchConfig::default());
        assert!(result.found);
        assert_eq!(result.path_length(), 8);
        for pair in result.path.windows(2) {
            assert_eq!(pair[0].manhattan_distance(&pair[1]), 1);
            assert!(grid.is_passable(pair[1]));
        }
    }

    #[test]
    fn test_blocked_endpoints() {
        let mut grid = Grid::new(2, 2, CellStatus::Clean);
        grid.set_status(1, 1, CellStatus::Impassable);
        let config = SearchConfig::default();

        let result = find_path(&grid, p(1, 1), p(0, 0), &config);
        assert_eq!(result.failure_reason, Some(SearchFailure::StartBlocked));

        let result = find_path(&grid, p(0, 0), p(1, 1), &config);
        assert_eq!(result.failure_reason, Some(SearchFailure::GoalBlocked));

        let result = find_path(&grid, p(0, 0), p(4, 4), &config);
        assert_eq!(result.failure_reason, Some(SearchFailure::GoalBlocked));
    }

    #[test]
    fn test_unreachable_goal() {
        let mut grid = Grid::new(1, 3, CellStatus::Clean);
        grid.set_status(0, 1, CellStatus::Impassable);
        let result = find_path(&grid, p(0, 0), p(0, 2), &SearchConfig::default());
        assert!(!result.found);
        assert_eq!(result.failure_reason, Some(SearchFailure::NoPath));
        assert_eq!(result.nodes_opened, 1);
    }
}
