//! Breadth-first search for the nearest Target cell.
//!
//! The frontier is expanded in the fixed neighbour order up, down, left,
//! right. A neighbour that is a Target ends the search immediately, so the
//! result is the first target discovered in BFS order. Visited cells are
//! tracked in a side set; the grid itself is never touched.

use std::collections::{HashMap, HashSet, VecDeque};

use log::{debug, trace};

use super::types::{SearchConfig, SearchFailure, SearchResult};
use crate::core::{CellStatus, Position};
use crate::grid::Grid;

/// Find a shortest path from `start` to the first Target cell reached.
///
/// `nodes_opened` counts every position pushed onto the frontier, the start
/// included. The target that ends the search is never pushed, so it is not
/// counted. Dirty cells are ordinary floor here.
pub fn nearest_target(grid: &Grid, start: Position, config: &SearchConfig) -> SearchResult {
    trace!("[Bfs] nearest_target: start={}", start);

    if !grid.is_passable(start) {
        debug!("[Bfs] FAILED: StartBlocked at {}", start);
        return SearchResult::failed(SearchFailure::StartBlocked, 0);
    }

    let mut nodes_opened: u64 = 1;
    if grid.status_at(start) == CellStatus::Target {
        return SearchResult::found(vec![start], nodes_opened);
    }

    let mut frontier = VecDeque::new();
    let mut visited = HashSet::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();

    frontier.push_back(start);
    visited.insert(start);

    while let Some(current) = frontier.pop_front() {
        let neighbors = current.neighbors_4();

        // Any adjacent target wins before more frontier is queued
        if let Some(&(_, target)) = neighbors
            .iter()
            .find(|(_, n)| grid.status_at(*n) == CellStatus::Target)
        {
            came_from.insert(target, current);
            return reconstruct_path(&came_from, target, nodes_opened);
        }

        for (_, neighbor) in neighbors {
            if !grid.is_passable(neighbor) || !visited.insert(neighbor) {
                continue;
            }
            if nodes_opened >= config.max_open_nodes {
                debug!(
                    "[Bfs] FAILED: OpenLimitExceeded ({} nodes)",
                    nodes_opened
                );
                return SearchResult::failed(SearchFailure::OpenLimitExceeded, nodes_opened);
            }
            nodes_opened += 1;
            came_from.insert(neighbor, current);
            frontier.push_back(neighbor);
        }
    }

    debug!("[Bfs] FAILED: NoPath after opening {} nodes", nodes_opened);
    SearchResult::failed(SearchFailure::NoPath, nodes_opened)
}

/// Every passable cell connected to `start`, the start included.
///
/// Empty when `start` itself is blocked.
pub fn reachable_from(grid: &Grid, start: Position) -> HashSet<Position> {
    let mut seen = HashSet::new();
    if !grid.is_passable(start) {
        return seen;
    }

    let mut frontier = VecDeque::from([start]);
    seen.insert(start);
    while let Some(current) = frontier.pop_front() {
        for (_, neighbor) in current.neighbors_4() {
            if grid.is_passable(neighbor) && seen.insert(neighbor) {
                frontier.push_back(neighbor);
            }
        }
    }
    seen
}

fn reconstruct_path(
    came_from: &HashMap<Position, Position>,
    goal: Position,
    nodes_opened: u64,
) -> SearchResult {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();

    trace!(
        "[Bfs] SUCCESS: target={} moves={} nodes_opened={}",
        goal,
        path.len() - 1,
        nodes_opened
    );
    SearchResult::found(path, nodes_opened)
}
