//! Joint-target search: one path that visits every target in a set.
//!
//! The search state is `(position, remaining targets)`, so the same cell
//! reached with different outstanding targets is a different state. States
//! live in an arena and point at their parent; the path is only materialised
//! for the goal state.
//!
//! A state is the goal as soon as it is generated with nothing remaining.
//! With a FIFO frontier this yields a path with the fewest moves. The best-first
//! frontier orders by `moves + distance to the farthest remaining target`;
//! its paths are complete but not always the shortest.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};

use log::{debug, trace};

use super::target_set::TargetSet;
use super::types::{SearchConfig, SearchFailure, SearchMode, SearchResult};
use crate::core::Position;
use crate::grid::Grid;

/// Arena entry for one generated state
struct StateNode {
    position: Position,
    remaining: TargetSet,
    parent: Option<usize>,
    depth: u32,
}

/// Dedup key: position plus remaining-target bits.
///
/// All sets in one search share a universe, so the bits alone identify
/// the remaining members.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct StateKey {
    position: Position,
    bits: Box<[u64]>,
}

impl StateKey {
    fn new(position: Position, remaining: &TargetSet) -> Self {
        Self {
            position,
            bits: remaining.words().into(),
        }
    }
}

/// Heap entry for the best-first frontier
#[derive(Clone, Copy, Debug)]
struct Scored {
    score: u32,
    seq: u64,
    node: usize,
}

impl Eq for Scored {}

impl PartialEq for Scored {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.seq == other.seq
    }
}

impl Ord for Scored {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on score, FIFO among equals
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Scored {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

enum Frontier {
    Fifo(VecDeque<usize>),
    Best { heap: BinaryHeap<Scored>, seq: u64 },
}

impl Frontier {
    fn new(mode: SearchMode) -> Self {
        match mode {
            SearchMode::Bfs => Frontier::Fifo(VecDeque::new()),
            SearchMode::AStar => Frontier::Best {
                heap: BinaryHeap::new(),
                seq: 0,
            },
        }
    }

    fn push(&mut self, node: usize, score: u32) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(node),
            Frontier::Best { heap, seq } => {
                heap.push(Scored {
                    score,
                    seq: *seq,
                    node,
                });
                *seq += 1;
            }
        }
    }

    fn pop(&mut self) -> Option<usize> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Best { heap, .. } => heap.pop().map(|s| s.node),
        }
    }
}

/// Search for a path from `start` that visits every position in `targets`.
///
/// The start cell counts as visited. With an empty (or start-only) target set
/// the result is the single-cell path `[start]`.
///
/// `nodes_opened` counts every state added to the open set, start included.
pub fn joint_search(
    grid: &Grid,
    start: Position,
    targets: impl IntoIterator<Item = Position>,
    config: &SearchConfig,
) -> SearchResult {
    let mut remaining = TargetSet::new(targets);
    trace!(
        "[JointSearch] start={} targets={} mode={:?}",
        start,
        remaining.len(),
        config.mode
    );

    if !grid.is_passable(start) {
        debug!("[JointSearch] FAILED: StartBlocked at {}", start);
        return SearchResult::failed(SearchFailure::StartBlocked, 0);
    }
    if let Some(blocked) = remaining.iter().find(|t| !grid.is_passable(*t)) {
        debug!("[JointSearch] FAILED: GoalBlocked at {}", blocked);
        return SearchResult::failed(SearchFailure::GoalBlocked, 0);
    }

    remaining.remove(&start);
    let mut nodes_opened: u64 = 1;
    if remaining.is_empty() {
        return SearchResult::found(vec![start], nodes_opened);
    }

    let mut seen: HashSet<StateKey> = HashSet::new();
    let mut frontier = Frontier::new(config.mode);
    let mut arena = Vec::new();

    seen.insert(StateKey::new(start, &remaining));
    let start_score = remaining.farthest_distance(&start);
    arena.push(StateNode {
        position: start,
        remaining,
        parent: None,
        depth: 0,
    });
    frontier.push(0, start_score);

    while let Some(idx) = frontier.pop() {
        let position = arena[idx].position;
        let depth = arena[idx].depth + 1;

        for (_, neighbor) in position.neighbors_4() {
            if !grid.is_passable(neighbor) {
                continue;
            }

            let remaining = arena[idx].remaining.without(&neighbor);
            if !seen.insert(StateKey::new(neighbor, &remaining)) {
                continue;
            }

            if nodes_opened >= config.max_open_nodes {
                debug!(
                    "[JointSearch] FAILED: OpenLimitExceeded ({} states)",
                    nodes_opened
                );
                return SearchResult::failed(SearchFailure::OpenLimitExceeded, nodes_opened);
            }
            nodes_opened += 1;

            let done = remaining.is_empty();
            let score = depth + remaining.farthest_distance(&neighbor);
            arena.push(StateNode {
                position: neighbor,
                remaining,
                parent: Some(idx),
                depth,
            });
            let child = arena.len() - 1;

            if done {
                return reconstruct_path(&arena, child, nodes_opened);
            }
            frontier.push(child, score);
        }
    }

    debug!(
        "[JointSearch] FAILED: NoPath after opening {} states",
        nodes_opened
    );
    SearchResult::failed(SearchFailure::NoPath, nodes_opened)
}

fn reconstruct_path(arena: &[StateNode], goal: usize, nodes_opened: u64) -> SearchResult {
    let mut path = Vec::with_capacity(arena[goal].depth as usize + 1);
    let mut current = Some(goal);
    while let Some(idx) = current {
        path.push(arena[idx].position);
        current = arena[idx].parent;
    }
    path.reverse();

    debug!(
        "[JointSearch] SUCCESS: moves={} states_opened={}",
        path.len() - 1,
        nodes_opened
    );
    SearchResult::found(path, nodes_opened)
}
