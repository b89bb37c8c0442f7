//! Default value functions for serde deserialization.

use crate::pathfinding::SearchMode;
use crate::sim::Strategy;

pub fn search_mode() -> SearchMode {
    SearchMode::Bfs
}

pub fn max_open_nodes() -> u64 {
    2_000_000
}

pub fn discount() -> f64 {
    0.95
}

pub fn epsilon() -> f64 {
    0.0001
}

pub fn max_sweeps() -> usize {
    10_000
}

pub fn strategy() -> Strategy {
    Strategy::Search
}

pub fn max_ticks() -> u64 {
    1_000
}
