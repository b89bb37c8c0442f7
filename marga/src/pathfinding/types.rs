//! Search configuration and result types.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Frontier discipline for joint-target search
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// FIFO frontier: fewest moves first
    #[default]
    Bfs,
    /// Priority frontier ordered by moves so far + farthest-target distance
    #[serde(rename = "astar", alias = "a_star")]
    AStar,
}

/// Search configuration
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Frontier discipline used by joint-target search
    pub mode: SearchMode,
    /// Maximum number of nodes added to the open set before giving up
    pub max_open_nodes: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::Bfs,
            max_open_nodes: 2_000_000,
        }
    }
}

impl SearchConfig {
    /// Create with a specific search mode
    pub fn with_mode(mode: SearchMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set the open-set cap
    pub fn with_max_open_nodes(mut self, max_open_nodes: u64) -> Self {
        self.max_open_nodes = max_open_nodes;
        self
    }
}

/// Result of a search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Visited positions from start to the final goal (empty if not found)
    pub path: Vec<Position>,
    /// Whether a path was found
    pub found: bool,
    /// Number of nodes added to the open set, start included
    pub nodes_opened: u64,
    /// Reason for failure (if any)
    pub failure_reason: Option<SearchFailure>,
}

impl SearchResult {
    /// Create a successful result
    pub(crate) fn found(path: Vec<Position>, nodes_opened: u64) -> Self {
        Self {
            path,
            found: true,
            nodes_opened,
            failure_reason: None,
        }
    }

    /// Create a failed result
    pub(crate) fn failed(reason: SearchFailure, nodes_opened: u64) -> Self {
        Self {
            path: Vec::new(),
            found: false,
            nodes_opened,
            failure_reason: Some(reason),
        }
    }

    /// Number of moves along the path
    pub fn path_length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Reason for search failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchFailure {
    /// Start position is impassable or outside the grid
    StartBlocked,
    /// Goal position is impassable or outside the grid
    GoalBlocked,
    /// Open set exhausted without reaching the goal(s)
    NoPath,
    /// The open-set cap was hit
    OpenLimitExceeded,
}
