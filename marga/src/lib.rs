//! # Marga: Grid-World Planning for Cleaning Robots
//!
//! Plans routes for an agent on a bounded tile grid with walls, using two
//! complementary engines:
//!
//! - **Joint-target search**: BFS or best-first search over
//!   `(position, remaining targets)` states, producing one path that visits
//!   every target
//! - **Value iteration**: solves a discounted MDP with stochastic motion
//!   (80% intended, 10% drift to each side) and extracts a per-cell policy
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marga::io::parse_map;
//! use marga::pathfinding::{SearchMode, search};
//! use marga::policy::solve_all;
//!
//! let layout = parse_map("RCC\nCWD\nCCD\n").unwrap();
//! let start = layout.first_start().unwrap();
//!
//! let result = search(&layout.grid, start, layout.dirty.clone(), SearchMode::Bfs);
//! println!(
//!     "found={} moves={} opened={}",
//!     result.found,
//!     result.path_length(),
//!     result.nodes_opened
//! );
//!
//! let solution = solve_all(&layout.grid).unwrap();
//! print!("{}", solution.policy);
//! ```
//!
//! ## Coordinates
//!
//! Positions are `(row, col)` with `(0, 0)` at the top-left of the map text.
//! Anything outside the grid reads as impassable.
//!
//! ## Architecture
//!
//! - [`core`]: Position, Direction, CellStatus
//! - [`grid`]: Grid storage and statistics
//! - [`pathfinding`]: BFS, A*, joint-target search
//! - [`policy`]: Reward/transition models, value iteration, policy extraction
//! - [`agent`]: Drivers turning plans into one action per tick
//! - [`sim`]: Tick loop with slip noise and run reports
//! - [`io`]: Text map loading
//! - [`config`]: YAML configuration
//!
//! ## Data Flow
//!
//! ```text
//!   map text ──► io::parse_map ──► Grid
//!                                   │
//!                 ┌─────────────────┴─────────────────┐
//!                 ▼                                   ▼
//!       pathfinding::SearchPlanner         policy::ValueIteration
//!         (path through targets)            (utilities ──► Policy)
//!                 │                                   │
//!                 ▼                                   ▼
//!        agent::SearchCleaner               agent::PolicyCleaner
//!                 └─────────────────┬─────────────────┘
//!                                   ▼
//!                          sim::Simulation ──► SimReport
//! ```

pub mod agent;
pub mod config;
pub mod core;
pub mod error;
pub mod grid;
pub mod io;
pub mod pathfinding;
pub mod policy;
pub mod sim;

// Re-export main types at crate root
pub use crate::core::{CellStatus, Direction, Position};
pub use error::{Error, Result};
pub use grid::Grid;
pub use pathfinding::{SearchMode, SearchResult, TargetSet};
pub use policy::Policy;
