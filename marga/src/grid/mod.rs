//! Planning grid.
//!
//! - [`Grid`]: fixed-shape map of [`CellStatus`](crate::core::CellStatus) values
//! - [`CellCounts`]: per-status cell statistics

mod storage;

pub use storage::{CellCounts, Grid};
