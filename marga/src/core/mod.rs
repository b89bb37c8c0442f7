//! Core value types for the marga planning library.
//!
//! - [`CellStatus`]: semantic status of a grid cell
//! - [`Position`]: (row, col) cell coordinate
//! - [`Direction`]: one of the four cardinal moves

mod cell;
mod position;

pub use cell::CellStatus;
pub use position::{Direction, Position};
