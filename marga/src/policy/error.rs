//! Error types for policy solving

use thiserror::Error;

use crate::core::Position;

/// Policy solver error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolicyError {
    #[error(
        "value iteration did not converge in {sweeps} sweeps (change {max_change:.3e} > {bound:.3e})"
    )]
    NotConverged {
        sweeps: usize,
        max_change: f64,
        bound: f64,
    },

    #[error("terminal cell {0} is outside the grid or impassable")]
    InvalidTerminal(Position),

    #[error("invalid model: {0}")]
    InvalidModel(String),
}
