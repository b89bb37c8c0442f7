//! MDP policy solving.
//!
//! Turns per-cell rewards into a movement policy under stochastic motion:
//!
//! - [`RewardModel`] / [`TransitionModel`]: the MDP
//! - [`ValueIteration`]: converges a [`UtilityMatrix`] and extracts a [`Policy`]
//! - [`closest_goal`] / [`closest_reachable_goal`]: pick the terminal for
//!   single-target solving
//!
//! ```rust,ignore
//! use marga::policy::{ValueIteration, ValueIterationConfig, closest_goal};
//!
//! let solver = ValueIteration::new(ValueIterationConfig::default());
//! let goal = closest_goal(&grid, robot).unwrap();
//! let solution = solver.solve_single(&grid, goal)?;
//! println!("{}", solution.policy);
//! ```

mod error;
mod extract;
mod goal;
mod model;
mod utility;
mod value_iteration;

pub use error::PolicyError;
pub use extract::{POLICY_FLOOR, Policy};
pub use goal::{closest_goal, closest_reachable_goal};
pub use model::{RewardModel, TransitionModel};
pub use utility::UtilityMatrix;
pub use value_iteration::{
    Solution, ValueIteration, ValueIterationConfig, solve_all, solve_single,
};
