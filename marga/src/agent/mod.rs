//! Agent drivers.
//!
//! A driver turns the agent's current cell and the live grid into exactly one
//! [`Action`] per tick. Standing on a Dirty or Target cell always yields
//! [`Action::Clean`] first.
//!
//! - [`PathDriver`] / [`PolicyDriver`]: replay a fixed plan
//! - [`SearchCleaner`] / [`PolicyCleaner`]: plan, follow, re-plan

mod action;
mod cleaner;
mod follower;

pub use action::Action;
pub use cleaner::{PolicyCleaner, SearchCleaner};
pub use follower::{FollowState, PathDriver, PolicyDriver};

use crate::core::Position;
use crate::grid::Grid;
use crate::policy::PolicyError;

/// Planning effort spent by a driver
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlanningStats {
    /// Searches or solves started
    pub planning_calls: u64,
    /// Search states opened across all searches
    pub nodes_opened: u64,
    /// Value-iteration sweeps across all solves
    pub sweeps: u64,
}

/// Chooses one action per tick.
pub trait AgentDriver {
    /// Action for an agent standing at `position`
    fn next_action(&mut self, position: Position, grid: &Grid) -> Result<Action, PolicyError>;

    /// Planning effort so far
    fn stats(&self) -> PlanningStats {
        PlanningStats::default()
    }
}
