//! Drivers that replay a fixed plan.
//!
//! [`PathDriver`] walks a search path one cell per tick; [`PolicyDriver`]
//! looks the current cell up in a policy. Both clean before moving when the
//! agent stands on a goal cell.

use log::debug;

use super::action::Action;
use super::AgentDriver;
use crate::core::Position;
use crate::grid::Grid;
use crate::policy::{Policy, PolicyError};

/// State of path following.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowState {
    /// Next waypoint is one step away
    Following,
    /// Every waypoint has been reached
    Complete,
    /// The agent is no longer next to the path
    Diverged,
}

/// Follows a path produced by search.
#[derive(Clone, Debug)]
pub struct PathDriver {
    path: Vec<Position>,
    /// Index of the next waypoint to reach
    cursor: usize,
    state: FollowState,
}

impl PathDriver {
    pub fn new(path: Vec<Position>) -> Self {
        let state = if path.is_empty() {
            FollowState::Complete
        } else {
            FollowState::Following
        };
        Self {
            path,
            cursor: 0,
            state,
        }
    }

    pub fn state(&self) -> FollowState {
        self.state
    }

    /// Waypoints not yet reached
    pub fn remaining(&self) -> &[Position] {
        self.path.get(self.cursor..).unwrap_or(&[])
    }

    /// Action for an agent at `position`, ignoring goal cells
    pub fn step(&mut self, position: Position) -> Action {
        // Waypoints equal to where we stand are reached
        while self.path.get(self.cursor) == Some(&position) {
            self.cursor += 1;
        }

        let Some(&next) = self.path.get(self.cursor) else {
            self.state = FollowState::Complete;
            return Action::Idle;
        };

        if position.manhattan_distance(&next) != 1 {
            debug!(
                "[PathDriver] diverged: at {} but next waypoint is {}",
                position, next
            );
            self.state = FollowState::Diverged;
            return Action::Idle;
        }

        self.state = FollowState::Following;
        position.direction_to(&next).into()
    }
}

impl AgentDriver for PathDriver {
    fn next_action(&mut self, position: Position, grid: &Grid) -> Result<Action, PolicyError> {
        if grid.status_at(position).is_goal() {
            return Ok(Action::Clean);
        }
        Ok(self.step(position))
    }
}

/// Follows a fixed policy.
#[derive(Clone, Debug)]
pub struct PolicyDriver {
    policy: Policy,
}

impl PolicyDriver {
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }
}

impl AgentDriver for PolicyDriver {
    fn next_action(&mut self, position: Position, grid: &Grid) -> Result<Action, PolicyError> {
        if grid.status_at(position).is_goal() {
            return Ok(Action::Clean);
        }
        Ok(self.policy.action_at(position).into())
    }
}
