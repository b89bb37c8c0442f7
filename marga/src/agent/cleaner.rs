//! Re-planning cleaning drivers.
//!
//! Each cleaner plans against the live grid, follows its plan, and plans
//! again when the plan runs out or the world moved under it. Goals walled
//! off from the agent are left out of planning.

use log::{debug, info, warn};

use super::action::Action;
use super::follower::{FollowState, PathDriver};
use super::{AgentDriver, PlanningStats};
use crate::core::Position;
use crate::grid::Grid;
use crate::pathfinding::{SearchPlanner, reachable_from};
use crate::policy::{Policy, PolicyError, ValueIteration, closest_reachable_goal};

/// Cleans by joint search through every reachable goal cell.
#[derive(Clone, Debug)]
pub struct SearchCleaner {
    planner: SearchPlanner,
    follower: Option<PathDriver>,
    /// Goal count when the last search failed; no retry until it changes
    failed_at: Option<usize>,
    stats: PlanningStats,
}

impl SearchCleaner {
    pub fn new(planner: SearchPlanner) -> Self {
        Self {
            planner,
            follower: None,
            failed_at: None,
            stats: PlanningStats::default(),
        }
    }

    fn plan(&mut self, position: Position, grid: &Grid) -> bool {
        let all_goals = grid.goal_cells();
        if all_goals.is_empty() || self.failed_at == Some(all_goals.len()) {
            return false;
        }

        let reachable = reachable_from(grid, position);
        let goals: Vec<Position> = all_goals
            .iter()
            .copied()
            .filter(|goal| reachable.contains(goal))
            .collect();
        if goals.is_empty() {
            warn!(
                "[SearchCleaner] all {} goals walled off from {}",
                all_goals.len(),
                position
            );
            self.failed_at = Some(all_goals.len());
            return false;
        }
        if goals.len() < all_goals.len() {
            debug!(
                "[SearchCleaner] skipping {} walled-off goals",
                all_goals.len() - goals.len()
            );
        }

        let result = self.planner.search(grid, position, goals.iter().copied());
        self.stats.planning_calls += 1;
        self.stats.nodes_opened += result.nodes_opened;

        if !result.found {
            warn!(
                "[SearchCleaner] no path through {} goals from {}: {:?}",
                goals.len(),
                position,
                result.failure_reason
            );
            self.failed_at = Some(all_goals.len());
            return false;
        }

        info!(
            "[SearchCleaner] planned {} moves through {} goals ({} states opened)",
            result.path_length(),
            goals.len(),
            result.nodes_opened
        );
        self.failed_at = None;
        self.follower = Some(PathDriver::new(result.path));
        true
    }
}

impl AgentDriver for SearchCleaner {
    fn next_action(&mut self, position: Position, grid: &Grid) -> Result<Action, PolicyError> {
        if grid.status_at(position).is_goal() {
            return Ok(Action::Clean);
        }

        if let Some(follower) = self.follower.as_mut() {
            let action = follower.step(position);
            if follower.state() == FollowState::Following {
                return Ok(action);
            }
            debug!("[SearchCleaner] path {:?}, replanning", follower.state());
            self.follower = None;
        }

        if !self.plan(position, grid) {
            return Ok(Action::Idle);
        }
        Ok(self
            .follower
            .as_mut()
            .map_or(Action::Idle, |f| f.step(position)))
    }

    fn stats(&self) -> PlanningStats {
        self.stats
    }
}

/// Cleans by following a single-target policy to the closest reachable goal.
///
/// The policy is re-solved whenever the number of goal cells changes.
#[derive(Clone, Debug)]
pub struct PolicyCleaner {
    solver: ValueIteration,
    policy: Option<Policy>,
    /// Goal count the current policy (or lack of one) was decided for
    solved_for: Option<usize>,
    stats: PlanningStats,
}

impl PolicyCleaner {
    pub fn new(solver: ValueIteration) -> Self {
        Self {
            solver,
            policy: None,
            solved_for: None,
            stats: PlanningStats::default(),
        }
    }

    /// Policy currently being followed
    pub fn policy(&self) -> Option<&Policy> {
        self.policy.as_ref()
    }
}

impl AgentDriver for PolicyCleaner {
    fn next_action(&mut self, position: Position, grid: &Grid) -> Result<Action, PolicyError> {
        if grid.status_at(position).is_goal() {
            return Ok(Action::Clean);
        }

        let goals = grid.counts().goals();
        if self.solved_for != Some(goals) {
            self.policy = None;
            self.solved_for = Some(goals);

            let Some(terminal) = closest_reachable_goal(grid, position) else {
                if goals > 0 {
                    warn!(
                        "[PolicyCleaner] all {} goals walled off from {}",
                        goals, position
                    );
                }
                return Ok(Action::Idle);
            };
            let solution = match self.solver.solve_single(grid, terminal) {
                Ok(solution) => solution,
                Err(e) => {
                    self.solved_for = None;
                    return Err(e);
                }
            };
            self.stats.planning_calls += 1;
            self.stats.sweeps += solution.sweeps as u64;
            info!(
                "[PolicyCleaner] solved for {} in {} sweeps ({} goals left)",
                terminal, solution.sweeps, goals
            );
            self.policy = Some(solution.policy);
        }

        Ok(self
            .policy
            .as_ref()
            .map_or(Action::Idle, |policy| policy.action_at(position).into()))
    }

    fn stats(&self) -> PlanningStats {
        self.stats
    }
}
