//! Value iteration over the grid MDP.
//!
//! Each sweep is a synchronous (Jacobi) Bellman backup computed from the
//! previous sweep's utilities:
//!
//! ```text
//! U'(s) = R(s) + γ · max_a Σ P(s' | s, a) · U(s')
//! ```
//!
//! Pinned goal cells keep their reward as an absorbing value and walls keep
//! theirs; every other cell is backed up. Iteration stops once the largest
//! change in a sweep drops below `ε(1-γ)/γ`.

use std::collections::HashSet;

use log::{debug, trace, warn};

use super::error::PolicyError;
use super::extract::Policy;
use super::model::{RewardModel, TransitionModel};
use super::utility::UtilityMatrix;
use crate::core::{CellStatus, Position};
use crate::grid::Grid;

/// Value iteration configuration
#[derive(Clone, Debug, PartialEq)]
pub struct ValueIterationConfig {
    /// Discount factor γ, in (0, 1)
    pub discount: f64,
    /// Convergence threshold ε
    pub epsilon: f64,
    /// Sweeps before giving up with [`PolicyError::NotConverged`]
    pub max_sweeps: usize,
    pub rewards: RewardModel,
    pub transition: TransitionModel,
}

impl Default for ValueIterationConfig {
    fn default() -> Self {
        Self {
            discount: 0.95,
            epsilon: 0.0001,
            max_sweeps: 10_000,
            rewards: RewardModel::default(),
            transition: TransitionModel::default(),
        }
    }
}

impl ValueIterationConfig {
    /// Largest per-sweep change accepted as converged
    pub fn stop_bound(&self) -> f64 {
        self.epsilon * (1.0 - self.discount) / self.discount
    }

    /// Set the sweep cap
    pub fn with_max_sweeps(mut self, max_sweeps: usize) -> Self {
        self.max_sweeps = max_sweeps;
        self
    }

    /// Set the transition model
    pub fn with_transition(mut self, transition: TransitionModel) -> Self {
        self.transition = transition;
        self
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        if !(self.discount > 0.0 && self.discount < 1.0) {
            return Err(PolicyError::InvalidModel(format!(
                "discount must lie in (0, 1), got {}",
                self.discount
            )));
        }
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(PolicyError::InvalidModel(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        if self.max_sweeps == 0 {
            return Err(PolicyError::InvalidModel(
                "max_sweeps must be at least 1".to_string(),
            ));
        }
        self.rewards.validate()?;
        self.transition.validate()
    }
}

/// Output of a converged solve
#[derive(Clone, Debug)]
pub struct Solution {
    /// Converged utilities
    pub utilities: UtilityMatrix,
    /// Greedy policy over `utilities`
    pub policy: Policy,
    /// Cells pinned as absorbing goals
    pub terminals: Vec<Position>,
    /// Sweeps performed
    pub sweeps: usize,
    /// Largest utility change of each sweep, in order
    pub history: Vec<f64>,
}

impl Solution {
    /// Largest change in the final sweep
    pub fn final_change(&self) -> f64 {
        self.history.last().copied().unwrap_or(0.0)
    }
}

/// Value iteration solver
#[derive(Clone, Debug, Default)]
pub struct ValueIteration {
    config: ValueIterationConfig,
}

impl ValueIteration {
    pub fn new(config: ValueIterationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValueIterationConfig {
        &self.config
    }

    /// Solve with every Dirty and Target cell pinned as a goal
    pub fn solve_all(&self, grid: &Grid) -> Result<Solution, PolicyError> {
        let terminals = grid.goal_cells();
        debug!("[ValueIteration] solve_all: {} goal cells", terminals.len());
        self.solve(grid, terminals)
    }

    /// Solve with only `terminal` pinned; other goal cells are plain floor
    pub fn solve_single(&self, grid: &Grid, terminal: Position) -> Result<Solution, PolicyError> {
        if !grid.is_passable(terminal) {
            return Err(PolicyError::InvalidTerminal(terminal));
        }
        debug!("[ValueIteration] solve_single: terminal={}", terminal);
        self.solve(grid, vec![terminal])
    }

    fn solve(&self, grid: &Grid, terminals: Vec<Position>) -> Result<Solution, PolicyError> {
        self.config.validate()?;

        let config = &self.config;
        let bound = config.stop_bound();

        let pinned_cells: HashSet<Position> = terminals.iter().copied().collect();
        let mut frozen = vec![false; grid.cell_count()];
        let mut rewards = Vec::with_capacity(grid.cell_count());
        for (pos, status) in grid.iter() {
            let pinned = pinned_cells.contains(&pos);
            if pinned || status == CellStatus::Impassable {
                if let Some(i) = grid.index_of(pos) {
                    frozen[i] = true;
                }
            }
            rewards.push(config.rewards.reward(status, pinned));
        }

        let mut current = UtilityMatrix::from_values(grid.rows(), grid.cols(), rewards.clone());
        let mut next = current.clone();
        let mut history = Vec::new();

        for sweep in 1..=config.max_sweeps {
            let mut max_change: f64 = 0.0;
            for (i, value) in next.values_mut().iter_mut().enumerate() {
                if frozen[i] {
                    continue;
                }
                let pos = grid.position_of(i);
                let updated = rewards[i]
                    + config.discount * current.best_q(grid, pos, &config.transition);
                max_change = max_change.max((updated - current.values()[i]).abs());
                *value = updated;
            }
            std::mem::swap(&mut current, &mut next);
            history.push(max_change);
            trace!("[ValueIteration] sweep {}: max change {:.3e}", sweep, max_change);

            if max_change < bound {
                debug!(
                    "[ValueIteration] converged after {} sweeps (max change {:.3e} < {:.3e})",
                    sweep, max_change, bound
                );
                let policy = Policy::extract(grid, &current, &config.transition, &terminals);
                return Ok(Solution {
                    utilities: current,
                    policy,
                    terminals,
                    sweeps: sweep,
                    history,
                });
            }
        }

        let max_change = history.last().copied().unwrap_or(f64::INFINITY);
        warn!(
            "[ValueIteration] not converged after {} sweeps (max change {:.3e}, bound {:.3e})",
            config.max_sweeps, max_change, bound
        );
        Err(PolicyError::NotConverged {
            sweeps: config.max_sweeps,
            max_change,
            bound,
        })
    }
}

/// Solve with default parameters, every goal cell pinned
pub fn solve_all(grid: &Grid) -> Result<Solution, PolicyError> {
    ValueIteration::default().solve_all(grid)
}

/// Solve with default parameters for a single pinned terminal
pub fn solve_single(grid: &Grid, terminal: Position) -> Result<Solution, PolicyError> {
    ValueIteration::default().solve_single(grid, terminal)
}
