//! Reward and transition models for the cleaning MDP.

use serde::{Deserialize, Serialize};

use super::error::PolicyError;
use crate::core::{CellStatus, Direction};

/// Tolerance for probability sums
const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// Per-cell immediate rewards
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardModel {
    /// Reward of a pinned goal cell
    pub goal: f64,
    /// Reward of every other passable cell (cost of living)
    pub step: f64,
    /// Reward assigned to walls; never reached by a policy
    pub impassable: f64,
}

impl Default for RewardModel {
    fn default() -> Self {
        Self {
            goal: 1.0,
            step: -0.04,
            impassable: 0.0,
        }
    }
}

impl RewardModel {
    /// Reward of a cell. `pinned` marks the absorbing goal cells of this solve.
    #[inline]
    pub fn reward(&self, status: CellStatus, pinned: bool) -> f64 {
        match status {
            CellStatus::Impassable => self.impassable,
            _ if pinned => self.goal,
            _ => self.step,
        }
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        if !(self.goal.is_finite() && self.step.is_finite() && self.impassable.is_finite()) {
            return Err(PolicyError::InvalidModel(
                "rewards must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Stochastic motion model.
///
/// A move goes in the intended direction with probability `intended` and
/// drifts to each perpendicular side with probability `drift`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionModel {
    pub intended: f64,
    pub drift: f64,
}

impl Default for TransitionModel {
    fn default() -> Self {
        Self {
            intended: 0.8,
            drift: 0.1,
        }
    }
}

impl TransitionModel {
    /// Deterministic motion
    pub fn deterministic() -> Self {
        Self {
            intended: 1.0,
            drift: 0.0,
        }
    }

    /// Outcome directions with their probabilities for one intended move
    pub fn outcomes(&self, direction: Direction) -> [(Direction, f64); 3] {
        let [a, b] = direction.perpendicular();
        [(direction, self.intended), (a, self.drift), (b, self.drift)]
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        let in_range = |p: f64| (0.0..=1.0).contains(&p);
        if !in_range(self.intended) || !in_range(self.drift) {
            return Err(PolicyError::InvalidModel(format!(
                "transition probabilities must lie in [0, 1] (intended={}, drift={})",
                self.intended, self.drift
            )));
        }
        let total = self.intended + 2.0 * self.drift;
        if (total - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(PolicyError::InvalidModel(format!(
                "intended + 2 * drift must equal 1 (got {})",
                total
            )));
        }
        Ok(())
    }
}
