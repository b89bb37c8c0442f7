//! Cleaning simulation.
//!
//! Executes driver actions on an owned grid, one per tick, with optional
//! slip noise on moves.

mod simulation;
mod slip;

pub use simulation::{SimReport, Simulation};
pub use slip::SlipModel;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::agent::{AgentDriver, PolicyCleaner, SearchCleaner};
use crate::core::Position;
use crate::pathfinding::{SearchConfig, SearchPlanner};
use crate::policy::{PolicyError, ValueIteration, ValueIterationConfig};

/// Simulation error type
#[derive(Error, Debug)]
pub enum SimError {
    #[error("map has no agent start position")]
    NoAgentStart,

    #[error("agent start {0} is impassable")]
    StartBlocked(Position),

    #[error("planning failed: {0}")]
    Planning(#[from] PolicyError),
}

/// How the simulated agent plans
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Joint-target search through all goals
    #[default]
    Search,
    /// Value-iteration policy towards the closest goal
    Policy,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "search" => Ok(Strategy::Search),
            "policy" => Ok(Strategy::Policy),
            other => Err(format!("unknown strategy '{}' (expected search or policy)", other)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Search => write!(f, "search"),
            Strategy::Policy => write!(f, "policy"),
        }
    }
}

/// Simulation configuration
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Tick budget
    pub max_ticks: u64,
    /// Chance that a move drifts sideways
    pub slip_probability: f64,
    /// RNG seed (0 = seed from the OS)
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_ticks: 1_000,
            slip_probability: 0.0,
            seed: 0,
        }
    }
}

/// Build the re-planning driver for a strategy
pub fn driver_for(
    strategy: Strategy,
    search: SearchConfig,
    policy: ValueIterationConfig,
) -> Box<dyn AgentDriver> {
    match strategy {
        Strategy::Search => Box::new(SearchCleaner::new(SearchPlanner::new(search))),
        Strategy::Policy => Box::new(PolicyCleaner::new(ValueIteration::new(policy))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parse() {
        assert_eq!("search".parse::<Strategy>(), Ok(Strategy::Search));
        assert_eq!("Policy".parse::<Strategy>(), Ok(Strategy::Policy));
        assert!("random".parse::<Strategy>().is_err());
        assert_eq!(Strategy::Policy.to_string(), "policy");
    }
}
