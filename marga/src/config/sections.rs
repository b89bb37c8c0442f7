//! Configuration sections.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::pathfinding::SearchMode;
use crate::policy::{RewardModel, TransitionModel};
use crate::sim::Strategy;

/// Search settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchSection {
    /// Joint search frontier: bfs or astar
    #[serde(default = "defaults::search_mode")]
    pub mode: SearchMode,

    /// States opened before a search gives up
    #[serde(default = "defaults::max_open_nodes")]
    pub max_open_nodes: u64,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            mode: defaults::search_mode(),
            max_open_nodes: defaults::max_open_nodes(),
        }
    }
}

/// Value iteration settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PolicySection {
    /// Discount factor γ
    #[serde(default = "defaults::discount")]
    pub discount: f64,

    /// Convergence threshold ε
    #[serde(default = "defaults::epsilon")]
    pub epsilon: f64,

    /// Sweep cap
    #[serde(default = "defaults::max_sweeps")]
    pub max_sweeps: usize,

    /// Missing reward keys keep their [`RewardModel::default`] values
    #[serde(default)]
    pub rewards: RewardModel,

    #[serde(default)]
    pub transition: TransitionModel,
}

impl Default for PolicySection {
    fn default() -> Self {
        Self {
            discount: defaults::discount(),
            epsilon: defaults::epsilon(),
            max_sweeps: defaults::max_sweeps(),
            rewards: RewardModel::default(),
            transition: TransitionModel::default(),
        }
    }
}

/// Simulation settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationSection {
    #[serde(default = "defaults::strategy")]
    pub strategy: Strategy,

    #[serde(default = "defaults::max_ticks")]
    pub max_ticks: u64,

    /// Chance a move drifts sideways (0 = deterministic)
    #[serde(default)]
    pub slip_probability: f64,

    /// RNG seed (0 = seed from the OS)
    #[serde(default)]
    pub seed: u64,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            strategy: defaults::strategy(),
            max_ticks: defaults::max_ticks(),
            slip_probability: 0.0,
            seed: 0,
        }
    }
}
