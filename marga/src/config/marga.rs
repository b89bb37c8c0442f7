//! Main MargaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigLoadError;
use super::sections::{PolicySection, SearchSection, SimulationSection};
use crate::pathfinding::SearchConfig;
use crate::policy::ValueIterationConfig;
use crate::sim::SimConfig;

/// Full marga configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct MargaConfig {
    /// Path search settings
    #[serde(default)]
    pub search: SearchSection,

    /// Value iteration settings
    #[serde(default)]
    pub policy: PolicySection,

    /// Simulation settings
    #[serde(default)]
    pub simulation: SimulationSection,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/marga.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/marga.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.search.max_open_nodes == 0 {
            return Err(ConfigLoadError::Invalid(
                "search.max_open_nodes must be at least 1".to_string(),
            ));
        }
        self.to_value_iteration_config()
            .validate()
            .map_err(|e| ConfigLoadError::Invalid(format!("policy: {}", e)))?;

        let slip = self.simulation.slip_probability;
        if !(0.0..=1.0).contains(&slip) {
            return Err(ConfigLoadError::Invalid(format!(
                "simulation.slip_probability must lie in [0, 1], got {}",
                slip
            )));
        }
        Ok(())
    }

    /// Convert to SearchConfig
    pub fn to_search_config(&self) -> SearchConfig {
        SearchConfig {
            mode: self.search.mode,
            max_open_nodes: self.search.max_open_nodes,
        }
    }

    /// Convert to ValueIterationConfig
    pub fn to_value_iteration_config(&self) -> ValueIterationConfig {
        ValueIterationConfig {
            discount: self.policy.discount,
            epsilon: self.policy.epsilon,
            max_sweeps: self.policy.max_sweeps,
            rewards: self.policy.rewards,
            transition: self.policy.transition,
        }
    }

    /// Convert to SimConfig
    pub fn to_simulation_config(&self) -> SimConfig {
        SimConfig {
            max_ticks: self.simulation.max_ticks,
            slip_probability: self.simulation.slip_probability,
            seed: self.simulation.seed,
        }
    }
}
