//! Unified configuration loading for marga.
//!
//! Loads all configuration from a single YAML file. Missing sections and
//! fields take their defaults.

mod defaults;
mod error;
mod marga;
mod sections;

pub use error::ConfigLoadError;
pub use marga::MargaConfig;
pub use sections::{PolicySection, SearchSection, SimulationSection};
