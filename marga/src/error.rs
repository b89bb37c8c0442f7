//! Error types for marga

use thiserror::Error;

use crate::config::ConfigLoadError;
use crate::io::MapParseError;
use crate::policy::PolicyError;
use crate::sim::SimError;

/// Marga error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("map error: {0}")]
    Map(#[from] MapParseError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("policy error: {0}")]
    Policy(#[from] PolicyError),

    #[error("simulation error: {0}")]
    Sim(#[from] SimError),
}

pub type Result<T> = std::result::Result<T, Error>;
