//! Build errors for the approach signal builder.

use crate::config::ConfigError;
use crate::error::SignalError;
use thiserror::Error;

/// Errors that can occur when building an approach signal.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial colors not specified. Call .uniform(color) or .lights(lights) before .build()")]
    MissingColors,

    #[error("Invalid signal configuration ({} problem(s)): {}", .0.len(), join(.0))]
    InvalidConfig(Vec<ConfigError>),

    #[error("Initial visual sync failed: {0}")]
    InitialSync(#[from] SignalError),
}

fn join(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
