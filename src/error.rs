//! Errors raised by approach signal operations.

use crate::core::{LightColor, Mode, Movement};
use thiserror::Error;

/// Errors that can occur while operating an approach signal.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SignalError {
    /// An external collaborator (geometry, visual sink) could not answer.
    #[error("{collaborator} unavailable: {reason}")]
    DependencyUnavailable {
        collaborator: &'static str,
        reason: String,
    },

    #[error("Cannot toggle {movement} light while it is {color}")]
    InTransition {
        movement: Movement,
        color: LightColor,
    },

    #[error("Cannot toggle {movement} light independently in {mode} mode")]
    MovementSlaved { movement: Movement, mode: Mode },
}

impl SignalError {
    pub fn dependency(collaborator: &'static str, reason: impl Into<String>) -> Self {
        SignalError::DependencyUnavailable {
            collaborator,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SignalError>;
