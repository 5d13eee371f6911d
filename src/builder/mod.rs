//! Builder API for ergonomic signal construction.
//!
//! This module provides a fluent builder for approach signals with a
//! non-default configuration, and the `state_enum!` macro used to declare
//! closed state enumerations.

pub mod error;
pub mod macros;
pub mod signal;

pub use error::BuildError;
pub use signal::ApproachSignalBuilder;
