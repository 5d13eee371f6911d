//! Core State trait for signal state enumerations.
//!
//! Light colors and approach modes both implement this trait, which
//! provides pure methods for inspecting state properties without side
//! effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for closed signal state enumerations.
///
/// All methods are pure - no side effects. States are small `Copy`
/// values; invalid states are unrepresentable because every implementor
/// is a closed enum.
///
/// # Example
///
/// ```rust
/// use approach_signal::core::{LightColor, Mode, State};
///
/// assert_eq!(LightColor::RedToGreen.name(), "RedToGreen");
/// assert!(LightColor::Green.is_final());
/// assert!(!LightColor::GreenToRed.is_final());
/// assert!(!Mode::All.is_final());
/// ```
pub trait State:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str;

    /// Check if this is a terminal (settled) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
