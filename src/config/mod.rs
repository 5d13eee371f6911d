//! Signal configuration with accumulated validation.
//!
//! Configuration is validated with Stillwater's `Validation` type so that
//! every problem is reported in one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use approach_signal::config::{PhaseBufferConfig, SignalConfig};
//!
//! let config = SignalConfig {
//!     phase_buffer: PhaseBufferConfig {
//!         frame_shift: 40,
//!         stagger_divisor: 0,
//!     },
//! };
//!
//! let errors = config.validate().unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```

pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Frame counter shift used by the reference simulation (256-frame phases).
pub const DEFAULT_FRAME_SHIFT: u32 = 8;

/// Divisor spreading junction ids over phase offsets.
pub const DEFAULT_STAGGER_DIVISOR: u32 = 32768;

/// Settings for double-buffered phase slot selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseBufferConfig {
    /// Frames per phase, as a power of two.
    pub frame_shift: u32,
    pub stagger_divisor: u32,
}

impl Default for PhaseBufferConfig {
    fn default() -> Self {
        Self {
            frame_shift: DEFAULT_FRAME_SHIFT,
            stagger_divisor: DEFAULT_STAGGER_DIVISOR,
        }
    }
}

impl PhaseBufferConfig {
    /// Check every field, accumulating ALL violations.
    pub fn check(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = vec![
            if self.frame_shift >= u32::BITS {
                Validation::fail(ConfigError::FrameShiftTooLarge(self.frame_shift))
            } else {
                Validation::success(())
            },
            if self.stagger_divisor == 0 {
                Validation::fail(ConfigError::ZeroStaggerDivisor)
            } else {
                Validation::success(())
            },
        ];

        Validation::all_vec(checks).map(|_| ())
    }
}

/// Top-level configuration for an approach signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    pub phase_buffer: PhaseBufferConfig,
}

impl SignalConfig {
    /// Validate the whole configuration, returning every problem found.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        match self.phase_buffer.check() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }
}
