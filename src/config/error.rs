//! Configuration error types.

use thiserror::Error;

/// Problems found while validating a signal configuration
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Shifting a 32-bit frame counter by this much leaves nothing
    #[error("frame_shift must be below 32 (got {0})")]
    FrameShiftTooLarge(u32),

    #[error("stagger_divisor must be non-zero")]
    ZeroStaggerDivisor,
}
