//! Double-buffered phase slot selection.
//!
//! The visual backend keeps two slots per approach and flips between them
//! every `2^frame_shift` frames. Each junction is offset by an amount
//! derived from its id so that junctions sharing a tick do not all flip on
//! the same frame.

use crate::config::{ConfigError, PhaseBufferConfig};
use crate::core::JunctionId;
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;

/// One of the two alternating visual buffer slots.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PhaseSlot {
    Zero,
    One,
}

impl PhaseSlot {
    fn from_bit(bit: u32) -> Self {
        if bit & 1 == 0 {
            PhaseSlot::Zero
        } else {
            PhaseSlot::One
        }
    }

    /// Selector value handed to the visual backend (0 or 1).
    pub fn index(self) -> u8 {
        match self {
            PhaseSlot::Zero => 0,
            PhaseSlot::One => 1,
        }
    }

    pub fn other(self) -> Self {
        match self {
            PhaseSlot::Zero => PhaseSlot::One,
            PhaseSlot::One => PhaseSlot::Zero,
        }
    }
}

impl fmt::Display for PhaseSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.index())
    }
}

/// Validated phase slot selector. A pure function of (junction, frame).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PhaseBuffer {
    frame_shift: u32,
    stagger_divisor: u32,
}

impl PhaseBuffer {
    pub fn new(config: PhaseBufferConfig) -> Result<Self, Vec<ConfigError>> {
        match config.check() {
            Validation::Success(_) => Ok(Self {
                frame_shift: config.frame_shift,
                stagger_divisor: config.stagger_divisor,
            }),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }

    /// Frame offset applied to `junction` before slot selection.
    pub fn offset(&self, junction: JunctionId) -> u32 {
        let shifted = u64::from(junction.0) << self.frame_shift;
        (shifted / u64::from(self.stagger_divisor)) as u32
    }

    /// Slot the backend is presenting at `frame`.
    pub fn current_slot(&self, junction: JunctionId, frame: u32) -> PhaseSlot {
        let local = frame.wrapping_sub(self.offset(junction));
        PhaseSlot::from_bit(local >> self.frame_shift)
    }

    /// The current slot followed by the one the backend flips to next.
    pub fn slots(&self, junction: JunctionId, frame: u32) -> [PhaseSlot; 2] {
        let now = self.current_slot(junction, frame);
        [now, now.other()]
    }
}

impl Default for PhaseBuffer {
    fn default() -> Self {
        let config = PhaseBufferConfig::default();
        Self {
            frame_shift: config.frame_shift,
            stagger_divisor: config.stagger_divisor,
        }
    }
}
