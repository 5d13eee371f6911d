//! Approach signal: the traffic lights of one junction approach.
//!
//! An approach carries up to three independently steerable movement
//! lights (left, through, right). Its [`Mode`](core::Mode) decides which of
//! them can be controlled on their own; the rest are slaved to the through
//! light. The crate follows a "pure core, imperative shell" layout:
//!
//! - [`core`]: colors, modes, the color triple and its slaving projection,
//!   aggregate and pedestrian resolution, the guarded mode cycle
//! - [`signal`]: [`ApproachSignal`] and the collaborator traits it talks to
//! - [`config`]: phase-buffer timing, validated with accumulated errors
//! - [`builder`]: fluent construction and the `state_enum!` macro
//!
//! # Example
//!
//! ```rust
//! use approach_signal::core::{ApproachId, ApproachKey, Egress, JunctionId, LightColor, Mode};
//! use approach_signal::signal::{Detached, PhaseSlot, VisualSink};
//! use approach_signal::ApproachSignal;
//!
//! #[derive(Default)]
//! struct Frames(Vec<(PhaseSlot, LightColor)>);
//!
//! impl VisualSink for Frames {
//!     fn write_phase(
//!         &mut self,
//!         _junction: JunctionId,
//!         _approach: ApproachId,
//!         slot: PhaseSlot,
//!         vehicle: LightColor,
//!         _pedestrian: LightColor,
//!     ) -> approach_signal::Result<()> {
//!         self.0.push((slot, vehicle));
//!         Ok(())
//!     }
//! }
//!
//! let mut sink = Frames::default();
//! let mut signal =
//!     ApproachSignal::new_uniform(ApproachKey::new(7, 2), LightColor::Red, Detached, &mut sink, 0)
//!         .unwrap();
//!
//! signal.cycle_mode(&Egress::new(true, true, true)).unwrap();
//! assert_eq!(signal.mode(), Mode::SingleLeft);
//!
//! signal.toggle_left(&mut sink, 1).unwrap();
//! assert!(signal.is_left_green());
//! assert_eq!(signal.resolve_aggregate_vehicle_state(), LightColor::Green);
//! assert_eq!(sink.0.len(), 4);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod error;
pub mod signal;

// Re-export commonly used types
pub use crate::core::{resolve_pedestrian_state, LightColor, Lights, Mode, Movement, State};
pub use error::{Result, SignalError};
pub use signal::ApproachSignal;
