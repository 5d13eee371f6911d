//! Imperative shell around the pure core.
//!
//! [`ApproachSignal`] owns the three movement colors and the mode of one
//! approach. It talks to the world only through the traits in this
//! module:
//!
//! - [`GeometryProvider`]: which egress directions exist (mode cycling)
//! - [`VisualSink`]: receives the resolved vehicle/pedestrian state for
//!   both phase slots on every sync
//! - [`GroupLink`]: change notifications and the paired pedestrian light
//!
//! Everything runs synchronously on the caller's thread. No operation
//! blocks, retries or spawns background work; a collaborator failure is
//! returned as [`SignalError::DependencyUnavailable`](crate::SignalError).

mod approach;
mod phase;
mod ports;

pub use approach::ApproachSignal;
pub use phase::{PhaseBuffer, PhaseSlot};
pub use ports::{Detached, GeometryProvider, GroupLink, VisualSink};
