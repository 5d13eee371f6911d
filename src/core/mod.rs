//! Pure signal core.
//!
//! This module contains everything about an approach's lights that can be
//! decided without talking to the outside world:
//! - State enumerations via the `State` trait (`LightColor`, `Mode`)
//! - The three-movement color triple and its slaving projection
//! - Aggregate vehicle and paired pedestrian resolution
//! - The guarded mode cycle
//!
//! All logic in this module is pure (no side effects). The
//! [`signal`](crate::signal) module wraps it with collaborator calls.

mod color;
mod guard;
mod key;
mod mode;
mod movement;
mod state;

pub use color::{resolve_pedestrian_state, LightColor};
pub use guard::Guard;
pub use key::{ApproachId, ApproachKey, JunctionId};
pub use mode::{Egress, Mode, ModeCycle, ModeTransition};
pub use movement::{Lights, Movement};
pub use state::State;
