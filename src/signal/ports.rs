//! Interfaces to the collaborators an approach signal talks to.
//!
//! None of these are owned by the signal. Geometry and the visual sink are
//! passed to each operation that needs them; the group link is a
//! non-owning capability handle held for the signal's lifetime.

use super::phase::PhaseSlot;
use crate::core::{ApproachId, Egress, JunctionId, LightColor};
use crate::error::Result;
use std::rc::Rc;
use std::sync::Arc;

/// Read-only road geometry queries for one junction.
///
/// Answers may change between calls; callers must not cache them.
pub trait GeometryProvider {
    fn has_left_egress(&self, approach: ApproachId) -> Result<bool>;
    fn has_through_egress(&self, approach: ApproachId) -> Result<bool>;
    fn has_right_egress(&self, approach: ApproachId) -> Result<bool>;

    /// Query all three directions. Fails on the first unanswered query.
    fn egress(&self, approach: ApproachId) -> Result<Egress> {
        Ok(Egress {
            left: self.has_left_egress(approach)?,
            through: self.has_through_egress(approach)?,
            right: self.has_right_egress(approach)?,
        })
    }
}

/// Backend that renders a resolved approach state into a phase slot.
pub trait VisualSink {
    fn write_phase(
        &mut self,
        junction: JunctionId,
        approach: ApproachId,
        slot: PhaseSlot,
        vehicle: LightColor,
        pedestrian: LightColor,
    ) -> Result<()>;
}

/// Capability handle back to the group that owns a signal.
///
/// Methods take `&self`: a group that records notifications does so
/// through interior mutability.
pub trait GroupLink {
    /// Called once for each stored movement color that changes.
    fn on_child_changed(&self);

    /// Pedestrian light paired with this approach, if the group has one.
    fn pedestrian_state(&self) -> Option<LightColor>;
}

impl<T: GroupLink + ?Sized> GroupLink for &T {
    fn on_child_changed(&self) {
        (**self).on_child_changed()
    }

    fn pedestrian_state(&self) -> Option<LightColor> {
        (**self).pedestrian_state()
    }
}

impl<T: GroupLink + ?Sized> GroupLink for Rc<T> {
    fn on_child_changed(&self) {
        (**self).on_child_changed()
    }

    fn pedestrian_state(&self) -> Option<LightColor> {
        (**self).pedestrian_state()
    }
}

impl<T: GroupLink + ?Sized> GroupLink for Arc<T> {
    fn on_child_changed(&self) {
        (**self).on_child_changed()
    }

    fn pedestrian_state(&self) -> Option<LightColor> {
        (**self).pedestrian_state()
    }
}

/// Group link for signals that have no owning group: notifications are
/// dropped and the pedestrian light is unset.
#[derive(Clone, Copy, Debug, Default)]
pub struct Detached;

impl GroupLink for Detached {
    fn on_child_changed(&self) {}

    fn pedestrian_state(&self) -> Option<LightColor> {
        None
    }
}

impl<S: VisualSink + ?Sized> VisualSink for &mut S {
    fn write_phase(
        &mut self,
        junction: JunctionId,
        approach: ApproachId,
        slot: PhaseSlot,
        vehicle: LightColor,
        pedestrian: LightColor,
    ) -> Result<()> {
        (**self).write_phase(junction, approach, slot, vehicle, pedestrian)
    }
}

impl<G: GeometryProvider + ?Sized> GeometryProvider for &G {
    fn has_left_egress(&self, approach: ApproachId) -> Result<bool> {
        (**self).has_left_egress(approach)
    }

    fn has_through_egress(&self, approach: ApproachId) -> Result<bool> {
        (**self).has_through_egress(approach)
    }

    fn has_right_egress(&self, approach: ApproachId) -> Result<bool> {
        (**self).has_right_egress(approach)
    }
}

/// Geometry answering from a fixed [`Egress`] snapshot.
impl GeometryProvider for Egress {
    fn has_left_egress(&self, _approach: ApproachId) -> Result<bool> {
        Ok(self.left)
    }

    fn has_through_egress(&self, _approach: ApproachId) -> Result<bool> {
        Ok(self.through)
    }

    fn has_right_egress(&self, _approach: ApproachId) -> Result<bool> {
        Ok(self.right)
    }
}
