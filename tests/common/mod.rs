//! Collaborator doubles shared by the integration tests.

#![allow(dead_code)]

use approach_signal::core::{ApproachId, JunctionId};
use approach_signal::signal::{GroupLink, PhaseSlot, VisualSink};
use approach_signal::{LightColor, Result};
use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseWrite {
    pub junction: JunctionId,
    pub approach: ApproachId,
    pub slot: PhaseSlot,
    pub vehicle: LightColor,
    pub pedestrian: LightColor,
}

#[derive(Default)]
pub struct RecordingSink {
    pub writes: Vec<PhaseWrite>,
}

impl VisualSink for RecordingSink {
    fn write_phase(
        &mut self,
        junction: JunctionId,
        approach: ApproachId,
        slot: PhaseSlot,
        vehicle: LightColor,
        pedestrian: LightColor,
    ) -> Result<()> {
        self.writes.push(PhaseWrite {
            junction,
            approach,
            slot,
            vehicle,
            pedestrian,
        });
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingGroup {
    pub changes: Cell<usize>,
    pub pedestrian: Cell<Option<LightColor>>,
}

impl GroupLink for RecordingGroup {
    fn on_child_changed(&self) {
        self.changes.set(self.changes.get() + 1);
    }

    fn pedestrian_state(&self) -> Option<LightColor> {
        self.pedestrian.get()
    }
}
