//! The approach signal: three movement lights under one mode.

use super::phase::PhaseBuffer;
use super::ports::{GeometryProvider, GroupLink, VisualSink};
use crate::core::{ApproachKey, LightColor, Lights, Mode, ModeCycle, Movement};
use crate::error::{Result, SignalError};
use std::fmt;

/// Traffic lights of one approach of one junction.
///
/// Stored colors can only change through methods on this type, and every
/// method that changes them re-applies the mode's slaving rule before it
/// returns. Every read (getters, queries, `Display`, `sync_visuals`) goes
/// through the same slaved view, so a movement the mode does not control
/// independently always reads as the through color, even for colors
/// seeded with [`new_explicit`](Self::new_explicit) before a mode was
/// chosen.
///
/// Collaborators are passed per call (`GeometryProvider`, `VisualSink`) or
/// held as a non-owning handle (`GroupLink`), so ownership stays acyclic.
#[derive(Clone, Debug)]
pub struct ApproachSignal<G: GroupLink> {
    key: ApproachKey,
    mode: Mode,
    lights: Lights,
    group: G,
    phase: PhaseBuffer,
}

impl<G: GroupLink> ApproachSignal<G> {
    /// All three movements showing `color`, mode `Simple`. Syncs visuals
    /// for `frame` before returning.
    pub fn new_uniform<V>(
        key: ApproachKey,
        color: LightColor,
        group: G,
        sink: &mut V,
        frame: u32,
    ) -> Result<Self>
    where
        V: VisualSink + ?Sized,
    {
        Self::with_phase_buffer(
            key,
            Lights::uniform(color),
            group,
            PhaseBuffer::default(),
            sink,
            frame,
        )
    }

    /// Movements seeded independently. The mode still starts at `Simple`;
    /// seeded colors of slaved movements are kept in storage and become
    /// visible once a mode that controls them is reached.
    pub fn new_explicit<V>(
        key: ApproachKey,
        lights: Lights,
        group: G,
        sink: &mut V,
        frame: u32,
    ) -> Result<Self>
    where
        V: VisualSink + ?Sized,
    {
        Self::with_phase_buffer(key, lights, group, PhaseBuffer::default(), sink, frame)
    }

    pub(crate) fn with_phase_buffer<V>(
        key: ApproachKey,
        lights: Lights,
        group: G,
        phase: PhaseBuffer,
        sink: &mut V,
        frame: u32,
    ) -> Result<Self>
    where
        V: VisualSink + ?Sized,
    {
        let signal = Self {
            key,
            mode: Mode::Simple,
            lights,
            group,
            phase,
        };
        signal.sync_visuals(sink, frame)?;
        Ok(signal)
    }

    pub fn key(&self) -> ApproachKey {
        self.key
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Colors as observed under the current mode.
    pub fn lights(&self) -> Lights {
        self.lights.slaved(self.mode)
    }

    pub fn color(&self, movement: Movement) -> LightColor {
        self.lights().get(movement)
    }

    pub fn left(&self) -> LightColor {
        self.color(Movement::Left)
    }

    pub fn through(&self) -> LightColor {
        self.color(Movement::Through)
    }

    pub fn right(&self) -> LightColor {
        self.color(Movement::Right)
    }

    /// Set one movement's color, then re-apply slaving.
    ///
    /// Setting through carries every slaved movement along. Setting a
    /// movement the mode slaves is accepted but the slaving rule wins: the
    /// movement keeps the through color. This differs
    /// from [`toggle_left`](Self::toggle_left) and
    /// [`toggle_right`](Self::toggle_right), which reject a slaved movement
    /// with [`SignalError::MovementSlaved`]. The group is notified once per
    /// stored color that actually changed.
    pub fn set_color(&mut self, movement: Movement, color: LightColor) {
        let next = self.lights.with(movement, color).slaved(self.mode);
        self.commit(next);
    }

    /// Advance the mode one step using fresh geometry answers.
    ///
    /// Geometry is queried before anything is changed; a failed query
    /// leaves mode and colors untouched. Colors the new mode slaves are
    /// overwritten with through (notifying the group). Visuals are not
    /// synced here.
    pub fn cycle_mode<P>(&mut self, geometry: &P) -> Result<()>
    where
        P: GeometryProvider + ?Sized,
    {
        let egress = geometry.egress(self.key.approach).inspect_err(|err| {
            tracing::warn!(key = %self.key, error = %err, "Geometry query failed, mode unchanged");
        })?;

        let next = ModeCycle::standard().next(self.mode, &egress);
        tracing::debug!(
            key = %self.key,
            from = %self.mode,
            to = %next,
            has_left = egress.left,
            has_through = egress.through,
            has_right = egress.right,
            "Cycling approach mode"
        );

        self.mode = next;
        self.commit(self.lights.slaved(next));
        Ok(())
    }

    /// Invert the through light, carrying slaved movements with it, and
    /// sync visuals.
    ///
    /// Fails with [`SignalError::InTransition`] if through is mid-change.
    pub fn toggle_through<V>(&mut self, sink: &mut V, frame: u32) -> Result<()>
    where
        V: VisualSink + ?Sized,
    {
        self.toggle(Movement::Through)?;
        self.sync_visuals(sink, frame)
    }

    /// Invert the left light and sync visuals. Only allowed when the
    /// mode controls left independently.
    pub fn toggle_left<V>(&mut self, sink: &mut V, frame: u32) -> Result<()>
    where
        V: VisualSink + ?Sized,
    {
        self.toggle(Movement::Left)?;
        self.sync_visuals(sink, frame)
    }

    /// Invert the right light and sync visuals. Only allowed when the
    /// mode controls right independently.
    pub fn toggle_right<V>(&mut self, sink: &mut V, frame: u32) -> Result<()>
    where
        V: VisualSink + ?Sized,
    {
        self.toggle(Movement::Right)?;
        self.sync_visuals(sink, frame)
    }

    fn toggle(&mut self, movement: Movement) -> Result<()> {
        if self.mode.slaves(movement) {
            return Err(SignalError::MovementSlaved {
                movement,
                mode: self.mode,
            });
        }
        let current = self.color(movement);
        let inverted = current.toggled().ok_or(SignalError::InTransition {
            movement,
            color: current,
        })?;
        self.set_color(movement, inverted);
        Ok(())
    }

    pub fn is_any_green(&self) -> bool {
        self.lights().any(LightColor::Green)
    }

    pub fn is_any_in_transition(&self) -> bool {
        self.lights().any_in_transition()
    }

    pub fn is_left_green(&self) -> bool {
        self.left().is_green()
    }

    pub fn is_through_green(&self) -> bool {
        self.through().is_green()
    }

    pub fn is_right_green(&self) -> bool {
        self.right().is_green()
    }

    /// Single vehicle color for backends with one signal head per
    /// approach. See [`Lights::aggregate`] for the priority order.
    pub fn resolve_aggregate_vehicle_state(&self) -> LightColor {
        self.lights().aggregate()
    }

    /// Push the resolved vehicle and pedestrian states into both phase
    /// slots, current slot first.
    ///
    /// Reads only: the vehicle state is resolved from the slaved view,
    /// the same one [`resolve_aggregate_vehicle_state`](Self::resolve_aggregate_vehicle_state)
    /// reports. The pedestrian state comes from the group and defaults to
    /// red.
    pub fn sync_visuals<V>(&self, sink: &mut V, frame: u32) -> Result<()>
    where
        V: VisualSink + ?Sized,
    {
        let vehicle = self.resolve_aggregate_vehicle_state();
        let pedestrian = self.group.pedestrian_state().unwrap_or(LightColor::Red);

        for slot in self.phase.slots(self.key.junction, frame) {
            tracing::trace!(
                key = %self.key,
                %slot,
                %vehicle,
                %pedestrian,
                frame,
                "Writing approach phase"
            );
            sink.write_phase(self.key.junction, self.key.approach, slot, vehicle, pedestrian)
                .inspect_err(|err| {
                    tracing::warn!(key = %self.key, %slot, error = %err, "Visual sink rejected phase write");
                })?;
        }
        Ok(())
    }

    /// Snap every transitional movement to its endpoint
    /// (RedToGreen → Green, GreenToRed → Red), then re-apply slaving.
    /// Notifies per change, does not sync visuals.
    pub fn force_settle(&mut self) {
        self.commit(self.lights.settled().slaved(self.mode));
    }

    /// Set every movement to red without notifying the group or syncing
    /// visuals.
    pub fn force_all_red(&mut self) {
        self.lights = Lights::uniform(LightColor::Red);
    }

    /// Store `next`, notifying the group once per movement that changed.
    fn commit(&mut self, next: Lights) {
        for movement in Movement::ALL {
            if self.lights.get(movement) != next.get(movement) {
                self.lights = self.lights.with(movement, next.get(movement));
                self.group.on_child_changed();
            }
        }
    }
}

impl<G: GroupLink> fmt::Display for ApproachSignal<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mode={}", self.lights(), self.mode)
    }
}
