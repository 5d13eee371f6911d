//! Builder for constructing approach signals.

use crate::builder::error::BuildError;
use crate::config::SignalConfig;
use crate::core::{ApproachKey, LightColor, Lights};
use crate::signal::{ApproachSignal, Detached, GroupLink, PhaseBuffer, VisualSink};

/// Builder for approach signals with a fluent API.
///
/// Starts detached from any group; call [`group`](Self::group) to attach
/// one.
///
/// # Example
///
/// ```rust
/// use approach_signal::builder::ApproachSignalBuilder;
/// use approach_signal::core::{ApproachKey, LightColor};
/// use approach_signal::signal::{PhaseSlot, VisualSink};
/// use approach_signal::core::{ApproachId, JunctionId};
///
/// struct NullSink;
///
/// impl VisualSink for NullSink {
///     fn write_phase(
///         &mut self,
///         _junction: JunctionId,
///         _approach: ApproachId,
///         _slot: PhaseSlot,
///         _vehicle: LightColor,
///         _pedestrian: LightColor,
///     ) -> approach_signal::Result<()> {
///         Ok(())
///     }
/// }
///
/// let signal = ApproachSignalBuilder::new(ApproachKey::new(4, 1))
///     .uniform(LightColor::Green)
///     .build(&mut NullSink, 0)
///     .unwrap();
///
/// assert!(signal.is_any_green());
/// ```
pub struct ApproachSignalBuilder<G: GroupLink> {
    key: ApproachKey,
    lights: Option<Lights>,
    group: G,
    config: SignalConfig,
}

impl ApproachSignalBuilder<Detached> {
    /// Create a new builder for `key`.
    pub fn new(key: ApproachKey) -> Self {
        Self {
            key,
            lights: None,
            group: Detached,
            config: SignalConfig::default(),
        }
    }
}

impl<G: GroupLink> ApproachSignalBuilder<G> {
    /// Start with every movement showing `color`.
    pub fn uniform(mut self, color: LightColor) -> Self {
        self.lights = Some(Lights::uniform(color));
        self
    }

    /// Start with independently seeded movement colors.
    pub fn lights(mut self, lights: Lights) -> Self {
        self.lights = Some(lights);
        self
    }

    /// Attach the owning group.
    pub fn group<H: GroupLink>(self, group: H) -> ApproachSignalBuilder<H> {
        ApproachSignalBuilder {
            key: self.key,
            lights: self.lights,
            group,
            config: self.config,
        }
    }

    pub fn config(mut self, config: SignalConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the signal and run its initial visual sync for `frame`.
    pub fn build<V>(self, sink: &mut V, frame: u32) -> Result<ApproachSignal<G>, BuildError>
    where
        V: VisualSink + ?Sized,
    {
        let lights = self.lights.ok_or(BuildError::MissingColors)?;
        let phase = PhaseBuffer::new(self.config.phase_buffer).map_err(BuildError::InvalidConfig)?;

        let signal =
            ApproachSignal::with_phase_buffer(self.key, lights, self.group, phase, sink, frame)?;
        Ok(signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, PhaseBufferConfig};
    use crate::core::{ApproachId, JunctionId, Mode};
    use crate::error::{Result, SignalError};
    use crate::signal::PhaseSlot;
    use std::cell::Cell;

    #[derive(Default)]
    struct SlotSink {
        slots: Vec<PhaseSlot>,
    }

    impl VisualSink for SlotSink {
        fn write_phase(
            &mut self,
            _junction: JunctionId,
            _approach: ApproachId,
            slot: PhaseSlot,
            _vehicle: LightColor,
            _pedestrian: LightColor,
        ) -> Result<()> {
            self.slots.push(slot);
            Ok(())
        }
    }

    struct OfflineSink;

    impl VisualSink for OfflineSink {
        fn write_phase(
            &mut self,
            _junction: JunctionId,
            _approach: ApproachId,
            _slot: PhaseSlot,
            _vehicle: LightColor,
            _pedestrian: LightColor,
        ) -> Result<()> {
            Err(SignalError::dependency("visual sink", "renderer not ready"))
        }
    }

    #[derive(Default)]
    struct Group {
        changes: Cell<usize>,
    }

    impl GroupLink for Group {
        fn on_child_changed(&self) {
            self.changes.set(self.changes.get() + 1);
        }

        fn pedestrian_state(&self) -> Option<LightColor> {
            None
        }
    }

    #[test]
    fn builder_requires_colors() {
        let result = ApproachSignalBuilder::new(ApproachKey::new(1, 1)).build(&mut SlotSink::default(), 0);

        assert!(matches!(result, Err(BuildError::MissingColors)));
    }

    #[test]
    fn builder_rejects_invalid_config_with_every_problem() {
        let result = ApproachSignalBuilder::new(ApproachKey::new(1, 1))
            .uniform(LightColor::Red)
            .config(SignalConfig {
                phase_buffer: PhaseBufferConfig {
                    frame_shift: 40,
                    stagger_divisor: 0,
                },
            })
            .build(&mut SlotSink::default(), 0);

        match result {
            Err(BuildError::InvalidConfig(errors)) => {
                assert_eq!(
                    errors,
                    vec![ConfigError::FrameShiftTooLarge(40), ConfigError::ZeroStaggerDivisor]
                );
            }
            _ => panic!("Expected invalid config error"),
        }
    }

    #[test]
    fn builder_applies_custom_phase_length() {
        let mut sink = SlotSink::default();
        ApproachSignalBuilder::new(ApproachKey::new(0, 1))
            .uniform(LightColor::Red)
            .config(SignalConfig {
                phase_buffer: PhaseBufferConfig {
                    frame_shift: 2,
                    ..PhaseBufferConfig::default()
                },
            })
            .build(&mut sink, 4)
            .unwrap();

        assert_eq!(sink.slots, vec![PhaseSlot::One, PhaseSlot::Zero]);
    }

    #[test]
    fn builder_attaches_group() {
        let group = Group::default();
        let mut signal = ApproachSignalBuilder::new(ApproachKey::new(2, 5))
            .lights(Lights::new(LightColor::Red, LightColor::Green, LightColor::Red))
            .group(&group)
            .build(&mut SlotSink::default(), 0)
            .unwrap();

        assert_eq!(signal.mode(), Mode::Simple);
        signal.set_color(crate::core::Movement::Through, LightColor::Green);
        // left was already green; through and right change
        assert_eq!(group.changes.get(), 2);
    }

    #[test]
    fn builder_surfaces_initial_sync_failure() {
        let result = ApproachSignalBuilder::new(ApproachKey::new(1, 1))
            .uniform(LightColor::Green)
            .build(&mut OfflineSink, 0);

        assert!(matches!(result, Err(BuildError::InitialSync(_))));
    }
}
