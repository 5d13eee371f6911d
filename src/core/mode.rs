//! Approach modes and the guarded cycle between them.
//!
//! The cycle is a table of transitions, each with an optional guard over
//! an [`Egress`] snapshot. The first transition whose source matches the
//! current mode and whose guard passes is taken, so rule order matters.

use super::guard::Guard;
use super::movement::Movement;
use crate::state_enum;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

state_enum! {
    /// Which movements of an approach can be steered independently.
    ///
    /// Movements that are not independently controllable are slaved to
    /// the through light.
    pub enum Mode {
        /// Left, through and right all follow through.
        Simple,
        /// Left is independent, right follows through.
        SingleLeft,
        /// Right is independent, left follows through.
        SingleRight,
        /// Every movement is independent.
        All,
    }
}

impl Mode {
    /// True when `movement` is forced to mirror the through light.
    pub fn slaves(self, movement: Movement) -> bool {
        match (self, movement) {
            (_, Movement::Through) => false,
            (Mode::Simple, _) => true,
            (Mode::SingleLeft, Movement::Right) => true,
            (Mode::SingleRight, Movement::Left) => true,
            _ => false,
        }
    }

    /// Advance to the next mode of the standard cycle.
    pub fn next(self, egress: &Egress) -> Mode {
        ModeCycle::standard().next(self, egress)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Simple
    }
}

/// Which outgoing directions exist for an approach at the moment of
/// asking.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Egress {
    pub left: bool,
    pub through: bool,
    pub right: bool,
}

impl Egress {
    pub fn new(left: bool, through: bool, right: bool) -> Self {
        Self {
            left,
            through,
            right,
        }
    }
}

/// One rule of the mode cycle.
#[derive(Clone, Debug)]
pub struct ModeTransition {
    pub from: Mode,
    pub to: Mode,
    pub guard: Option<Guard<Egress>>,
}

impl ModeTransition {
    pub fn new(from: Mode, to: Mode) -> Self {
        Self {
            from,
            to,
            guard: None,
        }
    }

    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Egress) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Check if this transition can fire from `current` (pure).
    pub fn can_execute(&self, current: Mode, egress: &Egress) -> bool {
        if current != self.from {
            return false;
        }
        self.guard.as_ref().is_none_or(|g| g.check(egress))
    }
}

static STANDARD: LazyLock<ModeCycle> = LazyLock::new(ModeCycle::build_standard);

/// Ordered transition table for mode cycling.
#[derive(Clone, Debug)]
pub struct ModeCycle {
    transitions: Vec<ModeTransition>,
}

impl ModeCycle {
    /// The cycle Simple → SingleLeft → SingleRight → All → Simple, with
    /// steps skipped or cut short when the geometry lacks the egress a
    /// mode would control. Built once and shared.
    pub fn standard() -> &'static ModeCycle {
        &STANDARD
    }

    fn build_standard() -> Self {
        Self {
            transitions: vec![
                ModeTransition::new(Mode::Simple, Mode::SingleRight).when(|e| !e.left),
                ModeTransition::new(Mode::Simple, Mode::SingleLeft),
                ModeTransition::new(Mode::SingleLeft, Mode::Simple)
                    .when(|e| !e.through || !e.right),
                ModeTransition::new(Mode::SingleLeft, Mode::SingleRight),
                ModeTransition::new(Mode::SingleRight, Mode::Simple).when(|e| !e.left),
                ModeTransition::new(Mode::SingleRight, Mode::All),
                ModeTransition::new(Mode::All, Mode::Simple),
            ],
        }
    }

    /// Mode reached from `current` given `egress`. A mode with no
    /// applicable rule falls back to `Simple`.
    pub fn next(&self, current: Mode, egress: &Egress) -> Mode {
        self.transitions
            .iter()
            .find(|t| t.can_execute(current, egress))
            .map_or(Mode::Simple, |t| t.to)
    }
}
