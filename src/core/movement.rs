//! Movements of an approach and the color triple they carry.

use super::color::LightColor;
use super::mode::Mode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three steerable signal slots of an approach.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Movement {
    Left,
    Through,
    Right,
}

impl Movement {
    pub const ALL: [Movement; 3] = [Movement::Left, Movement::Through, Movement::Right];
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Movement::Left => "left",
            Movement::Through => "through",
            Movement::Right => "right",
        };
        f.write_str(name)
    }
}

/// Colors of the left, through and right lights of one approach.
///
/// `Lights` is a plain value: it knows nothing about modes until asked
/// for a [`slaved`](Lights::slaved) projection.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Lights {
    pub left: LightColor,
    pub through: LightColor,
    pub right: LightColor,
}

impl Lights {
    /// Colors given in through, left, right order.
    pub fn new(through: LightColor, left: LightColor, right: LightColor) -> Self {
        Self {
            left,
            through,
            right,
        }
    }

    /// All three movements showing `color`.
    pub fn uniform(color: LightColor) -> Self {
        Self::new(color, color, color)
    }

    pub fn get(&self, movement: Movement) -> LightColor {
        match movement {
            Movement::Left => self.left,
            Movement::Through => self.through,
            Movement::Right => self.right,
        }
    }

    /// Copy of `self` with one movement replaced.
    pub fn with(mut self, movement: Movement, color: LightColor) -> Self {
        match movement {
            Movement::Left => self.left = color,
            Movement::Through => self.through = color,
            Movement::Right => self.right = color,
        }
        self
    }

    /// Iterate `(movement, color)` pairs in left, through, right order.
    pub fn iter(&self) -> impl Iterator<Item = (Movement, LightColor)> + '_ {
        Movement::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    /// Project the colors through `mode`: every movement the mode slaves
    /// is overwritten with the through color. Pure; `self` is untouched.
    pub fn slaved(&self, mode: Mode) -> Self {
        let mut projected = *self;
        if mode.slaves(Movement::Left) {
            projected.left = self.through;
        }
        if mode.slaves(Movement::Right) {
            projected.right = self.through;
        }
        projected
    }

    /// True when no slaved movement differs from through under `mode`.
    pub fn is_consistent_with(&self, mode: Mode) -> bool {
        self.slaved(mode) == *self
    }

    pub fn any(&self, color: LightColor) -> bool {
        self.iter().any(|(_, c)| c == color)
    }

    pub fn all(&self, color: LightColor) -> bool {
        self.iter().all(|(_, c)| c == color)
    }

    pub fn any_in_transition(&self) -> bool {
        self.iter().any(|(_, c)| c.is_transitional())
    }

    /// Every transitional color snapped to its endpoint.
    pub fn settled(&self) -> Self {
        Self {
            left: self.left.settled(),
            through: self.through.settled(),
            right: self.right.settled(),
        }
    }

    /// Resolve the three colors into one vehicle signal head.
    ///
    /// Priority: any Green wins, then all-Red, then any RedToGreen, and
    /// anything left over shows GreenToRed.
    ///
    /// ```rust
    /// use approach_signal::core::{LightColor, Lights};
    ///
    /// let lights = Lights::new(LightColor::Red, LightColor::RedToGreen, LightColor::GreenToRed);
    /// assert_eq!(lights.aggregate(), LightColor::RedToGreen);
    /// ```
    pub fn aggregate(&self) -> LightColor {
        if self.any(LightColor::Green) {
            LightColor::Green
        } else if self.all(LightColor::Red) {
            LightColor::Red
        } else if self.any(LightColor::RedToGreen) {
            LightColor::RedToGreen
        } else {
            LightColor::GreenToRed
        }
    }
}

impl fmt::Display for Lights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left={} through={} right={}",
            self.left, self.through, self.right
        )
    }
}
