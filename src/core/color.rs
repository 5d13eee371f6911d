//! Light colors and the pure color transitions built on them.

use crate::state_enum;

state_enum! {
    /// Color shown by a single movement light.
    ///
    /// `RedToGreen` and `GreenToRed` mark a change that is in progress
    /// (the caution phase); only `Red` and `Green` are terminal.
    pub enum LightColor {
        Red,
        RedToGreen,
        Green,
        GreenToRed,
    }
    final: [Red, Green]
}

impl LightColor {
    pub fn is_green(self) -> bool {
        self == LightColor::Green
    }

    pub fn is_red(self) -> bool {
        self == LightColor::Red
    }

    /// True for `RedToGreen` and `GreenToRed`.
    pub fn is_transitional(self) -> bool {
        matches!(self, LightColor::RedToGreen | LightColor::GreenToRed)
    }

    /// Snap a transitional color to the endpoint it is heading for.
    /// Terminal colors are returned unchanged.
    pub fn settled(self) -> Self {
        match self {
            LightColor::RedToGreen => LightColor::Green,
            LightColor::GreenToRed => LightColor::Red,
            terminal => terminal,
        }
    }

    /// Invert a terminal color. Returns `None` while a change is in
    /// progress, since there is no single opposite of a caution phase.
    pub fn toggled(self) -> Option<Self> {
        match self {
            LightColor::Green => Some(LightColor::Red),
            LightColor::Red => Some(LightColor::Green),
            LightColor::RedToGreen | LightColor::GreenToRed => None,
        }
    }
}

impl Default for LightColor {
    fn default() -> Self {
        LightColor::Red
    }
}

/// Map an aggregate vehicle state to the pedestrian state shown with it.
///
/// This is a fixed pairing table: terminal colors swap with each other,
/// and so do the two transitional colors. Applying it twice returns the
/// original color.
///
/// ```rust
/// use approach_signal::core::{resolve_pedestrian_state, LightColor};
///
/// assert_eq!(resolve_pedestrian_state(LightColor::Red), LightColor::Green);
/// assert_eq!(
///     resolve_pedestrian_state(LightColor::RedToGreen),
///     LightColor::GreenToRed
/// );
/// ```
pub fn resolve_pedestrian_state(vehicle: LightColor) -> LightColor {
    match vehicle {
        LightColor::Red => LightColor::Green,
        LightColor::Green => LightColor::Red,
        LightColor::RedToGreen => LightColor::GreenToRed,
        LightColor::GreenToRed => LightColor::RedToGreen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_resolves_transitional_colors() {
        assert_eq!(LightColor::RedToGreen.settled(), LightColor::Green);
        assert_eq!(LightColor::GreenToRed.settled(), LightColor::Red);
        assert_eq!(LightColor::Red.settled(), LightColor::Red);
        assert_eq!(LightColor::Green.settled(), LightColor::Green);
    }

    #[test]
    fn toggled_only_inverts_terminal_colors() {
        assert_eq!(LightColor::Green.toggled(), Some(LightColor::Red));
        assert_eq!(LightColor::Red.toggled(), Some(LightColor::Green));
        assert_eq!(LightColor::RedToGreen.toggled(), None);
        assert_eq!(LightColor::GreenToRed.toggled(), None);
    }

    #[test]
    fn pedestrian_pairing_table() {
        assert_eq!(resolve_pedestrian_state(LightColor::Red), LightColor::Green);
        assert_eq!(resolve_pedestrian_state(LightColor::Green), LightColor::Red);
        assert_eq!(
            resolve_pedestrian_state(LightColor::RedToGreen),
            LightColor::GreenToRed
        );
        assert_eq!(
            resolve_pedestrian_state(LightColor::GreenToRed),
            LightColor::RedToGreen
        );
    }

    #[test]
    fn transitional_flags() {
        assert!(LightColor::RedToGreen.is_transitional());
        assert!(LightColor::GreenToRed.is_transitional());
        assert!(!LightColor::Red.is_transitional());
        assert!(!LightColor::Green.is_transitional());
    }

    #[test]
    fn default_color_is_red() {
        assert_eq!(LightColor::default(), LightColor::Red);
    }
}
