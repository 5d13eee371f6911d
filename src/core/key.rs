//! Opaque identifiers assigned by the surrounding simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct JunctionId(pub u32);

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct ApproachId(pub u32);

/// Identifies one approach of one junction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ApproachKey {
    pub junction: JunctionId,
    pub approach: ApproachId,
}

impl ApproachKey {
    pub fn new(junction: u32, approach: u32) -> Self {
        Self {
            junction: JunctionId(junction),
            approach: ApproachId(approach),
        }
    }
}

impl fmt::Display for JunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "junction {}", self.0)
    }
}

impl fmt::Display for ApproachId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "approach {}", self.0)
    }
}

impl fmt::Display for ApproachKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.approach, self.junction)
    }
}
