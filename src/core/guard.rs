//! Guard predicates for controlling mode transitions.
//!
//! Guards are pure boolean functions over some input (for the mode cycle,
//! an [`Egress`](super::Egress) snapshot) that decide whether a
//! transition may be taken.

use std::fmt;
use std::sync::Arc;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use approach_signal::core::{Egress, Guard};
///
/// let needs_left = Guard::new(|egress: &Egress| egress.left);
///
/// assert!(needs_left.check(&Egress::new(true, true, false)));
/// assert!(!needs_left.check(&Egress::new(false, true, true)));
/// ```
pub struct Guard<T> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be pure (deterministic, no side effects) and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows the transition for this input.
    pub fn check(&self, input: &T) -> bool {
        (self.predicate)(input)
    }
}

impl<T> Clone for Guard<T> {
    fn clone(&self) -> Self {
        Guard {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
