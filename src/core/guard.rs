//! Guard predicates for gating page transitions.
//!
//! A guard is a pure boolean function over whatever the flow inspects.
//! Wizard gates look at the session record, not at the page itself: the page
//! only advances once the session flag behind it has been raised.

use std::fmt;
use std::sync::Arc;

/// Pure predicate that decides whether a transition may fire.
///
/// # Example
///
/// ```rust
/// use talent_wizard::core::Guard;
///
/// struct Form {
///     submitted: bool,
/// }
///
/// let gate = Guard::new(|form: &Form| form.submitted);
///
/// assert!(gate.check(&Form { submitted: true }));
/// assert!(!gate.check(&Form { submitted: false }));
/// ```
pub struct Guard<T> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows the transition for this value.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T> Clone for Guard<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Flags {
        picked: bool,
        uploaded: bool,
    }

    #[test]
    fn guard_follows_predicate() {
        let guard = Guard::new(|f: &Flags| f.picked);

        assert!(!guard.check(&Flags::default()));
        assert!(guard.check(&Flags {
            picked: true,
            ..Flags::default()
        }));
    }

    #[test]
    fn guard_can_combine_fields() {
        let guard = Guard::new(|f: &Flags| f.picked && f.uploaded);

        assert!(!guard.check(&Flags {
            picked: true,
            uploaded: false,
        }));
        assert!(guard.check(&Flags {
            picked: true,
            uploaded: true,
        }));
    }

    #[test]
    fn guard_is_deterministic() {
        let flags = Flags {
            picked: true,
            uploaded: false,
        };
        let guard = Guard::new(|f: &Flags| f.picked);

        assert_eq!(guard.check(&flags), guard.check(&flags));
    }

    #[test]
    fn cloned_guard_shares_predicate() {
        let guard = Guard::new(|f: &Flags| f.uploaded);
        let cloned = guard.clone();
        let flags = Flags {
            picked: false,
            uploaded: true,
        };

        assert_eq!(guard.check(&flags), cloned.check(&flags));
    }
}
