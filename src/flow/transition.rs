//! Gated transitions between pages.

use crate::core::{Guard, State};

/// Errors raised while stepping the flow machine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransitionError {
    #[error("No transition available from state '{from}'")]
    NoTransition { from: String },

    #[error("Flow did not settle after {steps} steps starting from '{from}'")]
    Unsettled { from: String, steps: usize },
}

/// A transition from one state to another, opened by a gate over the
/// context `C` the machine is stepped against.
pub struct Transition<S: State, C> {
    pub from: S,
    pub to: S,
    pub gate: Option<Guard<C>>,
}

impl<S: State, C> Transition<S, C> {
    /// Check if this transition can fire from `current` given `context` (pure).
    pub fn can_execute(&self, current: &S, context: &C) -> bool {
        if *current != self.from {
            return false;
        }

        self.gate.as_ref().is_none_or(|g| g.check(context))
    }
}

impl<S: State, C> Clone for Transition<S, C> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            gate: self.gate.clone(),
        }
    }
}
