//! Builder for constructing gated transitions.

use crate::builder::error::BuildError;
use crate::core::{Guard, State};
use crate::flow::Transition;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State, C> {
    from: Option<S>,
    to: Option<S>,
    gate: Option<Guard<C>>,
}

impl<S: State, C> TransitionBuilder<S, C> {
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            gate: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Attach a gate from a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.gate = Some(Guard::new(predicate));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, C>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        if from == to {
            return Err(BuildError::SelfTransition {
                state: from.name().to_string(),
            });
        }

        Ok(Transition {
            from,
            to,
            gate: self.gate,
        })
    }
}

impl<S: State, C> Default for TransitionBuilder<S, C> {
    fn default() -> Self {
        Self::new()
    }
}
