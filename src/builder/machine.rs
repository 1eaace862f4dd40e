//! Builder for constructing flow machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::State;
use crate::flow::{StateMachine, Transition};

/// Builder for constructing flow machines with a fluent API.
pub struct StateMachineBuilder<S: State, C> {
    initial: Option<S>,
    transitions: Vec<Transition<S, C>>,
}

impl<S: State, C> StateMachineBuilder<S, C> {
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, C>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Build the machine.
    pub fn build(self) -> Result<StateMachine<S, C>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut machine = StateMachine::new(initial);
        for transition in self.transitions {
            machine.add_transition(transition);
        }

        Ok(machine)
    }
}

impl<S: State, C> Default for StateMachineBuilder<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestPage {
        Intro,
        Form,
        Thanks,
    }

    impl State for TestPage {
        fn name(&self) -> &str {
            match self {
                Self::Intro => "Intro",
                Self::Form => "Form",
                Self::Thanks => "Thanks",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Thanks)
        }
    }

    #[test]
    fn builder_requires_initial_state() {
        let result = StateMachineBuilder::<TestPage, ()>::new().build();
        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_transitions() {
        let result = StateMachineBuilder::<TestPage, ()>::new()
            .initial(TestPage::Intro)
            .build();

        assert!(matches!(result, Err(BuildError::NoTransitions)));
    }

    #[test]
    fn builder_propagates_transition_errors() {
        let result = StateMachineBuilder::<TestPage, ()>::new()
            .initial(TestPage::Intro)
            .transition(TransitionBuilder::new().from(TestPage::Intro));

        assert!(matches!(result, Err(BuildError::MissingToState)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = StateMachineBuilder::<TestPage, u8>::new()
            .initial(TestPage::Intro)
            .transition(
                TransitionBuilder::new()
                    .from(TestPage::Intro)
                    .to(TestPage::Form)
                    .when(|step: &u8| *step >= 1),
            )
            .unwrap()
            .transition(
                TransitionBuilder::new()
                    .from(TestPage::Form)
                    .to(TestPage::Thanks)
                    .when(|step: &u8| *step >= 2),
            )
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(machine.current_state(), &TestPage::Intro);
    }
}
