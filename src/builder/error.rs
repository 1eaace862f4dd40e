//! Build errors for flow machines and transitions.

use thiserror::Error;

/// Errors that can occur when building flow machines and transitions.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Transition from '{state}' loops back to itself")]
    SelfTransition { state: String },
}
