//! Core state machine types.
//!
//! This module contains the pure part of the wizard's page machine:
//! - State definitions via the `State` trait
//! - Guard predicates that gate transitions
//! - Immutable history of page changes
//!
//! Nothing here performs I/O or touches session data directly.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
