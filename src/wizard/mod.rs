//! Wizard controller and the actions it understands.

mod action;
mod controller;

pub use action::{Action, Outcome};
pub use controller::{page_flow, SessionSummary, Wizard};
