//! Page flow: the imperative shell around the pure core.
//!
//! The wizard mutates its session first and then lets the flow machine catch
//! up. Each transition carries a gate over the session; `sync` walks every
//! open gate in order and records the path in the machine's history.
//!
//! # Key Concepts
//!
//! - **Transitions**: source and target state plus an optional gate
//! - **State Machine**: follows open gates and tracks history
//! - **Step / apply**: `step` is pure, `apply_result` commits

mod machine;
mod transition;

pub use machine::{StateMachine, StepResult};
pub use transition::{Transition, TransitionError};
