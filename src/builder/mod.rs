//! Builder API for assembling page flows.
//!
//! Fluent builders and a macro for declaring page enums and the gated
//! transitions between them.
//!
//! # Example
//!
//! ```
//! use talent_wizard::builder::{StateMachineBuilder, TransitionBuilder};
//! use talent_wizard::state_enum;
//!
//! state_enum! {
//!     enum Signup {
//!         Email,
//!         Verified,
//!     }
//!     final: [Verified]
//! }
//!
//! let mut flow = StateMachineBuilder::new()
//!     .initial(Signup::Email)
//!     .transition(
//!         TransitionBuilder::new()
//!             .from(Signup::Email)
//!             .to(Signup::Verified)
//!             .when(|clicked: &bool| *clicked),
//!     )
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! assert!(flow.sync(&false, "wait").unwrap().is_empty());
//! assert_eq!(flow.sync(&true, "click").unwrap(), vec![Signup::Verified]);
//! ```

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;
