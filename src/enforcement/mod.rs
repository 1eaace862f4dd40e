//! Validation-based rule checks for wizard actions.
//!
//! Every action is checked against a rule set before it may touch the
//! session. Rules use Stillwater's `Validation` type so an action that breaks
//! several rules reports all of them at once instead of the first one.
//!
//! # Example
//!
//! ```rust
//! use talent_wizard::catalog::Catalog;
//! use talent_wizard::enforcement::{rules_for, ActionContext, ViolationError};
//! use talent_wizard::session::SessionState;
//! use talent_wizard::Action;
//!
//! let catalog = Catalog::builtin();
//! let session = SessionState::new();
//! let ctx = ActionContext::new(&session, &catalog);
//!
//! let violations = rules_for(&Action::SelectJob("Astronaut".into())).violations(&ctx);
//! assert_eq!(
//!     violations,
//!     vec![ViolationError::UnknownJob { title: "Astronaut".into() }]
//! );
//! ```

pub mod builder;
pub mod context;
pub mod policy;
pub mod rules;
pub mod violations;

pub use builder::EnforcementBuilder;
pub use context::ActionContext;
pub use policy::rules_for;
pub use rules::EnforcementRules;
pub use violations::ViolationError;
