//! Talent wizard: a four-page job application flow.
//!
//! An applicant picks a job offer, uploads a resume, answers the job's
//! questionnaire and receives an evaluation with further recommendations.
//! The session is a plain value; every page change is a guarded transition
//! over that value, recorded in an immutable history.
//!
//! # Core Concepts
//!
//! - **Page**: the four wizard pages, derived from the session's flags
//! - **Action**: one applicant interaction, valid on exactly one page
//! - **Rules**: per-action checks that accumulate every violation
//! - **View**: a pure rendering of the current page
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use talent_wizard::catalog::Catalog;
//! use talent_wizard::{Action, Page, Wizard};
//!
//! let mut wizard = Wizard::new(Arc::new(Catalog::builtin())).unwrap();
//! assert_eq!(wizard.page(), Page::JobSelection);
//!
//! wizard.dispatch(Action::SelectJob("Data Scientist".into()));
//! wizard.dispatch(Action::AttachResume("resume.pdf".into()));
//! wizard.dispatch(Action::ConfirmUpload);
//! assert_eq!(wizard.page(), Page::Questionnaire);
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod core;
pub mod enforcement;
pub mod error;
pub mod evaluation;
pub mod flow;
pub mod logging;
pub mod page;
pub mod session;
pub mod shell;
pub mod view;
pub mod wizard;

// Re-export commonly used types
pub use core::{Guard, State, StateHistory, StateTransition};
pub use page::Page;
pub use wizard::{Action, Outcome, Wizard};
