//! Context handed to every rule check.

use crate::catalog::{Catalog, Question};
use crate::session::SessionState;

/// Read-only view of the session and lookup tables while an action is
/// being checked.
#[derive(Clone, Copy, Debug)]
pub struct ActionContext<'a> {
    pub session: &'a SessionState,
    pub catalog: &'a Catalog,
}

impl<'a> ActionContext<'a> {
    pub fn new(session: &'a SessionState, catalog: &'a Catalog) -> Self {
        Self { session, catalog }
    }

    /// The question the applicant is currently looking at (pure).
    pub fn current_question(&self) -> Option<&'a Question> {
        self.catalog.current_question(self.session)
    }

    pub fn remaining_questions(&self) -> usize {
        self.catalog.remaining_questions(self.session)
    }
}
