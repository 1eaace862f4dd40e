//! The wizard controller: one action in, one state mutation, one view out.

use crate::builder::{BuildError, StateMachineBuilder, TransitionBuilder};
use crate::catalog::Catalog;
use crate::core::{State, StateHistory};
use crate::enforcement::{rules_for, ActionContext};
use crate::flow::StateMachine;
use crate::page::Page;
use crate::session::{SessionId, SessionState, UploadedFile};
use crate::view::{render, View};
use crate::wizard::action::{Action, Outcome};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// The linear page flow. Each gate watches the session flag that the
/// previous page's final action raises.
pub fn page_flow() -> Result<StateMachine<Page, SessionState>, BuildError> {
    StateMachineBuilder::new()
        .initial(Page::JobSelection)
        .transition(
            TransitionBuilder::new()
                .from(Page::JobSelection)
                .to(Page::ResumeUpload)
                .when(|s: &SessionState| s.job_selected),
        )?
        .transition(
            TransitionBuilder::new()
                .from(Page::ResumeUpload)
                .to(Page::Questionnaire)
                .when(|s: &SessionState| s.resume_uploaded),
        )?
        .transition(
            TransitionBuilder::new()
                .from(Page::Questionnaire)
                .to(Page::Evaluation)
                .when(|s: &SessionState| s.chat_completed),
        )?
        .build()
}

/// What a session went through, reported when it ends.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionSummary {
    pub id: SessionId,
    pub path: Vec<Page>,
    pub selected_job: Option<String>,
    pub chosen_recommendation: Option<String>,
    pub responses: Vec<String>,
    pub evaluation_done: bool,
    pub elapsed: Option<Duration>,
}

/// Owns one applicant's session and drives it through the page flow.
pub struct Wizard {
    session: SessionState,
    catalog: Arc<Catalog>,
    flow: StateMachine<Page, SessionState>,
}

impl Wizard {
    pub fn new(catalog: Arc<Catalog>) -> Result<Self, BuildError> {
        let session = SessionState::new();
        info!(session = %session.id, "session started");
        Ok(Self {
            session,
            catalog,
            flow: page_flow()?,
        })
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current page, as tracked by the flow machine.
    pub fn page(&self) -> Page {
        *self.flow.current_state()
    }

    pub fn history(&self) -> &StateHistory<Page> {
        self.flow.history()
    }

    /// Render the current page. Never mutates the session.
    pub fn view(&self) -> View {
        render(&self.session, &self.catalog)
    }

    /// Apply one action.
    ///
    /// Actions that belong to another page are ignored and actions that
    /// break a rule are rejected; in both cases the session is left exactly
    /// as it was.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let page = self.page();
        debug!(
            session = %self.session.id,
            action = action.name(),
            page = page.name(),
            "dispatching action"
        );

        if action.page() != page {
            let reason = format!(
                "'{}' is not available on the {} page",
                action.name(),
                page.title()
            );
            debug!(session = %self.session.id, %reason, "action ignored");
            return Outcome::Ignored { reason };
        }

        let violations =
            rules_for(&action).violations(&ActionContext::new(&self.session, &self.catalog));
        if !violations.is_empty() {
            warn!(
                session = %self.session.id,
                action = action.name(),
                violations = violations.len(),
                "action rejected"
            );
            return Outcome::Rejected { violations };
        }

        let trigger = action.name();
        self.apply(action);
        self.advance(trigger);

        Outcome::Applied { page: self.page() }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::SelectJob(title) => self.session.select_job(&title),
            Action::AttachResume(name) => {
                if let Some(file) = UploadedFile::from_name(&name) {
                    self.session.attach_file(file);
                }
            }
            Action::UpdateDetails(update) => self.session.details.apply(update),
            Action::ConfirmUpload => self.session.confirm_upload(),
            Action::Answer(option) => self.session.record_answer(&option),
            Action::Finish => self.session.complete_chat(),
            // The evaluation page is terminal; picking a recommendation only
            // records interest in it. The applied-for job stays selected.
            Action::SelectRecommendation(title) => self.session.choose_recommendation(&title),
        }
    }

    fn advance(&mut self, trigger: &str) {
        let from = self.page();
        match self.flow.sync(&self.session, trigger) {
            Ok(entered) => {
                for page in entered {
                    info!(
                        session = %self.session.id,
                        from = from.name(),
                        to = page.name(),
                        trigger,
                        "page changed"
                    );
                    if page == Page::Evaluation && !self.session.evaluation_done {
                        self.session.mark_evaluated();
                    }
                }
            }
            Err(err) => error!(session = %self.session.id, %err, "page flow stalled"),
        }
        debug_assert_eq!(self.page(), Page::derive(&self.session));
    }

    pub fn summary(&self) -> SessionSummary {
        let path = if self.history().is_empty() {
            vec![self.page()]
        } else {
            self.history().get_path().into_iter().copied().collect()
        };

        SessionSummary {
            id: self.session.id,
            path,
            selected_job: self.session.selected_job.clone(),
            chosen_recommendation: self.session.chosen_recommendation.clone(),
            responses: self.session.user_responses.clone(),
            evaluation_done: self.session.evaluation_done,
            elapsed: self.history().duration(),
        }
    }
}
