//! User actions and what dispatching them produced.

use crate::enforcement::ViolationError;
use crate::page::Page;
use crate::session::DetailUpdate;
use serde::{Deserialize, Serialize};

/// Everything an applicant can do. Each action belongs to exactly one page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum Action {
    /// Pick a job tile on the job board.
    SelectJob(String),
    /// Attach a resume by file name. Replaces an earlier attachment.
    AttachResume(String),
    /// Edit one of the free-text form fields.
    UpdateDetails(DetailUpdate),
    /// The "Next" button under the upload form.
    ConfirmUpload,
    /// Answer the current question with one of its options.
    Answer(String),
    /// Leave the questionnaire once every question is answered.
    Finish,
    /// Pick one of the recommended jobs on the evaluation page.
    SelectRecommendation(String),
}

impl Action {
    /// The page on which this action is available.
    pub fn page(&self) -> Page {
        match self {
            Action::SelectJob(_) => Page::JobSelection,
            Action::AttachResume(_) | Action::UpdateDetails(_) | Action::ConfirmUpload => {
                Page::ResumeUpload
            }
            Action::Answer(_) | Action::Finish => Page::Questionnaire,
            Action::SelectRecommendation(_) => Page::Evaluation,
        }
    }

    /// Short name used in logs and transition history.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SelectJob(_) => "select_job",
            Action::AttachResume(_) => "attach_resume",
            Action::UpdateDetails(_) => "update_details",
            Action::ConfirmUpload => "confirm_upload",
            Action::Answer(_) => "answer",
            Action::Finish => "finish",
            Action::SelectRecommendation(_) => "select_recommendation",
        }
    }
}

/// What a dispatched action did to the session.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The action was applied; `page` is where the session now stands.
    Applied { page: Page },
    /// One or more rules failed; the session is untouched.
    Rejected { violations: Vec<ViolationError> },
    /// The action does not belong to the current page; the session is untouched.
    Ignored { reason: String },
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied { .. })
    }

    /// Messages to show the applicant; empty for applied actions.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Outcome::Applied { .. } => Vec::new(),
            Outcome::Rejected { violations } => violations.iter().map(|v| v.to_string()).collect(),
            Outcome::Ignored { reason } => vec![reason.clone()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_maps_to_its_page() {
        assert_eq!(Action::SelectJob("x".into()).page(), Page::JobSelection);
        assert_eq!(Action::ConfirmUpload.page(), Page::ResumeUpload);
        assert_eq!(
            Action::UpdateDetails(DetailUpdate::Email("a@b.c".into())).page(),
            Page::ResumeUpload
        );
        assert_eq!(Action::Finish.page(), Page::Questionnaire);
        assert_eq!(
            Action::SelectRecommendation("x".into()).page(),
            Page::Evaluation
        );
    }

    #[test]
    fn rejected_outcome_lists_every_message() {
        let outcome = Outcome::Rejected {
            violations: vec![
                ViolationError::EmptyFileName,
                ViolationError::UnsupportedFile {
                    name: String::new(),
                },
            ],
        };

        assert!(!outcome.is_applied());
        assert_eq!(outcome.messages().len(), 2);
        assert_eq!(outcome.messages()[0], "No file name given");
    }

    #[test]
    fn outcome_serializes_with_tag() {
        let outcome = Outcome::Applied {
            page: Page::ResumeUpload,
        };
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["outcome"], "applied");
        assert_eq!(json["page"], "ResumeUpload");
    }
}
