//! Wizard pages and how they are derived from session flags.

use crate::session::SessionState;
use crate::state_enum;

state_enum! {
    /// The four wizard pages, in flow order.
    #[derive(Copy, Eq, Hash)]
    pub enum Page {
        JobSelection,
        ResumeUpload,
        Questionnaire,
        Evaluation,
    }
    final: [Evaluation]
}

impl Page {
    /// Current page for a session.
    ///
    /// The first unset flag wins: no job picked means the job board, and so
    /// on down the flow.
    pub fn derive(session: &SessionState) -> Page {
        if !session.job_selected {
            Page::JobSelection
        } else if !session.resume_uploaded {
            Page::ResumeUpload
        } else if !session.chat_completed {
            Page::Questionnaire
        } else {
            Page::Evaluation
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::JobSelection => "Available Job Offers",
            Page::ResumeUpload => "Upload Resume and Details",
            Page::Questionnaire => "Chatbot Interview",
            Page::Evaluation => "Evaluation and Recommendations",
        }
    }
}
