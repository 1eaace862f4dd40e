//! Per-session state for one applicant.
//!
//! A session is created with every flag lowered and is only ever moved
//! forward by the wizard. Nothing here validates input; the wizard runs the
//! enforcement rules before calling any of the mutators below.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier used to correlate one session's log lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resume formats the upload step accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Pdf, DocumentKind::Docx];

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
        }
    }

    /// Kind of a file judged by its extension, ignoring case.
    pub fn from_file_name(name: &str) -> Option<DocumentKind> {
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.trim().is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|kind| ext.eq_ignore_ascii_case(kind.extension()))
    }
}

/// A resume the applicant attached. Only the name is kept; the content is
/// never read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    pub kind: DocumentKind,
}

impl UploadedFile {
    pub fn from_name(name: &str) -> Option<UploadedFile> {
        let name = name.trim();
        DocumentKind::from_file_name(name).map(|kind| UploadedFile {
            name: name.to_string(),
            kind,
        })
    }
}

/// Free-text fields collected next to the resume. Displayed back, never
/// validated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub cover_letter: String,
}

/// One edit to [`ApplicantDetails`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum DetailUpdate {
    FullName(String),
    Email(String),
    Phone(String),
    DateOfBirth(NaiveDate),
    CoverLetter(String),
}

impl DetailUpdate {
    pub fn field_name(&self) -> &'static str {
        match self {
            DetailUpdate::FullName(_) => "full_name",
            DetailUpdate::Email(_) => "email",
            DetailUpdate::Phone(_) => "phone",
            DetailUpdate::DateOfBirth(_) => "date_of_birth",
            DetailUpdate::CoverLetter(_) => "cover_letter",
        }
    }
}

impl ApplicantDetails {
    pub fn apply(&mut self, update: DetailUpdate) {
        match update {
            DetailUpdate::FullName(v) => self.full_name = v,
            DetailUpdate::Email(v) => self.email = v,
            DetailUpdate::Phone(v) => self.phone = v,
            DetailUpdate::DateOfBirth(d) => self.date_of_birth = Some(d),
            DetailUpdate::CoverLetter(v) => self.cover_letter = v,
        }
    }
}

/// Mutable record behind every page of the wizard.
///
/// `user_responses.len() == question_index` holds after every mutator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub id: SessionId,
    pub job_selected: bool,
    pub selected_job: Option<String>,
    pub resume_uploaded: bool,
    pub chat_completed: bool,
    pub question_index: usize,
    pub user_responses: Vec<String>,
    pub evaluation_done: bool,
    /// Recommended job picked on the evaluation page. Kept apart from
    /// `selected_job` so answers stay tied to the job applied for.
    pub chosen_recommendation: Option<String>,
    pub uploaded_file: Option<UploadedFile>,
    pub details: ApplicantDetails,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            job_selected: false,
            selected_job: None,
            resume_uploaded: false,
            chat_completed: false,
            question_index: 0,
            user_responses: Vec::new(),
            evaluation_done: false,
            chosen_recommendation: None,
            uploaded_file: None,
            details: ApplicantDetails::default(),
        }
    }

    pub fn select_job(&mut self, title: &str) {
        self.selected_job = Some(title.to_string());
        self.job_selected = true;
    }

    /// Replaces any previously attached file.
    pub fn attach_file(&mut self, file: UploadedFile) {
        self.uploaded_file = Some(file);
    }

    pub fn confirm_upload(&mut self) {
        self.resume_uploaded = true;
    }

    pub fn record_answer(&mut self, option: &str) {
        self.user_responses.push(option.to_string());
        self.question_index += 1;
    }

    pub fn complete_chat(&mut self) {
        self.chat_completed = true;
    }

    pub fn mark_evaluated(&mut self) {
        self.evaluation_done = true;
    }

    pub fn choose_recommendation(&mut self, title: &str) {
        self.chosen_recommendation = Some(title.to_string());
    }

    pub fn selected_job(&self) -> Option<&str> {
        self.selected_job.as_deref()
    }

    pub fn responses_consistent(&self) -> bool {
        self.user_responses.len() == self.question_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_has_defaults() {
        let session = SessionState::new();

        assert!(!session.job_selected);
        assert!(session.selected_job.is_none());
        assert!(!session.resume_uploaded);
        assert!(!session.chat_completed);
        assert_eq!(session.question_index, 0);
        assert!(session.user_responses.is_empty());
        assert!(!session.evaluation_done);
        assert!(session.uploaded_file.is_none());
    }

    #[test]
    fn sessions_get_distinct_ids() {
        assert_ne!(SessionState::new().id, SessionState::new().id);
    }

    #[test]
    fn record_answer_keeps_index_in_step() {
        let mut session = SessionState::new();
        session.record_answer("Advanced");
        session.record_answer("I prioritize tasks");

        assert_eq!(session.question_index, 2);
        assert_eq!(session.user_responses, vec!["Advanced", "I prioritize tasks"]);
        assert!(session.responses_consistent());
    }

    #[test]
    fn document_kind_matches_extension_case_insensitively() {
        assert_eq!(DocumentKind::from_file_name("cv.pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_file_name("CV.DOCX"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_file_name("cv.doc"), None);
        assert_eq!(DocumentKind::from_file_name("resume"), None);
        assert_eq!(DocumentKind::from_file_name(".pdf"), None);
    }

    #[test]
    fn uploaded_file_trims_name() {
        let file = UploadedFile::from_name("  resume.pdf ").unwrap();
        assert_eq!(file.name, "resume.pdf");
        assert_eq!(file.kind, DocumentKind::Pdf);
    }

    #[test]
    fn detail_updates_touch_one_field() {
        let mut details = ApplicantDetails::default();
        details.apply(DetailUpdate::FullName("Ada Lovelace".to_string()));
        details.apply(DetailUpdate::DateOfBirth(
            NaiveDate::from_ymd_opt(1990, 12, 10).unwrap(),
        ));

        assert_eq!(details.full_name, "Ada Lovelace");
        assert_eq!(
            details.date_of_birth,
            NaiveDate::from_ymd_opt(1990, 12, 10)
        );
        assert!(details.email.is_empty());
    }

    #[test]
    fn session_serializes_to_json() {
        let mut session = SessionState::new();
        session.select_job("Data Scientist");

        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["selected_job"], "Data Scientist");
        assert_eq!(json["job_selected"], true);
    }
}
