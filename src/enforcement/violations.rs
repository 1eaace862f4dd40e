//! Violations reported when an action breaks a rule.

use serde::Serialize;
use thiserror::Error;

/// One failed rule check. The display text is shown to the applicant.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ViolationError {
    #[error("'{title}' is not one of the available job offers")]
    UnknownJob { title: String },

    #[error("'{title}' is not one of the recommended job offers")]
    UnknownRecommendation { title: String },

    #[error("No file name given")]
    EmptyFileName,

    #[error("'{name}' is not a supported resume format (expected .pdf or .docx)")]
    UnsupportedFile { name: String },

    #[error("Upload a resume before continuing")]
    NoFileAttached,

    #[error("There is no question waiting for an answer")]
    NoCurrentQuestion,

    #[error("'{option}' is not an option for \"{question}\"")]
    InvalidOption { option: String, question: String },

    #[error("{remaining} question(s) still need an answer")]
    QuestionsRemaining { remaining: usize },

    #[error("{message}")]
    CustomCheckFailed { message: String },
}
