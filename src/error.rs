//! Errors raised outside the wizard's dispatch path.
//!
//! Dispatch itself never fails; these cover loading catalogs and config
//! files and writing to the shell's output.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Failed to read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Duplicate {kind} '{title}' in catalog")]
    DuplicateEntry { kind: &'static str, title: String },

    #[error("Question '{question}' for '{job}' has no options")]
    EmptyOptions { job: String, question: String },

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Shell I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode view: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WizardError>;
