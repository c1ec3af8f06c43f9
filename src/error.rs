//! Error types for studylog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for studylog application
#[derive(Debug, Error)]
pub enum StudyLogError {
    #[error("Not a studylog directory: {0}")]
    NotStudyLogDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("No entry for date: {0}")]
    EntryNotFound(String),

    /// Persisted collection could not be read back. Recovered by `EntryStore::load`.
    #[error("Failed to read stored entries: {0}")]
    PersistenceRead(String),

    #[error("Import failed: {0}")]
    ImportFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl StudyLogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            StudyLogError::NotStudyLogDirectory(_) => 2,
            StudyLogError::InvalidDate(_) => 3,
            StudyLogError::EntryNotFound(_) => 4,
            StudyLogError::ImportFormat(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            StudyLogError::NotStudyLogDirectory(path) => {
                format!(
                    "Not a studylog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'studylog init' in this directory to start a log\n\
                    • Navigate to an existing studylog directory\n\
                    • Set STUDYLOG_ROOT environment variable to your log path",
                    path.display()
                )
            }
            StudyLogError::InvalidDate(date) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Dates use the YYYY-MM-DD format (e.g., 2025-01-17)\n\n\
                    Examples:\n\
                    studylog add --date 2025-01-17 --physics 2\n\
                    studylog remove 2025-01-17",
                    date
                )
            }
            StudyLogError::EntryNotFound(date) => {
                format!(
                    "No entry for date: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'studylog show' to see recorded dates\n\
                    • Use 'studylog add --date {}' to create it",
                    date, date
                )
            }
            StudyLogError::Config(msg) => {
                if msg.contains("storage_key") {
                    format!(
                        "{}\n\n\
                        Storage keys may contain letters, digits, '.', '_' and '-'\n\
                        Example: studylog config storage_key daily-study-entries-v2",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            StudyLogError::Prompt(msg) => {
                format!(
                    "Prompt error: {}\n\n\
                    Suggestions:\n\
                    • Run the command from an interactive terminal\n\
                    • Pass --yes to skip the confirmation",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using StudyLogError
pub type Result<T> = std::result::Result<T, StudyLogError>;
