//! Unified error type for pomo.
//!
//! Uses `thiserror` so every failure carries a human-readable message; the
//! HTTP layer maps variants to status codes in `api::error`.

use std::io;
use thiserror::Error;

/// pomo error type
#[derive(Debug, Error)]
pub enum AppError {
    /// I/O errors (config file reads, socket binding)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML parse errors (config file)
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Request field constraints violated (length, required, enum membership)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Another task already holds the requested title
    #[error("Duplicate title: a task titled {0:?} already exists")]
    DuplicateTitle(String),

    /// Task id or active session not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// An uncompleted Pomodoro session is already open for the task
    #[error("An active Pomodoro session already exists for task {0}")]
    ActiveSession(String),
}

/// pomo Result type alias
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a Validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a DuplicateTitle error
    pub fn duplicate_title(title: impl Into<String>) -> Self {
        Self::DuplicateTitle(title.into())
    }

    /// Create a NotFound error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an ActiveSession error
    pub fn active_session(task_id: impl Into<String>) -> Self {
        Self::ActiveSession(task_id.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::duplicate_title("Write report");
        assert_eq!(
            err.to_string(),
            "Duplicate title: a task titled \"Write report\" already exists"
        );

        let err = AppError::not_found("no task with id 42");
        assert_eq!(err.to_string(), "Not found: no task with id 42");

        let err = AppError::validation("title must be between 3 and 100 characters");
        assert!(err.to_string().starts_with("Validation error:"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }
}
