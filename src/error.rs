//! Error types for worklane

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for worklane application
#[derive(Debug, Error)]
pub enum WorklaneError {
    #[error("Not a worklane directory: {0}")]
    NotWorklaneDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid week key: {0}")]
    InvalidWeekKey(String),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WorklaneError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            WorklaneError::NotWorklaneDirectory(_) => 2,
            WorklaneError::InvalidDate(_) | WorklaneError::InvalidWeekKey(_) => 3,
            WorklaneError::EmployeeNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            WorklaneError::NotWorklaneDirectory(path) => {
                format!(
                    "Not a worklane directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'worklane init' in this directory to create a workspace\n\
                    • Navigate to an existing worklane directory\n\
                    • Set WORKLANE_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            WorklaneError::InvalidDate(value) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD (e.g., 2026-02-02)\n\n\
                    Examples:\n\
                    worklane timeline --from 2026-02-02\n\
                    worklane config start_date 2026-03-02",
                    value
                )
            }
            WorklaneError::InvalidWeekKey(value) => {
                format!(
                    "Invalid week key: '{}'\n\n\
                    Expected format: YYYY-Www (ISO week, e.g., 2026-W07)\n\
                    Example: worklane timeline --expand 2026-W07",
                    value
                )
            }
            WorklaneError::EmployeeNotFound(id) => {
                format!(
                    "No employee with id '{}'\n\n\
                    Suggestions:\n\
                    • Employee ids look like EMP-HA-01\n\
                    • Use 'worklane timeline' to see who is scheduled\n\
                    • Use 'worklane generate' to dump all employees",
                    id
                )
            }
            WorklaneError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: worklane config weeks 8",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using WorklaneError
pub type Result<T> = std::result::Result<T, WorklaneError>;
