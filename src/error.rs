//! Custom error types for tasklist.
//!
//! Only failures that callers must act on become errors. Recoverable
//! input problems (bad menu choices, malformed file lines) are reported to
//! the user by the interactive loop and never surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tasklist operations
#[derive(Error, Debug)]
pub enum TaskListError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Failed to load configuration
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {reason}")]
    InvalidConfig { field: String, reason: String },

    // =========================================================================
    // Task Errors
    // =========================================================================
    /// A 1-based task number that does not address any task
    #[error("Invalid task number {number} (expected 1..={len})")]
    InvalidTaskNumber { number: usize, len: usize },

    // =========================================================================
    // Wrapped Errors
    // =========================================================================
    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TaskListError {
    /// Create a configuration error with path
    pub fn config_with_path(message: impl Into<String>, path: PathBuf) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path),
        }
    }

    /// Get error code for exit status
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } | Self::InvalidConfig { .. } => 7,
            _ => 1,
        }
    }
}

/// Type alias for tasklist results
pub type Result<T> = std::result::Result<T, TaskListError>;
