//! Error types for bkreview.
//!
//! Uses thiserror for derive macros. Malformed diff headers are not errors:
//! the parser degrades to a partially populated record instead.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for bkreview operations.
#[derive(Error, Debug)]
pub enum BkError {
    /// The `bk` executable is missing from the search path or could not be started.
    #[error("BitKeeper is unavailable: {0}")]
    ToolUnavailable(String),

    /// A client could not be constructed against the given repository path.
    #[error("repository not found: {0}")]
    RepositoryNotFound(String),

    /// The file could not be produced at the requested revision.
    #[error("file not found: {path} (revision {revision})")]
    NotFound { path: String, revision: String },

    /// Invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),
}

impl BkError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            BkError::ToolUnavailable(_) => exit_codes::TOOL_UNAVAILABLE,
            BkError::RepositoryNotFound(_) => exit_codes::REPOSITORY_NOT_FOUND,
            BkError::NotFound { .. } => exit_codes::NOT_FOUND,
            BkError::UserError(_) => exit_codes::USER_ERROR,
        }
    }

    pub(crate) fn not_found(path: &str, revision: impl ToString) -> Self {
        BkError::NotFound {
            path: path.to_string(),
            revision: revision.to_string(),
        }
    }
}

/// Result type alias for bkreview operations.
pub type Result<T> = std::result::Result<T, BkError>;
