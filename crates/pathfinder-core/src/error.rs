//! Error types and exit codes for pathfinder
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid input values)
//! - 3: Data error (unknown or duplicate node)

mod macros;

use thiserror::Error;

use crate::graph::NodeId;

/// Exit codes for the pathfinder CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or duplicate node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during pathfinder operations
#[derive(Error, Debug)]
pub enum PathfinderError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("node not found: {id}")]
    NodeNotFound { id: NodeId },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl PathfinderError {
    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathfinderError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        PathfinderError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathfinderError::UsageError(_)
            | PathfinderError::InvalidValue { .. } => ExitCode::Usage,

            PathfinderError::NodeNotFound { .. } | PathfinderError::AlreadyExists { .. } => {
                ExitCode::Data
            }

            PathfinderError::Json(_)
            | PathfinderError::Toml(_)
            | PathfinderError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PathfinderError::UsageError(_) => "usage_error",
            PathfinderError::InvalidValue { .. } => "invalid_value",
            PathfinderError::NodeNotFound { .. } => "node_not_found",
            PathfinderError::AlreadyExists { .. } => "already_exists",
            PathfinderError::Json(_) => "json_error",
            PathfinderError::Toml(_) => "toml_error",
            PathfinderError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for pathfinder operations
pub type Result<T> = std::result::Result<T, PathfinderError>;
