//! Error types and exit codes for transit-paths
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (invalid path segment, unreadable or invalid network file)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid path segment, invalid network (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during transit-paths operations
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    /// A requested step has no matching edge in the graph
    #[error("invalid path segment: {from} -> {to}")]
    InvalidPathSegment { from: String, to: String },

    #[error("network file not found: {path:?}")]
    NetworkNotFound { path: PathBuf },

    #[error("invalid network: {reason}")]
    InvalidNetwork { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl RouteError {
    /// Create an error for a step with no matching edge
    pub fn invalid_segment(from: &str, to: &str) -> Self {
        RouteError::InvalidPathSegment {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for a network document that fails validation
    pub fn invalid_network(reason: impl Into<String>) -> Self {
        RouteError::InvalidNetwork {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UnknownFormat(_) | RouteError::UsageError(_) => ExitCode::Usage,

            RouteError::InvalidPathSegment { .. }
            | RouteError::NetworkNotFound { .. }
            | RouteError::InvalidNetwork { .. }
            | RouteError::Toml(_) => ExitCode::Data,

            RouteError::Io(_) | RouteError::Json(_) | RouteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RouteError::UnknownFormat(_) => "unknown_format",
            RouteError::UsageError(_) => "usage_error",
            RouteError::InvalidPathSegment { .. } => "invalid_path_segment",
            RouteError::NetworkNotFound { .. } => "network_not_found",
            RouteError::InvalidNetwork { .. } => "invalid_network",
            RouteError::Io(_) => "io_error",
            RouteError::Json(_) => "json_error",
            RouteError::Toml(_) => "toml_error",
            RouteError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let RouteError::InvalidPathSegment { from, to } = self {
            error_obj["segment"] = serde_json::json!({ "from": from, "to": to });
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for transit-paths operations
pub type Result<T> = std::result::Result<T, RouteError>;
