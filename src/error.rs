//! Error types for ticklist
//!
//! Every failure maps onto one of three process exit codes: 0 for
//! success, 2 for user errors (invalid task text, empty export, bad
//! config) and 4 for operation failures (storage writes, lock
//! contention).

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the ticklist CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for ticklist operations
#[derive(Error, Debug)]
pub enum Error {
    // Rejected input or configuration, exit code 2
    #[error("Task text is empty")]
    EmptyText,

    #[error("Task text is {length} characters, limit is {limit}")]
    TextTooLong { length: usize, limit: usize },

    #[error("Nothing to export: the task list is empty")]
    NothingToExport,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    // Storage and environment failures, exit code 4
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not acquire lock on {0}")]
    LockFailed(PathBuf),
}

impl Error {
    /// Process exit code this error maps to.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::EmptyText
            | Error::TextTooLong { .. }
            | Error::NothingToExport
            | Error::InvalidArgument(_)
            | Error::InvalidConfig(_)
            | Error::ConfigParse(_) => exit_codes::USER_ERROR,

            Error::Io(_) | Error::Json(_) | Error::LockFailed(_) => {
                exit_codes::OPERATION_FAILED
            }
        }
    }

    /// Structured payload for JSON error envelopes, where one exists
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::TextTooLong { length, limit } => Some(serde_json::json!({
                "length": length,
                "limit": limit,
            })),
            Error::LockFailed(path) => Some(serde_json::json!({
                "path": path.to_string_lossy(),
            })),
            _ => None,
        }
    }
}

/// Result type alias for ticklist operations
pub type Result<T> = std::result::Result<T, Error>;
