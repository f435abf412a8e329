//! Error types for kks operations.
//!
//! This module defines [`KksError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Context errors (`NoSession`, `NoClient`, `NoBuffer`) are raised during
//!   resolution, before any `kak` process is spawned
//! - External errors carry whatever `kak` wrote to stderr
//! - Use `anyhow::Error` (via `KksError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for kks operations.
#[derive(Debug, Error)]
pub enum KksError {
    /// No session could be resolved from flags or environment.
    #[error("No session in context")]
    NoSession,

    /// The command needs a client and none was resolved.
    #[error("No client in context")]
    NoClient,

    /// The command needs a buffer (or a client holding one) and none was resolved.
    #[error("No buffer in context")]
    NoBuffer,

    /// The `kak` binary could not be started.
    #[error("Failed to run '{binary}': {source}")]
    KakSpawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// `kak` exited with a non-zero status.
    #[error("Command failed with exit code {code:?}: {command}{}", format_stderr(.stderr))]
    KakFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The session accepted the command but failed to evaluate it.
    #[error("Kakoune error: {message}")]
    SessionFailed { message: String },

    /// A path could not be used for relative path computation.
    #[error("Invalid path '{path}': {message}")]
    InvalidPath { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn format_stderr(stderr: &str) -> String {
    let stderr = stderr.trim_end();
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{}", stderr)
    }
}

/// Result type alias for kks operations.
pub type Result<T> = std::result::Result<T, KksError>;
