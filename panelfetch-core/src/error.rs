// ============================================================================
// panelfetch-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for panelfetch-core
//
// This module defines the error types used throughout the panelfetch-core
// library. Metric probes almost never surface these to the user because every
// probe has a fallback value; they matter for the launcher, where a failed
// `npm install` or a missing entry point must stop the hand-off.

use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for panelfetch-core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to start '{program}': {source}")]
    CommandStart {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{program}' exited with status {code}: {stderr}")]
    CommandFailed {
        program: String,
        code: i32,
        stderr: String,
    },

    #[error("Failed to parse output: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Main file not found: {}", .0.display())]
    MainFileNotFound(PathBuf),

    #[error("Required command '{0}' not found in PATH")]
    DependencyNotFound(String),

    #[error("Launch failed: {0}")]
    Launch(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for panelfetch-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
