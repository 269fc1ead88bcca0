//! Error types for venv-checker operations.
//!
//! This module defines [`CheckerError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Check failures (missing venv, inactive env, missing packages) are not
//!   errors; they are outcomes reported to the user
//! - `CheckerError` covers things that prevent a check from being evaluated
//! - Only configuration errors abort a run

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for venv-checker operations.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// Configuration file not found at an explicitly given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The requirements manifest could not be read.
    #[error("Failed to read requirements file {path}: {source}")]
    ManifestReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The installed package set could not be determined.
    #[error("Could not inspect installed packages in {prefix}: {message}")]
    InspectionFailed { prefix: PathBuf, message: String },

    /// External command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for venv-checker operations.
pub type Result<T> = std::result::Result<T, CheckerError>;
