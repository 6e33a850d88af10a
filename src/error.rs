//! Error types for ngseed operations.
//!
//! This module defines [`NgseedError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration errors (unknown selections, malformed answers files) are
//!   raised before any file is written
//! - I/O errors propagate up and halt generation at the failing step
//! - Use `anyhow::Error` (via `NgseedError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ngseed operations.
#[derive(Debug, Error)]
pub enum NgseedError {
    /// The CSS framework answer is not one of the known values.
    #[error("Unknown CSS framework '{value}' (expected one of: {expected})")]
    UnknownCssFramework { value: String, expected: String },

    /// A utility library answer is not one of the known values.
    #[error("Unknown library '{value}' (expected one of: {expected})")]
    UnknownLibrary { value: String, expected: String },

    /// The test framework option is not recognized.
    #[error("Unknown test framework '{value}' (expected mocha or jasmine)")]
    UnknownTestFramework { value: String },

    /// Failed to parse an answers file.
    #[error("Failed to parse answers at {path}: {message}")]
    AnswersParseError { path: PathBuf, message: String },

    /// Invalid selection or option values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Destination already holds a project and `--force` was not given.
    #[error("A project already exists in {path}. Use --force to overwrite.")]
    DestinationNotEmpty { path: PathBuf },

    /// An embedded template asset is missing.
    #[error("Missing template: {name}")]
    MissingTemplate { name: String },

    /// Shell command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NgseedError {
    /// Whether this error was raised while validating selections.
    ///
    /// Configuration errors always surface before anything is written.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownCssFramework { .. }
                | Self::UnknownLibrary { .. }
                | Self::UnknownTestFramework { .. }
                | Self::AnswersParseError { .. }
                | Self::ConfigValidationError { .. }
        )
    }
}

/// Result type alias for ngseed operations.
pub type Result<T> = std::result::Result<T, NgseedError>;
