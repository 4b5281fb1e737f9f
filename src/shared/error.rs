use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every requested artifact was handled
    Success = 0,
    /// Resolution finished but some artifacts could not be resolved
    UnresolvedDependencies = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration, file I/O, resolution abort, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UnresolvedDependencies => write!(f, "Unresolved Dependencies (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency graph processing.
#[derive(Debug, Error)]
pub enum MdepError {
    /// Invalid or self-contradictory filter/format configuration
    #[error("Invalid configuration for '{field}': '{value}'\nReason: {reason}")]
    Configuration {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid artifact coordinate: '{value}'\nReason: {reason}\n\n💡 Hint: Use groupId:artifactId:version[:packaging[:classifier]]")]
    InvalidCoordinate { value: String, reason: String },

    #[error("Failed to resolve artifact: {coordinate}\nDetails: {details}")]
    Resolution { coordinate: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to parse dependency graph: {path}\nDetails: {details}\n\n💡 Hint: The graph file must be a JSON object with groupId, artifactId, version and children")]
    GraphParseError { path: PathBuf, details: String },

    #[error("Invalid version specification: '{value}'\nDetails: {details}")]
    VersionParse { value: String, details: String },
}

impl MdepError {
    /// Shorthand for [`MdepError::Configuration`]
    pub fn configuration(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        MdepError::Configuration {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for errors caused by user configuration rather than I/O
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            MdepError::Configuration { .. } | MdepError::InvalidCoordinate { .. }
        )
    }
}
