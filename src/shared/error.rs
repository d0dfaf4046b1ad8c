use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - filtering completed (possibly with omissions)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config file, I/O, invalid input)
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
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while describing, filtering or resolving components.
///
/// `ConfigurationError` and `UnresolvedName` are normally absorbed by the
/// filter (logged, then defaulted or omitted); the remaining variants are
/// construction or I/O failures surfaced to the caller.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResolutionError {
    #[error("Invalid setting '{key}' = '{value}': {reason}")]
    ConfigurationError {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Unresolved component '{name}': {reason}")]
    UnresolvedName { name: String, reason: String },

    #[error("Invalid version selector: {reason}\n\n💡 Hint: Provide a version, a version spec (T, C<n>, L<label>, D<date>), a build number, or build quality/status/tags")]
    InvalidVersionSelector { reason: String },

    #[error("Invalid component name: {reason}\n\n💡 Hint: Use a path, or '<team project>::<build definition>'")]
    InvalidComponentName { reason: String },

    #[error("Failed to read config file: {path}\nDetails: {details}\n\n💡 Hint: Check that the file exists and is readable")]
    ConfigFileRead { path: PathBuf, details: String },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax")]
    ConfigFileParse { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl ResolutionError {
    pub fn configuration(key: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ResolutionError::ConfigurationError {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn unresolved(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ResolutionError::UnresolvedName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_selector(reason: impl Into<String>) -> Self {
        ResolutionError::InvalidVersionSelector {
            reason: reason.into(),
        }
    }

    pub fn invalid_name(reason: impl Into<String>) -> Self {
        ResolutionError::InvalidComponentName {
            reason: reason.into(),
        }
    }
}
