//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ConfigError: Issues with `key=value` arguments
//! - IoError: Failures writing the outputs
//!
//! A version string that does not parse is not an error: it is reported as
//! `is_valid=false`.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Argument token is not of the form `key=value`
    #[error("invalid argument '{token}': expected format 'key=value'")]
    InvalidArgument { token: String },

    /// Unknown version scheme
    #[error("invalid scheme '{value}': expected 'pep440' or 'semver'")]
    UnknownScheme { value: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Output file could not be opened for appending
    #[error("failed to open output file {path}: {source}")]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing outputs failed
    #[error("failed to write outputs to {target}: {source}")]
    WriteOutput {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Creates a new InvalidArgument error
    pub fn invalid_argument(token: impl Into<String>) -> Self {
        ConfigError::InvalidArgument {
            token: token.into(),
        }
    }

    /// Creates a new UnknownScheme error
    pub fn unknown_scheme(value: impl Into<String>) -> Self {
        ConfigError::UnknownScheme {
            value: value.into(),
        }
    }
}

impl IoError {
    /// Creates a new OpenOutput error
    pub fn open_output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::OpenOutput {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteOutput error
    pub fn write_output(target: impl Into<String>, source: std::io::Error) -> Self {
        IoError::WriteOutput {
            target: target.into(),
            source,
        }
    }
}
