//! Output writing for parsed versions
//!
//! This module provides:
//! - `key=value` line formatting, with a heredoc block for multi-line values
//! - Output target selection: the `GITHUB_OUTPUT` file (appended) or stdout

use crate::domain::OutputValue;
use crate::error::IoError;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// Environment variable naming the file outputs are appended to
pub const OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Delimiter for multi-line values
const HEREDOC_DELIMITER: &str = "EOF";

/// Write each output as `key=value`, or as a `key<<EOF` block when the value
/// spans several lines
pub fn write_outputs(
    outputs: &[(&str, OutputValue)],
    writer: &mut dyn Write,
) -> io::Result<()> {
    for (key, value) in outputs {
        let value = value.to_string();
        if value.contains('\n') {
            writeln!(writer, "{}<<{}", key, HEREDOC_DELIMITER)?;
            writeln!(writer, "{}", value)?;
            writeln!(writer, "{}", HEREDOC_DELIMITER)?;
        } else {
            writeln!(writer, "{}={}", key, value)?;
        }
    }
    Ok(())
}

/// Where outputs are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Append to a file
    File(PathBuf),
    /// Standard output
    Stdout,
}

impl OutputTarget {
    /// Select the target from the value of `GITHUB_OUTPUT`; unset or empty
    /// means stdout
    pub fn from_env_value(value: Option<OsString>) -> Self {
        match value {
            Some(path) if !path.is_empty() => OutputTarget::File(PathBuf::from(path)),
            _ => OutputTarget::Stdout,
        }
    }

    /// Human readable name of the target
    pub fn describe(&self) -> String {
        match self {
            OutputTarget::File(path) => path.display().to_string(),
            OutputTarget::Stdout => "stdout".to_string(),
        }
    }

    /// Write all outputs to the target
    pub fn emit(&self, outputs: &[(&str, OutputValue)]) -> Result<(), IoError> {
        match self {
            OutputTarget::File(path) => {
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| IoError::open_output(path, e))?;
                write_outputs(outputs, &mut file)
                    .and_then(|_| file.flush())
                    .map_err(|e| IoError::write_output(self.describe(), e))
            }
            OutputTarget::Stdout => {
                let mut stdout = io::stdout().lock();
                write_outputs(outputs, &mut stdout)
                    .and_then(|_| stdout.flush())
                    .map_err(|e| IoError::write_output(self.describe(), e))
            }
        }
    }
}
