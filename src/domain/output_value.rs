//! Values written to the CI output file

use std::fmt;

/// A single output value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputValue {
    /// Rendered as `true` / `false`
    Bool(bool),
    /// Non-negative integer
    Number(u64),
    /// Free text
    Text(String),
}

impl From<bool> for OutputValue {
    fn from(value: bool) -> Self {
        OutputValue::Bool(value)
    }
}

impl From<u64> for OutputValue {
    fn from(value: u64) -> Self {
        OutputValue::Number(value)
    }
}

impl From<String> for OutputValue {
    fn from(value: String) -> Self {
        OutputValue::Text(value)
    }
}

impl From<&str> for OutputValue {
    fn from(value: &str) -> Self {
        OutputValue::Text(value.to_string())
    }
}

impl fmt::Display for OutputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputValue::Bool(b) => write!(f, "{}", b),
            OutputValue::Number(n) => write!(f, "{}", n),
            OutputValue::Text(s) => write!(f, "{}", s),
        }
    }
}
