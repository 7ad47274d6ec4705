//! CLI argument parsing module for tagver
//!
//! Inputs are passed as positional `key=value` tokens. Values are decoded as
//! JSON literals when possible (`null`, `true`, `42`, `"text"`) and otherwise
//! taken as text with surrounding whitespace and single quotes removed.

use crate::error::ConfigError;
use crate::parser::Scheme;
use crate::source::DEFAULT_REF_PREFIX;
use clap::Parser;
use serde::Deserialize;

/// Decoded value of a `key=value` argument
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl ArgValue {
    /// Decode the text after `=`
    pub fn decode(raw: &str) -> Self {
        serde_json::from_str(raw)
            .unwrap_or_else(|_| ArgValue::String(raw.trim().trim_matches('\'').to_string()))
    }

    /// Text form of the value, None for `null`
    pub fn as_text(&self) -> Option<String> {
        match self {
            ArgValue::Null => None,
            ArgValue::Bool(b) => Some(b.to_string()),
            ArgValue::Number(n) => Some(n.to_string()),
            ArgValue::String(s) => Some(s.clone()),
        }
    }

    /// Truthiness: `true`, non-zero numbers and the text `true`
    pub fn is_true(&self) -> bool {
        match self {
            ArgValue::Null => false,
            ArgValue::Bool(b) => *b,
            ArgValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            ArgValue::String(s) => s.eq_ignore_ascii_case("true"),
        }
    }
}

/// A single `key=value` argument
#[derive(Debug, Clone, PartialEq)]
pub struct ActionArg {
    pub key: String,
    pub value: ArgValue,
}

/// Parse a `key=value` token. The value is everything after the first `=`.
fn parse_action_arg(s: &str) -> Result<ActionArg, String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| ConfigError::invalid_argument(s).to_string())?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ConfigError::invalid_argument(s).to_string());
    }
    Ok(ActionArg {
        key: key.to_string(),
        value: ArgValue::decode(value),
    })
}

/// Parse a version tag and emit its components for a CI runner
#[derive(Parser, Debug, Clone)]
#[command(
    name = "tagver",
    version,
    about = "Parse a version tag and emit its components as key=value outputs"
)]
pub struct CliArgs {
    /// Inputs as key=value pairs: raw, prefix, version_prefix, scheme, verbose
    #[arg(value_name = "KEY=VALUE", value_parser = parse_action_arg)]
    pub inputs: Vec<ActionArg>,
}

/// Configuration resolved from the `key=value` arguments
#[derive(Debug, Clone, PartialEq)]
pub struct ActionInputs {
    /// Reference overriding the environment (`raw`)
    pub raw: Option<String>,
    /// Prefix stripped from the reference (`prefix`)
    pub ref_prefix: String,
    /// Prefix stripped from the version (`version_prefix`); None uses the scheme default
    pub version_prefix: Option<String>,
    /// Active version grammar (`scheme`)
    pub scheme: Scheme,
    /// Diagnostics on stderr (`verbose`)
    pub verbose: bool,
    /// Keys that were given but are not recognized
    pub ignored: Vec<String>,
}

impl Default for ActionInputs {
    fn default() -> Self {
        Self {
            raw: None,
            ref_prefix: DEFAULT_REF_PREFIX.to_string(),
            version_prefix: None,
            scheme: Scheme::default(),
            verbose: false,
            ignored: Vec::new(),
        }
    }
}

impl ActionInputs {
    /// Resolve inputs from parsed arguments. Later duplicates win.
    pub fn from_args(args: &[ActionArg]) -> Result<Self, ConfigError> {
        let mut inputs = Self::default();
        for arg in args {
            match arg.key.as_str() {
                "raw" => inputs.raw = arg.value.as_text(),
                "prefix" => {
                    inputs.ref_prefix = arg
                        .value
                        .as_text()
                        .unwrap_or_else(|| DEFAULT_REF_PREFIX.to_string())
                }
                "version_prefix" => inputs.version_prefix = arg.value.as_text(),
                "scheme" => {
                    inputs.scheme = match arg.value.as_text() {
                        Some(s) => s.parse()?,
                        None => Scheme::default(),
                    }
                }
                "verbose" => inputs.verbose = arg.value.is_true(),
                other => inputs.ignored.push(other.to_string()),
            }
        }
        Ok(inputs)
    }
}

impl CliArgs {
    /// Resolve the configuration carried by the arguments
    pub fn inputs(&self) -> Result<ActionInputs, ConfigError> {
        ActionInputs::from_args(&self.inputs)
    }
}
