//! Version parsers for the supported numbering schemes
//!
//! This module provides parsers for:
//! - PEP 440 (Python packaging), the default
//! - semver-style tags with an optional fourth component
//!
//! Exactly one scheme is active per run. `parse_version` strips the prefix and
//! hands the remainder to the scheme's parser; every failure ends up as
//! `ParsedVersion::Invalid`.

mod pep440;
mod semver;

pub use self::pep440::Pep440Parser;
pub use self::semver::SemverParser;

use crate::domain::ParsedVersion;
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Supported version numbering schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scheme {
    /// Python packaging versions (epoch, pre/post/dev, local)
    #[default]
    Pep440,
    /// `MAJOR.MINOR.PATCH[.REST][PRERELEASE][+BUILD]`
    Semver,
}

impl Scheme {
    /// Returns the name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Pep440 => "pep440",
            Scheme::Semver => "semver",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pep440" => Ok(Scheme::Pep440),
            "semver" => Ok(Scheme::Semver),
            _ => Err(ConfigError::unknown_scheme(s)),
        }
    }
}

/// Trait for parsing a version string under one scheme
pub trait VersionParser {
    /// Parse the version text left after prefix stripping.
    /// Returns None when the text is not a valid version.
    fn parse(&self, version: &str, prefix: &str) -> Option<ParsedVersion>;

    /// Prefix used when the caller did not configure one
    fn default_prefix(&self, version: &str) -> String;

    /// Returns the scheme this parser handles
    fn scheme(&self) -> Scheme;
}

/// Get a version parser for the specified scheme
pub fn get_parser(scheme: Scheme) -> Box<dyn VersionParser> {
    match scheme {
        Scheme::Pep440 => Box::new(Pep440Parser),
        Scheme::Semver => Box::new(SemverParser),
    }
}

/// Parse `version` under `scheme` after removing `prefix`.
///
/// A missing or empty version, a version not starting with the prefix, an
/// empty remainder and a syntax error all yield `ParsedVersion::Invalid`.
pub fn parse_version(
    version: Option<&str>,
    prefix: Option<&str>,
    scheme: Scheme,
) -> ParsedVersion {
    let version = match version {
        Some(v) if !v.is_empty() => v,
        _ => return ParsedVersion::Invalid,
    };

    let parser = get_parser(scheme);
    let prefix = match prefix {
        Some(p) => p.to_string(),
        None => parser.default_prefix(version),
    };

    let stripped = match version.strip_prefix(prefix.as_str()) {
        Some(s) if !s.is_empty() => s,
        _ => return ParsedVersion::Invalid,
    };

    parser
        .parse(stripped, &prefix)
        .unwrap_or(ParsedVersion::Invalid)
}
