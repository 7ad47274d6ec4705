//! Parsed version types
//!
//! A `ParsedVersion` is either invalid or the decomposition of a version under
//! exactly one grammar. Each grammar keeps its own record so that fields only
//! one of them knows (`rest` vs. `epoch`/`dev`/`post`) never leak into the
//! other's outputs.

use serde::Serialize;

use super::{OutputValue, PreRelease};

/// Ordered list of `(key, value)` outputs
pub type Outputs = Vec<(&'static str, OutputValue)>;

/// Result of parsing one version string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum ParsedVersion {
    /// Missing input, prefix mismatch or syntax error
    Invalid,
    /// Valid under the semver grammar
    Semver(SemverVersion),
    /// Valid under the PEP 440 grammar
    Pep440(Pep440Version),
}

impl ParsedVersion {
    /// Returns true unless the version is invalid
    pub fn is_valid(&self) -> bool {
        !matches!(self, ParsedVersion::Invalid)
    }

    /// Returns the outputs in the order they are written
    pub fn outputs(&self) -> Outputs {
        match self {
            ParsedVersion::Invalid => vec![("is_valid", false.into())],
            ParsedVersion::Semver(v) => v.outputs(),
            ParsedVersion::Pep440(v) => v.outputs(),
        }
    }
}

/// A version valid under the semver grammar:
/// `MAJOR.MINOR.PATCH[.REST][PRERELEASE][+BUILD]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SemverVersion {
    /// Prefix stripped from the input
    pub prefix: String,
    /// Version text after the prefix
    pub full: String,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Optional fourth numeric component
    pub rest: Option<u64>,
    pub prerelease: Option<PreRelease>,
    /// Build metadata identifiers
    pub build: Vec<String>,
}

impl SemverVersion {
    /// A version is stable when it has no pre-release and major > 0
    pub fn is_stable(&self) -> bool {
        self.prerelease.is_none() && self.major > 0
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    pub fn full_with_prefix(&self) -> String {
        format!("{}{}", self.prefix, self.full)
    }

    pub fn major_with_prefix(&self) -> String {
        format!("{}{}", self.prefix, self.major)
    }

    fn outputs(&self) -> Outputs {
        let mut out: Outputs = vec![
            ("is_valid", true.into()),
            ("is_stable", self.is_stable().into()),
            ("is_unstable", (!self.is_stable()).into()),
            ("is_prerelease", self.is_prerelease().into()),
            ("full", self.full.as_str().into()),
            ("full_with_prefix", self.full_with_prefix().into()),
            ("major", self.major.into()),
            ("minor", self.minor.into()),
            ("patch", self.patch.into()),
            ("rest", self.rest.unwrap_or(0).into()),
            ("major_with_prefix", self.major_with_prefix().into()),
        ];
        if let Some(pre) = self.prerelease {
            out.push(("prerelease", pre.long_form().into()));
            out.push(("prerelease_phase", pre.phase.long_label().into()));
            out.push(("prerelease_number", pre.number.into()));
        }
        if !self.build.is_empty() {
            out.push(("build", self.build.join(".").into()));
        }
        out
    }
}

/// A version valid under the PEP 440 grammar:
/// `[EPOCH!]RELEASE[PRERELEASE][POST][DEV][+LOCAL]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pep440Version {
    /// Prefix stripped from the input
    pub prefix: String,
    /// Version text after the prefix
    pub full: String,
    pub epoch: u64,
    /// Release segment, at least one component
    pub release: Vec<u64>,
    pub pre: Option<PreRelease>,
    pub post: Option<u64>,
    pub dev: Option<u64>,
    /// Normalized local segments
    pub local: Vec<String>,
}

impl Pep440Version {
    pub fn major(&self) -> u64 {
        self.release_part(0)
    }

    pub fn minor(&self) -> u64 {
        self.release_part(1)
    }

    pub fn patch(&self) -> u64 {
        self.release_part(2)
    }

    fn release_part(&self, index: usize) -> u64 {
        self.release.get(index).copied().unwrap_or(0)
    }

    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }

    pub fn is_devrelease(&self) -> bool {
        self.dev.is_some()
    }

    pub fn is_postrelease(&self) -> bool {
        self.post.is_some()
    }

    /// Pre-releases and dev-releases are unstable; a post-release is not
    pub fn is_unstable(&self) -> bool {
        self.is_prerelease() || self.is_devrelease()
    }

    pub fn is_stable(&self) -> bool {
        !self.is_unstable()
    }

    pub fn full_with_prefix(&self) -> String {
        format!("{}{}", self.prefix, self.full)
    }

    pub fn major_with_prefix(&self) -> String {
        format!("{}{}", self.prefix, self.major())
    }

    fn outputs(&self) -> Outputs {
        let mut out: Outputs = vec![
            ("is_valid", true.into()),
            ("is_stable", self.is_stable().into()),
            ("is_unstable", self.is_unstable().into()),
            ("is_prerelease", self.is_prerelease().into()),
            ("is_devrelease", self.is_devrelease().into()),
            ("is_postrelease", self.is_postrelease().into()),
            ("full", self.full.as_str().into()),
            ("full_with_prefix", self.full_with_prefix().into()),
            ("epoch", self.epoch.into()),
            ("major", self.major().into()),
            ("minor", self.minor().into()),
            ("patch", self.patch().into()),
            ("major_with_prefix", self.major_with_prefix().into()),
        ];
        if let Some(pre) = self.pre {
            out.push(("prerelease", pre.short_form().into()));
            out.push(("prerelease_phase", pre.phase.short_label().into()));
            out.push(("prerelease_number", pre.number.into()));
        }
        if let Some(dev) = self.dev {
            out.push(("dev", dev.into()));
        }
        if let Some(post) = self.post {
            out.push(("post", post.into()));
        }
        if !self.local.is_empty() {
            out.push(("local", self.local.join(".").into()));
        }
        out
    }
}
