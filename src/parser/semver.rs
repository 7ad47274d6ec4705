//! semver-style version parser
//!
//! Handles version formats:
//! - Release: `1.2.3`
//! - Fourth component: `1.2.3.4`
//! - Pre-release, phase glued to its number: `1.2.3a4`, `1.2.3beta2`, `1.2.3rc1`
//! - Build metadata: `1.2.3+foo123.bar456`
//!
//! Numeric components must not carry leading zeros. There is no epoch,
//! post-release or dev-release, and hyphenated tags such as `-SNAPSHOT` are
//! rejected.

use crate::domain::{ParsedVersion, PreRelease, PreReleasePhase, SemverVersion};
use crate::parser::{Scheme, VersionParser};
use ::semver::BuildMetadata;
use regex::Regex;
use std::sync::LazyLock;

/// semver-style version parser
pub struct SemverParser;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^(?P<major>0|[1-9][0-9]*)
        \.(?P<minor>0|[1-9][0-9]*)
        \.(?P<patch>0|[1-9][0-9]*)
        (?:\.(?P<rest>0|[1-9][0-9]*))?
        (?:(?P<pre_l>alpha|beta|rc|a|b)(?P<pre_n>0|[1-9][0-9]*))?
        (?:\+(?P<build>.+))?$",
    )
    .unwrap()
});

fn phase_from_label(label: &str) -> Option<PreReleasePhase> {
    match label {
        "a" | "alpha" => Some(PreReleasePhase::Alpha),
        "b" | "beta" => Some(PreReleasePhase::Beta),
        "rc" => Some(PreReleasePhase::ReleaseCandidate),
        _ => None,
    }
}

impl VersionParser for SemverParser {
    fn parse(&self, version: &str, prefix: &str) -> Option<ParsedVersion> {
        let caps = VERSION_RE.captures(version)?;

        let major = caps.name("major")?.as_str().parse().ok()?;
        let minor = caps.name("minor")?.as_str().parse().ok()?;
        let patch = caps.name("patch")?.as_str().parse().ok()?;
        let rest = match caps.name("rest") {
            Some(m) => Some(m.as_str().parse().ok()?),
            None => None,
        };

        let prerelease = match (caps.name("pre_l"), caps.name("pre_n")) {
            (Some(label), Some(number)) => Some(PreRelease::new(
                phase_from_label(label.as_str())?,
                number.as_str().parse().ok()?,
            )),
            _ => None,
        };

        let build = match caps.name("build") {
            Some(m) => BuildMetadata::new(m.as_str())
                .ok()?
                .as_str()
                .split('.')
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        };

        Some(ParsedVersion::Semver(SemverVersion {
            prefix: prefix.to_string(),
            full: version.to_string(),
            major,
            minor,
            patch,
            rest,
            prerelease,
            build,
        }))
    }

    fn default_prefix(&self, _version: &str) -> String {
        String::new()
    }

    fn scheme(&self) -> Scheme {
        Scheme::Semver
    }
}
