//! PEP 440 version parser
//!
//! Handles version formats:
//! - Epoch: `2!1.0`
//! - Release: `1`, `1.2`, `1.2.3`, `1.2.3.4`
//! - Pre-release: `1.0a1`, `1.0-alpha`, `1.0.beta.5`, `1.0rc2`, `1.0c1`, `1.0preview3`
//! - Post-release: `1.0.post1`, `1.0-1`, `1.0rev2`, `1.0post`
//! - Dev-release: `1.0.dev3`, `1.0dev`
//! - Local: `1.0+ubuntu-1`, `1.0+rev1234.123`
//!
//! Labels are case-insensitive and normalized (`alpha` -> `a`, `beta` -> `b`,
//! `c`/`pre`/`preview` -> `rc`). A missing number defaults to 0.

use crate::domain::{ParsedVersion, Pep440Version, PreRelease, PreReleasePhase};
use crate::parser::{Scheme, VersionParser};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// PEP 440 version parser
pub struct Pep440Parser;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?xi)
        ^\s*v?
        (?:(?P<epoch>[0-9]+)!)?                         # epoch
        (?P<release>[0-9]+(?:\.[0-9]+)*)                # release segment
        (?P<pre>                                        # pre-release
            [-_\.]?
            (?P<pre_l>alpha|beta|preview|pre|rc|a|b|c)
            [-_\.]?
            (?P<pre_n>[0-9]+)?
        )?
        (?P<post>                                       # post release
            (?:-(?P<post_n1>[0-9]+))
            |
            (?:
                [-_\.]?
                (?P<post_l>post|rev|r)
                [-_\.]?
                (?P<post_n2>[0-9]+)?
            )
        )?
        (?P<dev>                                        # dev release
            [-_\.]?
            (?P<dev_l>dev)
            [-_\.]?
            (?P<dev_n>[0-9]+)?
        )?
        (?:\+(?P<local>[a-z0-9]+(?:[-_\.][a-z0-9]+)*))? # local version
        \s*$",
    )
    .unwrap()
});

fn phase_from_label(label: &str) -> Option<PreReleasePhase> {
    match label.to_ascii_lowercase().as_str() {
        "a" | "alpha" => Some(PreReleasePhase::Alpha),
        "b" | "beta" => Some(PreReleasePhase::Beta),
        "c" | "rc" | "pre" | "preview" => Some(PreReleasePhase::ReleaseCandidate),
        _ => None,
    }
}

/// Parse an optional numeric capture; an absent number is 0.
/// Returns None only on overflow.
fn number_or_zero(caps: &Captures, name: &str) -> Option<u64> {
    match caps.name(name) {
        Some(m) => m.as_str().parse().ok(),
        None => Some(0),
    }
}

fn get_pre_release(caps: &Captures) -> Option<Option<PreRelease>> {
    let Some(label) = caps.name("pre_l") else {
        return Some(None);
    };
    let phase = phase_from_label(label.as_str())?;
    let number = number_or_zero(caps, "pre_n")?;
    Some(Some(PreRelease::new(phase, number)))
}

fn get_post_release(caps: &Captures) -> Option<Option<u64>> {
    if let Some(n1) = caps.name("post_n1") {
        return n1.as_str().parse().ok().map(Some);
    }
    if caps.name("post_l").is_none() {
        return Some(None);
    }
    number_or_zero(caps, "post_n2").map(Some)
}

fn get_dev_release(caps: &Captures) -> Option<Option<u64>> {
    if caps.name("dev_l").is_none() {
        return Some(None);
    }
    number_or_zero(caps, "dev_n").map(Some)
}

/// Lowercase, split on `-`, `_`, `.` and drop leading zeros of numeric parts
fn normalize_local(local: &str) -> Vec<String> {
    local
        .split(['-', '_', '.'])
        .map(|part| {
            if part.bytes().all(|b| b.is_ascii_digit()) {
                let trimmed = part.trim_start_matches('0');
                if trimmed.is_empty() {
                    "0".to_string()
                } else {
                    trimmed.to_string()
                }
            } else {
                part.to_ascii_lowercase()
            }
        })
        .collect()
}

impl VersionParser for Pep440Parser {
    fn parse(&self, version: &str, prefix: &str) -> Option<ParsedVersion> {
        let caps = VERSION_RE.captures(version)?;

        let epoch = match caps.name("epoch") {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        let release = caps
            .name("release")?
            .as_str()
            .split('.')
            .map(|part| part.parse().ok())
            .collect::<Option<Vec<u64>>>()?;
        let pre = get_pre_release(&caps)?;
        let post = get_post_release(&caps)?;
        let dev = get_dev_release(&caps)?;
        let local = caps
            .name("local")
            .map(|m| normalize_local(m.as_str()))
            .unwrap_or_default();

        Some(ParsedVersion::Pep440(Pep440Version {
            prefix: prefix.to_string(),
            full: version.to_string(),
            epoch,
            release,
            pre,
            post,
            dev,
            local,
        }))
    }

    fn default_prefix(&self, version: &str) -> String {
        if version.starts_with('v') {
            "v".to_string()
        } else {
            String::new()
        }
    }

    fn scheme(&self) -> Scheme {
        Scheme::Pep440
    }
}
