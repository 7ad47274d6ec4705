//! Pre-release phase and number
//!
//! Both grammars encode a pre-release as a phase directly followed by a
//! number. They disagree on how the phase is spelled in outputs:
//! - semver: the phase word (`alpha4`, `beta1`, `rc2`)
//! - pep440: the short letter (`a4`, `b1`, `rc2`)

use serde::Serialize;
use std::fmt;

/// Pre-release phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PreReleasePhase {
    /// Alpha (`a`, `alpha`)
    Alpha,
    /// Beta (`b`, `beta`)
    Beta,
    /// Release candidate (`rc`; pep440 also accepts `c`, `pre`, `preview`)
    ReleaseCandidate,
}

impl PreReleasePhase {
    /// Returns the short label (`a`, `b`, `rc`)
    pub fn short_label(&self) -> &'static str {
        match self {
            PreReleasePhase::Alpha => "a",
            PreReleasePhase::Beta => "b",
            PreReleasePhase::ReleaseCandidate => "rc",
        }
    }

    /// Returns the phase word (`alpha`, `beta`, `rc`)
    pub fn long_label(&self) -> &'static str {
        match self {
            PreReleasePhase::Alpha => "alpha",
            PreReleasePhase::Beta => "beta",
            PreReleasePhase::ReleaseCandidate => "rc",
        }
    }
}

impl fmt::Display for PreReleasePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.long_label())
    }
}

/// A pre-release segment: phase plus number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PreRelease {
    pub phase: PreReleasePhase,
    pub number: u64,
}

impl PreRelease {
    /// Creates a new PreRelease
    pub fn new(phase: PreReleasePhase, number: u64) -> Self {
        Self { phase, number }
    }

    /// Short letter joined with the number, e.g. `a1`
    pub fn short_form(&self) -> String {
        format!("{}{}", self.phase.short_label(), self.number)
    }

    /// Phase word joined with the number, e.g. `alpha1`
    pub fn long_form(&self) -> String {
        format!("{}{}", self.phase.long_label(), self.number)
    }
}
