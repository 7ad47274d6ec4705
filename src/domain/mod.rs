//! Core domain models for tagver
//!
//! This module contains the fundamental types used throughout the application:
//! - Parsed version records, one per grammar
//! - Pre-release phase and number
//! - Output values written for the CI runner

mod output_value;
mod parsed_version;
mod prerelease;

pub use output_value::OutputValue;
pub use parsed_version::{Outputs, ParsedVersion, Pep440Version, SemverVersion};
pub use prerelease::{PreRelease, PreReleasePhase};
