//! Integration tests for tagver
//!
//! These tests verify:
//! - Full output listings for both schemes
//! - Stability and validity classification across typical tags
//! - Reference resolution combined with parsing

use tagver::cli::{ActionInputs, CliArgs};
use tagver::domain::ParsedVersion;
use tagver::orchestrator::{Environment, Orchestrator};
use tagver::output::write_outputs;
use tagver::parser::{parse_version, Scheme};

use clap::Parser;

/// Render outputs exactly as they are written for the CI runner
fn render(parsed: &ParsedVersion) -> String {
    let mut buf = Vec::new();
    write_outputs(&parsed.outputs(), &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

fn pep440(version: &str) -> ParsedVersion {
    parse_version(Some(version), None, Scheme::Pep440)
}

fn field(parsed: &ParsedVersion, key: &str) -> Option<String> {
    parsed
        .outputs()
        .into_iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
}

fn inputs(args: &[&str]) -> ActionInputs {
    let mut full = vec!["tagver"];
    full.extend_from_slice(args);
    CliArgs::parse_from(full).inputs().unwrap()
}

mod pep440_scheme {
    use super::*;

    #[test]
    fn test_all_segments() {
        let parsed = parse_version(
            Some("6!2.3.4a1post2dev1+rev1234.123.123"),
            Some(""),
            Scheme::Pep440,
        );
        let expected = "\
is_valid=true
is_stable=false
is_unstable=true
is_prerelease=true
is_devrelease=true
is_postrelease=true
full=6!2.3.4a1post2dev1+rev1234.123.123
full_with_prefix=6!2.3.4a1post2dev1+rev1234.123.123
epoch=6
major=2
minor=3
patch=4
major_with_prefix=2
prerelease=a1
prerelease_phase=a
prerelease_number=1
dev=1
post=2
local=rev1234.123.123
";
        assert_eq!(render(&parsed), expected);
    }

    #[test]
    fn test_stable_release() {
        let expected = "\
is_valid=true
is_stable=true
is_unstable=false
is_prerelease=false
is_devrelease=false
is_postrelease=false
full=2.3.4
full_with_prefix=v2.3.4
epoch=0
major=2
minor=3
patch=4
major_with_prefix=v2
";
        assert_eq!(render(&pep440("v2.3.4")), expected);
    }

    #[test]
    fn test_alpha_without_number() {
        let parsed = pep440("v1.0.0-alpha");
        assert_eq!(field(&parsed, "full").as_deref(), Some("1.0.0-alpha"));
        assert_eq!(field(&parsed, "prerelease").as_deref(), Some("a0"));
        assert_eq!(field(&parsed, "prerelease_phase").as_deref(), Some("a"));
        assert_eq!(field(&parsed, "prerelease_number").as_deref(), Some("0"));
        assert_eq!(field(&parsed, "is_stable").as_deref(), Some("false"));
    }

    #[test]
    fn test_valid_versions() {
        for version in [
            "v1.0.0",
            "v2.3.4",
            "99.999.9999",
            "99.999.9999+0354f3a",
            "v2.3.4.5",
            "99.999.9999.99999",
        ] {
            assert!(pep440(version).is_valid(), "{} should be valid", version);
        }
    }

    #[test]
    fn test_invalid_versions() {
        for version in ["99.999.9999-SNAPSHOT", "99.999.9999-SNAPSHOT+0354f3a"] {
            assert_eq!(pep440(version), ParsedVersion::Invalid, "{}", version);
        }
    }

    #[test]
    fn test_stable_versions() {
        for version in [
            "v0.1.0",
            "v1.0.0",
            "v2.3.4",
            "99.999.9999",
            "99.999.9999+0354f3a",
            "v2.3.4-post1",
            "v2.3.4post",
        ] {
            assert_eq!(
                field(&pep440(version), "is_stable").as_deref(),
                Some("true"),
                "{} should be stable",
                version
            );
        }
    }

    #[test]
    fn test_unstable_versions() {
        for version in ["v2.3.4a1", "v1.0.0-alpha", "v2.3.4-beta5", "v2.3.4-dev1"] {
            assert_eq!(
                field(&pep440(version), "is_unstable").as_deref(),
                Some("true"),
                "{} should be unstable",
                version
            );
        }
    }

    #[test]
    fn test_prerelease_values() {
        for (version, expected) in [
            ("v2.3.4a1", "a1"),
            ("v1.0.0-alpha", "a0"),
            ("v2.3.4-beta5", "b5"),
        ] {
            let parsed = pep440(version);
            assert_eq!(field(&parsed, "is_prerelease").as_deref(), Some("true"));
            assert_eq!(field(&parsed, "prerelease").as_deref(), Some(expected));
        }
    }
}

mod semver_scheme {
    use super::*;

    fn semver(version: &str) -> ParsedVersion {
        parse_version(Some(version), Some("v"), Scheme::Semver)
    }

    #[test]
    fn test_zero_major() {
        let expected = "\
is_valid=true
is_stable=false
is_unstable=true
is_prerelease=false
full=0.2.3
full_with_prefix=v0.2.3
major=0
minor=2
patch=3
rest=0
major_with_prefix=v0
";
        assert_eq!(render(&semver("v0.2.3")), expected);
    }

    #[test]
    fn test_stable_release() {
        let parsed = semver("v1.2.3");
        assert_eq!(field(&parsed, "is_stable").as_deref(), Some("true"));
        assert_eq!(field(&parsed, "major").as_deref(), Some("1"));
        assert_eq!(field(&parsed, "minor").as_deref(), Some("2"));
        assert_eq!(field(&parsed, "patch").as_deref(), Some("3"));
    }

    #[test]
    fn test_prerelease_with_build() {
        let expected = "\
is_valid=true
is_stable=false
is_unstable=true
is_prerelease=true
full=1.2.3a4+foo123.bar456
full_with_prefix=v1.2.3a4+foo123.bar456
major=1
minor=2
patch=3
rest=0
major_with_prefix=v1
prerelease=alpha4
prerelease_phase=alpha
prerelease_number=4
build=foo123.bar456
";
        assert_eq!(render(&semver("v1.2.3a4+foo123.bar456")), expected);
    }

    #[test]
    fn test_missing_prefix_is_invalid() {
        assert_eq!(render(&semver("1.2")), "is_valid=false\n");
        assert_eq!(render(&semver("1.2.3")), "is_valid=false\n");
    }

    #[test]
    fn test_snapshot_is_invalid() {
        let parsed = parse_version(Some("99.999.9999-SNAPSHOT"), Some(""), Scheme::Semver);
        assert_eq!(parsed, ParsedVersion::Invalid);
    }

    #[test]
    fn test_fourth_component() {
        let parsed = semver("v2.3.4.5");
        assert_eq!(field(&parsed, "rest").as_deref(), Some("5"));
        assert_eq!(field(&parsed, "full").as_deref(), Some("2.3.4.5"));
    }
}

mod orchestration {
    use super::*;

    const PRERELEASE_OUTPUT: &str = "\
is_valid=true
is_stable=false
is_unstable=true
is_prerelease=true
is_devrelease=false
is_postrelease=false
full=1.2.3a1
full_with_prefix=v1.2.3a1
epoch=0
major=1
minor=2
patch=3
major_with_prefix=v1
prerelease=a1
prerelease_phase=a
prerelease_number=1
";

    fn env_ref(reference: &str) -> Environment {
        Environment {
            github_ref: Some(reference.to_string()),
            github_output: None,
        }
    }

    #[test]
    fn test_with_defaults() {
        let orchestrator = Orchestrator::new(inputs(&[]), env_ref("refs/tags/v1.2.3a1"));
        assert_eq!(render(&orchestrator.parse()), PRERELEASE_OUTPUT);
    }

    #[test]
    fn test_with_null_arguments() {
        let orchestrator = Orchestrator::new(
            inputs(&["raw=null", "prefix=null", "version_prefix=null"]),
            env_ref("refs/tags/v1.2.3a1"),
        );
        assert_eq!(render(&orchestrator.parse()), PRERELEASE_OUTPUT);
    }

    #[test]
    fn test_raw_reference_ignores_env() {
        let orchestrator = Orchestrator::new(
            inputs(&[r#"raw="refs/tags/v1.2.3a1""#, "prefix=null", "version_prefix=null"]),
            env_ref("refs/tags/v0.0.0"),
        );
        assert_eq!(render(&orchestrator.parse()), PRERELEASE_OUTPUT);
    }

    #[test]
    fn test_raw_version_with_empty_ref_prefix() {
        let orchestrator = Orchestrator::new(
            inputs(&[r#"raw="v1.2.3a1""#, "prefix=", "version_prefix=null"]),
            env_ref("refs/tags/v0.0.0"),
        );
        assert_eq!(render(&orchestrator.parse()), PRERELEASE_OUTPUT);
    }

    #[test]
    fn test_without_reference() {
        let orchestrator = Orchestrator::new(
            inputs(&["raw=null", "prefix=null", "version_prefix=null"]),
            Environment::default(),
        );
        assert_eq!(render(&orchestrator.parse()), "is_valid=false\n");
    }

    #[test]
    fn test_semver_scheme_with_custom_prefixes() {
        let orchestrator = Orchestrator::new(
            inputs(&["scheme=semver", "prefix=release/", "version_prefix=ver-"]),
            env_ref("release/ver-3.1.4rc2"),
        );
        let parsed = orchestrator.parse();
        assert_eq!(field(&parsed, "full_with_prefix").as_deref(), Some("ver-3.1.4rc2"));
        assert_eq!(field(&parsed, "major_with_prefix").as_deref(), Some("ver-3"));
        assert_eq!(field(&parsed, "prerelease").as_deref(), Some("rc2"));
    }
}
