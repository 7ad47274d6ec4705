//! Orchestrator for a single run
//!
//! This module provides:
//! - Workflow coordination: resolve reference → parse version → emit outputs
//! - Capture of the environment the run depends on
//! - Verbose diagnostics on stderr

use crate::cli::{ActionInputs, CliArgs};
use crate::domain::ParsedVersion;
use crate::error::{AppError, IoError};
use crate::output::{OutputTarget, OUTPUT_ENV};
use crate::parser::parse_version;
use crate::source::{resolve_version, REF_ENV};
use std::env;
use std::ffi::OsString;

/// Environment values read by a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Value of `GITHUB_REF`
    pub github_ref: Option<String>,
    /// Value of `GITHUB_OUTPUT`
    pub github_output: Option<OsString>,
}

impl Environment {
    /// Read the process environment
    pub fn from_env() -> Self {
        Self {
            github_ref: env::var(REF_ENV).ok(),
            github_output: env::var_os(OUTPUT_ENV),
        }
    }
}

/// Orchestrator for resolving, parsing and emitting one version
pub struct Orchestrator {
    inputs: ActionInputs,
    env: Environment,
}

impl Orchestrator {
    /// Create a new orchestrator
    pub fn new(inputs: ActionInputs, env: Environment) -> Self {
        Self { inputs, env }
    }

    /// Candidate version from `raw` or the environment reference
    pub fn resolve_version(&self) -> Option<String> {
        resolve_version(
            self.inputs.raw.as_deref(),
            self.env.github_ref.as_deref(),
            &self.inputs.ref_prefix,
        )
    }

    /// Parse the candidate version under the configured scheme
    pub fn parse(&self) -> ParsedVersion {
        let version = self.resolve_version();
        parse_version(
            version.as_deref(),
            self.inputs.version_prefix.as_deref(),
            self.inputs.scheme,
        )
    }

    /// Where outputs go
    pub fn output_target(&self) -> OutputTarget {
        OutputTarget::from_env_value(self.env.github_output.clone())
    }

    /// Parse and write the outputs. Only output errors are returned; an
    /// unparseable version is written as `is_valid=false`.
    pub fn run(&self) -> Result<ParsedVersion, IoError> {
        if self.inputs.verbose {
            eprintln!("tagver v{}", env!("CARGO_PKG_VERSION"));
            for key in &self.inputs.ignored {
                eprintln!("Ignoring unknown input: {}", key);
            }
            eprintln!(
                "Reference: {}",
                self.inputs
                    .raw
                    .as_deref()
                    .or(self.env.github_ref.as_deref())
                    .unwrap_or("<none>")
            );
            eprintln!("Reference prefix: {:?}", self.inputs.ref_prefix);
            eprintln!(
                "Candidate version: {}",
                self.resolve_version().as_deref().unwrap_or("<none>")
            );
            eprintln!("Scheme: {}", self.inputs.scheme);
            match &self.inputs.version_prefix {
                Some(prefix) => eprintln!("Version prefix: {:?}", prefix),
                None => eprintln!("Version prefix: <scheme default>"),
            }
        }

        let parsed = self.parse();
        let target = self.output_target();

        if self.inputs.verbose {
            match serde_json::to_string(&parsed) {
                Ok(json) => eprintln!("Parsed: {}", json),
                Err(e) => eprintln!("Parsed: <unprintable: {}>", e),
            }
            eprintln!("Writing outputs to {}", target.describe());
        }

        target.emit(&parsed.outputs())?;
        Ok(parsed)
    }
}

/// Resolve the arguments and run once against `env`
pub fn execute(args: &CliArgs, env: Environment) -> Result<ParsedVersion, AppError> {
    let inputs = args.inputs()?;
    Ok(Orchestrator::new(inputs, env).run()?)
}
