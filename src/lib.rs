//! tagver - Version tag parser library
//!
//! This library provides the core functionality for turning a version tag
//! into CI outputs:
//! - PEP 440 and semver-style version parsing
//! - Reference resolution (`refs/tags/...`)
//! - `key=value` output writing

pub mod cli;
pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod parser;
pub mod source;
