//! Version source resolution
//!
//! The candidate version comes from a source-control reference such as
//! `refs/tags/v1.2.3`: either the `raw` argument or the `GITHUB_REF`
//! environment variable. Only references starting with the reference prefix
//! carry a version.

/// Environment variable holding the reference that triggered the run
pub const REF_ENV: &str = "GITHUB_REF";

/// Reference prefix used unless `prefix` is given
pub const DEFAULT_REF_PREFIX: &str = "refs/tags/";

/// Strip `ref_prefix` from `reference`. Returns None when there is no
/// reference or it does not start with the prefix.
pub fn version_from_ref(reference: Option<&str>, ref_prefix: &str) -> Option<String> {
    reference?.strip_prefix(ref_prefix).map(str::to_string)
}

/// Resolve the candidate version: `raw` takes precedence over the
/// environment reference.
pub fn resolve_version(
    raw: Option<&str>,
    env_ref: Option<&str>,
    ref_prefix: &str,
) -> Option<String> {
    version_from_ref(raw.or(env_ref), ref_prefix)
}
