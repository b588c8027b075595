//! Token resolution for GitHub
//!
//! Tokens come from an explicit argument or the `GITHUB_TOKEN` environment
//! variable.

mod github;

pub use github::{resolve_token, ResolvedToken, TOKEN_ENV_VAR};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Token passed in by the caller
    Explicit,
    /// Token from environment variable
    EnvVar,
}
