//! Error types for forge-github

use thiserror::Error;

/// Message shown when a token is required but none could be resolved
pub const MISSING_TOKEN_MESSAGE: &str =
    "Please set GITHUB_TOKEN in your environment to access these features.";

/// Errors produced while configuring or using a GitHub client
#[derive(Debug, Error)]
pub enum Error {
    /// A token is required but neither an explicit one nor `GITHUB_TOKEN` was set
    #[error("{}", MISSING_TOKEN_MESSAGE)]
    TokenRequired,

    /// A client option the backend cannot express
    #[error("invalid client option `{key}`: {reason}")]
    InvalidOption {
        /// Option key, e.g. `baseUrl` or `headers.x-foo`
        key: String,
        /// What was wrong with it
        reason: String,
    },

    /// Failure building the GitHub API client
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// The octocrab client was built outside a tokio runtime
    #[error("building a GitHub client requires a running tokio runtime")]
    RuntimeUnavailable,

    /// Token was rejected by the API
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Error returned by octocrab
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
}

/// Result alias for forge-github operations
pub type Result<T> = std::result::Result<T, Error>;
