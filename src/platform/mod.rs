//! GitHub client construction
//!
//! The API client itself is an external collaborator reached through two
//! operations: build it from options, then authenticate it with a token.
//! [`GitHub`] drives those operations lazily and at most once.

mod factory;
mod github;

pub use factory::{ClientConfig, GitHub};
pub use github::{GitHubClient, OctocrabBackend};

use crate::error::Result;
use crate::options::ClientOptions;

/// A constructed API client that can be given credentials
pub trait ApiClient {
    /// Attach `token` to the client for all later requests
    fn authenticate(&mut self, token: &str) -> Result<()>;
}

/// Builds API clients from merged options
///
/// Implemented by [`OctocrabBackend`] for real use and by mocks in tests.
pub trait ClientBuilder {
    /// Client type produced by this builder
    type Client: ApiClient;

    /// Construct an unauthenticated client
    fn build(&self, options: &ClientOptions) -> Result<Self::Client>;
}
