//! forge-github - GitHub client configuration for Electron Forge
//!
//! Resolves an access token (explicit or `GITHUB_TOKEN`), optionally requires
//! one, and lazily builds a single authenticated octocrab client that always
//! identifies itself as `Electron Forge`.

pub mod auth;
pub mod error;
pub mod options;
pub mod platform;

pub use error::{Error, Result};
pub use options::{ClientOptions, USER_AGENT};
pub use platform::{ApiClient, ClientBuilder, ClientConfig, GitHub, GitHubClient, OctocrabBackend};
