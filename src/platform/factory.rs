//! Lazy, token-aware GitHub client factory

use crate::auth::{TokenSource, resolve_token};
use crate::error::{Error, Result};
use crate::options::ClientOptions;
use crate::platform::{ApiClient, ClientBuilder, OctocrabBackend};
use std::env;
use tracing::debug;

/// Resolved client configuration
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    token: Option<String>,
    source: Option<TokenSource>,
    required: bool,
    options: ClientOptions,
}

impl ClientConfig {
    /// Resolve configuration against the process environment
    ///
    /// `GITHUB_TOKEN` is read here, once, when `token` is `None`.
    pub fn new(token: Option<String>, required: bool, options: ClientOptions) -> Self {
        Self::resolve(token, required, options, |key| env::var(key).ok())
    }

    /// Resolve configuration with a custom environment lookup
    pub fn resolve<F>(
        token: Option<String>,
        required: bool,
        options: ClientOptions,
        lookup: F,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolved = resolve_token(token, lookup);
        Self {
            source: resolved.as_ref().map(|r| r.source),
            token: resolved.map(|r| r.token),
            required,
            options,
        }
    }

    /// Resolved token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Where the token came from
    pub fn token_source(&self) -> Option<TokenSource> {
        self.source
    }

    /// Whether a missing token is an error
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Caller-supplied options, before the user agent is forced
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }
}

/// GitHub client factory
///
/// Holds a resolved [`ClientConfig`] and builds the API client on first
/// use. Later calls hand back the same client.
pub struct GitHub<B: ClientBuilder = OctocrabBackend> {
    config: ClientConfig,
    builder: B,
    client: Option<B::Client>,
}

impl GitHub<OctocrabBackend> {
    /// Create a factory backed by octocrab
    pub fn new(config: ClientConfig) -> Self {
        Self::with_builder(config, OctocrabBackend)
    }
}

impl<B: ClientBuilder> GitHub<B> {
    /// Create a factory using a custom client builder
    pub fn with_builder(config: ClientConfig, builder: B) -> Self {
        Self {
            config,
            builder,
            client: None,
        }
    }

    /// Configuration resolved at construction
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolved token, if any
    pub fn token(&self) -> Option<&str> {
        self.config.token()
    }

    /// Whether the client has been built
    pub fn is_realized(&self) -> bool {
        self.client.is_some()
    }

    /// Options the client is (or will be) built with
    pub fn merged_options(&self) -> ClientOptions {
        self.config.options.merge_user_agent()
    }

    /// Get the API client, building and authenticating it on first call
    ///
    /// # Errors
    ///
    /// [`Error::TokenRequired`] when a token is required but none was
    /// resolved. Builder and authentication errors are returned unchanged,
    /// and nothing is cached when they occur. The octocrab backend returns
    /// [`Error::RuntimeUnavailable`] when called outside a tokio runtime.
    pub fn client(&mut self) -> Result<&B::Client> {
        let client = match self.client.take() {
            Some(client) => client,
            None => self.realize()?,
        };
        Ok(&*self.client.insert(client))
    }

    /// Consume the factory and return its client, building it if needed
    pub fn into_client(mut self) -> Result<B::Client> {
        match self.client.take() {
            Some(client) => Ok(client),
            None => self.realize(),
        }
    }

    fn realize(&self) -> Result<B::Client> {
        if self.config.required && self.config.token.is_none() {
            return Err(Error::TokenRequired);
        }

        let options = self.merged_options();
        let mut client = self.builder.build(&options)?;
        debug!(base_url = ?options.base_url(), "built GitHub client");

        if let Some(token) = self.config.token() {
            client.authenticate(token)?;
            debug!(source = ?self.config.source, "authenticated GitHub client");
        }

        Ok(client)
    }
}
