//! Mock GitHub client builder for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use forge_github::error::{Error, Result};
use forge_github::{ApiClient, ClientBuilder, ClientOptions};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Shared call log between a [`MockBuilder`] and the clients it builds
#[derive(Debug, Default)]
pub struct CallLog {
    build_calls: Mutex<Vec<ClientOptions>>,
    auth_calls: Mutex<Vec<String>>,
    next_id: AtomicUsize,
    // Error injection
    error_on_build: Mutex<Option<String>>,
    error_on_auth: Mutex<Option<String>>,
}

/// Mock client builder
///
/// Records every `build` and `authenticate` call and can be told to fail
/// either of them.
#[derive(Clone, Default)]
pub struct MockBuilder {
    log: Arc<CallLog>,
}

/// Client produced by [`MockBuilder`]
#[derive(Debug)]
pub struct MockClient {
    /// Sequence number of this client (0 for the first one built)
    pub id: usize,
    /// Options the client was built with
    pub options: ClientOptions,
    /// Token passed to `authenticate`, if any
    pub token: Option<String>,
    log: Arc<CallLog>,
}

impl MockBuilder {
    /// Create a builder that succeeds until told otherwise
    pub fn new() -> Self {
        Self::default()
    }

    // === Error injection methods ===

    /// Make the next `build` calls fail
    pub fn fail_build(&self, msg: &str) {
        *self.log.error_on_build.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `authenticate` calls fail
    pub fn fail_auth(&self, msg: &str) {
        *self.log.error_on_auth.lock().unwrap() = Some(msg.to_string());
    }

    /// Stop injecting errors
    pub fn clear_failures(&self) {
        *self.log.error_on_build.lock().unwrap() = None;
        *self.log.error_on_auth.lock().unwrap() = None;
    }

    // === Call verification methods ===

    /// Options passed to each `build` call
    pub fn get_build_calls(&self) -> Vec<ClientOptions> {
        self.log.build_calls.lock().unwrap().clone()
    }

    /// Tokens passed to each `authenticate` call
    pub fn get_auth_calls(&self) -> Vec<String> {
        self.log.auth_calls.lock().unwrap().clone()
    }

    /// Number of `build` calls, including failed ones
    pub fn build_count(&self) -> usize {
        self.log.build_calls.lock().unwrap().len()
    }

    /// Number of `authenticate` calls, including failed ones
    pub fn auth_count(&self) -> usize {
        self.log.auth_calls.lock().unwrap().len()
    }
}

impl ClientBuilder for MockBuilder {
    type Client = MockClient;

    fn build(&self, options: &ClientOptions) -> Result<MockClient> {
        self.log.build_calls.lock().unwrap().push(options.clone());

        if let Some(msg) = self.log.error_on_build.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        Ok(MockClient {
            id: self.log.next_id.fetch_add(1, Ordering::SeqCst),
            options: options.clone(),
            token: None,
            log: Arc::clone(&self.log),
        })
    }
}

impl ApiClient for MockClient {
    fn authenticate(&mut self, token: &str) -> Result<()> {
        self.log.auth_calls.lock().unwrap().push(token.to_string());

        if let Some(msg) = self.log.error_on_auth.lock().unwrap().as_ref() {
            return Err(Error::Auth(msg.clone()));
        }

        self.token = Some(token.to_string());
        Ok(())
    }
}
