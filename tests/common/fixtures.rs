//! Test data factories for client configuration
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use forge_github::{ClientConfig, ClientOptions};

/// GitHub Enterprise API root used across tests
pub const ENTERPRISE_URL: &str = "https://github.example.com:8443/enterprise";

/// Environment lookup with nothing set
pub fn empty_env(_: &str) -> Option<String> {
    None
}

/// Environment lookup with only `GITHUB_TOKEN` set
pub fn env_with_token(value: &str) -> impl Fn(&str) -> Option<String> + '_ {
    move |key| (key == "GITHUB_TOKEN").then(|| value.to_string())
}

/// Config resolved against an empty environment
pub fn make_config(token: Option<&str>, required: bool, options: ClientOptions) -> ClientConfig {
    ClientConfig::resolve(token.map(String::from), required, options, empty_env)
}

/// Options pointing at a GitHub Enterprise instance
pub fn enterprise_options() -> ClientOptions {
    ClientOptions::new().with_base_url(ENTERPRISE_URL)
}
