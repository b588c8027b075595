//! CLI commands
//!
//! Command implementations for the `forge-github` binary.

mod auth;
mod options;
mod style;

pub use auth::{run_auth_setup, run_auth_test};
pub use options::run_options;

use clap::Args;
use forge_github::error::{Error, Result};
use forge_github::{ClientConfig, ClientOptions};

/// Client configuration flags shared by all commands
#[derive(Args, Debug, Default)]
pub struct ClientArgs {
    /// GitHub token (defaults to GITHUB_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// API base URL, e.g. https://github.example.com/api/v3
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Extra request header (repeatable)
    #[arg(short = 'H', long = "header", value_name = "KEY=VALUE", global = true)]
    pub headers: Vec<String>,
}

impl ClientArgs {
    /// Resolve these flags into a client configuration
    pub fn to_config(&self, required: bool) -> Result<ClientConfig> {
        Ok(ClientConfig::new(
            self.token.clone(),
            required,
            self.client_options()?,
        ))
    }

    fn client_options(&self) -> Result<ClientOptions> {
        let mut options = ClientOptions::new();
        if let Some(ref url) = self.base_url {
            options = options.with_base_url(url);
        }
        for raw in &self.headers {
            let (name, value) = parse_header(raw)?;
            options = options.with_header(name, value);
        }
        Ok(options)
    }
}

fn parse_header(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value.trim())),
        _ => Err(Error::InvalidOption {
            key: "headers".to_string(),
            reason: format!("invalid header \"{raw}\": expected KEY=VALUE"),
        }),
    }
}
