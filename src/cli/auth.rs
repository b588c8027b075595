//! Auth command - test and explain authentication

use super::ClientArgs;
use super::style::{Stylize, check};
use anstream::println;
use forge_github::GitHub;
use forge_github::auth::TokenSource;
use forge_github::error::Result;

/// Run the auth test command
pub async fn run_auth_test(args: &ClientArgs) -> Result<()> {
    println!("Testing GitHub authentication...");

    let config = args.to_config(true)?;
    let source = config.token_source();
    let mut github = GitHub::new(config);
    let username = github.client()?.current_user_login().await?;

    println!("{} Authenticated as: {}", check(), username.accent());
    if let Some(source) = source {
        let source = match source {
            TokenSource::Explicit => "--token",
            TokenSource::EnvVar => "GITHUB_TOKEN",
        };
        println!("{}", format!("Token source: {source}").muted());
    }
    Ok(())
}

/// Run the auth setup command (show instructions)
pub fn run_auth_setup() {
    println!("{}", "GitHub Authentication Setup".emphasis());
    println!("===========================");
    println!();
    println!("Option 1: Environment variable (recommended)");
    println!("  Set {}", "GITHUB_TOKEN".accent());
    println!();
    println!("Option 2: Command line");
    println!("  Pass --token <TOKEN>");
    println!();
    println!("For GitHub Enterprise:");
    println!("  Pass --base-url https://<host>/api/v3");
}
