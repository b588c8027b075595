//! Options command - show the merged client options

use super::ClientArgs;
use anstream::println;
use forge_github::GitHub;
use forge_github::error::Result;

/// Print the options the client would be built with, as JSON
pub fn run_options(args: &ClientArgs) -> Result<()> {
    let github = GitHub::new(args.to_config(false)?);
    println!("{:#}", github.merged_options().to_value());
    Ok(())
}
