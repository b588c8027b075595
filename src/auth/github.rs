//! GitHub token resolution

use crate::auth::TokenSource;

/// Environment variable consulted when no explicit token is given
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// A token together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedToken {
    /// Authentication token (never empty)
    pub token: String,
    /// Where the token was obtained from
    pub source: TokenSource,
}

/// Resolve a GitHub token
///
/// Priority:
/// 1. `explicit`, when supplied (an empty string means "no token" and does
///    not fall through)
/// 2. `GITHUB_TOKEN`, read through `lookup`
///
/// Empty values never count as a token.
pub fn resolve_token<F>(explicit: Option<String>, lookup: F) -> Option<ResolvedToken>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(token) = explicit {
        return non_empty(token).map(|token| ResolvedToken {
            token,
            source: TokenSource::Explicit,
        });
    }

    lookup(TOKEN_ENV_VAR)
        .and_then(non_empty)
        .map(|token| ResolvedToken {
            token,
            source: TokenSource::EnvVar,
        })
}

fn non_empty(token: String) -> Option<String> {
    if token.is_empty() { None } else { Some(token) }
}
