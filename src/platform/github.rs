//! GitHub client backed by octocrab
//!
//! The service stack is assembled here rather than through octocrab's
//! default builder, which always sends its own `user-agent: octocrab` next
//! to any extra headers. Every request carries exactly one user agent.

use crate::error::{Error, Result};
use crate::options::{BASE_URL_KEY, ClientOptions, HEADERS_KEY, USER_AGENT};
use crate::platform::{ApiClient, ClientBuilder};
use http::Uri;
use http::header::{self, HeaderName, HeaderValue};
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use octocrab::service::middleware::auth_header::AuthHeaderLayer;
use octocrab::service::middleware::base_uri::BaseUriLayer;
use octocrab::service::middleware::extra_headers::ExtraHeadersLayer;
use octocrab::{AuthState, Octocrab, OctocrabBuilder};
use serde_json::Value;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, warn};
use url::Url;

const GITHUB_API_URL: &str = "https://api.github.com";
const GITHUB_UPLOADS_URL: &str = "https://uploads.github.com";

/// Builds [`GitHubClient`]s with octocrab
#[derive(Debug, Clone, Copy, Default)]
pub struct OctocrabBackend;

impl ClientBuilder for OctocrabBackend {
    type Client = GitHubClient;

    fn build(&self, options: &ClientOptions) -> Result<GitHubClient> {
        GitHubClient::new(options.clone())
    }
}

/// GitHub API client using octocrab
///
/// octocrab clients are immutable once built, so authenticating rebuilds
/// the inner client from the same options plus the token.
///
/// Building needs a running tokio runtime, since octocrab spawns its
/// request worker on it. Without one, [`Error::RuntimeUnavailable`] is
/// returned.
pub struct GitHubClient {
    client: Octocrab,
    options: ClientOptions,
}

impl GitHubClient {
    /// Create an unauthenticated client from (merged) options
    pub fn new(options: ClientOptions) -> Result<Self> {
        let client = build_octocrab(&options, None)?;
        Ok(Self { client, options })
    }

    /// Options this client was built with
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// The underlying octocrab client
    pub fn octocrab(&self) -> &Octocrab {
        &self.client
    }

    /// Login of the user the token belongs to
    pub async fn current_user_login(&self) -> Result<String> {
        let user = self
            .client
            .current()
            .user()
            .await
            .map_err(|e| Error::Auth(format!("Invalid token: {e}")))?;

        Ok(user.login)
    }
}

impl ApiClient for GitHubClient {
    fn authenticate(&mut self, token: &str) -> Result<()> {
        self.client = build_octocrab(&self.options, Some(token))?;
        Ok(())
    }
}

fn build_octocrab(options: &ClientOptions, token: Option<&str>) -> Result<Octocrab> {
    let base_uri = match options.get(BASE_URL_KEY) {
        Some(value) => to_uri(&parse_base_url(value)?)?,
        None => Uri::from_static(GITHUB_API_URL),
    };
    let headers = request_headers(options)?;
    let auth_header = token.map(bearer_header).transpose()?;

    for (key, _) in options.iter() {
        if key != BASE_URL_KEY && key != HEADERS_KEY {
            debug!(option = %key, "option not used by octocrab backend");
        }
    }

    if Handle::try_current().is_err() {
        return Err(Error::RuntimeUnavailable);
    }

    let connector = HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(|e| Error::GitHubApi(format!("loading native root certificates: {e}")))?
        .https_or_http()
        .enable_http1()
        .build();
    let client = Client::builder(TokioExecutor::new()).build(connector);

    let Ok(octocrab) = OctocrabBuilder::new_empty()
        .with_service(client)
        .with_layer(&ExtraHeadersLayer::new(Arc::new(headers)))
        .with_layer(&BaseUriLayer::new(base_uri.clone()))
        .with_layer(&AuthHeaderLayer::new(
            auth_header,
            base_uri,
            Uri::from_static(GITHUB_UPLOADS_URL),
        ))
        .with_auth(AuthState::None)
        .build();

    Ok(octocrab)
}

fn parse_base_url(value: &Value) -> Result<Url> {
    let raw = value.as_str().ok_or_else(|| Error::InvalidOption {
        key: BASE_URL_KEY.to_string(),
        reason: "expected a string".to_string(),
    })?;

    let url = Url::parse(raw).map_err(|e| Error::InvalidOption {
        key: BASE_URL_KEY.to_string(),
        reason: format!("{e}: {raw}"),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::InvalidOption {
            key: BASE_URL_KEY.to_string(),
            reason: format!("unsupported scheme `{scheme}`"),
        }),
    }
}

fn to_uri(url: &Url) -> Result<Uri> {
    Uri::try_from(url.as_str()).map_err(|e| Error::InvalidOption {
        key: BASE_URL_KEY.to_string(),
        reason: e.to_string(),
    })
}

fn bearer_header(token: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| Error::Auth("token is not a valid header value".to_string()))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Headers sent with every request: the caller's, then the fixed user agent
fn request_headers(options: &ClientOptions) -> Result<Vec<(HeaderName, HeaderValue)>> {
    let mut headers: Vec<_> = header_pairs(options)?
        .into_iter()
        .filter(|(name, _)| *name != header::USER_AGENT)
        .collect();
    headers.push((header::USER_AGENT, HeaderValue::from_static(USER_AGENT)));
    Ok(headers)
}

/// Validated `(name, value)` header pairs
///
/// Numbers and booleans are stringified; other non-string values are
/// skipped.
fn header_pairs(options: &ClientOptions) -> Result<Vec<(HeaderName, HeaderValue)>> {
    let Some(headers) = options.headers() else {
        return Ok(Vec::new());
    };

    let mut pairs = Vec::with_capacity(headers.len());
    for (name, value) in headers {
        let value = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                warn!(header = %name, value = %other, "skipping non-scalar header value");
                continue;
            }
        };

        let invalid = |reason: String| Error::InvalidOption {
            key: format!("{HEADERS_KEY}.{name}"),
            reason,
        };
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
        let header_value = HeaderValue::from_str(&value).map_err(|e| invalid(e.to_string()))?;

        pairs.push((header_name, header_value));
    }
    Ok(pairs)
}
