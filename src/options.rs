//! Client options and the user-agent merge
//!
//! Options are a free-form JSON object so callers can pass anything the
//! underlying client understands. Two keys have meaning here:
//!
//! - `baseUrl`: API root, e.g. a GitHub Enterprise instance
//! - `headers`: extra request headers (string to string)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User agent sent with every request; callers cannot override it
pub const USER_AGENT: &str = "Electron Forge";

/// Key for the API base URL
pub const BASE_URL_KEY: &str = "baseUrl";

/// Key for the extra headers mapping
pub const HEADERS_KEY: &str = "headers";

const USER_AGENT_HEADER: &str = "user-agent";

/// Caller-supplied client options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientOptions(Map<String, Value>);

impl ClientOptions {
    /// Empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.0
            .insert(BASE_URL_KEY.to_string(), Value::String(url.into()));
        self
    }

    /// Add a request header
    ///
    /// Replaces `headers` with an object first if it holds anything else.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut headers = take_headers(&mut self.0);
        headers.insert(name.into(), Value::String(value.into()));
        self.0.insert(HEADERS_KEY.to_string(), Value::Object(headers));
        self
    }

    /// Set an arbitrary top-level option
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Look up a top-level option
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The `baseUrl` option, if it is a string
    pub fn base_url(&self) -> Option<&str> {
        self.0.get(BASE_URL_KEY).and_then(Value::as_str)
    }

    /// The `headers` option, if it is an object
    pub fn headers(&self) -> Option<&Map<String, Value>> {
        self.0.get(HEADERS_KEY).and_then(Value::as_object)
    }

    /// Iterate over all top-level options
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Whether no options are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of these options with the fixed user agent forced in
    ///
    /// Every other header and top-level key is kept as-is. Any caller
    /// `user-agent` header is dropped, whatever its casing.
    pub fn merge_user_agent(&self) -> Self {
        let mut merged = self.0.clone();
        let mut headers = take_headers(&mut merged);
        headers.retain(|name, _| !name.eq_ignore_ascii_case(USER_AGENT_HEADER));
        headers.insert(
            USER_AGENT_HEADER.to_string(),
            Value::String(USER_AGENT.to_string()),
        );
        merged.insert(HEADERS_KEY.to_string(), Value::Object(headers));
        Self(merged)
    }

    /// The options as a JSON value
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for ClientOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for ClientOptions {
    type Error = Value;

    /// Fails with the original value unless it is a JSON object
    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

/// Remove `headers` from `map`, yielding it only if it was an object
fn take_headers(map: &mut Map<String, Value>) -> Map<String, Value> {
    match map.remove(HEADERS_KEY) {
        Some(Value::Object(headers)) => headers,
        _ => Map::new(),
    }
}
