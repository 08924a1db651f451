//! Transport-neutral view of an inbound request.

use std::collections::HashMap;

/// Header carrying an explicit tenant identity.
pub const X_TENANT_ID: &str = "x-tenant-id";

/// Header carrying a registered API key.
pub const X_API_KEY: &str = "x-api-key";

/// Header carrying a bearer token.
pub const AUTHORIZATION: &str = "authorization";

/// The parts of a request the identification strategies look at.
///
/// Header names are matched case-insensitively: they are stored lower-cased
/// and looked up the same way. Each name holds a single value; when a
/// request carries a header more than once, the first value wins.
///
/// # Examples
///
/// ```
/// use tenancy_control::identification::RequestContext;
///
/// let request = RequestContext::new("demo.platform.io", "/api/v1/tenant")
///     .with_header("X-Api-Key", "k1")
///     .with_header("x-api-key", "ignored");
///
/// assert_eq!(request.header("X-API-KEY"), Some("k1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    host: String,
    path: String,
    headers: HashMap<String, String>,
}

impl RequestContext {
    /// Creates a context with no headers.
    pub fn new(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            path: path.into(),
            headers: HashMap::new(),
        }
    }

    /// Adds a header unless one with the same name is already present.
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.insert_header(name, value);
        self
    }

    /// Adds a header unless one with the same name is already present.
    ///
    /// Returns `false` when the header was already set and the new value
    /// was dropped.
    pub fn insert_header(&mut self, name: impl AsRef<str>, value: impl Into<String>) -> bool {
        let key = name.as_ref().to_ascii_lowercase();
        if self.headers.contains_key(&key) {
            return false;
        }
        self.headers.insert(key, value.into());
        true
    }

    /// The request host, as sent by the client (port included if any).
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The request path, without the query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Looks up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}
