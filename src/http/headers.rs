//! Fixed response header sets
//!
//! Each server variant decorates every outgoing response with the same
//! headers, whatever the status code.

use hyper::header::{
    HeaderMap, HeaderName, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS,
    ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL, EXPIRES, PRAGMA,
};

/// Immutable, ordered list of headers added to every response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<(HeaderName, HeaderValue)>,
}

impl HeaderSet {
    /// No extra headers
    pub fn empty() -> Self {
        Self::default()
    }

    /// Permissive cross-origin headers
    pub fn cors() -> Self {
        Self {
            entries: vec![
                (ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*")),
                (
                    ACCESS_CONTROL_ALLOW_METHODS,
                    HeaderValue::from_static("GET, POST, OPTIONS"),
                ),
                (
                    ACCESS_CONTROL_ALLOW_HEADERS,
                    HeaderValue::from_static("Content-Type"),
                ),
            ],
        }
    }

    /// Headers forbidding any client or proxy caching
    pub fn no_cache() -> Self {
        Self {
            entries: vec![
                (
                    CACHE_CONTROL,
                    HeaderValue::from_static("no-cache, no-store, must-revalidate"),
                ),
                (PRAGMA, HeaderValue::from_static("no-cache")),
                (EXPIRES, HeaderValue::from_static("0")),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the set into a response's headers.
    ///
    /// Existing values under the same names are replaced, so each header of
    /// the set ends up present exactly once.
    pub fn apply(&self, headers: &mut HeaderMap) {
        for (name, value) in &self.entries {
            headers.insert(name.clone(), value.clone());
        }
    }
}
