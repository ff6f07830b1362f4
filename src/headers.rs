use crate::constants::{LIST_SEPARATOR, header};
use indexmap::IndexMap;
use std::fmt;

/// Response header map used by [`Exchange`](crate::Exchange). Insertion ordered.
pub type Headers = IndexMap<String, String>;

/// The closed set of headers this middleware writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CorsHeader {
    AllowOrigin,
    AllowMethods,
    AllowHeaders,
    ExposeHeaders,
    AllowCredentials,
    MaxAge,
    Vary,
}

impl CorsHeader {
    pub const ALL: [CorsHeader; 7] = [
        CorsHeader::AllowOrigin,
        CorsHeader::AllowMethods,
        CorsHeader::AllowHeaders,
        CorsHeader::ExposeHeaders,
        CorsHeader::AllowCredentials,
        CorsHeader::MaxAge,
        CorsHeader::Vary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CorsHeader::AllowOrigin => header::ACCESS_CONTROL_ALLOW_ORIGIN,
            CorsHeader::AllowMethods => header::ACCESS_CONTROL_ALLOW_METHODS,
            CorsHeader::AllowHeaders => header::ACCESS_CONTROL_ALLOW_HEADERS,
            CorsHeader::ExposeHeaders => header::ACCESS_CONTROL_EXPOSE_HEADERS,
            CorsHeader::AllowCredentials => header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            CorsHeader::MaxAge => header::ACCESS_CONTROL_MAX_AGE,
            CorsHeader::Vary => header::VARY,
        }
    }

    /// `Access-Control-Allow-Origin` and `Vary` depend on the request and are never
    /// part of [`StaticHeaders`].
    pub fn is_request_dependent(&self) -> bool {
        matches!(self, CorsHeader::AllowOrigin | CorsHeader::Vary)
    }

    #[cfg(feature = "http")]
    pub fn http_name(&self) -> http::HeaderName {
        use http::header as h;

        match self {
            CorsHeader::AllowOrigin => h::ACCESS_CONTROL_ALLOW_ORIGIN,
            CorsHeader::AllowMethods => h::ACCESS_CONTROL_ALLOW_METHODS,
            CorsHeader::AllowHeaders => h::ACCESS_CONTROL_ALLOW_HEADERS,
            CorsHeader::ExposeHeaders => h::ACCESS_CONTROL_EXPOSE_HEADERS,
            CorsHeader::AllowCredentials => h::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            CorsHeader::MaxAge => h::ACCESS_CONTROL_MAX_AGE,
            CorsHeader::Vary => h::VARY,
        }
    }
}

impl fmt::Display for CorsHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request-independent headers, rendered once when a [`Cors`](crate::Cors) is built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticHeaders {
    entries: IndexMap<CorsHeader, String>,
}

impl StaticHeaders {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, name: CorsHeader, value: String) {
        debug_assert!(
            !name.is_request_dependent(),
            "{name} must be resolved per request"
        );
        self.entries.insert(name, value);
    }

    pub fn get(&self, name: CorsHeader) -> Option<&str> {
        self.entries.get(&name).map(String::as_str)
    }

    pub fn contains(&self, name: CorsHeader) -> bool {
        self.entries.contains_key(&name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CorsHeader, &str)> + '_ {
        self.entries
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Write access to an outgoing response's headers with merge semantics.
pub trait ResponseHeaders {
    /// Sets `name`, replacing any existing value for the same header and leaving
    /// every other header untouched.
    fn set_header(&mut self, name: CorsHeader, value: &str);

    /// Adds `value` to the `Vary` list unless it is already present.
    fn append_vary(&mut self, value: &str);
}

impl ResponseHeaders for Headers {
    fn set_header(&mut self, name: CorsHeader, value: &str) {
        let position = self
            .keys()
            .position(|existing| existing.eq_ignore_ascii_case(name.as_str()));

        match position {
            Some(index) => self[index] = value.to_string(),
            None => {
                self.insert(name.as_str().to_string(), value.to_string());
            }
        }
    }

    fn append_vary(&mut self, value: &str) {
        let existing = self
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(header::VARY))
            .map(|(_, value)| value.as_str());

        if let Some(merged) = merge_vary(existing, value) {
            self.set_header(CorsHeader::Vary, &merged);
        }
    }
}

#[cfg(feature = "http")]
impl ResponseHeaders for http::HeaderMap {
    fn set_header(&mut self, name: CorsHeader, value: &str) {
        match http::HeaderValue::from_str(value) {
            Ok(value) => {
                self.insert(name.http_name(), value);
            }
            Err(_) => {
                tracing::warn!(header = %name, value, "skipping CORS header with invalid value");
            }
        }
    }

    fn append_vary(&mut self, value: &str) {
        let mut readable = Vec::new();
        let mut opaque = false;
        for existing in self.get_all(http::header::VARY) {
            match existing.to_str() {
                Ok(existing) => readable.push(existing),
                Err(_) => opaque = true,
            }
        }

        let existing = readable.join(LIST_SEPARATOR);
        let existing = (!existing.is_empty()).then_some(existing.as_str());
        let Some(merged) = merge_vary(existing, value) else {
            return;
        };

        if !opaque {
            self.set_header(CorsHeader::Vary, &merged);
            return;
        }

        // Values that are not visible ASCII cannot be re-rendered, so they stay as
        // separate entries and only the new token is added.
        match http::HeaderValue::from_str(value.trim()) {
            Ok(value) => {
                self.append(http::header::VARY, value);
            }
            Err(_) => {
                tracing::warn!(value, "skipping Vary entry with invalid value");
            }
        }
    }
}

/// Folds `incoming` into an existing `Vary` value, dropping blanks and
/// case-insensitive duplicates. Returns `None` when nothing needs writing.
pub(crate) fn merge_vary(existing: Option<&str>, incoming: &str) -> Option<String> {
    let incoming = incoming.trim();
    let mut entries: Vec<&str> = existing
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .collect()
        })
        .unwrap_or_default();

    if incoming.is_empty()
        || entries
            .iter()
            .any(|entry| *entry == "*" || entry.eq_ignore_ascii_case(incoming))
    {
        return None;
    }

    entries.push(incoming);

    let mut deduped: Vec<&str> = Vec::with_capacity(entries.len());
    for entry in entries {
        if deduped
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(entry))
        {
            continue;
        }
        deduped.push(entry);
    }

    Some(deduped.join(LIST_SEPARATOR))
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
