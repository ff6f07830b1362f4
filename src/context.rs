use crate::headers::{Headers, ResponseHeaders};

/// The slice of a host pipeline's request/response exchange this middleware needs.
pub trait CorsContext {
    type Headers: ResponseHeaders + ?Sized;

    /// The incoming request's `Origin` header, if present.
    fn request_origin(&self) -> Option<&str>;

    /// Borrows the request origin and the response headers together.
    fn split_mut(&mut self) -> (Option<&str>, &mut Self::Headers);
}

/// Owned, framework-neutral exchange.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Exchange {
    pub origin: Option<String>,
    pub response_headers: Headers,
}

impl Exchange {
    pub fn new<S: Into<String>>(origin: Option<S>) -> Self {
        Self {
            origin: origin.map(Into::into),
            response_headers: Headers::new(),
        }
    }

    pub fn with_origin<S: Into<String>>(origin: S) -> Self {
        Self::new(Some(origin))
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.response_headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl CorsContext for Exchange {
    type Headers = Headers;

    fn request_origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    fn split_mut(&mut self) -> (Option<&str>, &mut Headers) {
        (self.origin.as_deref(), &mut self.response_headers)
    }
}

/// Exchange over `http` header maps, for tower, axum and hyper hosts.
#[cfg(feature = "http")]
#[derive(Debug)]
pub struct HttpExchange<'a> {
    request: &'a http::HeaderMap,
    response: &'a mut http::HeaderMap,
}

#[cfg(feature = "http")]
impl<'a> HttpExchange<'a> {
    pub fn new(request: &'a http::HeaderMap, response: &'a mut http::HeaderMap) -> Self {
        Self { request, response }
    }

    fn origin_of(request: &http::HeaderMap) -> Option<&str> {
        request
            .get(http::header::ORIGIN)
            .and_then(|value| value.to_str().ok())
    }
}

#[cfg(feature = "http")]
impl CorsContext for HttpExchange<'_> {
    type Headers = http::HeaderMap;

    fn request_origin(&self) -> Option<&str> {
        Self::origin_of(self.request)
    }

    fn split_mut(&mut self) -> (Option<&str>, &mut http::HeaderMap) {
        (Self::origin_of(self.request), &mut *self.response)
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
