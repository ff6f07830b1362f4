use crate::allow_origins::{AllowOrigins, OriginDecision};
use crate::constants::header;
use crate::context::CorsContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::{CorsHeader, ResponseHeaders, StaticHeaders};
use crate::options::CorsOptions;
use std::future::Future;

/// CORS response-header middleware.
///
/// Construction renders every request-independent header once; each request then
/// only resolves `Access-Control-Allow-Origin` and `Vary`. A `Cors` is immutable and
/// can be shared across concurrent requests behind an `Arc`.
#[derive(Clone, Debug)]
pub struct Cors {
    allow_origins: AllowOrigins,
    static_headers: StaticHeaders,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Self {
        let static_headers = HeaderBuilder::new(&options).build();
        let allow_origins = options.allow_origins.unwrap_or_default();

        if allow_origins.is_any() && options.allow_credentials == Some(true) {
            tracing::warn!(
                "CORS credentials are enabled with a wildcard origin; browsers will reject credentialed responses"
            );
        }
        tracing::debug!(
            allow_origins = ?allow_origins,
            static_headers = static_headers.len(),
            "rendered CORS static headers"
        );

        Self {
            allow_origins,
            static_headers,
        }
    }

    pub fn allow_origins(&self) -> &AllowOrigins {
        &self.allow_origins
    }

    pub fn static_headers(&self) -> &StaticHeaders {
        &self.static_headers
    }

    pub fn resolve_origin<'a>(&'a self, request_origin: Option<&'a str>) -> OriginDecision<'a> {
        self.allow_origins.resolve(request_origin)
    }

    /// Merges the CORS headers for `request_origin` into `headers`.
    pub fn apply_to<H>(&self, request_origin: Option<&str>, headers: &mut H)
    where
        H: ResponseHeaders + ?Sized,
    {
        for (name, value) in self.static_headers.iter() {
            headers.set_header(name, value);
        }

        let decision = self.resolve_origin(request_origin);
        tracing::trace!(origin = ?request_origin, decision = ?decision, "resolved CORS origin");

        if let Some(value) = decision.header_value() {
            headers.set_header(CorsHeader::AllowOrigin, value);
        }
        if decision.varies() {
            headers.append_vary(header::ORIGIN);
        }
    }

    /// Writes the CORS headers into the exchange's response.
    pub fn apply<C>(&self, ctx: &mut C)
    where
        C: CorsContext + ?Sized,
    {
        let (origin, headers) = ctx.split_mut();
        self.apply_to(origin, headers);
    }

    /// Writes the CORS headers, then runs `next` exactly once and returns its output
    /// unchanged, errors included. `args` is handed to `next` as-is.
    pub async fn handle<'c, C, N, A, Fut>(&self, ctx: &'c mut C, next: N, args: A) -> Fut::Output
    where
        C: CorsContext + ?Sized,
        N: FnOnce(&'c mut C, A) -> Fut,
        Fut: Future,
    {
        self.apply(ctx);
        next(ctx, args).await
    }
}

impl Default for Cors {
    fn default() -> Self {
        Self::new(CorsOptions::default())
    }
}

impl From<CorsOptions> for Cors {
    fn from(options: CorsOptions) -> Self {
        Self::new(options)
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
