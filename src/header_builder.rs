use crate::constants::method;
use crate::header_list::HeaderList;
use crate::headers::{CorsHeader, StaticHeaders};
use crate::options::CorsOptions;

/// Renders the request-independent part of [`CorsOptions`].
pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    pub(crate) fn build(&self) -> StaticHeaders {
        let mut headers = StaticHeaders::with_capacity(CorsHeader::ALL.len());

        headers.insert(CorsHeader::AllowMethods, self.build_methods_header());
        if let Some(value) = self.build_max_age_header() {
            headers.insert(CorsHeader::MaxAge, value);
        }
        if let Some(value) = self.build_credentials_header() {
            headers.insert(CorsHeader::AllowCredentials, value);
        }
        if let Some(value) = self.build_allowed_headers() {
            headers.insert(CorsHeader::AllowHeaders, value);
        }
        if let Some(value) = self.build_exposed_headers() {
            headers.insert(CorsHeader::ExposeHeaders, value);
        }

        headers
    }

    pub(crate) fn build_methods_header(&self) -> String {
        match &self.options.allow_methods {
            Some(methods) => methods.header_value(),
            None => HeaderList::list(method::DEFAULTS).header_value(),
        }
    }

    pub(crate) fn build_max_age_header(&self) -> Option<String> {
        self.options.max_age.map(|seconds| seconds.to_string())
    }

    pub(crate) fn build_credentials_header(&self) -> Option<String> {
        self.options
            .allow_credentials
            .unwrap_or(false)
            .then(|| "true".to_string())
    }

    pub(crate) fn build_allowed_headers(&self) -> Option<String> {
        self.options
            .allow_headers
            .as_ref()
            .map(HeaderList::header_value)
    }

    pub(crate) fn build_exposed_headers(&self) -> Option<String> {
        self.options
            .expose_headers
            .as_ref()
            .map(HeaderList::header_value)
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
