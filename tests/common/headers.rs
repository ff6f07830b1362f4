#![allow(dead_code)]

use bunner_cors_middleware::{CorsHeader, Headers};

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    header_value(headers, name).is_some()
}

pub fn cors_header(headers: &Headers, name: CorsHeader) -> Option<&str> {
    header_value(headers, name.as_str())
}

/// CORS headers present in the response, in [`CorsHeader::ALL`] order.
pub fn emitted_cors_headers(headers: &Headers) -> Vec<CorsHeader> {
    CorsHeader::ALL
        .into_iter()
        .filter(|name| cors_header(headers, *name).is_some())
        .collect()
}

/// `Vary` entries in written order.
pub fn vary_tokens(headers: &Headers) -> Vec<&str> {
    cors_header(headers, CorsHeader::Vary)
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
