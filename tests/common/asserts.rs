#![allow(dead_code)]

use super::headers::{cors_header, vary_tokens};
use bunner_cors_middleware::constants::header;
use bunner_cors_middleware::{CorsHeader, Headers};

pub fn assert_allow_origin(headers: &Headers, expected: &str) {
    assert_eq!(
        cors_header(headers, CorsHeader::AllowOrigin),
        Some(expected),
        "unexpected Access-Control-Allow-Origin in {headers:?}",
    );
}

pub fn assert_no_allow_origin(headers: &Headers) {
    assert_eq!(
        cors_header(headers, CorsHeader::AllowOrigin),
        None,
        "expected no Access-Control-Allow-Origin in {headers:?}",
    );
}

pub fn assert_varies_on_origin(headers: &Headers) {
    let tokens = vary_tokens(headers);
    assert_eq!(
        tokens
            .iter()
            .filter(|token| token.eq_ignore_ascii_case(header::ORIGIN))
            .count(),
        1,
        "expected exactly one Vary: Origin entry in {headers:?}",
    );
}

pub fn assert_no_vary(headers: &Headers) {
    assert_eq!(
        cors_header(headers, CorsHeader::Vary),
        None,
        "expected no Vary header in {headers:?}",
    );
}
