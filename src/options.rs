use crate::allow_origins::AllowOrigins;
use crate::constants::env;
use crate::header_list::HeaderList;
use std::num::ParseIntError;
use thiserror::Error;

/// Middleware configuration. Every field is optional; absent fields take the
/// defaults applied when a [`Cors`](crate::Cors) is constructed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct CorsOptions {
    /// Origins allowed to read the response. Defaults to `*`.
    pub allow_origins: Option<AllowOrigins>,
    /// Defaults to `GET, POST, PUT, DELETE, PATCH, OPTIONS`.
    pub allow_methods: Option<HeaderList>,
    /// Response headers that scripts may read.
    pub expose_headers: Option<HeaderList>,
    /// Request headers permitted on the actual request.
    pub allow_headers: Option<HeaderList>,
    /// Seconds a preflight result may be cached. `Some(0)` is emitted as `0`.
    pub max_age: Option<u64>,
    pub allow_credentials: Option<bool>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer number of seconds, got {value:?}")]
    InvalidMaxAge {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("{key} must be a boolean (true/false, 1/0, yes/no), got {value:?}")]
    InvalidBool { key: &'static str, value: String },
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_origins(mut self, origins: impl Into<AllowOrigins>) -> Self {
        self.allow_origins = Some(origins.into());
        self
    }

    pub fn allow_methods(mut self, methods: impl Into<HeaderList>) -> Self {
        self.allow_methods = Some(methods.into());
        self
    }

    pub fn expose_headers(mut self, headers: impl Into<HeaderList>) -> Self {
        self.expose_headers = Some(headers.into());
        self
    }

    pub fn allow_headers(mut self, headers: impl Into<HeaderList>) -> Self {
        self.allow_headers = Some(headers.into());
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn allow_credentials(mut self, enabled: bool) -> Self {
        self.allow_credentials = Some(enabled);
        self
    }

    /// Reads the `CORS_*` variables from the process environment.
    ///
    /// See [`CorsOptions::from_lookup`] for the accepted formats.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds options from a variable lookup.
    ///
    /// List variables are comma-separated. `CORS_ALLOW_ORIGINS` is the wildcard when
    /// it is `*`, a single origin when it has one entry and an allow-list otherwise.
    /// Variables that are missing or blank leave the field unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let max_age = read(env::MAX_AGE)
            .map(|value| {
                value
                    .parse::<u64>()
                    .map_err(|source| ConfigError::InvalidMaxAge {
                        key: env::MAX_AGE,
                        value,
                        source,
                    })
            })
            .transpose()?;

        let allow_credentials = read(env::ALLOW_CREDENTIALS)
            .map(|value| parse_bool(env::ALLOW_CREDENTIALS, value))
            .transpose()?;

        Ok(Self {
            allow_origins: read(env::ALLOW_ORIGINS).map(|line| AllowOrigins::parse(&line)),
            allow_methods: read(env::ALLOW_METHODS).map(|line| HeaderList::parse(&line)),
            expose_headers: read(env::EXPOSE_HEADERS).map(|line| HeaderList::parse(&line)),
            allow_headers: read(env::ALLOW_HEADERS).map(|line| HeaderList::parse(&line)),
            max_age,
            allow_credentials,
        })
    }
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool { key, value }),
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
