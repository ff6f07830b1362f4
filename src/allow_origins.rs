use crate::constants::WILDCARD;

/// Which origins receive an `Access-Control-Allow-Origin` header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(from = "AllowOriginsRepr")
)]
pub enum AllowOrigins {
    #[default]
    Any,
    /// Emitted verbatim for every request.
    Exact(String),
    /// Only a member origin is echoed back. Membership ignores ASCII case and the
    /// request's own spelling is what gets echoed.
    List(Vec<String>),
}

/// Outcome of resolving one request's `Origin` against [`AllowOrigins`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OriginDecision<'a> {
    Any,
    Exact(&'a str),
    Mirror(&'a str),
    Disallow,
}

impl<'a> OriginDecision<'a> {
    /// Value for `Access-Control-Allow-Origin`, if the header is emitted at all.
    pub fn header_value(&self) -> Option<&'a str> {
        match *self {
            OriginDecision::Any => Some(WILDCARD),
            OriginDecision::Exact(value) | OriginDecision::Mirror(value) => Some(value),
            OriginDecision::Disallow => None,
        }
    }

    /// Whether the response must carry `Vary: Origin`.
    pub fn varies(&self) -> bool {
        !matches!(self, OriginDecision::Any)
    }
}

impl AllowOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    /// A single origin. `"*"` and blank values are the wildcard.
    pub fn exact<S: Into<String>>(value: S) -> Self {
        let value = value.into();
        match value.trim() {
            "" | WILDCARD => Self::Any,
            _ => Self::Exact(value),
        }
    }

    /// An allow-list. A list naming `"*"` anywhere is the wildcard.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.iter().any(|value| value.trim() == WILDCARD) {
            Self::Any
        } else {
            Self::List(values)
        }
    }

    /// Reads a comma-separated line: `*` is the wildcard, one entry a single origin,
    /// several entries a list.
    pub fn parse(line: &str) -> Self {
        let mut entries: Vec<String> = line
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_owned)
            .collect();

        match entries.len() {
            0 => Self::Any,
            1 => Self::exact(entries.remove(0)),
            _ => Self::list(entries),
        }
    }

    pub fn resolve<'a>(&'a self, request_origin: Option<&'a str>) -> OriginDecision<'a> {
        match self {
            AllowOrigins::Any => OriginDecision::Any,
            AllowOrigins::Exact(value) => OriginDecision::Exact(value),
            AllowOrigins::List(allowed) => match request_origin {
                Some(origin) if Self::contains(allowed, origin) => OriginDecision::Mirror(origin),
                _ => OriginDecision::Disallow,
            },
        }
    }

    fn contains(allowed: &[String], origin: &str) -> bool {
        allowed
            .iter()
            .any(|entry| entry.eq_ignore_ascii_case(origin))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, AllowOrigins::Any)
    }
}

impl From<&str> for AllowOrigins {
    fn from(value: &str) -> Self {
        Self::exact(value)
    }
}

impl From<String> for AllowOrigins {
    fn from(value: String) -> Self {
        Self::exact(value)
    }
}

impl<S: Into<String>> From<Vec<S>> for AllowOrigins {
    fn from(values: Vec<S>) -> Self {
        Self::list(values)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for AllowOrigins {
    fn from(values: [S; N]) -> Self {
        Self::list(values)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum AllowOriginsRepr {
    One(String),
    Many(Vec<String>),
}

#[cfg(feature = "serde")]
impl From<AllowOriginsRepr> for AllowOrigins {
    fn from(repr: AllowOriginsRepr) -> Self {
        match repr {
            AllowOriginsRepr::One(value) => Self::exact(value),
            AllowOriginsRepr::Many(values) => Self::list(values),
        }
    }
}

#[cfg(test)]
#[path = "allow_origins_test.rs"]
mod allow_origins_test;
