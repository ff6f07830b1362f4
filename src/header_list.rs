use crate::constants::LIST_SEPARATOR;

/// A multi-valued header configuration, given either as separate entries or as a
/// value the caller already joined.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(untagged))]
pub enum HeaderList {
    /// Emitted verbatim.
    Joined(String),
    /// Emitted as `", "`-joined entries, order preserved.
    List(Vec<String>),
}

impl HeaderList {
    pub fn joined<S: Into<String>>(value: S) -> Self {
        Self::Joined(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Splits a comma-separated line into trimmed, non-empty entries.
    pub fn parse(line: &str) -> Self {
        Self::list(
            line.split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty()),
        )
    }

    pub fn header_value(&self) -> String {
        match self {
            Self::Joined(value) => value.clone(),
            Self::List(values) => values.join(LIST_SEPARATOR),
        }
    }
}

impl From<&str> for HeaderList {
    fn from(value: &str) -> Self {
        Self::Joined(value.to_owned())
    }
}

impl From<String> for HeaderList {
    fn from(value: String) -> Self {
        Self::Joined(value)
    }
}

impl<S: Into<String>> From<Vec<S>> for HeaderList {
    fn from(values: Vec<S>) -> Self {
        Self::list(values)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for HeaderList {
    fn from(values: [S; N]) -> Self {
        Self::list(values)
    }
}

#[cfg(test)]
#[path = "header_list_test.rs"]
mod header_list_test;
