use std::collections::BTreeSet;

use crate::metadata::Metadata;

/// Decides whether a raw value counts as missing.
///
/// A value is missing when it is an explicit missing marker, when it is empty
/// after trimming whitespace, or when its trimmed text equals one of the
/// declared NA tokens. The same policy applies to summarized values and to
/// group keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingPolicy {
    na_tokens: BTreeSet<String>,
}

impl MissingPolicy {
    pub fn new<I>(tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            na_tokens: tokens
                .into_iter()
                .map(Into::into)
                .map(|token: String| token.trim().to_string())
                .filter(|token| !token.is_empty())
                .collect(),
        }
    }

    pub fn from_metadata(metadata: &Metadata) -> Self {
        Self::new(metadata.na_values.iter().cloned())
    }

    pub fn is_missing(&self, cell: Option<&str>) -> bool {
        self.value(cell).is_none()
    }

    /// The raw (untrimmed) value when present, `None` when missing.
    pub fn value<'a>(&self, cell: Option<&'a str>) -> Option<&'a str> {
        let raw = cell?;
        let trimmed = raw.trim();
        if trimmed.is_empty() || self.na_tokens.contains(trimmed) {
            None
        } else {
            Some(raw)
        }
    }
}
