use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// How a column is summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
    Numeric,
    Categorical,
}

impl ColumnRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered list of key columns defining one grouping dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupSpec(Vec<String>);

impl GroupSpec {
    pub fn new<I>(columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self(columns.into_iter().map(Into::into).collect())
    }

    pub fn columns(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for GroupSpec {
    fn from(columns: Vec<String>) -> Self {
        Self(columns)
    }
}

/// Declarative description of a dataset: column roles and grouping dimensions.
///
/// A declared role is authoritative. Columns without a declared role are
/// ignored unless `infer_undeclared` is set, in which case they are profiled
/// with the value classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Metadata {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
    pub group_by: Vec<GroupSpec>,
    /// Profile columns with no declared role using the value classifier.
    pub infer_undeclared: bool,
    /// Extra tokens treated as missing, in addition to blank values.
    pub na_values: Vec<String>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_numeric<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.numeric.extend(columns.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_categorical<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.categorical.extend(columns.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_group_by(mut self, spec: GroupSpec) -> Self {
        self.group_by.push(spec);
        self
    }

    #[must_use]
    pub fn with_infer_undeclared(mut self, enable: bool) -> Self {
        self.infer_undeclared = enable;
        self
    }

    #[must_use]
    pub fn with_na_values<I>(mut self, tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.na_values.extend(tokens.into_iter().map(Into::into));
        self
    }

    /// The declared role of `column`, if any. Numeric wins when a column is
    /// declared twice; the engine rejects such metadata before using it.
    pub fn role(&self, column: &str) -> Option<ColumnRole> {
        if self.numeric.iter().any(|name| name == column) {
            Some(ColumnRole::Numeric)
        } else if self.categorical.iter().any(|name| name == column) {
            Some(ColumnRole::Categorical)
        } else {
            None
        }
    }

    /// Columns declared with both roles.
    pub fn role_conflicts(&self) -> Vec<&str> {
        let numeric: BTreeSet<&str> = self.numeric.iter().map(String::as_str).collect();
        let mut seen = BTreeSet::new();
        self.categorical
            .iter()
            .map(String::as_str)
            .filter(|name| numeric.contains(name) && seen.insert(*name))
            .collect()
    }
}
