use serde::Serialize;

use crate::summary::ColumnSummary;

/// Composite group key, one component per key column in declared order.
/// `None` marks a missing key value.
pub type GroupKey = Vec<Option<String>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnEntry {
    pub column: String,
    pub summary: ColumnSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub key: GroupKey,
    pub row_count: usize,
    pub columns: Vec<ColumnEntry>,
}

impl GroupSummary {
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        find_column(&self.columns, name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum Section {
    Overall {
        row_count: usize,
        columns: Vec<ColumnEntry>,
    },
    Grouped {
        group_keys: Vec<String>,
        groups: Vec<GroupSummary>,
    },
}

/// Overall summary followed by one grouped section per grouping dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub dataset: String,
    pub row_count: usize,
    pub sections: Vec<Section>,
}

impl Report {
    pub fn overall(&self) -> Option<&[ColumnEntry]> {
        self.sections.iter().find_map(|section| match section {
            Section::Overall { columns, .. } => Some(columns.as_slice()),
            Section::Grouped { .. } => None,
        })
    }

    pub fn overall_column(&self, name: &str) -> Option<&ColumnSummary> {
        self.overall().and_then(|columns| find_column(columns, name))
    }

    /// Grouped sections in declaration order as `(key columns, groups)`.
    pub fn grouped(&self) -> impl Iterator<Item = (&[String], &[GroupSummary])> {
        self.sections.iter().filter_map(|section| match section {
            Section::Grouped { group_keys, groups } => {
                Some((group_keys.as_slice(), groups.as_slice()))
            }
            Section::Overall { .. } => None,
        })
    }

    pub fn group_count(&self) -> usize {
        self.grouped().map(|(_, groups)| groups.len()).sum()
    }
}

pub fn find_column<'a>(columns: &'a [ColumnEntry], name: &str) -> Option<&'a ColumnSummary> {
    columns
        .iter()
        .find(|entry| entry.column == name)
        .map(|entry| &entry.summary)
}
