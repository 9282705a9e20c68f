use tabstat_model::{ColumnEntry, GroupSummary, Report, Section};

/// Grouped results for one grouping dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedResult {
    pub group_keys: Vec<String>,
    pub groups: Vec<GroupSummary>,
}

/// Order already-computed summaries into a report.
///
/// The overall section comes first, then one grouped section per grouping
/// dimension in the order given. Group order inside a section is preserved.
pub fn assemble_report(
    dataset: &str,
    row_count: usize,
    overall: Vec<ColumnEntry>,
    grouped: Vec<GroupedResult>,
) -> Report {
    let mut sections = Vec::with_capacity(grouped.len() + 1);
    sections.push(Section::Overall {
        row_count,
        columns: overall,
    });
    sections.extend(grouped.into_iter().map(|result| Section::Grouped {
        group_keys: result.group_keys,
        groups: result.groups,
    }));
    Report {
        dataset: dataset.to_string(),
        row_count,
        sections,
    }
}
