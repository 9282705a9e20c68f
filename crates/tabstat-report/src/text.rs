//! Plain-text report layout.
//!
//! ```text
//! ============================================================
//! <DATASET> - OVERALL SUMMARY
//! ============================================================
//! Rows: <n>
//!
//! Column: <name>
//!   - count: <n>
//!   ...
//!
//! ============================================================
//! SUMMARY BY (<key>, <key>)
//! ============================================================
//! {<key>: <value>, <key>: <value>}
//!   Rows: <n>
//!   Column: <name>
//!     - count: <n>
//!     ...
//! ```

use std::fmt::{self, Display, Formatter};

use tabstat_model::{
    CategoricalSummary, ColumnEntry, ColumnSummary, GroupSummary, NumericSummary, Report, Section,
};

const BANNER_WIDTH: usize = 60;
const NULL: &str = "null";

/// Render a report in the plain-text layout.
pub fn render_text(report: &Report) -> String {
    TextReport(report).to_string()
}

/// Display adapter for the plain-text layout.
pub struct TextReport<'a>(pub &'a Report);

impl Display for TextReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let report = self.0;
        for (idx, section) in report.sections.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            match section {
                Section::Overall { row_count, columns } => {
                    banner(f, &format!("{} - OVERALL SUMMARY", report.dataset.to_uppercase()))?;
                    writeln!(f, "Rows: {row_count}")?;
                    for entry in columns {
                        writeln!(f)?;
                        column_block(f, entry, 0)?;
                    }
                }
                Section::Grouped { group_keys, groups } => {
                    banner(f, &format!("SUMMARY BY ({})", group_keys.join(", ")))?;
                    for (group_idx, group) in groups.iter().enumerate() {
                        if group_idx > 0 {
                            writeln!(f)?;
                        }
                        group_block(f, group_keys, group)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn banner(f: &mut Formatter<'_>, title: &str) -> fmt::Result {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(f, "{rule}")?;
    writeln!(f, "{title}")?;
    writeln!(f, "{rule}")
}

fn group_block(f: &mut Formatter<'_>, keys: &[String], group: &GroupSummary) -> fmt::Result {
    let pairs: Vec<String> = keys
        .iter()
        .zip(&group.key)
        .map(|(key, value)| format!("{key}: {}", value.as_deref().unwrap_or(NULL)))
        .collect();
    writeln!(f, "{{{}}}", pairs.join(", "))?;
    writeln!(f, "  Rows: {}", group.row_count)?;
    for entry in &group.columns {
        column_block(f, entry, 2)?;
    }
    Ok(())
}

fn column_block(f: &mut Formatter<'_>, entry: &ColumnEntry, indent: usize) -> fmt::Result {
    let pad = " ".repeat(indent);
    writeln!(f, "{pad}Column: {}", entry.column)?;
    match &entry.summary {
        ColumnSummary::Numeric(summary) => numeric_lines(f, summary, &pad),
        ColumnSummary::Categorical(summary) => categorical_lines(f, summary, &pad),
    }
}

fn numeric_lines(f: &mut Formatter<'_>, summary: &NumericSummary, pad: &str) -> fmt::Result {
    writeln!(f, "{pad}  - count: {}", summary.count)?;
    writeln!(f, "{pad}  - missing: {}", summary.missing)?;
    writeln!(f, "{pad}  - mean: {}", format_number(summary.mean))?;
    writeln!(f, "{pad}  - min: {}", format_optional(summary.min))?;
    writeln!(f, "{pad}  - max: {}", format_optional(summary.max))?;
    writeln!(f, "{pad}  - std: {}", format_number(summary.std))?;
    if let Some(quartiles) = &summary.quartiles {
        writeln!(f, "{pad}  - 25%: {}", format_number(quartiles.q1))?;
        writeln!(f, "{pad}  - 50%: {}", format_number(quartiles.median))?;
        writeln!(f, "{pad}  - 75%: {}", format_number(quartiles.q3))?;
    }
    Ok(())
}

fn categorical_lines(f: &mut Formatter<'_>, summary: &CategoricalSummary, pad: &str) -> fmt::Result {
    writeln!(f, "{pad}  - count: {}", summary.count)?;
    writeln!(f, "{pad}  - missing: {}", summary.missing)?;
    writeln!(f, "{pad}  - unique: {}", summary.unique)?;
    writeln!(f, "{pad}  - top: {}", summary.top.as_deref().unwrap_or(NULL))?;
    writeln!(f, "{pad}  - freq: {}", summary.freq)?;
    if !summary.value_counts.is_empty() {
        writeln!(f, "{pad}  - top values:")?;
        for entry in &summary.value_counts {
            writeln!(f, "{pad}      {}: {}", entry.value, entry.count)?;
        }
    }
    Ok(())
}

/// Round to 4 decimal places, dropping trailing zeros but keeping one.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let mut text = format!("{value:.4}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.push('0');
    }
    if text == "-0.0" {
        text.remove(0);
    }
    text
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| NULL.to_string(), format_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_to_four_places() {
        assert_eq!(format_number(15.0), "15.0");
        assert_eq!(format_number(3.14159265), "3.1416");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(-0.00001), "0.0");
        assert_eq!(format_number(1234567.0), "1234567.0");
        assert_eq!(format_number(f64::INFINITY), "inf");
    }

    #[test]
    fn missing_extrema_render_as_null() {
        assert_eq!(format_optional(None), "null");
        assert_eq!(format_optional(Some(2.5)), "2.5");
    }
}
