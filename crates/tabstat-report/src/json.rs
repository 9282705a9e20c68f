use tabstat_model::Report;

use crate::error::Result;

/// Pretty-printed JSON form of a report, with a trailing newline.
pub fn render_json(report: &Report) -> Result<String> {
    let json = serde_json::to_string_pretty(report)?;
    Ok(format!("{json}\n"))
}
