use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabstat_cli::batch::{BatchResult, DatasetOutcome, DatasetStatus};

pub fn print_summary(result: &BatchResult) {
    println!("Output: {}", result.output_dir.display());
    println!("{}", summary_table(result));
    let failures: Vec<(&str, &str)> = result
        .outcomes
        .iter()
        .filter_map(|outcome| match &outcome.status {
            DatasetStatus::Failed(message) => Some((outcome.name.as_str(), message.as_str())),
            _ => None,
        })
        .collect();
    if !failures.is_empty() {
        eprintln!("Errors:");
        for (name, message) in failures {
            eprintln!("- {name}: {message}");
        }
    }
}

pub fn summary_table(result: &BatchResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Rows"),
        header_cell("Groups"),
        header_cell("Status"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    let mut total_rows = 0usize;
    let mut total_groups = 0usize;
    for outcome in &result.outcomes {
        total_rows += outcome.rows.unwrap_or(0);
        total_groups += outcome.groups.unwrap_or(0);
        table.add_row(vec![
            Cell::new(&outcome.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            count_cell(outcome.rows),
            count_cell(outcome.groups),
            status_cell(&outcome.status),
            output_cell(outcome),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        Cell::new(total_groups).add_attribute(Attribute::Bold),
        failed_total_cell(result.failed_count()),
        dim_cell("-"),
    ]);
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(status: &DatasetStatus) -> Cell {
    match status {
        DatasetStatus::Written(_) => Cell::new("ok").fg(Color::Green),
        DatasetStatus::Analyzed => Cell::new("dry run").fg(Color::Yellow),
        DatasetStatus::Failed(_) => Cell::new("FAILED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn output_cell(outcome: &DatasetOutcome) -> Cell {
    match &outcome.status {
        DatasetStatus::Written(paths) if !paths.is_empty() => {
            let names: Vec<String> = paths
                .iter()
                .map(|path| {
                    path.file_name()
                        .map_or_else(|| path.display().to_string(), |name| {
                            name.to_string_lossy().into_owned()
                        })
                })
                .collect();
            Cell::new(names.join("\n"))
        }
        _ => dim_cell("-"),
    }
}

fn count_cell(count: Option<usize>) -> Cell {
    match count {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn failed_total_cell(failed: usize) -> Cell {
    if failed > 0 {
        Cell::new(format!("{failed} failed"))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("all ok").fg(Color::Green)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
