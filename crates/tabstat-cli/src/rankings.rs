use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabstat_core::{RankedGroup, RankedRow};
use tabstat_report::format_number;

const NULL: &str = "null";

pub fn row_table(rows: &[RankedRow], by: &str, label: Option<&str>) -> Table {
    let mut table = ranking_table();
    let mut header = vec![header_cell("Row")];
    if let Some(label) = label {
        header.push(header_cell(label));
    }
    header.push(header_cell(by));
    table.set_header(header);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, if label.is_some() { 2 } else { 1 }, CellAlignment::Right);

    for ranked in rows {
        let mut cells = vec![Cell::new(ranked.row).fg(Color::DarkGrey)];
        if label.is_some() {
            cells.push(text_cell(ranked.label.as_deref()));
        }
        cells.push(Cell::new(format_number(ranked.value)).add_attribute(Attribute::Bold));
        table.add_row(cells);
    }
    table
}

pub fn group_mean_table(groups: &[RankedGroup], keys: &[String], column: &str) -> Table {
    let mut table = ranking_table();
    let mut header: Vec<Cell> = keys.iter().map(|key| header_cell(key)).collect();
    header.push(header_cell(&format!("mean {column}")));
    header.push(header_cell("count"));
    table.set_header(header);
    align_column(&mut table, keys.len(), CellAlignment::Right);
    align_column(&mut table, keys.len() + 1, CellAlignment::Right);

    for group in groups {
        let mut cells: Vec<Cell> = group
            .key
            .iter()
            .map(|value| text_cell(value.as_deref()))
            .collect();
        cells.push(Cell::new(format_number(group.mean)).add_attribute(Attribute::Bold));
        cells.push(Cell::new(group.count));
        table.add_row(cells);
    }
    table
}

fn ranking_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn text_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => Cell::new(NULL).fg(Color::DarkGrey),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_table_lists_labels_and_values() {
        let rows = vec![
            RankedRow {
                row: 2,
                label: Some("Chess".to_string()),
                value: 1000.0,
            },
            RankedRow {
                row: 5,
                label: None,
                value: 2.5,
            },
        ];
        let rendered = row_table(&rows, "Installs", Some("App")).to_string();
        assert!(rendered.contains("Installs"));
        assert!(rendered.contains("Chess"));
        assert!(rendered.contains("1000.0"));
        assert!(rendered.contains("null"));
        assert!(rendered.contains("2.5"));

        let mut unlabeled = row_table(&rows, "Installs", None);
        assert_eq!(unlabeled.column_count(), 2);
    }

    #[test]
    fn group_table_has_one_column_per_key() {
        let groups = vec![RankedGroup {
            key: vec![Some("Games".to_string()), None],
            mean: 1000.0 / 3.0,
            count: 3,
        }];
        let keys = vec!["Category".to_string(), "Type".to_string()];
        let mut table = group_mean_table(&groups, &keys, "Installs");
        assert_eq!(table.column_count(), 4);
        let rendered = table.to_string();
        assert!(rendered.contains("mean Installs"));
        assert!(rendered.contains("333.3333"));
        assert!(rendered.contains("null"));
    }
}
