//! Table formatting using comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::SortReport;

const HEADERS: [&str; 5] = ["collection", "strategy", "length", "compares", "swaps"];

/// Creates a table of compare/swap counts, one row per report.
pub fn stats_table(reports: &[SortReport]) -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = HEADERS
        .iter()
        .map(|col| {
            if super::no_color() {
                Cell::new(col)
            } else {
                Cell::new(col)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan)
            }
        })
        .collect();
    table.set_header(header_cells);

    for report in reports {
        table.add_row(vec![
            Cell::new(report.collection),
            Cell::new(report.strategy),
            Cell::new(report.len).set_alignment(CellAlignment::Right),
            Cell::new(report.compares).set_alignment(CellAlignment::Right),
            Cell::new(report.swaps).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Prints the compare/swap table.
pub fn print_stats_table(reports: &[SortReport]) {
    let table = stats_table(reports);
    println!("{table}");
}
