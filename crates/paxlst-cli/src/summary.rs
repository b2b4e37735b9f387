use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use paxlst_cli::batch::BatchOutcome;

pub fn print_batch_summary(outcome: &BatchOutcome) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Segments"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);

    let mut total_segments = 0usize;
    for file in &outcome.cleaned {
        total_segments += file.segments;
        table.add_row(vec![
            Cell::new(file_name(&file.source)),
            Cell::new(file.segments),
            status_cell(true),
        ]);
    }
    for failure in &outcome.failures {
        table.add_row(vec![
            Cell::new(file_name(&failure.source)),
            dim_cell("-"),
            status_cell(false),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_segments).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");

    if outcome.halted {
        eprintln!("Batch halted on first failure; remaining files were not processed.");
    }
    if !outcome.failures.is_empty() {
        eprintln!("Errors:");
        for failure in &outcome.failures {
            eprintln!("- {}: {}", failure.source.display(), failure.error);
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(cleaned: bool) -> Cell {
    if cleaned {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗").fg(Color::Red).add_attribute(Attribute::Bold)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
