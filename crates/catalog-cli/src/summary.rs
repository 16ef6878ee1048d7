use std::cmp::Reverse;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalog_ingest::TableProfile;
use catalog_model::{Brand, Diagnostic, Projection, Severity};

use crate::types::CleanRun;

pub fn print_summary(run: &CleanRun) {
    println!("Brand: {} ({})", run.brand.display_name(), run.brand.code());
    println!("Input: {}", run.input.display());
    match &run.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    if let Some(path) = &run.report {
        println!("Report: {}", path.display());
    }
    println!("{}", summary_table(run));
    if let Some(table) = diagnostics_table(&run.outcome.diagnostics) {
        println!();
        println!("Diagnostics:");
        println!("{table}");
    }
}

/// Key figures of a finished run.
pub fn summary_table(run: &CleanRun) -> Table {
    let enrichment = &run.outcome.enrichment;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let reference = match &run.outcome.reference {
        Some(name) => Cell::new(name),
        None => Cell::new("not found").fg(Color::Yellow),
    };
    table.add_row(vec![Cell::new("Reference collection"), reference]);
    table.add_row(vec![
        Cell::new("Collections loaded"),
        Cell::new(run.reference_collections),
    ]);
    table.add_row(vec![Cell::new("Rows"), Cell::new(run.profile.rows)]);
    table.add_row(vec![Cell::new("Columns"), Cell::new(run.profile.columns)]);
    table.add_row(vec![
        Cell::new("Enriched rows"),
        Cell::new(format!(
            "{} / {}",
            enrichment.enriched_rows, enrichment.total_rows
        )),
    ]);
    table.add_row(vec![
        Cell::new("Filled cells"),
        count_cell(enrichment.filled_cells, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Reference keys"),
        Cell::new(enrichment.reference_keys),
    ]);
    table.add_row(vec![
        Cell::new("Completeness"),
        Cell::new(format!("{:.1}%", run.profile.completeness())),
    ]);
    table.add_row(vec![
        Cell::new("Warnings").add_attribute(Attribute::Bold),
        count_cell(run.outcome.warning_count(), Color::Yellow),
    ]);
    table
}

/// Diagnostics, most severe first; `None` when there are none.
pub fn diagnostics_table(diagnostics: &[Diagnostic]) -> Option<Table> {
    if diagnostics.is_empty() {
        return None;
    }
    let mut ordered: Vec<&Diagnostic> = diagnostics.iter().collect();
    ordered.sort_by_key(|d| Reverse(d.severity));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Rows"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for diagnostic in ordered {
        let rows = match diagnostic.affected_rows {
            Some(rows) => Cell::new(rows),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            severity_cell(diagnostic.severity),
            Cell::new(&diagnostic.code),
            rows,
            Cell::new(&diagnostic.message),
        ]);
    }
    Some(table)
}

/// Supported brands and their output shape.
pub fn brands_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Brand"),
        header_cell("Projection"),
        header_cell("Output columns"),
    ]);
    apply_condensed_style(&mut table);
    for brand in Brand::ALL {
        let profile = brand.profile();
        let projection = match profile.projection {
            Projection::Restrict => "restrict",
            Projection::KeepAll => "keep all",
        };
        table.add_row(vec![
            Cell::new(brand.code())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(profile.display_name),
            Cell::new(projection),
            Cell::new(profile.output_columns.join(", ")),
        ]);
    }
    table
}

/// Shape and per-column nulls of a raw table.
pub fn profile_summary_table(profile: &TableProfile) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Nulls"),
        header_cell("Null %"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for column in &profile.column_profiles {
        table.add_row(vec![
            Cell::new(&column.name),
            count_cell(column.null_count, Color::Yellow),
            Cell::new(format!("{:.1}", column.null_percent)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(profile.null_cells, Color::Yellow).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", 100.0 - profile.completeness())).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn print_profile(profile: &TableProfile) {
    println!(
        "Rows: {}  Columns: {}  Completeness: {:.1}%",
        profile.rows,
        profile.columns,
        profile.completeness()
    );
    println!("{}", profile_summary_table(profile));
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Compact style for plain listings.
fn apply_condensed_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
        Severity::Info => Cell::new("INFO").fg(Color::Cyan),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
