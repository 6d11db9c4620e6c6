use std::collections::BTreeMap;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bi_cli::pipeline::RunResult;
use bi_model::LookupTables;

pub fn print_summary(result: &RunResult) {
    println!("Output: {}", result.output_dir.display());
    if let Some(path) = &result.manifest_path {
        println!("Manifest: {}", path.display());
    }
    if result.dry_run {
        println!("Dry run: no files written");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("File"),
        header_cell("SHA-256"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for summary in &result.tables {
        let file = summary
            .file
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned());
        let digest = summary
            .sha256
            .as_deref()
            .map(|digest| &digest[..digest.len().min(12)]);
        table.add_row(vec![
            table_cell(&summary.name),
            Cell::new(summary.rows),
            file.map_or_else(|| dim_cell("-"), Cell::new),
            dim_cell(digest.unwrap_or("-")),
        ]);
    }
    println!("{table}");

    let stats = &result.stats;
    let mut counts = Table::new();
    counts.set_header(vec![
        header_cell("Input"),
        header_cell("Rows read"),
        header_cell("Excluded"),
        header_cell("After dedup"),
    ]);
    apply_summary_table_style(&mut counts);
    for index in 1..4 {
        align_column(&mut counts, index, CellAlignment::Right);
    }
    counts.add_row(vec![
        table_cell("energy"),
        Cell::new(stats.energy_input_rows),
        count_cell(stats.energy_excluded, Color::Yellow),
        Cell::new(stats.energy_rows),
    ]);
    counts.add_row(vec![
        table_cell("ai_content"),
        Cell::new(stats.ai_input_rows),
        count_cell(stats.ai_excluded, Color::Yellow),
        Cell::new(stats.ai_rows),
    ]);
    println!("{counts}");

    println!(
        "Harmonized countries: {}  Unmatched energy: {}  Unmapped keys: {}",
        stats.harmonized, stats.unmatched_energy, stats.unmapped_keys
    );
}

pub fn print_lookups(lookups: &LookupTables) {
    print_mapping("Alias", "Country", &lookups.aliases);
    print_mapping("Country", "Region", &lookups.regions);
    print_mapping("Tool", "Tool type", &lookups.tool_types);
}

fn print_mapping(key: &str, value: &str, entries: &BTreeMap<String, String>) {
    let mut table = Table::new();
    table.set_header(vec![header_cell(key), header_cell(value)]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if entries.is_empty() {
        table.add_row(vec![dim_cell("(none)"), dim_cell("-")]);
    }
    for (k, v) in entries {
        table.add_row(vec![Cell::new(k), Cell::new(v)]);
    }
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
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

fn table_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
