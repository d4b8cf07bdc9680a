//! Console tables.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use robo_ingest::SchemaReport;
use robo_model::Record;
use robo_query::{CostOption, SelectorOptions, recommended};
use robo_report::{NOT_AVAILABLE, format_currency, format_flag, format_number, text_or_na};

/// Matching robots, one row each.
pub fn results_table(records: &[&Record]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Manufacturer"),
        header_cell("Price"),
        header_cell("Min Grade"),
        header_cell("Min Age"),
        header_cell("Rechargeable"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.name).add_attribute(Attribute::Bold),
            Cell::new(&record.manufacturer),
            value_cell(format_currency(record.price)),
            value_cell(grade_text(record)),
            value_cell(format_number(record.min_age)),
            value_cell(format_flag(record.rechargeable)),
        ]);
    }
    table
}

/// Details at a glance. Rows keep the order given; the command passes them
/// sorted by price.
pub fn glance_table(records: &[&Record]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Manufacturer"),
        header_cell("Price"),
        header_cell("Min Grade Level"),
        header_cell("Rechargeable"),
        header_cell("Batteries"),
        header_cell("Set Available"),
        header_cell("Max Users"),
        header_cell("Device Required"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Right);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.name).add_attribute(Attribute::Bold),
            Cell::new(&record.manufacturer),
            value_cell(format_currency(record.price)),
            value_cell(grade_text(record)),
            value_cell(format_flag(record.rechargeable)),
            value_cell(text_or_na(record.batteries.as_deref())),
            value_cell(format_flag(record.set_available)),
            value_cell(
                record
                    .max_users_text
                    .clone()
                    .unwrap_or_else(|| format_number(record.max_users)),
            ),
            value_cell(format_flag(record.device_required)),
        ]);
    }
    table
}

/// Purchase options with the cheapest marked.
pub fn cost_table(options: &[CostOption]) -> Table {
    let best = recommended(options);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Option"),
        header_cell("Total"),
        header_cell("Recommended"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for option in options {
        let is_best = best.is_some_and(|b| std::ptr::eq(b, option));
        let marker = if is_best {
            Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![
            Cell::new(&option.label),
            Cell::new(format_currency(Some(option.total))),
            marker,
        ]);
    }
    table
}

/// How each canonical field resolved to a column.
pub fn schema_table(report: &SchemaReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Column"),
        header_cell("Strategy"),
        header_cell("Confidence"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for resolution in &report.resolutions {
        let field = Cell::new(resolution.field.canonical_name());
        let row = match (&resolution.header, resolution.strategy, resolution.confidence) {
            (Some(header), Some(strategy), Some(confidence)) => vec![
                field,
                Cell::new(header),
                Cell::new(strategy),
                Cell::new(format!("{:.0}%", confidence * 100.0)),
            ],
            _ => vec![
                field.fg(Color::Yellow),
                Cell::new("not available").fg(Color::Yellow),
                dim_cell("-"),
                dim_cell("-"),
            ],
        };
        table.add_row(row);
    }
    table
}

/// Values each filter can take for this catalog.
pub fn options_table(options: &SelectorOptions) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Filter"), header_cell("Values")]);
    apply_table_style(&mut table);
    let grades: Vec<String> = options.grades.iter().map(ToString::to_string).collect();
    let rows = [
        ("Manufacturer", join_or_na(&options.manufacturers)),
        ("Grade", join_or_na(&grades)),
        ("Battery Type", join_or_na(&options.battery_types)),
        ("Device", join_or_na(&options.devices)),
        ("Price", bounds_text(options.price_bounds, |v| format_currency(Some(v)))),
        ("Min Age", bounds_text(options.age_bounds, |v| format_number(Some(v)))),
    ];
    for (filter, values) in rows {
        table.add_row(vec![Cell::new(filter).add_attribute(Attribute::Bold), Cell::new(values)]);
    }
    table
}

fn grade_text(record: &Record) -> String {
    record
        .min_grade
        .as_ref()
        .map_or_else(|| NOT_AVAILABLE.to_string(), ToString::to_string)
}

fn join_or_na(values: &[String]) -> String {
    if values.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        values.join(", ")
    }
}

fn bounds_text(bounds: Option<(f64, f64)>, format: impl Fn(f64) -> String) -> String {
    bounds.map_or_else(
        || NOT_AVAILABLE.to_string(),
        |(min, max)| format!("{} to {}", format(min), format(max)),
    )
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(text: String) -> Cell {
    if text == NOT_AVAILABLE {
        dim_cell(text)
    } else {
        Cell::new(text)
    }
}

fn dim_cell<T: std::fmt::Display>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
