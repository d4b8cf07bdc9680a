//! Console tables built from a loaded catalog.

use std::io::Write;

use comfy_table::Table;
use robo_cli::tables::{cost_table, glance_table, options_table, results_table, schema_table};
use robo_ingest::{IngestOptions, NormalizedCatalog, load_catalog};
use robo_query::{FilterCriteria, SelectorOptions, SortKey, apply, estimate};
use tempfile::NamedTempFile;

const SHEET: &str = "\
Robot Guide,,,,,,
Name,Manufacturer,Price,Price per Set,Min Grade Level,Max Users,Battery Type
Cubetto,Primo Toys,N/A,,K,1-2,AA
Dash,Wonder Workshop,149.99,,1,,Li-ion
Bee-Bot,TTS,$89.99,\"$1,299.00\",PK,2 - 4,AAA
";

fn load() -> NormalizedCatalog {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(SHEET.as_bytes()).expect("write sheet");
    load_catalog(file.path(), &IngestOptions::default().with_skip_rows(1)).expect("load catalog")
}

fn render(mut table: Table) -> String {
    table.force_no_tty();
    table.to_string()
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{needle} missing from:\n{haystack}"))
}

#[test]
fn glance_lists_cheapest_first_and_unpriced_last() {
    let loaded = load();
    let result = apply(&loaded.catalog, &FilterCriteria::new(), SortKey::Price);
    let text = render(glance_table(result.records()));

    assert!(position(&text, "Bee-Bot") < position(&text, "Dash"));
    assert!(position(&text, "Dash") < position(&text, "Cubetto"));
    assert!(text.contains("$89.99"));
    assert!(text.contains("Max Users"));
    assert!(text.contains("N/A"));
}

#[test]
fn results_follow_requested_order() {
    let loaded = load();
    let result = apply(&loaded.catalog, &FilterCriteria::new(), SortKey::Name);
    let text = render(results_table(result.records()));

    assert!(position(&text, "Bee-Bot") < position(&text, "Cubetto"));
    assert!(position(&text, "Cubetto") < position(&text, "Dash"));
}

#[test]
fn cost_table_marks_cheapest_option() {
    let loaded = load();
    let bee_bot = loaded.catalog.find_by_name("Bee-Bot").unwrap();
    let options = estimate(bee_bot, 8);
    assert_eq!(options.len(), 2);

    let text = render(cost_table(&options));
    assert!(text.contains("Using classroom sets (2 set(s))"));
    assert!(text.contains("$2,598.00"));
    assert!(text.contains("Buying individually (8 unit(s))"));
    assert!(text.contains("$719.92"));
    assert_eq!(text.matches('✓').count(), 1);
}

#[test]
fn schema_table_shows_degraded_fields() {
    let loaded = load();
    let text = render(schema_table(&loaded.report));

    assert!(text.contains("exact-header"));
    assert!(text.contains("Battery Type"));
    assert!(text.contains("not available"));
}

#[test]
fn options_table_orders_grades() {
    let loaded = load();
    let text = render(options_table(&SelectorOptions::from_catalog(&loaded.catalog)));

    assert!(text.contains("PK, K, 1"));
    assert!(text.contains("Primo Toys, TTS, Wonder Workshop"));
    assert!(text.contains("$89.99 to $149.99"));
}
