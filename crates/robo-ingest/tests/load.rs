//! Loading catalog files from disk.

use std::io::Write;

use robo_ingest::{IngestError, IngestOptions, load_catalog};
use robo_model::{Field, Flag, GradeLevel};
use tempfile::NamedTempFile;

const SHEET: &str = "\
Robot Guide 2024,,,,,,,,
Name,Manufacturer,Price,Price per Set,Min Grade Level,Batteries,Set Available,Device: Tablet,Description
Bee-Bot,TTS,$89.99,\"$1,299.00\",PK,Yes,Yes,No,\"A friendly floor robot.\"
,,,,,,,,
Dash,Wonder Workshop,149.99,,1,No,No,Yes,
,Orphan Row,10,,,,,,
Cubetto,Primo Toys,N/A,,K,Yes,,No,Wooden coding robot
";

fn write_sheet(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write sheet");
    file
}

#[test]
fn loads_sheet_with_title_row() {
    let file = write_sheet(SHEET);
    let normalized = load_catalog(file.path(), &IngestOptions::default().with_skip_rows(1))
        .expect("load catalog");

    let catalog = &normalized.catalog;
    assert_eq!(catalog.len(), 3);
    assert_eq!(normalized.dropped_rows, 1);

    let bee_bot = catalog.find_by_name("bee-bot").unwrap();
    assert_eq!(bee_bot.price, Some(89.99));
    assert_eq!(bee_bot.price_per_set, Some(1299.0));
    assert_eq!(bee_bot.min_grade, Some(GradeLevel::PreK));
    assert_eq!(bee_bot.set_available, Some(Flag::Yes));
    assert!(bee_bot.needs_batteries());

    let dash = catalog.find_by_name("Dash").unwrap();
    assert!(dash.uses_device("Tablet"));
    assert!(dash.description.is_none());

    let cubetto = catalog.find_by_name("Cubetto").unwrap();
    assert_eq!(cubetto.price, None);
    assert_eq!(cubetto.set_available, None);
}

#[test]
fn catalog_order_follows_source_rows() {
    let file = write_sheet(SHEET);
    let normalized = load_catalog(file.path(), &IngestOptions::default().with_skip_rows(1))
        .expect("load catalog");
    let names: Vec<&str> = normalized
        .catalog
        .records()
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["Bee-Bot", "Dash", "Cubetto"]);
}

#[test]
fn absent_columns_are_degraded_not_fatal() {
    let file = write_sheet(SHEET);
    let normalized = load_catalog(file.path(), &IngestOptions::default().with_skip_rows(1))
        .expect("load catalog");
    for field in [Field::Image, Field::Internet, Field::MaxUsers] {
        assert!(!normalized.catalog.is_available(field), "{field}");
    }
    assert!(normalized.catalog.is_available(Field::DeviceColumns));
}

#[test]
fn title_row_without_skip_fails_required_columns() {
    let file = write_sheet(SHEET);
    let err = load_catalog(file.path(), &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::MissingRequiredColumn { .. }));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_catalog(&dir.path().join("missing.csv"), &IngestOptions::default())
        .unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
