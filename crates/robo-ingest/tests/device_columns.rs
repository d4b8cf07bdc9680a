//! Per-device columns versus the Device Required column.

use robo_ingest::{IngestOptions, normalize, read_raw_table_from_reader};
use robo_model::{Field, Flag};

fn load(text: &str) -> robo_ingest::NormalizedCatalog {
    let table = read_raw_table_from_reader(text.as_bytes(), &IngestOptions::default())
        .expect("read table");
    normalize(&table).expect("normalize")
}

#[test]
fn device_required_spellings_are_not_device_columns() {
    for header in ["Device(s) Required", "Device-Required", "Device - Required"] {
        let normalized = load(&format!(
            "Name,Manufacturer,{header},Device: Tablet\n\
             Bee-Bot,TTS,No,No\n\
             Dash,Wonder Workshop,Yes,Yes\n"
        ));
        assert_eq!(normalized.report.device_labels, vec!["Tablet"], "{header}");
        let resolution = normalized.report.resolution(Field::DeviceRequired).unwrap();
        assert_eq!(resolution.header.as_deref(), Some(header));
        assert!(normalized.catalog.is_available(Field::DeviceRequired));

        let records = normalized.catalog.records();
        assert_eq!(records[0].device_required, Some(Flag::No));
        assert_eq!(records[1].device_required, Some(Flag::Yes));
        assert!(records[1].uses_device("Tablet"));
        assert!(!records[0].uses_device("s) Required"));
    }
}

#[test]
fn all_device_header_shapes_are_collected() {
    let normalized = load(
        "Name,Manufacturer,Device: Tablet,Device - Computer,Device (Phone)\n\
         Dash,Wonder Workshop,Yes,No,Yes\n",
    );
    assert_eq!(
        normalized.report.device_labels,
        vec!["Tablet", "Computer", "Phone"]
    );
    let record = &normalized.catalog.records()[0];
    assert!(record.uses_device("Phone"));
    assert!(!record.uses_device("Computer"));
}
