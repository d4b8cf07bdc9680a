//! Schema Normalizer: turns a raw table into a validated [`Catalog`].

use std::path::Path;

use robo_model::{Catalog, DeviceFlag, Field, Flag, GradeLevel, InternetUse, Record};

use crate::csv::{IngestOptions, RawTable, read_raw_table};
use crate::detection::{ColumnDetector, SchemaMap, SchemaReport};
use crate::error::{IngestError, Result};
use crate::numeric::{parse_number, parse_upper_bound};

/// A normalized catalog plus an account of how it was built.
#[derive(Debug, Clone)]
pub struct NormalizedCatalog {
    pub catalog: Catalog,
    pub schema: SchemaMap,
    pub report: SchemaReport,
    /// Data rows discarded for a blank name or manufacturer.
    pub dropped_rows: usize,
}

/// Reads and normalizes a catalog file.
pub fn load_catalog(path: &Path, options: &IngestOptions) -> Result<NormalizedCatalog> {
    let span = tracing::info_span!("load_catalog", path = %path.display());
    let _guard = span.enter();
    let table = read_raw_table(path, options)?;
    normalize(&table)
}

/// Normalizes a table with the standard detection chain.
pub fn normalize(table: &RawTable) -> Result<NormalizedCatalog> {
    normalize_with(table, &ColumnDetector::standard())
}

/// Normalizes a table with a caller-supplied detector.
///
/// Fails only when `Name` or `Manufacturer` has no column. Every other
/// missing column degrades the field; malformed cells become absent values.
pub fn normalize_with(table: &RawTable, detector: &ColumnDetector) -> Result<NormalizedCatalog> {
    let schema = detector.detect(table);

    for field in [Field::Name, Field::Manufacturer] {
        if schema.index(field).is_none() {
            return Err(IngestError::MissingRequiredColumn {
                field,
                headers: table.headers().to_vec(),
            });
        }
    }

    let report = schema.report();
    let degraded = report.degraded();
    for field in &degraded {
        tracing::warn!(field = %field, "column not found; field is not available");
    }

    let mut records = Vec::with_capacity(table.height());
    let mut dropped_rows = 0;
    for (row_number, row) in table.rows().iter().enumerate() {
        let cells = RowCells {
            row,
            schema: &schema,
        };
        match cells.to_record() {
            Some(record) => records.push(record),
            None => {
                dropped_rows += 1;
                tracing::debug!(row = row_number + 1, "dropped row without name or manufacturer");
            }
        }
    }

    let catalog = Catalog::new(records, schema.fields())?;
    tracing::info!(
        records = catalog.len(),
        dropped_rows,
        degraded_fields = degraded.len(),
        "normalized catalog"
    );

    Ok(NormalizedCatalog {
        catalog,
        schema,
        report,
        dropped_rows,
    })
}

/// One data row viewed through the resolved schema.
struct RowCells<'a> {
    row: &'a [String],
    schema: &'a SchemaMap,
}

impl RowCells<'_> {
    fn text(&self, field: Field) -> Option<&str> {
        let index = self.schema.index(field)?;
        let value = self.row.get(index)?.trim();
        (!value.is_empty()).then_some(value)
    }

    fn owned(&self, field: Field) -> Option<String> {
        self.text(field).map(str::to_string)
    }

    fn number(&self, field: Field) -> Option<f64> {
        self.text(field).and_then(parse_number)
    }

    fn flag(&self, field: Field) -> Option<Flag> {
        self.text(field).and_then(Flag::parse)
    }

    fn devices(&self) -> Vec<DeviceFlag> {
        self.schema
            .devices()
            .iter()
            .filter_map(|device| {
                let flag = self.row.get(device.index).and_then(|cell| Flag::parse(cell))?;
                Some(DeviceFlag {
                    label: device.label.clone(),
                    flag,
                })
            })
            .collect()
    }

    /// `None` when the row lacks a name or manufacturer.
    fn to_record(&self) -> Option<Record> {
        let name = self.text(Field::Name)?;
        let manufacturer = self.text(Field::Manufacturer)?;

        Some(Record {
            name: name.to_string(),
            manufacturer: manufacturer.to_string(),
            price: self.number(Field::Price),
            price_per_set: self.number(Field::PricePerSet),
            min_grade: self.text(Field::MinGradeLevel).and_then(GradeLevel::parse),
            min_age: self.number(Field::MinAge),
            rechargeable: self.flag(Field::Rechargeable),
            batteries: self.owned(Field::Batteries),
            battery_type: self.owned(Field::BatteryType),
            set_available: self.flag(Field::SetAvailable),
            set_size: self.owned(Field::SetSize),
            max_users: self.text(Field::MaxUsers).and_then(parse_upper_bound),
            max_users_text: self.owned(Field::MaxUsers),
            device_required: self.flag(Field::DeviceRequired),
            devices: self.devices(),
            visual: self.flag(Field::VisualAccessibility),
            auditory: self.flag(Field::AuditoryAccessibility),
            fine_motor: self.flag(Field::FineMotorAccessibility),
            internet: self.text(Field::Internet).and_then(InternetUse::parse),
            screen_free: self.flag(Field::ScreenFree),
            space_requirement: self.number(Field::SpaceRequirement),
            consumables: self.flag(Field::ConsumablesRequired),
            image_url: self.owned(Field::Image),
            purchase_url: self.owned(Field::PurchaseWebsite),
            description: self.owned(Field::Description),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            headers.iter().map(ToString::to_string).collect(),
            rows.iter()
                .map(|row| row.iter().map(ToString::to_string).collect())
                .collect(),
        )
    }

    #[test]
    fn test_missing_required_column_fails() {
        let err = normalize(&table(&["Name", "Price"], &[&["Bee-Bot", "89.99"]])).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingRequiredColumn {
                field: Field::Manufacturer,
                ..
            }
        ));
    }

    #[test]
    fn test_rows_without_name_are_dropped() {
        let normalized = normalize(&table(
            &["Name", "Manufacturer"],
            &[&["Bee-Bot", "TTS"], &["", "Sphero"], &["Dash", " "]],
        ))
        .unwrap();
        assert_eq!(normalized.catalog.len(), 1);
        assert_eq!(normalized.dropped_rows, 2);
    }

    #[test]
    fn test_cells_are_coerced() {
        let normalized = normalize(&table(
            &[
                "Name",
                "Manufacturer",
                "Price",
                "Max Users",
                "Min Grade Level",
                "Rechargeable",
                "Internet",
                "Device: Tablet",
            ],
            &[&["Dash", "Wonder Workshop", "$149.99", "2 - 4", "1st", "yes", "Not used", "Yes"]],
        ))
        .unwrap();
        let record = &normalized.catalog.records()[0];
        assert_eq!(record.price, Some(149.99));
        assert_eq!(record.max_users, Some(4.0));
        assert_eq!(record.max_users_text.as_deref(), Some("2 - 4"));
        assert_eq!(record.min_grade, Some(GradeLevel::Grade(1)));
        assert_eq!(record.rechargeable, Some(Flag::Yes));
        assert_eq!(record.internet, Some(InternetUse::NotUsed));
        assert!(record.uses_device("Tablet"));
    }

    #[test]
    fn test_malformed_cells_become_absent() {
        let normalized = normalize(&table(
            &["Name", "Manufacturer", "Price", "Rechargeable"],
            &[&["Bee-Bot", "TTS", "call for quote", "maybe"]],
        ))
        .unwrap();
        let record = &normalized.catalog.records()[0];
        assert_eq!(record.price, None);
        assert_eq!(record.rechargeable, None);
    }

    #[test]
    fn test_degraded_fields_are_reported() {
        let normalized = normalize(&table(&["Name", "Manufacturer"], &[&["Bee-Bot", "TTS"]])).unwrap();
        assert!(!normalized.catalog.is_available(Field::Price));
        assert!(normalized.report.degraded().contains(&Field::Price));
        assert!(normalized.catalog.is_available(Field::Name));
    }
}
