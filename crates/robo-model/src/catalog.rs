use serde::Serialize;

use crate::error::{ModelError, Result};
use crate::field::{Field, FieldSet};
use crate::record::Record;

/// Ordered, read-only snapshot of the robot catalog.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    records: Vec<Record>,
    fields: FieldSet,
}

impl Catalog {
    /// Builds a catalog, rejecting any record with a blank name or manufacturer.
    pub fn new(records: Vec<Record>, fields: FieldSet) -> Result<Self> {
        for (index, record) in records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(ModelError::MissingRequiredValue {
                    index,
                    field: Field::Name,
                });
            }
            if record.manufacturer.trim().is_empty() {
                return Err(ModelError::MissingRequiredValue {
                    index,
                    field: Field::Manufacturer,
                });
            }
        }
        Ok(Self { records, fields })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Fields that resolved to a source column.
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn is_available(&self, field: Field) -> bool {
        self.fields.contains(field)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive lookup by robot name; first match wins.
    pub fn find_by_name(&self, name: &str) -> Option<&Record> {
        let needle = name.trim();
        self.records
            .iter()
            .find(|record| record.name.trim().eq_ignore_ascii_case(needle))
    }
}
