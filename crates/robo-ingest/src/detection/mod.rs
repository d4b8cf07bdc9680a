//! Column detection: maps source headers onto canonical fields.
//!
//! Detection is an explicit chain. Per-device columns (`Device: Tablet`) are
//! recognized first by their header shape. Then each strategy in priority
//! order ([`ExactHeader`], [`RequiredSubstrings`], [`ContentScan`]) runs over
//! every field that is still unresolved. A matched column is claimed and no
//! later field can take it. Nothing outside this chain is inferred.

mod spec;
mod strategy;
mod vocabulary;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use robo_model::{Field, FieldSet};

use crate::csv::{RawTable, detection_key};

pub use spec::{ContentRule, FieldSpec, STANDARD_SPECS};
pub use strategy::{ContentScan, Detection, DetectionStrategy, ExactHeader, RequiredSubstrings};
pub use vocabulary::is_battery_value;

/// `Device: Tablet`, `Device - Computer`, `Device (Phone)`. The dash needs
/// a space before it and a parenthesised label must end the header.
static DEVICE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^device(?:\s*:\s*(.+?)|\s+-\s*(.+?)|\s*\(\s*([^()]+?)\s*\))\s*$")
        .expect("Invalid device header regex")
});

const DEVICE_FAMILY: &str = "device-family";

/// A field resolved to a source column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedColumn {
    pub index: usize,
    pub header: String,
    pub strategy: &'static str,
    pub confidence: f64,
}

/// One per-device boolean column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceColumn {
    pub index: usize,
    pub header: String,
    pub label: String,
}

/// Where each resolved field lives in the source table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaMap {
    columns: BTreeMap<Field, ResolvedColumn>,
    devices: Vec<DeviceColumn>,
    unmapped: Vec<String>,
}

impl SchemaMap {
    pub fn column(&self, field: Field) -> Option<&ResolvedColumn> {
        self.columns.get(&field)
    }

    pub fn index(&self, field: Field) -> Option<usize> {
        self.columns.get(&field).map(|column| column.index)
    }

    pub fn devices(&self) -> &[DeviceColumn] {
        &self.devices
    }

    /// Fields with a source column. `DeviceColumns` counts when at least one
    /// device column exists.
    pub fn fields(&self) -> FieldSet {
        let mut fields: FieldSet = self.columns.keys().copied().collect();
        if !self.devices.is_empty() {
            fields.insert(Field::DeviceColumns);
        }
        fields
    }

    pub fn report(&self) -> SchemaReport {
        let resolutions = Field::ALL
            .iter()
            .map(|&field| {
                if field == Field::DeviceColumns {
                    return self.device_resolution();
                }
                match self.columns.get(&field) {
                    Some(column) => ColumnResolution {
                        field,
                        header: Some(column.header.clone()),
                        strategy: Some(column.strategy),
                        confidence: Some(column.confidence),
                    },
                    None => ColumnResolution::unresolved(field),
                }
            })
            .collect();
        SchemaReport {
            resolutions,
            device_labels: self.devices.iter().map(|d| d.label.clone()).collect(),
            unmapped_headers: self.unmapped.clone(),
        }
    }

    fn device_resolution(&self) -> ColumnResolution {
        if self.devices.is_empty() {
            return ColumnResolution::unresolved(Field::DeviceColumns);
        }
        let headers: Vec<&str> = self.devices.iter().map(|d| d.header.as_str()).collect();
        ColumnResolution {
            field: Field::DeviceColumns,
            header: Some(headers.join(", ")),
            strategy: Some(DEVICE_FAMILY),
            confidence: Some(1.0),
        }
    }
}

/// How one field was (or was not) resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnResolution {
    pub field: Field,
    pub header: Option<String>,
    pub strategy: Option<&'static str>,
    pub confidence: Option<f64>,
}

impl ColumnResolution {
    fn unresolved(field: Field) -> Self {
        Self {
            field,
            header: None,
            strategy: None,
            confidence: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.header.is_some()
    }
}

/// Human-readable account of column detection for one source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaReport {
    /// One entry per field, in catalog column order.
    pub resolutions: Vec<ColumnResolution>,
    pub device_labels: Vec<String>,
    /// Non-empty headers that no field claimed.
    pub unmapped_headers: Vec<String>,
}

impl SchemaReport {
    pub fn resolution(&self, field: Field) -> Option<&ColumnResolution> {
        self.resolutions.iter().find(|r| r.field == field)
    }

    /// Fields without a column, in catalog column order.
    pub fn degraded(&self) -> Vec<Field> {
        self.resolutions
            .iter()
            .filter(|r| !r.is_resolved())
            .map(|r| r.field)
            .collect()
    }
}

/// Runs the detection chain over a table.
pub struct ColumnDetector {
    specs: Vec<FieldSpec>,
    strategies: Vec<Box<dyn DetectionStrategy>>,
}

impl Default for ColumnDetector {
    fn default() -> Self {
        Self::standard()
    }
}

impl ColumnDetector {
    /// The standard chain: exact header, then substrings, then content scan.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_SPECS.to_vec(),
            vec![
                Box::new(ExactHeader),
                Box::new(RequiredSubstrings),
                Box::new(ContentScan::default()),
            ],
        )
    }

    pub fn new(specs: Vec<FieldSpec>, strategies: Vec<Box<dyn DetectionStrategy>>) -> Self {
        Self { specs, strategies }
    }

    pub fn detect(&self, table: &RawTable) -> SchemaMap {
        let mut claimed = BTreeSet::new();
        let devices = detect_device_columns(table, &self.specs);
        claimed.extend(devices.iter().map(|d| d.index));

        let mut columns = BTreeMap::new();
        for strategy in &self.strategies {
            for spec in &self.specs {
                if columns.contains_key(&spec.field) {
                    continue;
                }
                let candidates: Vec<usize> = (0..table.width())
                    .filter(|index| !claimed.contains(index))
                    .collect();
                if let Detection::Match { column, confidence } =
                    strategy.detect(spec, table, &candidates)
                {
                    tracing::debug!(
                        field = %spec.field,
                        header = %table.headers()[column],
                        strategy = strategy.name(),
                        confidence,
                        "resolved column"
                    );
                    claimed.insert(column);
                    columns.insert(
                        spec.field,
                        ResolvedColumn {
                            index: column,
                            header: table.headers()[column].clone(),
                            strategy: strategy.name(),
                            confidence,
                        },
                    );
                }
            }
        }

        let unmapped = table
            .headers()
            .iter()
            .enumerate()
            .filter(|(index, header)| !claimed.contains(index) && !header.is_empty())
            .map(|(_, header)| header.clone())
            .collect();

        SchemaMap {
            columns,
            devices,
            unmapped,
        }
    }
}

fn detect_device_columns(table: &RawTable, specs: &[FieldSpec]) -> Vec<DeviceColumn> {
    table
        .headers()
        .iter()
        .enumerate()
        .filter(|(_, header)| !names_standard_field(header, specs))
        .filter_map(|(index, header)| {
            let captures = DEVICE_HEADER.captures(header)?;
            let label = captures.iter().skip(1).flatten().next()?;
            Some(DeviceColumn {
                index,
                header: header.clone(),
                label: label.as_str().to_string(),
            })
        })
        .collect()
}

/// Header that some spec would accept by name or substring set.
fn names_standard_field(header: &str, specs: &[FieldSpec]) -> bool {
    let key = detection_key(header);
    specs.iter().any(|spec| {
        spec.names().any(|name| detection_key(name) == key)
            || spec
                .substrings
                .iter()
                .any(|parts| parts.iter().all(|part| key.contains(part)))
    })
}
