//! Values a presentation layer offers in its selectors.

use std::collections::BTreeSet;

use serde::Serialize;

use robo_model::{Catalog, GradeLevel};

/// Distinct values and bounds derived from a catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectorOptions {
    pub manufacturers: Vec<String>,
    /// In grade order: PK, K, numeric, then other tokens.
    pub grades: Vec<GradeLevel>,
    pub battery_types: Vec<String>,
    /// Device column labels in column order.
    pub devices: Vec<String>,
    pub price_bounds: Option<(f64, f64)>,
    pub age_bounds: Option<(f64, f64)>,
}

impl SelectorOptions {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let records = catalog.records();

        let manufacturers: BTreeSet<&str> = records.iter().map(|r| r.manufacturer.trim()).collect();
        let grades: BTreeSet<&GradeLevel> = records.iter().filter_map(|r| r.min_grade.as_ref()).collect();
        let battery_types: BTreeSet<&str> = records
            .iter()
            .filter_map(|r| r.battery_type.as_deref())
            .map(str::trim)
            .collect();

        let mut devices: Vec<String> = Vec::new();
        for device in records.iter().flat_map(|r| &r.devices) {
            if !devices.contains(&device.label) {
                devices.push(device.label.clone());
            }
        }

        Self {
            manufacturers: manufacturers.into_iter().map(str::to_string).collect(),
            grades: grades.into_iter().cloned().collect(),
            battery_types: battery_types.into_iter().map(str::to_string).collect(),
            devices,
            price_bounds: bounds(records.iter().filter_map(|r| r.price)),
            age_bounds: bounds(records.iter().filter_map(|r| r.min_age)),
        }
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}
