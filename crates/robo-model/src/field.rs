//! Canonical catalog fields.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A canonical column of the robot catalog.
///
/// Source headers vary between spreadsheet revisions; the ingest layer maps
/// whatever it finds onto these names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    Name,
    Manufacturer,
    Price,
    PricePerSet,
    MinGradeLevel,
    MinAge,
    Rechargeable,
    Batteries,
    BatteryType,
    SetAvailable,
    SetSize,
    MaxUsers,
    DeviceRequired,
    /// The family of per-device boolean columns (`Device: Tablet`, ...).
    DeviceColumns,
    VisualAccessibility,
    AuditoryAccessibility,
    FineMotorAccessibility,
    Internet,
    ScreenFree,
    SpaceRequirement,
    ConsumablesRequired,
    Image,
    PurchaseWebsite,
    Description,
}

impl Field {
    /// Every field, in catalog column order.
    pub const ALL: [Field; 24] = [
        Field::Name,
        Field::Manufacturer,
        Field::Price,
        Field::PricePerSet,
        Field::MinGradeLevel,
        Field::MinAge,
        Field::Rechargeable,
        Field::Batteries,
        Field::BatteryType,
        Field::SetAvailable,
        Field::SetSize,
        Field::MaxUsers,
        Field::DeviceRequired,
        Field::DeviceColumns,
        Field::VisualAccessibility,
        Field::AuditoryAccessibility,
        Field::FineMotorAccessibility,
        Field::Internet,
        Field::ScreenFree,
        Field::SpaceRequirement,
        Field::ConsumablesRequired,
        Field::Image,
        Field::PurchaseWebsite,
        Field::Description,
    ];

    /// Header name as it appears in the reference spreadsheet.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Manufacturer => "Manufacturer",
            Field::Price => "Price",
            Field::PricePerSet => "Price per Set",
            Field::MinGradeLevel => "Min Grade Level",
            Field::MinAge => "Min Age",
            Field::Rechargeable => "Rechargeable",
            Field::Batteries => "Batteries",
            Field::BatteryType => "Battery Type",
            Field::SetAvailable => "Set Available",
            Field::SetSize => "Set Size",
            Field::MaxUsers => "Max Users",
            Field::DeviceRequired => "Device Required",
            Field::DeviceColumns => "Device Columns",
            Field::VisualAccessibility => "Visual Accessibility",
            Field::AuditoryAccessibility => "Auditory Accessibility",
            Field::FineMotorAccessibility => "Fine Motor Accessibility",
            Field::Internet => "Internet",
            Field::ScreenFree => "ScreenFree",
            Field::SpaceRequirement => "Space Requirement",
            Field::ConsumablesRequired => "Consumables Required",
            Field::Image => "Image",
            Field::PurchaseWebsite => "Purchase Website",
            Field::Description => "Description",
        }
    }

    /// `Name` and `Manufacturer` must exist for a catalog to load at all.
    pub fn is_required(&self) -> bool {
        matches!(self, Field::Name | Field::Manufacturer)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

/// Fields that resolved to a source column for the current session.
///
/// A field outside the set is degraded: filters on it are ignored and report
/// blocks render it as not available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldSet {
    fields: BTreeSet<Field>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set containing every field, for catalogs built in memory.
    pub fn all() -> Self {
        Field::ALL.iter().copied().collect()
    }

    pub fn insert(&mut self, field: Field) -> bool {
        self.fields.insert(field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    /// Fields that did not resolve, in catalog column order.
    pub fn degraded(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|field| !self.fields.contains(field))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
