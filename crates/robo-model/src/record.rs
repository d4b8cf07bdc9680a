//! Normalized catalog record.

use serde::Serialize;

use crate::enums::{Flag, InternetUse};
use crate::grade::GradeLevel;

/// One per-device boolean column, e.g. `Device: Tablet` = Yes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceFlag {
    pub label: String,
    pub flag: Flag,
}

/// A robot in the catalog.
///
/// Every attribute except `name` and `manufacturer` is optional: `None` means
/// the cell was blank, could not be coerced, or the column does not exist.
/// A coerced number is never defaulted to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    pub name: String,
    pub manufacturer: String,
    pub price: Option<f64>,
    pub price_per_set: Option<f64>,
    pub min_grade: Option<GradeLevel>,
    pub min_age: Option<f64>,
    pub rechargeable: Option<Flag>,
    /// Raw text of the Batteries column ("Yes", "No", "3 AAA", ...).
    pub batteries: Option<String>,
    pub battery_type: Option<String>,
    pub set_available: Option<Flag>,
    pub set_size: Option<String>,
    /// Upper bound of the Max Users cell (`1 - 2` is 2).
    pub max_users: Option<f64>,
    /// Max Users cell as written, for display.
    pub max_users_text: Option<String>,
    pub device_required: Option<Flag>,
    pub devices: Vec<DeviceFlag>,
    pub visual: Option<Flag>,
    pub auditory: Option<Flag>,
    pub fine_motor: Option<Flag>,
    pub internet: Option<InternetUse>,
    pub screen_free: Option<Flag>,
    pub space_requirement: Option<f64>,
    pub consumables: Option<Flag>,
    pub image_url: Option<String>,
    pub purchase_url: Option<String>,
    pub description: Option<String>,
}

impl Record {
    pub fn new(name: impl Into<String>, manufacturer: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            manufacturer: manufacturer.into(),
            ..Self::default()
        }
    }

    /// Whether the robot needs batteries: the Batteries cell is present and
    /// is anything other than "no".
    pub fn needs_batteries(&self) -> bool {
        self.batteries
            .as_deref()
            .map(str::trim)
            .is_some_and(|value| !value.is_empty() && !value.eq_ignore_ascii_case("no"))
    }

    /// Whether the named device column is marked Yes.
    pub fn uses_device(&self, label: &str) -> bool {
        self.devices
            .iter()
            .any(|device| device.label.eq_ignore_ascii_case(label) && device.flag.is_yes())
    }
}
