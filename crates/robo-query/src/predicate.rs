//! Compiled filter predicates.

use std::collections::BTreeSet;

use robo_model::{Field, Flag, GradeLevel, InternetUse, Record};

use crate::criteria::NumericRange;

/// One active constraint over a record.
///
/// A record with an absent value for the predicate's field never matches,
/// except for [`Predicate::NeedsBatteries`] where absence means "No".
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Lowercased needle matched against name or manufacturer.
    Search(String),
    Manufacturer(String),
    GradeIn(BTreeSet<GradeLevel>),
    NeedsBatteries(Flag),
    /// Lowercased battery types.
    BatteryTypeIn(BTreeSet<String>),
    /// Matches when any listed device column is Yes.
    AnyDevice(Vec<String>),
    Internet(InternetUse),
    FlagEquals { field: Field, value: Flag },
    Range { field: Field, range: NumericRange },
}

impl Predicate {
    /// The catalog field this predicate reads.
    pub fn field(&self) -> Field {
        match self {
            Predicate::Search(_) => Field::Name,
            Predicate::Manufacturer(_) => Field::Manufacturer,
            Predicate::GradeIn(_) => Field::MinGradeLevel,
            Predicate::NeedsBatteries(_) => Field::Batteries,
            Predicate::BatteryTypeIn(_) => Field::BatteryType,
            Predicate::AnyDevice(_) => Field::DeviceColumns,
            Predicate::Internet(_) => Field::Internet,
            Predicate::FlagEquals { field, .. } | Predicate::Range { field, .. } => *field,
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Predicate::Search(needle) => {
                record.name.to_lowercase().contains(needle.as_str())
                    || record.manufacturer.to_lowercase().contains(needle.as_str())
            }
            Predicate::Manufacturer(manufacturer) => record
                .manufacturer
                .trim()
                .eq_ignore_ascii_case(manufacturer),
            Predicate::GradeIn(grades) => record
                .min_grade
                .as_ref()
                .is_some_and(|grade| grades.contains(grade)),
            Predicate::NeedsBatteries(wanted) => Flag::from(record.needs_batteries()) == *wanted,
            Predicate::BatteryTypeIn(types) => record
                .battery_type
                .as_deref()
                .is_some_and(|value| types.contains(&value.trim().to_lowercase())),
            Predicate::AnyDevice(labels) => labels.iter().any(|label| record.uses_device(label)),
            Predicate::Internet(wanted) => record.internet == Some(*wanted),
            Predicate::FlagEquals { field, value } => flag_value(record, *field) == Some(*value),
            Predicate::Range { field, range } => {
                numeric_value(record, *field).is_some_and(|value| range.contains(value))
            }
        }
    }
}

/// Yes/No value of a flag field.
pub fn flag_value(record: &Record, field: Field) -> Option<Flag> {
    match field {
        Field::Rechargeable => record.rechargeable,
        Field::SetAvailable => record.set_available,
        Field::DeviceRequired => record.device_required,
        Field::VisualAccessibility => record.visual,
        Field::AuditoryAccessibility => record.auditory,
        Field::FineMotorAccessibility => record.fine_motor,
        Field::ScreenFree => record.screen_free,
        Field::ConsumablesRequired => record.consumables,
        _ => None,
    }
}

/// Numeric value of a numeric field.
pub fn numeric_value(record: &Record, field: Field) -> Option<f64> {
    match field {
        Field::Price => record.price,
        Field::PricePerSet => record.price_per_set,
        Field::MinAge => record.min_age,
        Field::MaxUsers => record.max_users,
        Field::SpaceRequirement => record.space_requirement,
        _ => None,
    }
}
