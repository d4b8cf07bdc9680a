//! User-selected filter criteria.

use std::collections::BTreeSet;

use serde::Serialize;

use robo_model::{Field, FieldSet, Flag, GradeLevel, InternetUse};

use crate::predicate::Predicate;

/// Inclusive numeric bounds; a missing bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn between(min: f64, max: f64) -> Self {
        Self::new(Some(min), Some(max))
    }

    pub fn at_least(min: f64) -> Self {
        Self::new(Some(min), None)
    }

    pub fn at_most(max: f64) -> Self {
        Self::new(None, Some(max))
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// The filters a user picked. Every criterion is optional and they combine
/// with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    search: Option<String>,
    manufacturer: Option<String>,
    grades: BTreeSet<GradeLevel>,
    rechargeable: Option<Flag>,
    needs_batteries: Option<Flag>,
    set_available: Option<Flag>,
    battery_types: BTreeSet<String>,
    devices: Vec<String>,
    internet: Option<InternetUse>,
    screen_free: Option<Flag>,
    consumables: Option<Flag>,
    visual: Option<Flag>,
    auditory: Option<Flag>,
    fine_motor: Option<Flag>,
    price: Option<NumericRange>,
    age: Option<NumericRange>,
    space: Option<NumericRange>,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring over name and manufacturer. Blank text is
    /// no constraint.
    pub fn with_search(mut self, text: &str) -> Self {
        self.search = non_blank(text);
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: &str) -> Self {
        self.manufacturer = non_blank(manufacturer);
        self
    }

    pub fn with_grades<I: IntoIterator<Item = GradeLevel>>(mut self, grades: I) -> Self {
        self.grades = grades.into_iter().collect();
        self
    }

    pub fn with_rechargeable(mut self, value: Flag) -> Self {
        self.rechargeable = Some(value);
        self
    }

    pub fn with_needs_batteries(mut self, value: Flag) -> Self {
        self.needs_batteries = Some(value);
        self
    }

    pub fn with_set_available(mut self, value: Flag) -> Self {
        self.set_available = Some(value);
        self
    }

    pub fn with_battery_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.battery_types = types
            .into_iter()
            .filter_map(|value| non_blank(value.as_ref()))
            .collect();
        self
    }

    /// Device labels; a record matches when any selected device is Yes.
    pub fn with_devices<I, S>(mut self, devices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.devices = devices
            .into_iter()
            .filter_map(|value| non_blank(value.as_ref()))
            .collect();
        self
    }

    pub fn with_internet(mut self, value: InternetUse) -> Self {
        self.internet = Some(value);
        self
    }

    pub fn with_screen_free(mut self, value: Flag) -> Self {
        self.screen_free = Some(value);
        self
    }

    pub fn with_consumables(mut self, value: Flag) -> Self {
        self.consumables = Some(value);
        self
    }

    pub fn with_visual(mut self, value: Flag) -> Self {
        self.visual = Some(value);
        self
    }

    pub fn with_auditory(mut self, value: Flag) -> Self {
        self.auditory = Some(value);
        self
    }

    pub fn with_fine_motor(mut self, value: Flag) -> Self {
        self.fine_motor = Some(value);
        self
    }

    pub fn with_price_range(mut self, range: NumericRange) -> Self {
        self.price = Some(range);
        self
    }

    pub fn with_age_range(mut self, range: NumericRange) -> Self {
        self.age = Some(range);
        self
    }

    pub fn with_space_range(mut self, range: NumericRange) -> Self {
        self.space = Some(range);
        self
    }

    /// Compiles the active criteria into predicates.
    ///
    /// A predicate on a field outside `available` is dropped: the column does
    /// not exist for this session, so the filter cannot apply.
    pub fn predicates(&self, available: &FieldSet) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if let Some(text) = &self.search {
            predicates.push(Predicate::Search(text.to_lowercase()));
        }
        if let Some(manufacturer) = &self.manufacturer {
            predicates.push(Predicate::Manufacturer(manufacturer.clone()));
        }
        if !self.grades.is_empty() {
            predicates.push(Predicate::GradeIn(self.grades.clone()));
        }
        if let Some(value) = self.needs_batteries {
            predicates.push(Predicate::NeedsBatteries(value));
        }
        if !self.battery_types.is_empty() {
            predicates.push(Predicate::BatteryTypeIn(
                self.battery_types.iter().map(|t| t.to_lowercase()).collect(),
            ));
        }
        if !self.devices.is_empty() {
            predicates.push(Predicate::AnyDevice(self.devices.clone()));
        }
        if let Some(value) = self.internet {
            predicates.push(Predicate::Internet(value));
        }

        let flags = [
            (Field::Rechargeable, self.rechargeable),
            (Field::SetAvailable, self.set_available),
            (Field::ScreenFree, self.screen_free),
            (Field::ConsumablesRequired, self.consumables),
            (Field::VisualAccessibility, self.visual),
            (Field::AuditoryAccessibility, self.auditory),
            (Field::FineMotorAccessibility, self.fine_motor),
        ];
        predicates.extend(flags.into_iter().filter_map(|(field, value)| {
            value.map(|value| Predicate::FlagEquals { field, value })
        }));

        let ranges = [
            (Field::Price, self.price),
            (Field::MinAge, self.age),
            (Field::SpaceRequirement, self.space),
        ];
        predicates.extend(
            ranges
                .into_iter()
                .filter_map(|(field, range)| range.map(|range| Predicate::Range { field, range })),
        );

        predicates.retain(|predicate| {
            let field = predicate.field();
            let keep = available.contains(field);
            if !keep {
                tracing::debug!(field = %field, "ignoring filter on unavailable field");
            }
            keep
        });
        predicates
    }

    /// Whether no criterion is active.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_inclusive() {
        let range = NumericRange::between(10.0, 20.0);
        assert!(range.contains(10.0));
        assert!(range.contains(20.0));
        assert!(!range.contains(20.01));
        assert!(NumericRange::at_least(5.0).contains(1e9));
        assert!(!NumericRange::at_most(5.0).contains(5.5));
        assert!(NumericRange::default().contains(-1.0));
    }

    #[test]
    fn test_blank_criteria_are_inactive() {
        let criteria = FilterCriteria::new()
            .with_search("   ")
            .with_manufacturer("")
            .with_grades(Vec::new())
            .with_devices([""]);
        assert!(criteria.is_empty());
        assert!(criteria.predicates(&FieldSet::all()).is_empty());
    }

    #[test]
    fn test_degraded_fields_drop_predicates() {
        let criteria = FilterCriteria::new()
            .with_search("bot")
            .with_price_range(NumericRange::at_most(100.0))
            .with_rechargeable(Flag::Yes);
        let available: FieldSet = [Field::Name, Field::Manufacturer, Field::Rechargeable]
            .into_iter()
            .collect();
        let fields: Vec<Field> = criteria
            .predicates(&available)
            .iter()
            .map(Predicate::field)
            .collect();
        assert_eq!(fields, vec![Field::Name, Field::Rechargeable]);
    }
}
