//! Per-field detection rules.

use robo_model::Field;

use super::vocabulary::is_battery_value;

/// A rule that scores column content when no header matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRule {
    /// Battery sizes and chemistries (`AA`, `3 x AAA`, `CR2032`, `Li-ion`),
    /// or text mentioning batteries.
    BatteryVocabulary,
}

impl ContentRule {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            ContentRule::BatteryVocabulary => is_battery_value(value),
        }
    }
}

/// How one canonical field may be recognized in a source sheet.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: Field,
    /// Extra headers accepted as an exact match besides the canonical name.
    pub aliases: &'static [&'static str],
    /// Substring sets; a header containing every part of any one set matches.
    /// Parts are written in detection-key form (lowercase, no spaces).
    pub substrings: &'static [&'static [&'static str]],
    pub content_rule: Option<ContentRule>,
}

impl FieldSpec {
    const fn new(field: Field) -> Self {
        Self {
            field,
            aliases: &[],
            substrings: &[],
            content_rule: None,
        }
    }

    const fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    const fn substrings(mut self, substrings: &'static [&'static [&'static str]]) -> Self {
        self.substrings = substrings;
        self
    }

    const fn content(mut self, rule: ContentRule) -> Self {
        self.content_rule = Some(rule);
        self
    }

    /// Canonical name followed by the aliases.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.field.canonical_name()).chain(self.aliases.iter().copied())
    }
}

/// Specs for every single-column field, in detection priority order.
///
/// Within one strategy, earlier specs claim columns first, so narrower
/// patterns ("price" + "set") come before broader ones ("price").
/// `DeviceColumns` is a column family and is detected separately.
pub const STANDARD_SPECS: &[FieldSpec] = &[
    FieldSpec::new(Field::Name)
        .aliases(&["Robot Name", "Robot", "Product Name", "Product"])
        .substrings(&[&["robot", "name"], &["product", "name"]]),
    FieldSpec::new(Field::Manufacturer)
        .aliases(&["Company", "Brand", "Maker", "Vendor"])
        .substrings(&[&["manufacturer"], &["company"], &["brand"]]),
    FieldSpec::new(Field::PricePerSet)
        .aliases(&["Set Price", "Classroom Set Price", "Price/Set"])
        .substrings(&[&["price", "set"], &["set", "cost"]]),
    FieldSpec::new(Field::Price)
        .aliases(&["Unit Price", "Price per Unit", "Cost", "Price (USD)"])
        .substrings(&[&["price"], &["cost"]]),
    FieldSpec::new(Field::MinGradeLevel)
        .aliases(&["Grade Level", "Min Grade", "Minimum Grade", "Grade"])
        .substrings(&[&["grade"]]),
    FieldSpec::new(Field::MinAge)
        .aliases(&["Age", "Ages", "Minimum Age"])
        .substrings(&[&["min", "age"], &["minimum", "age"], &["age", "range"]]),
    FieldSpec::new(Field::Rechargeable)
        .aliases(&["Rechargeable?"])
        .substrings(&[&["rechargeable"]]),
    FieldSpec::new(Field::BatteryType)
        .aliases(&["Battery Type(s)", "Type of Battery", "Batteries Type"])
        .substrings(&[&["battery", "type"], &["batteries", "type"]])
        .content(ContentRule::BatteryVocabulary),
    FieldSpec::new(Field::Batteries)
        .aliases(&["Battery", "Batteries Required", "Needs Batteries"])
        .substrings(&[&["batteries"], &["battery"]]),
    FieldSpec::new(Field::SetSize)
        .aliases(&["Classroom Set Size", "Robots per Set"])
        .substrings(&[&["set", "size"], &["per", "set"]]),
    FieldSpec::new(Field::SetAvailable)
        .aliases(&["Set", "Classroom Set", "Classroom Set Available", "Sets Available"])
        .substrings(&[&["set", "avail"], &["classroom", "set"]]),
    FieldSpec::new(Field::MaxUsers)
        .aliases(&["Students Per Device", "Max Students", "Users"])
        .substrings(&[&["max", "user"], &["students", "per"], &["users"]]),
    FieldSpec::new(Field::DeviceRequired)
        .aliases(&["Device", "Requires Device", "Device Needed"])
        .substrings(&[&["device", "required"], &["requires", "device"], &["device", "needed"]]),
    FieldSpec::new(Field::VisualAccessibility)
        .aliases(&["Visual", "Visual Cues"])
        .substrings(&[&["visual"]]),
    FieldSpec::new(Field::AuditoryAccessibility)
        .aliases(&["Auditory", "Auditory Cues", "Audio"])
        .substrings(&[&["auditory"], &["audio"]]),
    FieldSpec::new(Field::FineMotorAccessibility)
        .aliases(&["Fine Motor", "Fine Motor Skills"])
        .substrings(&[&["fine", "motor"]]),
    FieldSpec::new(Field::Internet)
        .aliases(&["Internet Required", "Internet Access", "Wifi", "Wi-Fi"])
        .substrings(&[&["internet"], &["wifi"]]),
    FieldSpec::new(Field::ScreenFree)
        .aliases(&["Screen-Free"])
        .substrings(&[&["screen"]]),
    FieldSpec::new(Field::SpaceRequirement)
        .aliases(&["Space", "Space Needed", "Space (sq ft)"])
        .substrings(&[&["space"]]),
    FieldSpec::new(Field::ConsumablesRequired)
        .aliases(&["Consumables"])
        .substrings(&[&["consumable"]]),
    FieldSpec::new(Field::Image)
        .aliases(&["Image URL", "Picture", "Photo"])
        .substrings(&[&["image"], &["photo"], &["picture"]]),
    FieldSpec::new(Field::PurchaseWebsite)
        .aliases(&["Website", "Purchase Link", "Purchase URL", "URL", "Link"])
        .substrings(&[&["purchase"], &["website"], &["url"], &["link"]]),
    FieldSpec::new(Field::Description)
        .aliases(&["Product Summary", "Summary", "Notes"])
        .substrings(&[&["description"], &["summary"]]),
];
