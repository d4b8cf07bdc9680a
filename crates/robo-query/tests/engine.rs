//! Filter and cost scenarios over a small catalog.

use robo_model::{Catalog, DeviceFlag, Field, FieldSet, Flag, GradeLevel, InternetUse, Record};
use robo_query::{
    FilterCriteria, NumericRange, SelectorOptions, SortKey, apply, estimate, recommended,
};

fn device(label: &str, flag: Flag) -> DeviceFlag {
    DeviceFlag {
        label: label.to_string(),
        flag,
    }
}

fn catalog_with(fields: FieldSet) -> Catalog {
    let mut bee_bot = Record::new("Bee-Bot", "TTS");
    bee_bot.price = Some(89.99);
    bee_bot.min_grade = GradeLevel::parse("PK");
    bee_bot.batteries = Some("No".to_string());
    bee_bot.internet = Some(InternetUse::NotUsed);
    bee_bot.devices = vec![device("Tablet", Flag::No), device("Computer", Flag::No)];

    let mut dash = Record::new("Dash", "Wonder Workshop");
    dash.price = Some(149.99);
    dash.min_grade = GradeLevel::parse("1");
    dash.batteries = Some("Yes".to_string());
    dash.battery_type = Some("Li-ion".to_string());
    dash.internet = Some(InternetUse::Optional);
    dash.devices = vec![device("Tablet", Flag::Yes), device("Computer", Flag::No)];

    let mut ozobot = Record::new("Ozobot Evo", "Evollve");
    ozobot.price = None;
    ozobot.price_per_set = Some(1299.0);
    ozobot.max_users = Some(2.0);
    ozobot.min_grade = GradeLevel::parse("K");
    ozobot.batteries = Some("Built-in".to_string());
    ozobot.devices = vec![device("Tablet", Flag::No), device("Computer", Flag::Yes)];

    Catalog::new(vec![bee_bot, dash, ozobot], fields).unwrap()
}

fn names(catalog: &Catalog, criteria: &FilterCriteria, key: SortKey) -> Vec<String> {
    apply(catalog, criteria, key)
        .iter()
        .map(|record| record.name.clone())
        .collect()
}

#[test]
fn search_is_case_insensitive_over_name_and_manufacturer() {
    let catalog = catalog_with(FieldSet::all());
    let criteria = FilterCriteria::new().with_search("WONDER");
    assert_eq!(names(&catalog, &criteria, SortKey::Name), vec!["Dash"]);
}

#[test]
fn grade_selection_is_set_membership() {
    let catalog = catalog_with(FieldSet::all());
    let criteria = FilterCriteria::new().with_grades([GradeLevel::PreK, GradeLevel::Kindergarten]);
    assert_eq!(
        names(&catalog, &criteria, SortKey::MinGrade),
        vec!["Bee-Bot", "Ozobot Evo"]
    );
}

#[test]
fn device_selection_matches_any_yes_column() {
    let catalog = catalog_with(FieldSet::all());
    let criteria = FilterCriteria::new().with_devices(["Tablet", "Computer"]);
    assert_eq!(
        names(&catalog, &criteria, SortKey::Name),
        vec!["Dash", "Ozobot Evo"]
    );
}

#[test]
fn needs_batteries_follows_the_batteries_cell() {
    let catalog = catalog_with(FieldSet::all());
    let yes = FilterCriteria::new().with_needs_batteries(Flag::Yes);
    assert_eq!(
        names(&catalog, &yes, SortKey::Name),
        vec!["Dash", "Ozobot Evo"]
    );
    let no = FilterCriteria::new().with_needs_batteries(Flag::No);
    assert_eq!(names(&catalog, &no, SortKey::Name), vec!["Bee-Bot"]);
}

#[test]
fn price_range_excludes_unpriced_records() {
    let catalog = catalog_with(FieldSet::all());
    let criteria = FilterCriteria::new().with_price_range(NumericRange::at_least(0.0));
    assert_eq!(
        names(&catalog, &criteria, SortKey::Price),
        vec!["Bee-Bot", "Dash"]
    );
}

#[test]
fn filters_on_missing_columns_are_ignored() {
    let fields: FieldSet = FieldSet::all()
        .iter()
        .filter(|field| *field != Field::Internet)
        .collect();
    let catalog = catalog_with(fields);
    let criteria = FilterCriteria::new().with_internet(InternetUse::Required);
    assert_eq!(apply(&catalog, &criteria, SortKey::Name).len(), 3);
}

#[test]
fn price_sort_places_missing_prices_last() {
    let catalog = catalog_with(FieldSet::all());
    assert_eq!(
        names(&catalog, &FilterCriteria::new(), SortKey::Price),
        vec!["Bee-Bot", "Dash", "Ozobot Evo"]
    );
}

#[test]
fn class_set_estimate_for_set_only_record() {
    let catalog = catalog_with(FieldSet::all());
    let ozobot = catalog.find_by_name("ozobot evo").unwrap();
    let options = estimate(ozobot, 7);
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].label, "Using classroom sets (4 set(s))");
    assert_eq!(options[0].total, 4.0 * 1299.0);
    assert_eq!(recommended(&options), Some(&options[0]));
}

#[test]
fn selector_options_snapshot() {
    let catalog = catalog_with(FieldSet::all());
    let options = SelectorOptions::from_catalog(&catalog);
    insta::assert_debug_snapshot!(options, @r#"
    SelectorOptions {
        manufacturers: [
            "Evollve",
            "TTS",
            "Wonder Workshop",
        ],
        grades: [
            PreK,
            Kindergarten,
            Grade(
                1,
            ),
        ],
        battery_types: [
            "Li-ion",
        ],
        devices: [
            "Tablet",
            "Computer",
        ],
        price_bounds: Some(
            (
                89.99,
                149.99,
            ),
        ),
        age_bounds: None,
    }
    "#);
}
