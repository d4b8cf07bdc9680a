use robo_model::{Catalog, Field, FieldSet, Flag, GradeLevel, ModelError, Record};

#[test]
fn catalog_rejects_blank_manufacturer() {
    let records = vec![Record::new("Bee-Bot", "TTS"), Record::new("Cubetto", "  ")];
    let err = Catalog::new(records, FieldSet::all()).unwrap_err();
    assert_eq!(
        err,
        ModelError::MissingRequiredValue {
            index: 1,
            field: Field::Manufacturer,
        }
    );
    assert_eq!(
        err.to_string(),
        "record 1 is missing required field Manufacturer"
    );
}

#[test]
fn catalog_find_by_name_is_case_insensitive() {
    let catalog = Catalog::new(
        vec![Record::new("Bee-Bot", "TTS"), Record::new("Dash", "Wonder Workshop")],
        FieldSet::all(),
    )
    .unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.find_by_name("dash").map(|r| r.manufacturer.as_str()),
        Some("Wonder Workshop")
    );
    assert!(catalog.find_by_name("Sphero").is_none());
}

#[test]
fn grade_levels_sort_in_domain_order() {
    let mut grades: Vec<GradeLevel> = ["3", "PK", "K", "1"]
        .iter()
        .filter_map(|token| GradeLevel::parse(token))
        .collect();
    grades.sort();
    let tokens: Vec<String> = grades.iter().map(ToString::to_string).collect();
    assert_eq!(tokens, vec!["PK", "K", "1", "3"]);
}

#[test]
fn unknown_grade_tokens_sort_after_numeric() {
    let mut grades: Vec<GradeLevel> = ["Adult", "12", "Middle School", "2", "K"]
        .iter()
        .filter_map(|token| GradeLevel::parse(token))
        .collect();
    grades.sort();
    let tokens: Vec<String> = grades.iter().map(ToString::to_string).collect();
    assert_eq!(tokens, vec!["K", "2", "12", "Adult", "Middle School"]);
}

#[test]
fn grade_words_around_the_token_are_ignored() {
    let cases = [
        ("3rd Grade", GradeLevel::Grade(3)),
        ("1st grade", GradeLevel::Grade(1)),
        ("Grade 2", GradeLevel::Grade(2)),
        ("Grade K", GradeLevel::Kindergarten),
        ("grade pk", GradeLevel::PreK),
        ("K grade", GradeLevel::Kindergarten),
    ];
    for (token, expected) in cases {
        assert_eq!(GradeLevel::parse(token), Some(expected), "{token}");
    }

    let mut grades: Vec<GradeLevel> = ["Adult", "3rd Grade", "Grade K", "1st grade"]
        .iter()
        .filter_map(|token| GradeLevel::parse(token))
        .collect();
    grades.sort();
    let tokens: Vec<String> = grades.iter().map(ToString::to_string).collect();
    assert_eq!(tokens, vec!["K", "1", "3", "Adult"]);
}

#[test]
fn record_serializes_absent_values_as_null() {
    let mut record = Record::new("Bee-Bot", "TTS");
    record.rechargeable = Some(Flag::Yes);
    record.min_grade = GradeLevel::parse("PK");
    let json = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(json["name"], "Bee-Bot");
    assert_eq!(json["rechargeable"], "Yes");
    assert_eq!(json["min_grade"], "PK");
    assert!(json["price"].is_null());
}
