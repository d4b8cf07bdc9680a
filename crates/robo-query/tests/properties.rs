//! Catalog-wide properties of the filter/sort engine.

use proptest::prelude::*;

use robo_model::{Catalog, FieldSet, Flag, GradeLevel, Record};
use robo_query::{FilterCriteria, NumericRange, SortKey, apply};

fn arb_grade() -> impl Strategy<Value = Option<GradeLevel>> {
    prop_oneof![
        Just(None),
        Just(Some(GradeLevel::PreK)),
        Just(Some(GradeLevel::Kindergarten)),
        (1u32..13).prop_map(|n| Some(GradeLevel::Grade(n))),
        Just(Some(GradeLevel::Other("Adult".to_string()))),
    ]
}

fn arb_record() -> impl Strategy<Value = Record> {
    (
        "[A-Za-z][A-Za-z0-9 -]{0,10}",
        "[A-Za-z]{1,8}",
        proptest::option::of(0.0f64..500.0),
        proptest::option::of(3.0f64..18.0),
        proptest::option::of(0.0f64..100.0),
        arb_grade(),
        proptest::option::of(any::<bool>().prop_map(Flag::from)),
    )
        .prop_map(|(name, manufacturer, price, age, space, grade, rechargeable)| {
            let mut record = Record::new(name, manufacturer);
            record.price = price;
            record.min_age = age;
            record.space_requirement = space;
            record.min_grade = grade;
            record.rechargeable = rechargeable;
            record
        })
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(arb_record(), 0..24)
        .prop_map(|records| Catalog::new(records, FieldSet::all()).expect("valid records"))
}

fn arb_sort_key() -> impl Strategy<Value = SortKey> {
    prop_oneof![
        Just(SortKey::Price),
        Just(SortKey::MinAge),
        Just(SortKey::Name),
        Just(SortKey::MinGrade),
    ]
}

fn arb_range() -> impl Strategy<Value = NumericRange> {
    (
        proptest::option::of(0.0f64..500.0),
        proptest::option::of(0.0f64..500.0),
    )
        .prop_map(|(min, max)| NumericRange::new(min, max))
}

/// Positions of each result record inside the catalog.
fn positions(catalog: &Catalog, records: &[&Record]) -> Vec<usize> {
    records
        .iter()
        .map(|record| {
            catalog
                .records()
                .iter()
                .position(|candidate| std::ptr::eq(candidate, *record))
                .expect("result record comes from the catalog")
        })
        .collect()
}

proptest! {
    #[test]
    fn empty_criteria_return_a_permutation(catalog in arb_catalog(), key in arb_sort_key()) {
        let result = apply(&catalog, &FilterCriteria::new(), key);
        let mut seen = positions(&catalog, result.records());
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..catalog.len()).collect::<Vec<_>>());
    }

    #[test]
    fn absent_values_are_excluded_by_ranges(catalog in arb_catalog(), range in arb_range()) {
        let criteria = FilterCriteria::new()
            .with_price_range(range)
            .with_age_range(range)
            .with_space_range(range);
        let result = apply(&catalog, &criteria, SortKey::Name);
        for record in result.iter() {
            prop_assert!(record.price.is_some());
            prop_assert!(record.min_age.is_some());
            prop_assert!(record.space_requirement.is_some());
        }
    }

    #[test]
    fn sorting_is_stable(catalog in arb_catalog(), key in arb_sort_key()) {
        let result = apply(&catalog, &FilterCriteria::new(), key);
        let records = result.records();
        let order = positions(&catalog, records);
        for i in 1..records.len() {
            let ordering = key.compare(records[i - 1], records[i]);
            prop_assert!(ordering.is_le());
            if ordering.is_eq() {
                prop_assert!(order[i - 1] < order[i]);
            }
        }
    }

    #[test]
    fn apply_is_reproducible(catalog in arb_catalog(), key in arb_sort_key(), range in arb_range()) {
        let criteria = FilterCriteria::new()
            .with_rechargeable(Flag::Yes)
            .with_price_range(range);
        let first = positions(&catalog, apply(&catalog, &criteria, key).records());
        let second = positions(&catalog, apply(&catalog, &criteria, key).records());
        prop_assert_eq!(first, second);
    }
}
