//! Filter/Sort Engine.

use serde::Serialize;

use robo_model::{Catalog, Record};

use crate::criteria::FilterCriteria;
use crate::sort::SortKey;

/// Records that passed every active predicate, in sort order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QueryResult<'a> {
    records: Vec<&'a Record>,
}

impl<'a> QueryResult<'a> {
    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<&'a Record> {
        self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Headline shown above a result list.
    pub fn summary(&self) -> String {
        format!("Showing {} matching robots", self.records.len())
    }
}

/// Filters and sorts a catalog in one pass.
///
/// Pure: the same catalog, criteria and key always give the same result.
/// Predicates on fields the catalog does not have are ignored.
pub fn apply<'a>(catalog: &'a Catalog, criteria: &FilterCriteria, sort: SortKey) -> QueryResult<'a> {
    let predicates = criteria.predicates(catalog.fields());

    let mut records: Vec<&Record> = catalog
        .records()
        .iter()
        .filter(|record| predicates.iter().all(|predicate| predicate.matches(record)))
        .collect();
    sort.sort(&mut records);

    tracing::debug!(
        total = catalog.len(),
        matched = records.len(),
        predicates = predicates.len(),
        sort = %sort,
        "applied filters"
    );
    QueryResult { records }
}
