//! Result ordering.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use robo_model::Record;

/// Sort order for a result list. Every key ascends; absent values go last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    Price,
    MinAge,
    /// Case-insensitive.
    #[default]
    Name,
    /// PK, K, then numeric grades, then anything else.
    MinGrade,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Price,
        SortKey::MinAge,
        SortKey::Name,
        SortKey::MinGrade,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::MinAge => "min-age",
            SortKey::Name => "name",
            SortKey::MinGrade => "min-grade",
        }
    }

    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortKey::Price => absent_last(a.price, b.price, f64::total_cmp),
            SortKey::MinAge => absent_last(a.min_age, b.min_age, f64::total_cmp),
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::MinGrade => {
                absent_last(a.min_grade.as_ref(), b.min_grade.as_ref(), |x, y| x.cmp(y))
            }
        }
    }

    /// Stable sort: equal keys keep their catalog order.
    pub fn sort(&self, records: &mut [&Record]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}

fn absent_last<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "price" => Ok(SortKey::Price),
            "min-age" | "age" => Ok(SortKey::MinAge),
            "name" => Ok(SortKey::Name),
            "min-grade" | "grade" => Ok(SortKey::MinGrade),
            _ => Err(format!("Unknown sort key: {s}")),
        }
    }
}
