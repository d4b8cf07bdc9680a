//! Grade levels and their domain ordering.

use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum grade level a robot is intended for.
///
/// Ordering is not lexical: `PK < K < 1 < 2 < ... < 12 < other`. Unknown
/// tokens sort after every numeric grade and lexically among themselves, so
/// the order stays total. The derived `Ord` relies on the variant order below.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GradeLevel {
    PreK,
    Kindergarten,
    Grade(u32),
    Other(String),
}

impl GradeLevel {
    /// Parses a grade cell. Blank cells are absent; unrecognized text is kept
    /// as [`GradeLevel::Other`] so it still shows up in selectors.
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        let compact: String = trimmed
            .to_lowercase()
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != '-' && *ch != '.')
            .collect();

        let token = compact
            .strip_prefix("grade")
            .or_else(|| compact.strip_suffix("grade"))
            .unwrap_or(&compact);

        match token {
            "pk" | "prek" | "preschool" | "prekindergarten" => return Some(GradeLevel::PreK),
            "k" | "kg" | "kinder" | "kindergarten" => return Some(GradeLevel::Kindergarten),
            _ => {}
        }

        let digits = token
            .trim_end_matches('+')
            .trim_end_matches("st")
            .trim_end_matches("nd")
            .trim_end_matches("rd")
            .trim_end_matches("th");
        if !digits.is_empty() && digits.chars().all(|ch| ch.is_ascii_digit()) {
            if let Ok(number) = digits.parse::<u32>() {
                return Some(GradeLevel::Grade(number));
            }
        }

        Some(GradeLevel::Other(trimmed.to_string()))
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeLevel::PreK => write!(f, "PK"),
            GradeLevel::Kindergarten => write!(f, "K"),
            GradeLevel::Grade(number) => write!(f, "{number}"),
            GradeLevel::Other(token) => write!(f, "{token}"),
        }
    }
}

impl Serialize for GradeLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
