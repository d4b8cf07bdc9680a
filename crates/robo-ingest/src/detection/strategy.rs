//! Column detection strategies.
//!
//! Each strategy answers one question for one field: which of the still
//! unclaimed columns is this field? The detector runs them in a fixed order.

use crate::csv::{RawTable, detection_key};

use super::spec::FieldSpec;

/// Outcome of one strategy for one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Detection {
    Match { column: usize, confidence: f64 },
    Miss,
}

/// A named, deterministic way of locating a field's column.
pub trait DetectionStrategy: Send + Sync {
    /// Short identifier shown in the schema report.
    fn name(&self) -> &'static str;

    /// Looks for `spec` among `candidates` (unclaimed column indices, ascending).
    fn detect(&self, spec: &FieldSpec, table: &RawTable, candidates: &[usize]) -> Detection;
}

/// Normalized header equals the canonical name or an alias.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactHeader;

impl DetectionStrategy for ExactHeader {
    fn name(&self) -> &'static str {
        "exact-header"
    }

    fn detect(&self, spec: &FieldSpec, table: &RawTable, candidates: &[usize]) -> Detection {
        let wanted: Vec<String> = spec.names().map(detection_key).collect();
        candidates
            .iter()
            .copied()
            .find(|&index| {
                let key = detection_key(&table.headers()[index]);
                !key.is_empty() && wanted.contains(&key)
            })
            .map_or(Detection::Miss, |column| Detection::Match {
                column,
                confidence: 1.0,
            })
    }
}

/// Normalized header contains every part of one of the field's substring sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredSubstrings;

impl DetectionStrategy for RequiredSubstrings {
    fn name(&self) -> &'static str {
        "required-substrings"
    }

    fn detect(&self, spec: &FieldSpec, table: &RawTable, candidates: &[usize]) -> Detection {
        if spec.substrings.is_empty() {
            return Detection::Miss;
        }
        candidates
            .iter()
            .copied()
            .find(|&index| {
                let key = detection_key(&table.headers()[index]);
                !key.is_empty()
                    && spec
                        .substrings
                        .iter()
                        .any(|parts| parts.iter().all(|part| key.contains(part)))
            })
            .map_or(Detection::Miss, |column| Detection::Match {
                column,
                confidence: 0.8,
            })
    }
}

/// Scores columns by the share of non-empty values that satisfy the field's
/// content rule and takes the best one at or above the threshold.
#[derive(Debug, Clone, Copy)]
pub struct ContentScan {
    pub threshold: f64,
}

impl Default for ContentScan {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}

impl ContentScan {
    /// Fraction of non-empty values in `column` accepted by the rule, or
    /// `None` for a column with no values.
    fn score(spec: &FieldSpec, table: &RawTable, column: usize) -> Option<f64> {
        let rule = spec.content_rule?;
        let (hits, non_empty) = table
            .column(column)
            .filter(|value| !value.trim().is_empty())
            .fold((0usize, 0usize), |(hits, total), value| {
                (hits + usize::from(rule.matches(value)), total + 1)
            });
        (non_empty > 0).then(|| hits as f64 / non_empty as f64)
    }
}

impl DetectionStrategy for ContentScan {
    fn name(&self) -> &'static str {
        "content-scan"
    }

    fn detect(&self, spec: &FieldSpec, table: &RawTable, candidates: &[usize]) -> Detection {
        let mut best: Option<(usize, f64)> = None;
        for &column in candidates {
            let Some(score) = Self::score(spec, table, column) else {
                continue;
            };
            tracing::trace!(field = %spec.field, column, score, "content score");
            // Ties keep the leftmost column.
            if score >= self.threshold && best.is_none_or(|(_, top)| score > top) {
                best = Some((column, score));
            }
        }
        best.map_or(Detection::Miss, |(column, confidence)| Detection::Match {
            column,
            confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::spec::STANDARD_SPECS;
    use robo_model::Field;

    fn spec(field: Field) -> &'static FieldSpec {
        STANDARD_SPECS.iter().find(|spec| spec.field == field).unwrap()
    }

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            headers.iter().map(ToString::to_string).collect(),
            rows.iter()
                .map(|row| row.iter().map(ToString::to_string).collect())
                .collect(),
        )
    }

    #[test]
    fn test_exact_header_matches_irregular_spacing() {
        let table = table(&["Name", "battery   TYPE"], &[]);
        let found = ExactHeader.detect(spec(Field::BatteryType), &table, &[0, 1]);
        assert_eq!(
            found,
            Detection::Match {
                column: 1,
                confidence: 1.0
            }
        );
    }

    #[test]
    fn test_exact_header_skips_claimed_columns() {
        let table = table(&["Price", "Price"], &[]);
        let found = ExactHeader.detect(spec(Field::Price), &table, &[1]);
        assert_eq!(
            found,
            Detection::Match {
                column: 1,
                confidence: 1.0
            }
        );
    }

    #[test]
    fn test_required_substrings() {
        let table = table(&["Name", "Type of battery used"], &[]);
        let found = RequiredSubstrings.detect(spec(Field::BatteryType), &table, &[0, 1]);
        assert!(matches!(found, Detection::Match { column: 1, .. }));

        let found = RequiredSubstrings.detect(spec(Field::Internet), &table, &[0, 1]);
        assert_eq!(found, Detection::Miss);
    }

    #[test]
    fn test_content_scan_threshold() {
        let table = table(
            &["Misc", "Power"],
            &[&["AA", "AAA"], &["Yes", "9V"], &["No", "no idea"], &["", "CR2032"]],
        );
        // Misc: 1 of 3 non-empty values; Power: 3 of 4.
        let found = ContentScan::default().detect(spec(Field::BatteryType), &table, &[0, 1]);
        assert_eq!(
            found,
            Detection::Match {
                column: 1,
                confidence: 0.75
            }
        );

        let found = ContentScan::default().detect(spec(Field::BatteryType), &table, &[0]);
        assert_eq!(found, Detection::Miss);
    }

    #[test]
    fn test_content_scan_needs_a_rule() {
        let table = table(&["Power"], &[&["AA"]]);
        let found = ContentScan::default().detect(spec(Field::Price), &table, &[0]);
        assert_eq!(found, Detection::Miss);
    }
}
