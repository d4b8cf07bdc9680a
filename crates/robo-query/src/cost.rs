//! Cost Estimator.

use serde::Serialize;

use robo_model::Record;

/// How an option buys enough robots for the class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PurchasePlan {
    ClassroomSets { sets: u64 },
    Individual { units: u64 },
}

/// One way of buying for a class, with its total cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostOption {
    pub label: String,
    pub total: f64,
    pub plan: PurchasePlan,
}

/// Purchase options for `students` learners.
///
/// Classroom sets come first when the per-set price and max-users count are
/// both positive; buying individually follows when the unit price is positive.
/// An empty list means the record lacks pricing data, not that it is free.
pub fn estimate(record: &Record, students: i64) -> Vec<CostOption> {
    let Ok(students) = u64::try_from(students) else {
        return Vec::new();
    };
    if students == 0 {
        return Vec::new();
    }

    let mut options = Vec::with_capacity(2);

    if let (Some(set_price), Some(max_users)) = (record.price_per_set, record.max_users)
        && set_price > 0.0
        && max_users > 0.0
    {
        let sets = (students as f64 / max_users).ceil() as u64;
        options.push(CostOption {
            label: format!("Using classroom sets ({sets} set(s))"),
            total: sets as f64 * set_price,
            plan: PurchasePlan::ClassroomSets { sets },
        });
    }

    if let Some(unit_price) = record.price.filter(|price| *price > 0.0) {
        options.push(CostOption {
            label: format!("Buying individually ({students} unit(s))"),
            total: students as f64 * unit_price,
            plan: PurchasePlan::Individual { units: students },
        });
    }

    options
}

/// The cheapest option; ties go to the earlier one.
pub fn recommended(options: &[CostOption]) -> Option<&CostOption> {
    options.iter().fold(None, |best: Option<&CostOption>, option| match best {
        Some(current) if current.total <= option.total => Some(current),
        _ => Some(option),
    })
}
