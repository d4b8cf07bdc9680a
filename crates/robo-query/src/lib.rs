//! Querying the robot catalog.
//!
//! - **Criteria**: [`FilterCriteria`] collects optional user choices
//! - **Predicates**: criteria compile into explicit [`Predicate`] values,
//!   skipping any on a field the catalog does not have
//! - **Engine**: [`apply`] filters and stably sorts in one pass
//! - **Cost**: [`estimate`] prices a class's purchase options
//! - **Selectors**: [`SelectorOptions`] lists the values worth offering

pub mod cost;
pub mod criteria;
pub mod engine;
pub mod options;
pub mod predicate;
pub mod sort;

pub use cost::{CostOption, PurchasePlan, estimate, recommended};
pub use criteria::{FilterCriteria, NumericRange};
pub use engine::{QueryResult, apply};
pub use options::SelectorOptions;
pub use predicate::{Predicate, flag_value, numeric_value};
pub use sort::SortKey;
