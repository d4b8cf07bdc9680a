//! Robot catalog data model.
//!
//! This crate defines the normalized shape of a catalog loaded from the
//! human-maintained robot spreadsheet:
//!
//! - **Record**: one robot with named, optional attributes
//! - **Field**: the canonical columns a record can carry
//! - **FieldSet**: which fields resolved to a source column for this session
//! - **GradeLevel**: grade tokens with the PK < K < 1 < 2 ... ordering
//! - **Catalog**: the ordered, validated sequence of records

pub mod catalog;
pub mod enums;
pub mod error;
pub mod field;
pub mod grade;
pub mod record;

pub use catalog::Catalog;
pub use enums::{Flag, InternetUse};
pub use error::{ModelError, Result};
pub use field::{Field, FieldSet};
pub use grade::GradeLevel;
pub use record::{DeviceFlag, Record};
