//! Robot catalog ingestion.
//!
//! Loads the hand-maintained robot spreadsheet (exported as CSV) and
//! normalizes it into a [`robo_model::Catalog`].
//!
//! # Features
//!
//! - **CSV Loading**: Read every row as text, skipping title rows and blanks
//! - **Column Detection**: Resolve canonical fields through an ordered chain of
//!   named strategies (exact header, required substrings, content scan)
//! - **Numeric Coercion**: Prices, ages and ranges from free-text cells
//! - **Normalization**: Typed records, dropped-row accounting, degraded fields
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use robo_ingest::{IngestOptions, load_catalog};
//!
//! let options = IngestOptions::default().with_skip_rows(1);
//! let normalized = load_catalog(Path::new("robots.csv"), &options)?;
//! for field in normalized.report.degraded() {
//!     println!("not available: {field}");
//! }
//! ```

mod csv;
mod detection;
mod error;
mod normalize;
mod numeric;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{
    IngestOptions, RawTable, detection_key, normalize_header, read_raw_table,
    read_raw_table_from_reader,
};

// === Column Detection ===
pub use detection::{
    ColumnDetector, ColumnResolution, ContentRule, ContentScan, Detection, DetectionStrategy,
    DeviceColumn, ExactHeader, FieldSpec, RequiredSubstrings, ResolvedColumn, STANDARD_SPECS,
    SchemaMap, SchemaReport, is_battery_value,
};

// === Normalization ===
pub use normalize::{NormalizedCatalog, load_catalog, normalize, normalize_with};

// === Numeric Coercion ===
pub use numeric::{parse_number, parse_upper_bound};
