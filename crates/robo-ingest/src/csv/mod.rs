//! CSV reading utilities.

mod header;
mod reader;

pub use header::{detection_key, normalize_header};
pub use reader::{IngestOptions, RawTable, read_raw_table, read_raw_table_from_reader};
