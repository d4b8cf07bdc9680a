//! CSV file reading into an untyped table of text cells.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{IngestError, Result};

use super::header::normalize_header;

/// Options that control how a source file is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestOptions {
    /// Non-blank rows to discard before the header row (spreadsheet title rows).
    pub skip_rows: usize,
}

impl IngestOptions {
    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = skip_rows;
        self
    }
}

/// A CSV source as read from disk: normalized headers plus rectangular rows of
/// trimmed text. Nothing is typed yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Builds a table, normalizing headers and padding or cutting every row to
    /// the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let headers: Vec<String> = headers
            .iter()
            .map(String::as_str)
            .map(normalize_header)
            .collect();
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Values of one column, top to bottom.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .map(move |row| row.get(index).map_or("", String::as_str))
    }
}

/// Reads a CSV file into a [`RawTable`].
pub fn read_raw_table(path: &Path, options: &IngestOptions) -> Result<RawTable> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let table = read_table(file, options, &path.display().to_string())?;
    tracing::debug!(
        path = %path.display(),
        columns = table.width(),
        rows = table.height(),
        "read CSV source"
    );
    Ok(table)
}

/// Reads CSV text from any reader into a [`RawTable`].
pub fn read_raw_table_from_reader<R: Read>(reader: R, options: &IngestOptions) -> Result<RawTable> {
    read_table(reader, options, "<reader>")
}

fn read_table<R: Read>(reader: R, options: &IngestOptions, origin: &str) -> Result<RawTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut lines = Vec::new();
    for record in csv_reader.byte_records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;
        // Lossy decoding keeps stray Windows-1252 bytes from failing the load.
        let cells: Vec<String> = record
            .iter()
            .map(|bytes| clean_cell(&String::from_utf8_lossy(bytes)))
            .collect();
        if cells.iter().all(String::is_empty) {
            continue;
        }
        lines.push(cells);
    }

    let mut lines = lines.into_iter().skip(options.skip_rows);
    let headers = lines.next().ok_or_else(|| IngestError::EmptyCsv {
        origin: origin.to_string(),
    })?;
    Ok(RawTable::new(headers, lines.collect()))
}

fn clean_cell(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}
