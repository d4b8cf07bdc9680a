//! Report files on disk.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use robo_model::Record;
use robo_report::{ImageOutcome, ReportRenderer, report_file_name};

/// One report written by [`ReportWriter`].
#[derive(Debug, Clone)]
pub struct WrittenReport {
    pub path: PathBuf,
    pub image: ImageOutcome,
}

/// Renders records into one directory, never overwriting a file written
/// earlier in the same run.
pub struct ReportWriter<'a> {
    renderer: &'a ReportRenderer,
    dir: PathBuf,
    used: BTreeSet<String>,
}

impl<'a> ReportWriter<'a> {
    /// Creates `dir` if needed.
    pub fn create(renderer: &'a ReportRenderer, dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output directory {}", dir.display()))?;
        Ok(Self {
            renderer,
            dir: dir.to_path_buf(),
            used: BTreeSet::new(),
        })
    }

    pub fn write(&mut self, record: &Record) -> Result<WrittenReport> {
        let report = self
            .renderer
            .render(record)
            .with_context(|| format!("render report for {}", record.name))?;
        let path = unique_path(&self.dir, &report_file_name(record), &mut self.used);
        report
            .write_to(&path)
            .with_context(|| format!("write report for {}", record.name))?;
        Ok(WrittenReport {
            path,
            image: report.image,
        })
    }
}

/// Appends `-2`, `-3`, ... when two robots share a file name.
pub fn unique_path(dir: &Path, file_name: &str, used: &mut BTreeSet<String>) -> PathBuf {
    let stem = file_name.trim_end_matches(".pdf");
    let mut candidate = file_name.to_string();
    let mut suffix = 2;
    while !used.insert(candidate.clone()) {
        candidate = format!("{stem}-{suffix}.pdf");
        suffix += 1;
    }
    dir.join(candidate)
}
