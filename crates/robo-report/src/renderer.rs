//! Record to PDF rendering.

use std::path::Path;

use sha2::{Digest, Sha256};

use robo_model::Record;

use crate::error::{ReportError, Result};
use crate::image::{DecodedImage, HttpImageSource, ImageError, ImageOutcome, ImageSource, OfflineImages};
use crate::layout::{ReportLayout, plan};
use crate::options::ReportOptions;
use crate::pdf::write_pdf;

/// A finished report.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub bytes: Vec<u8>,
    pub layout: ReportLayout,
    pub image: ImageOutcome,
}

impl RenderedReport {
    /// SHA-256 of the PDF bytes, as lowercase hex.
    pub fn sha256_hex(&self) -> String {
        hex::encode(Sha256::digest(&self.bytes))
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.bytes).map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Renders one-page summary reports.
pub struct ReportRenderer {
    options: ReportOptions,
    images: Box<dyn ImageSource>,
}

impl ReportRenderer {
    /// Builds a renderer whose image source follows `options.fetch_images`.
    pub fn new(options: ReportOptions) -> Result<Self> {
        let images: Box<dyn ImageSource> = if options.fetch_images {
            Box::new(HttpImageSource::with_timeout(options.image_timeout)?)
        } else {
            Box::new(OfflineImages)
        };
        Ok(Self::with_source(options, images))
    }

    pub fn with_source(options: ReportOptions, images: Box<dyn ImageSource>) -> Self {
        Self { options, images }
    }

    /// Renders `record`. Absent values and image failures degrade to
    /// placeholders; only PDF serialization can fail.
    pub fn render(&self, record: &Record) -> Result<RenderedReport> {
        let span = tracing::debug_span!("render", name = %record.name);
        let _guard = span.enter();

        let (image, outcome) = self.load_image(record);
        let layout = plan(record, image.as_ref(), &self.options);
        if layout.overflows() {
            tracing::warn!(name = %record.name, "report content runs past the page margin");
        }

        let bytes = write_pdf(&layout, image.as_ref(), &record.name)?;
        tracing::debug!(bytes = bytes.len(), "report rendered");
        Ok(RenderedReport {
            bytes,
            layout,
            image: outcome,
        })
    }

    fn load_image(&self, record: &Record) -> (Option<DecodedImage>, ImageOutcome) {
        let Some(url) = record
            .image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
        else {
            return (None, ImageOutcome::Missing);
        };

        match self.images.fetch(url) {
            Ok(image) => {
                let outcome = ImageOutcome::Embedded {
                    width: image.width,
                    height: image.height,
                };
                (Some(image), outcome)
            }
            Err(ImageError::Disabled) => {
                tracing::debug!(url, "image fetching disabled");
                (None, ImageOutcome::Failed(ImageError::Disabled.to_string()))
            }
            Err(e) => {
                tracing::warn!(name = %record.name, url, error = %e, "image unavailable, using placeholder");
                (None, ImageOutcome::Failed(e.to_string()))
            }
        }
    }
}

/// File name for a record's report: a lowercase slug of the name.
pub fn report_file_name(record: &Record) -> String {
    let mut slug = String::with_capacity(record.name.len());
    for ch in record.name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "robot.pdf".to_string()
    } else {
        format!("{slug}.pdf")
    }
}
