//! Single-page PDF summary reports.
//!
//! Each report is a fixed-layout Letter page: title, product image, feature
//! bullets, summary, details, attribute tables and a purchase link. Text is
//! measured with built-in Helvetica metrics, so the same record always
//! produces byte-identical output.
//!
//! # Example
//!
//! ```ignore
//! use robo_report::{ReportOptions, ReportRenderer};
//!
//! let renderer = ReportRenderer::new(ReportOptions::default().with_fetch_images(false))?;
//! let report = renderer.render(&record)?;
//! std::fs::write("bee-bot.pdf", &report.bytes)?;
//! ```

mod error;
mod format;
mod image;
mod layout;
mod metrics;
mod options;
mod pdf;
mod renderer;
mod wrap;

// === Error Types ===
pub use error::{ReportError, Result};

// === Rendering ===
pub use options::{DEFAULT_STANDARDS, ReportOptions};
pub use renderer::{RenderedReport, ReportRenderer, report_file_name};

// === Images ===
pub use self::image::{
    DecodedImage, HttpImageSource, IMAGE_TIMEOUT, ImageError, ImageOutcome, ImageSource,
    OfflineImages, decode_image, fit_within,
};

// === Layout ===
pub use layout::{
    Block, BlockKind, CONTENT_WIDTH, Color, DESCRIPTION_PLACEHOLDER, IMAGE_BOX,
    IMAGE_PLACEHOLDER, MARGIN, PAGE_HEIGHT, PAGE_WIDTH, Rect, ReportLayout, Shape, TextRun,
    feature_lines, plan,
};

// === Text ===
pub use format::{NOT_AVAILABLE, format_currency, format_flag, format_number, text_or_na};
pub use metrics::{Font, text_width};
pub use wrap::{truncate_to_width, wrap_text};
