//! Report rendering options.

use std::time::Duration;

use crate::image::IMAGE_TIMEOUT;

/// Standards line printed under "Computer Science Standard(s):".
pub const DEFAULT_STANDARDS: &str = "Washington State CS Standards: Algorithms and Programming";

#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// Adds a cost estimate table for this many students.
    pub class_size: Option<i64>,
    pub standards: String,
    /// When false, no network requests are made and every report gets the
    /// image placeholder.
    pub fetch_images: bool,
    pub image_timeout: Duration,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            class_size: None,
            standards: DEFAULT_STANDARDS.to_string(),
            fetch_images: true,
            image_timeout: IMAGE_TIMEOUT,
        }
    }
}

impl ReportOptions {
    pub fn with_class_size(mut self, students: Option<i64>) -> Self {
        self.class_size = students;
        self
    }

    pub fn with_standards(mut self, standards: impl Into<String>) -> Self {
        self.standards = standards.into();
        self
    }

    pub fn with_fetch_images(mut self, fetch: bool) -> Self {
        self.fetch_images = fetch;
        self
    }

    pub fn with_image_timeout(mut self, timeout: Duration) -> Self {
        self.image_timeout = timeout;
        self
    }
}
