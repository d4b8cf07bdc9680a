//! Product images for the report.
//!
//! Fetching is a blocking call with a fixed timeout. A failed fetch or
//! decode is never fatal: the renderer draws a placeholder instead.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use serde::Serialize;
use thiserror::Error;

/// Time allowed for one image request, connect to last byte.
pub const IMAGE_TIMEOUT: Duration = Duration::from_secs(10);

/// A decoded image as tightly packed 8-bit RGB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

/// Why an image could not be embedded.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image fetching is disabled")]
    Disabled,

    #[error("failed to create HTTP client: {0}")]
    Client(String),

    #[error("request for {url} failed: {message}")]
    Fetch { url: String, message: String },

    #[error("request for {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode image: {0}")]
    Decode(String),
}

/// Provides decoded images by URL.
pub trait ImageSource {
    fn fetch(&self, url: &str) -> Result<DecodedImage, ImageError>;
}

/// Downloads images over HTTP(S).
pub struct HttpImageSource {
    client: Client,
}

impl HttpImageSource {
    pub fn new() -> Result<Self, ImageError> {
        Self::with_timeout(IMAGE_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, ImageError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ImageError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl ImageSource for HttpImageSource {
    fn fetch(&self, url: &str) -> Result<DecodedImage, ImageError> {
        tracing::debug!(url, "fetching image");
        let fetch_error = |e: reqwest::Error| ImageError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(url)
            .header(
                USER_AGENT,
                format!("robot-guide/{}", env!("CARGO_PKG_VERSION")),
            )
            .send()
            .map_err(fetch_error)?;

        if !response.status().is_success() {
            return Err(ImageError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let bytes = response.bytes().map_err(fetch_error)?;
        decode_image(&bytes)
    }
}

/// Never fetches; every report gets the image placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineImages;

impl ImageSource for OfflineImages {
    fn fetch(&self, _url: &str) -> Result<DecodedImage, ImageError> {
        Err(ImageError::Disabled)
    }
}

/// Decodes PNG, JPEG, GIF or WebP bytes into RGB.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, ImageError> {
    let rgb = image::load_from_memory(bytes)
        .map_err(|e| ImageError::Decode(e.to_string()))?
        .to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageError::Decode("image has no pixels".to_string()));
    }
    Ok(DecodedImage {
        width,
        height,
        rgb: rgb.into_raw(),
    })
}

/// What happened to the record's image during rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum ImageOutcome {
    /// The record has no image URL.
    Missing,
    Embedded { width: u32, height: u32 },
    /// Fetch or decode failed; the reason is kept for logs and the CLI.
    Failed(String),
}

/// Scales `width` x `height` to fit inside the box, keeping the aspect ratio.
pub fn fit_within(width: u32, height: u32, max_width: f32, max_height: f32) -> (f32, f32) {
    if width == 0 || height == 0 {
        return (0.0, 0.0);
    }
    let (w, h) = (width as f32, height as f32);
    let scale = (max_width / w).min(max_height / h);
    (w * scale, h * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_within_keeps_aspect() {
        let (w, h) = fit_within(400, 200, 100.0, 100.0);
        assert_eq!((w, h), (100.0, 50.0));
        let (w, h) = fit_within(100, 300, 120.0, 120.0);
        assert_eq!((w, h), (40.0, 120.0));
        assert_eq!(fit_within(0, 10, 50.0, 50.0), (0.0, 0.0));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_image(b"definitely not an image"),
            Err(ImageError::Decode(_))
        ));
    }

    #[test]
    fn test_offline_never_fetches() {
        assert!(matches!(
            OfflineImages.fetch("https://example.com/bot.png"),
            Err(ImageError::Disabled)
        ));
    }
}
