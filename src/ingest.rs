//! Image ingest: decode an upload, bound its size, re-encode it as JPEG.
//!
//! Uploaded photos are embedded in the persisted snapshot as `data:` URLs,
//! and browser storage is small. Every photo therefore passes through
//! [`downsample`] before it reaches the document. The longest side is capped,
//! the aspect ratio is kept, and the pixels are re-encoded as JPEG at a fixed
//! quality.

#[cfg(test)]
#[path = "ingest_test.rs"]
mod ingest_test;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ExtendedColorType, ImageEncoder};

use crate::config::EditorConfig;
use crate::error::IngestError;

const JPEG_DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// Size limit and quality applied to every upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Longest side the output may have, in pixels.
    pub max_side: u32,
    /// JPEG quality, 1..=100.
    pub quality: u8,
}

impl IngestOptions {
    #[must_use]
    pub fn from_config(config: &EditorConfig) -> Self {
        Self { max_side: config.max_image_side.max(1), quality: config.jpeg_quality_percent().clamp(1, 100) }
    }
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

/// A re-encoded image ready to become a polaroid's image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestedImage {
    /// `data:image/jpeg;base64,...`
    pub data_url: String,
    pub width: u32,
    pub height: u32,
}

/// Output dimensions for an image of `width`×`height` bounded by `max_side`.
///
/// Images already within the bound keep their size. Larger ones scale both
/// sides by the same factor, rounding to the nearest pixel and never below 1.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fit_within(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    let max_side = max_side.max(1);
    let longest = width.max(height);
    if longest <= max_side {
        return (width, height);
    }
    let scale = f64::from(max_side) / f64::from(longest);
    let scaled = |side: u32| ((f64::from(side) * scale).round() as u32).clamp(1, max_side);
    (scaled(width), scaled(height))
}

/// Decode `bytes`, shrink to fit `opts.max_side`, and re-encode as JPEG.
///
/// Transparency is dropped; JPEG has no alpha channel.
///
/// # Errors
///
/// Returns [`IngestError::Decode`] for payloads the decoder rejects,
/// [`IngestError::Dimensions`] for empty images, and [`IngestError::Encode`]
/// if JPEG encoding fails.
pub fn downsample(bytes: &[u8], opts: IngestOptions) -> Result<IngestedImage, IngestError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| IngestError::Decode(e.to_string()))?;
    let (width, height) = (decoded.width(), decoded.height());
    if width == 0 || height == 0 {
        return Err(IngestError::Dimensions { width, height });
    }

    let (out_w, out_h) = fit_within(width, height, opts.max_side);
    let rgb = decoded.to_rgb8();
    let rgb = if (out_w, out_h) == (width, height) {
        rgb
    } else {
        image::imageops::resize(&rgb, out_w, out_h, FilterType::Triangle)
    };

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, opts.quality)
        .write_image(rgb.as_raw(), out_w, out_h, ExtendedColorType::Rgb8)
        .map_err(|e| IngestError::Encode(e.to_string()))?;

    Ok(IngestedImage {
        data_url: format!("{JPEG_DATA_URL_PREFIX}{}", STANDARD.encode(&jpeg)),
        width: out_w,
        height: out_h,
    })
}

/// Same as [`downsample`] for a `data:` URL, as produced by `FileReader.readAsDataURL`.
///
/// # Errors
///
/// Returns [`IngestError::Decode`] if the URL is not base64 `data:` text,
/// otherwise whatever [`downsample`] returns.
pub fn downsample_data_url(url: &str, opts: IngestOptions) -> Result<IngestedImage, IngestError> {
    let bytes = data_url_bytes(url)?;
    downsample(&bytes, opts)
}

/// Process several uploads on their own. One bad file does not stop the rest;
/// results come back in input order.
#[must_use]
pub fn ingest_all<B: AsRef<[u8]>>(files: &[B], opts: IngestOptions) -> Vec<Result<IngestedImage, IngestError>> {
    files.iter().map(|bytes| downsample(bytes.as_ref(), opts)).collect()
}

/// Payload bytes of a base64 `data:` URL.
///
/// # Errors
///
/// Returns [`IngestError::Decode`] if `url` is not a base64 `data:` URL.
pub fn data_url_bytes(url: &str) -> Result<Vec<u8>, IngestError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| IngestError::Decode("not a data URL".into()))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| IngestError::Decode("data URL has no payload".into()))?;
    if !meta.ends_with(";base64") {
        return Err(IngestError::Decode("data URL is not base64".into()));
    }
    STANDARD.decode(payload.trim()).map_err(|e| IngestError::Decode(e.to_string()))
}
