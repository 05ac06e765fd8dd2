//! Shared numeric and string constants for the editor core.

// ── Polaroid geometry ───────────────────────────────────────────

/// Smallest width a resize may commit, in CSS pixels.
pub const MIN_POLAROID_WIDTH: f64 = 120.0;

/// Smallest height a resize may commit, in CSS pixels.
pub const MIN_POLAROID_HEIGHT: f64 = 140.0;

/// Width of a freshly ingested polaroid.
pub const DEFAULT_POLAROID_WIDTH: f64 = 200.0;

/// Height of a freshly ingested polaroid.
pub const DEFAULT_POLAROID_HEIGHT: f64 = 250.0;

/// Offset from the page center to a new polaroid's left edge.
pub const PLACEMENT_HALF_WIDTH: f64 = 100.0;

/// Offset from the page center to a new polaroid's top edge.
pub const PLACEMENT_HALF_HEIGHT: f64 = 120.0;

/// Each polaroid already on the page pushes the next one this far down-right.
pub const PLACEMENT_CASCADE: f64 = 20.0;

/// Placement used when the page size has not been reported yet.
pub const FALLBACK_PLACEMENT: f64 = 80.0;

// ── Stickers ────────────────────────────────────────────────────

/// Font size of a freshly dropped sticker.
pub const DEFAULT_STICKER_SIZE: f64 = 40.0;

/// Dropped stickers get a random tilt in `[-STICKER_TILT_DEG, STICKER_TILT_DEG)`.
pub const STICKER_TILT_DEG: f64 = 15.0;

/// Color for sticker types without a palette entry.
pub const FALLBACK_STICKER_COLOR: &str = "#333";

// ── Storage / ingest ────────────────────────────────────────────

/// Key of the single persisted record holding every album.
pub const DEFAULT_STORAGE_KEY: &str = "polaroidAlbums";

/// Longest side an ingested image may keep, in pixels.
pub const DEFAULT_MAX_IMAGE_SIDE: u32 = 1000;

/// JPEG re-encode quality for ingested images, in `(0, 1]`.
pub const DEFAULT_JPEG_QUALITY: f32 = 0.8;
