//! Editor configuration, parsed from a JSON object supplied by the host page.
//!
//! Every field is optional; absent fields take the defaults in
//! [`crate::consts`]. Unknown fields are rejected so a typo in the host's
//! config does not silently fall back to a default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_JPEG_QUALITY, DEFAULT_MAX_IMAGE_SIDE, DEFAULT_STORAGE_KEY};
use crate::error::ConfigError;

/// When continuous gestures write the library through to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    /// Persist after every pointer-move commit.
    #[default]
    EveryStep,
    /// Commit to the model on every move, persist once when the gesture ends.
    OnRelease,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Key of the single persisted record.
    pub storage_key: String,
    /// Longest side an ingested image may keep, in pixels.
    pub max_image_side: u32,
    /// JPEG quality for re-encoded uploads, in `(0, 1]`.
    pub jpeg_quality: f32,
    /// Persistence cadence for drag / resize / rotate.
    pub write_policy: WritePolicy,
    /// Bootstrap sample albums when storage holds nothing usable.
    pub seed_sample_content: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            max_image_side: DEFAULT_MAX_IMAGE_SIDE,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            write_policy: WritePolicy::default(),
            seed_sample_content: true,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a config object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "storage_key", reason: "must not be empty".into() });
        }
        if self.max_image_side == 0 {
            return Err(ConfigError::Invalid { field: "max_image_side", reason: "must be at least 1".into() });
        }
        if self.jpeg_quality.is_nan() || self.jpeg_quality <= 0.0 || self.jpeg_quality > 1.0 {
            return Err(ConfigError::Invalid {
                field: "jpeg_quality",
                reason: format!("{} is outside (0, 1]", self.jpeg_quality),
            });
        }
        Ok(())
    }

    /// Quality as the 1..=100 integer the JPEG encoder takes.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn jpeg_quality_percent(&self) -> u8 {
        (self.jpeg_quality.clamp(0.01, 1.0) * 100.0).round() as u8
    }
}
