//! Error types for the editor core.
//!
//! DESIGN
//! ======
//! No error here is fatal. Storage errors become user warnings, ingest
//! errors drop the one file that failed, input errors reject a form
//! submission before any record is created, and config errors are reported
//! to the host at startup. Every type carries a grepable code through
//! [`ErrorCode`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Grepable error code and retryable flag for host-facing errors.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

// =============================================================================
// STORAGE
// =============================================================================

/// Failure reported by a key-value backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backend is out of capacity for this write.
    #[error("storage quota exceeded")]
    QuotaExceeded,

    /// The backend could not be reached or rejected the call.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl ErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::QuotaExceeded => "E_STORAGE_QUOTA",
            Self::Unavailable(_) => "E_STORAGE_UNAVAILABLE",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Failure while writing a library snapshot.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// The snapshot could not be encoded as JSON.
    #[error("snapshot encode failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// The backend refused the write.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PersistError {
    /// Whether the failure is the backend running out of space.
    #[must_use]
    pub fn is_quota(&self) -> bool {
        matches!(self, Self::Store(StoreError::QuotaExceeded))
    }
}

impl ErrorCode for PersistError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Encode(_) => "E_SNAPSHOT_ENCODE",
            Self::Store(e) => e.error_code(),
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::Encode(_) => false,
            Self::Store(e) => e.retryable(),
        }
    }
}

// =============================================================================
// INGEST
// =============================================================================

/// Failure while turning an uploaded file into a stored image reference.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The payload is not an image the decoder understands.
    #[error("image decode failed: {0}")]
    Decode(String),

    /// The downsampled image could not be re-encoded.
    #[error("image encode failed: {0}")]
    Encode(String),

    /// The decoded image has a zero-length side.
    #[error("invalid image dimensions {width}x{height}")]
    Dimensions { width: u32, height: u32 },
}

impl ErrorCode for IngestError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Decode(_) => "E_IMAGE_DECODE",
            Self::Encode(_) => "E_IMAGE_ENCODE",
            Self::Dimensions { .. } => "E_IMAGE_DIMENSIONS",
        }
    }
}

// =============================================================================
// INPUT
// =============================================================================

/// A form submission missing a required field. The message is user-facing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Please enter an album name")]
    MissingName,

    #[error("Please select a cover photo")]
    MissingCover,
}

impl ErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingName => "E_MISSING_NAME",
            Self::MissingCover => "E_MISSING_COVER",
        }
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// Editor configuration could not be parsed or failed validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "E_CONFIG_PARSE",
            Self::Invalid { .. } => "E_CONFIG_INVALID",
        }
    }
}
