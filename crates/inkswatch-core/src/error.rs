//! Error types for loading palettes and picker configuration.

use thiserror::Error;

/// Errors raised while loading picker data.
///
/// Rendering and navigation never fail; only parsing external input does.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Invalid palette: {0}")]
    InvalidPalette(String),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for picker loading operations.
pub type PickerResult<T> = Result<T, PickerError>;
