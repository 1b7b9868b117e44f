//! JSON serialization of render settings and solver output.

use serde::Serialize;
use tricanvas_core::RenderConfig;

/// Errors from the JSON serializers.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The value could not be serialized.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Compact JSON of `config`, for [`SvgMetadata::config_json`].
///
/// [`SvgMetadata::config_json`]: crate::SvgMetadata::config_json
///
/// # Errors
///
/// Returns [`ExportError::Json`] if serialization fails.
pub fn config_metadata_json(config: &RenderConfig) -> Result<String, ExportError> {
    Ok(serde_json::to_string(config)?)
}

/// Pretty-printed JSON of any serializable value, such as a solver
/// output.
///
/// # Errors
///
/// Returns [`ExportError::Json`] if serialization fails.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(value)?)
}
