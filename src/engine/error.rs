//! Error type shared by the settings store and presets.

use thiserror::Error;

/// Errors raised by setting mutations and typed read-back.
///
/// Name validation never produces one of these; see
/// [`crate::engine::validate`].
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("Invalid argument: {0} must not be empty")]
    InvalidArgument(&'static str),

    #[error("Setting '{key}' value {value:?} is not a valid {expected}")]
    Format {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("Setting type '{0}' is not supported")]
    UnsupportedType(String),

    #[error("Setting '{0}' is not present")]
    MissingSetting(String),

    #[error("Malformed preset document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PresetError>;
