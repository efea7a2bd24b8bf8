use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Unified error type for haru operations
#[derive(Debug, Error)]
pub enum HaruError {
    // Store errors
    #[error("Failed to load entries from the store: {0}")]
    Fetch(#[source] StoreError),

    #[error("Failed to write to the store: {0}")]
    Write(#[source] StoreError),

    #[error("Failed to upload '{file}': {source}")]
    Upload {
        /// Original file name of the photo that failed
        file: String,
        /// Store-level failure detail
        source: StoreError,
    },

    // Draft validation errors
    #[error("Entry title must not be empty")]
    EmptyTitle,

    #[error("Entry content must not be empty")]
    EmptyContent,

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Config errors
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Result type alias for haru operations
pub type Result<T> = std::result::Result<T, HaruError>;

/// A serializable representation of HaruError for the view boundary
/// (e.g., wasm bindings)
#[derive(Debug, Clone, Serialize)]
pub struct SerializableError {
    /// Error kind/variant name
    pub kind: String,
    /// Human-readable error message
    pub message: String,
    /// Original file name (upload failures only)
    pub file: Option<String>,
}

impl From<&HaruError> for SerializableError {
    fn from(err: &HaruError) -> Self {
        let kind = match err {
            HaruError::Fetch(_) => "Fetch",
            HaruError::Write(_) => "Write",
            HaruError::Upload { .. } => "Upload",
            HaruError::EmptyTitle => "EmptyTitle",
            HaruError::EmptyContent => "EmptyContent",
            HaruError::Io(_) => "Io",
            HaruError::ConfigParse(_) => "ConfigParse",
            HaruError::ConfigSerialize(_) => "ConfigSerialize",
            HaruError::NoConfigDir => "NoConfigDir",
        }
        .to_string();

        let file = match err {
            HaruError::Upload { file, .. } => Some(file.clone()),
            _ => None,
        };

        Self {
            kind,
            message: err.to_string(),
            file,
        }
    }
}

impl From<HaruError> for SerializableError {
    fn from(err: HaruError) -> Self {
        SerializableError::from(&err)
    }
}

impl HaruError {
    /// Convert to a serializable representation for the view boundary
    pub fn to_serializable(&self) -> SerializableError {
        SerializableError::from(self)
    }
}
