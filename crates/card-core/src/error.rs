//! Card error types.
//!
//! Rendering and interaction never fail; these cover loading inputs.

use thiserror::Error;

/// Errors raised while loading products or configuration.
#[derive(Error, Debug)]
pub enum CardError {
    /// File could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON input could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML input could not be parsed.
    #[error("TOML error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Config could not be written as TOML.
    #[error("TOML serialization error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// Unknown toast anchor keyword.
    #[error("Invalid toast position: {0}")]
    InvalidPosition(String),

    /// Config value out of range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl CardError {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        CardError::Io {
            path: path.into(),
            source,
        }
    }
}
