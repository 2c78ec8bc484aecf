//! Error types for the catalog UI.
//!
//! Remote failures live in `swapi_client::ClientError`; this covers
//! local persistence and configuration.

use thiserror::Error;

/// The main error type for local (non-network) operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// `window.localStorage` is missing or access was denied.
    #[error("browser storage is unavailable")]
    StorageUnavailable,

    /// Reading a key failed.
    #[error("failed to read '{key}' from storage: {message}")]
    StorageRead {
        /// Storage key.
        key: String,
        /// Description reported by the browser.
        message: String,
    },

    /// Writing a key failed (quota exceeded, private mode, ...).
    #[error("failed to write '{key}' to storage: {message}")]
    StorageWrite {
        /// Storage key.
        key: String,
        /// Description reported by the browser.
        message: String,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Configuration Errors ===
    /// The embedded configuration block is not valid JSON for `CatalogConfig`.
    #[error("failed to parse configuration: {message}")]
    ConfigParse {
        /// Deserializer message.
        message: String,
    },

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

/// A specialized Result type for catalog UI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    #[must_use]
    pub fn storage_write(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StorageWrite {
            key: key.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }
}
