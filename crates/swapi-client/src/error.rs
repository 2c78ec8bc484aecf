//! Client Errors
//!
//! Failure taxonomy for talking to SWAPI and ingesting its records.

use thiserror::Error;

/// Errors produced by the remote data source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("request to {url} failed: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Description reported by the browser.
        message: String,
    },

    /// The server answered with a non-2xx status.
    #[error("request to {url} returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The body was not the JSON shape we expected.
    #[error("unexpected response from {url}: {message}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Deserializer message.
        message: String,
    },

    /// No `window` object (not running in a browser).
    #[error("browser window is not available")]
    NoWindow,

    /// A record reference URL has no trailing numeric identifier.
    #[error("malformed record reference: {url}")]
    MalformedRecordReference {
        /// The offending URL.
        url: String,
    },

    /// A character id supplied from outside (route, user) is not numeric.
    #[error("invalid character id: {input}")]
    InvalidId {
        /// The rejected input.
        input: String,
    },
}

/// A specialized Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    #[must_use]
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn decode(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Whether trying the same request again could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Status { .. } | Self::Decode { .. }
        )
    }
}
