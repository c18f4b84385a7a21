//! Error types for the request helper.

use thiserror::Error;

/// The closed set of failures a call can produce.
///
/// The retry wrapper never consults the kind: every failure consumes an
/// attempt, including the ones a retry can never fix. Use
/// [`Error::is_retryable`] to tell them apart on the caller side.
#[derive(Debug, Error)]
pub enum Error {
    /// Method string is not one of the eight supported verbs.
    #[error("invalid request method {0:?}")]
    InvalidMethod(String),

    /// Header spec could not be turned into wire headers.
    #[error("failed to decode header spec: {message}")]
    HeaderDecode {
        /// What was wrong with the spec.
        message: String,
        /// The JSON parse failure, when the spec was the raw text form.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Connection, DNS, TLS, timeout, or request construction failure.
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response arrived but its body could not be drained.
    #[error("failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),
}

impl Error {
    /// Header-decode error wrapping a JSON parse failure.
    pub(crate) fn header_json(source: serde_json::Error) -> Self {
        Self::HeaderDecode {
            message: format!("not a string-to-string JSON object: {source}"),
            source: Some(source),
        }
    }

    /// Header-decode error for a key whose name or value cannot go on the
    /// wire.
    pub(crate) fn header_invalid(key: &str) -> Self {
        Self::HeaderDecode {
            message: format!("header {key:?} cannot be encoded as a wire header"),
            source: None,
        }
    }

    /// Whether retrying the same call could ever produce a different
    /// outcome. Transport and body-read failures are transient; a bad
    /// method or header spec fails identically every attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::BodyRead(_))
    }
}

/// Result type alias using the helper's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
