use std::sync::Arc;

use reqwest::StatusCode;

/// Result type used throughout the trustbadge client.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching trustbadge data.
///
/// Every failure of the fetch pipeline (network, non-success status, body parsing) is returned as a
/// value of this type, with the underlying cause preserved.
#[derive(thiserror::Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// Network error, including non-success HTTP statuses. Use [`Error::status`] to inspect the
    /// status code.
    #[error(transparent)]
    // reqwest::Error is not clonable, so we're wrapping it in an Arc.
    Network(Arc<reqwest::Error>),

    /// Response body (or configuration file) could not be parsed.
    #[error("failed to parse response body")]
    Parse(#[source] Arc<serde_json::Error>),

    /// Invalid base URL configuration.
    #[error("invalid base url configuration")]
    InvalidBaseUrl(#[source] url::ParseError),

    /// An I/O error.
    #[error(transparent)]
    Io(Arc<std::io::Error>),

    /// The shop has no purchase-protection guarantee.
    #[error("shop {ts_id} has no guarantee")]
    MissingGuarantee {
        /// TS-ID of the shop.
        ts_id: String,
    },

    /// The fetch task was aborted before it completed, usually because its view model was dropped.
    #[error("fetch task was cancelled")]
    TaskCancelled,

    /// The fetch task panicked. This should normally never happen.
    #[error("fetch task panicked")]
    TaskPanicked,
}

impl Error {
    /// HTTP status of a non-success response, if that is what caused the error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Network(err) => err.status(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::Network(Arc::new(value))
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Parse(Arc::new(value))
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(Arc::new(value))
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        if value.is_cancelled() {
            Error::TaskCancelled
        } else {
            Error::TaskPanicked
        }
    }
}
