//! Error types for lever-jobs

use std::time::Duration;
use thiserror::Error;

/// Result type alias for lever-jobs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to render markup: {0}")]
    Render(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl From<askama::Error> for Error {
    fn from(err: askama::Error) -> Self {
        Error::Render(err.to_string())
    }
}

/// Errors raised while fetching postings from the remote API.
///
/// `Clone` so that one in-flight result can be handed to every caller
/// waiting on the same fetch.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("TLS verification failed: {0}")]
    TlsFailure(String),

    #[error("Unexpected status {status} from postings API: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid postings response: {0}")]
    Parse(String),
}

impl FetchError {
    /// Whether a later attempt could reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Network(_) | FetchError::Timeout(_) => true,
            FetchError::Status { status, .. } => *status >= 500,
            FetchError::TlsFailure(_) | FetchError::Parse(_) => false,
        }
    }

    /// Classify a transport error from reqwest.
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(timeout)
        } else if err.is_connect() && has_tls_cause(&err) {
            FetchError::TlsFailure(error_chain(&err))
        } else if err.is_connect() {
            FetchError::Network(format!("Failed to connect to postings API: {}", error_chain(&err)))
        } else {
            FetchError::Network(error_chain(&err))
        }
    }
}

/// Render an error together with all of its sources.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Whether a source of `err` is a failed TLS session.
///
/// tokio-rustls reports handshake and certificate failures as
/// `io::ErrorKind::InvalidData` wrapping the rustls error; socket-level
/// failures carry other kinds. Messages are never inspected, since they
/// include the request URL.
fn has_tls_cause(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            if io.kind() == std::io::ErrorKind::InvalidData && io.get_ref().is_some() {
                return true;
            }
        }
        source = cause.source();
    }
    false
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `lever-jobs init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Site identifier not configured. Run `lever-jobs init` or `lever-jobs site set <ID>`.")]
    MissingSiteIdentifier,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Transient store errors
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Cache I/O error: {0}")]
    Io(String),

    #[error("Could not determine cache directory")]
    NoHome,

    #[error("Failed to (de)serialize cache entry: {0}")]
    Serialization(#[from] serde_json::Error),
}
