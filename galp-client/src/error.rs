use galp_cache::CacheError;
use thiserror::Error;

/// Failures a single fetch attempt can produce.
///
/// Every variant is terminal for the attempt that produced it; nothing is
/// retried here. Callers decide whether to issue a new request.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No internet connection")]
    NoConnection,
    #[error("Request timed out")]
    Timeout,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Invalid response")]
    InvalidResponse,
    #[error("Request failed with status code: {0}")]
    RequestFailed(u16),
    #[error("No data in response")]
    NoData,
    #[error("Decoding failed: {0}")]
    DecodingFailed(String),
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}

impl ApiError {
    /// Classify a transport-level failure, in priority order: connectivity
    /// first, then timeout, then everything else.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ApiError::NoConnection
        } else if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
