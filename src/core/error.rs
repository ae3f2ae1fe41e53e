use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Variants follow the failure taxonomy of the scrape pipeline: transport
/// failures, bad HTTP statuses, selectors that matched nothing, and extracted
/// text that could not be normalized into the expected shape.
#[derive(Debug, Error)]
pub enum MarketError {
    /// A transport-level failure (connection, DNS resolution, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error("unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A provided or derived URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A selector matched nothing in the fetched document. Usually means the
    /// identifier is misspelled, or the source changed its page structure.
    #[error("element not found: {0}")]
    NotFound(String),

    /// Extracted text could not be normalized into the expected type.
    #[error("parse error: {0}")]
    Parse(String),
}

impl MarketError {
    /// Whether retrying the same request could plausibly succeed.
    ///
    /// Transport failures and 5xx statuses are transient. 4xx statuses,
    /// missing elements, and normalization failures are not: they signal a
    /// bad identifier or a changed page structure, and the crate never
    /// retries on its own.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Url(_) | Self::NotFound(_) | Self::Parse(_) => false,
        }
    }
}
