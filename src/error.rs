//! Command-line Error Types

use derive_more::{Display, Error};

/// A command-line error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for command-line operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[display("invalid configuration")]
    Config,
    #[display("could not read or write the release database")]
    Database,
    /// The HTTP client could not be set up (e.g. no TLS backend available).
    #[display("could not construct HTTP client")]
    Client,
    /// The changelog could not be downloaded (network failure or timeout).
    #[display("failed to fetch changelog: {_0}")]
    Fetch(#[error(not(source))] String),
    /// The changelog server responded, but not successfully.
    #[display("failed to fetch changelog {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },
    /// Every changelog parsed to nothing; most likely the page layout changed.
    #[display("no releases found in any changelog")]
    NoReleases,
    #[display("could not write output")]
    Output,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Fetch(_) => true,
            Self::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}
