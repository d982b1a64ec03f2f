//! The [`FragmentFetcher`] trait and its error type.

use async_trait::async_trait;

/// Errors from the fragment transport layer.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request itself failed (network, DNS, TLS, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The source answered with a non-success status code.
    #[error("Fragment source returned HTTP {status}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
    },

    /// A filesystem read failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source location is not acceptable to this fetcher
    /// (e.g. a path-traversal attempt against [`DirFetcher`](crate::DirFetcher)).
    #[error("Invalid fragment source: {0}")]
    InvalidSource(String),
}

/// Loads fragment text from a source location.
///
/// `source` is the raw marker value, e.g. `/header.html`. Implementations
/// decide how to interpret it (URL join, directory lookup, map lookup).
#[async_trait]
pub trait FragmentFetcher: Send + Sync {
    /// Fetch the fragment body for `source`.
    async fn fetch(&self, source: &str) -> Result<String, FetchError>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
