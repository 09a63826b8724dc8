//! Fetcher port for retrieving project files by URL.

use crate::schedule::domain::FileUrl;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project file fetch operations.
pub type ProjectFileFetchResult<T> = Result<T, ProjectFileFetchError>;

/// Retrieval contract for remote project files.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectFileFetcher: Send + Sync {
    /// Downloads the complete file referenced by `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectFileFetchError`] when the URL cannot be opened, the
    /// remote responds with a failure status, or the body cannot be read.
    async fn fetch(&self, url: &FileUrl) -> ProjectFileFetchResult<Vec<u8>>;
}

/// Errors returned by project file fetchers.
#[derive(Debug, Clone, Error)]
pub enum ProjectFileFetchError {
    /// The URL could not be parsed or uses an unsupported scheme.
    #[error("invalid file URL '{url}': {reason}")]
    InvalidUrl {
        /// URL as supplied.
        url: String,
        /// Reason string.
        reason: String,
    },

    /// The remote server answered with a non-success status.
    #[error("server returned HTTP {status} for {url}")]
    Status {
        /// URL as supplied.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The file exceeds the configured size limit.
    #[error("file at {url} exceeds the {limit} byte limit")]
    TooLarge {
        /// URL as supplied.
        url: String,
        /// Configured limit in bytes.
        limit: u64,
    },

    /// Connection, TLS, or body read failure.
    #[error("{0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectFileFetchError {
    /// Wraps a transport-layer error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
