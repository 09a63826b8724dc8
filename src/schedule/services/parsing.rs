//! Service layer for fetching and decoding project files.

use crate::schedule::{
    domain::{FileUrl, ScheduleDomainError, ScheduleTask},
    ports::{ProjectFileFetchError, ProjectFileFetcher, ProjectReadError, ProjectReader},
};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{Span, info, warn};

/// Service-level errors for schedule parsing.
#[derive(Debug, Error)]
pub enum ScheduleParsingError {
    /// Request validation failed.
    #[error(transparent)]
    Domain(#[from] ScheduleDomainError),
    /// The project file could not be downloaded.
    #[error(transparent)]
    Fetch(#[from] ProjectFileFetchError),
    /// The project file could not be decoded.
    #[error(transparent)]
    Read(#[from] ProjectReadError),
    /// The decoding task was cancelled or panicked.
    #[error("project file decoding did not complete: {0}")]
    Decode(#[source] JoinError),
}

impl ScheduleParsingError {
    /// Returns `true` when the request carried no input at all.
    #[must_use]
    pub const fn is_missing_input(&self) -> bool {
        matches!(
            self,
            Self::Domain(ScheduleDomainError::MissingFileUrl | ScheduleDomainError::MissingFile)
        )
    }
}

/// Result type for schedule parsing operations.
pub type ScheduleParsingResult<T> = Result<T, ScheduleParsingError>;

/// Fetch-and-read orchestration service.
///
/// The service holds no per-request state; concurrent calls share only the
/// immutable fetcher and reader.
pub struct ScheduleParsingService<F, R>
where
    F: ProjectFileFetcher,
    R: ProjectReader,
{
    fetcher: Arc<F>,
    reader: Arc<R>,
}

impl<F, R> Clone for ScheduleParsingService<F, R>
where
    F: ProjectFileFetcher,
    R: ProjectReader,
{
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            reader: Arc::clone(&self.reader),
        }
    }
}

impl<F, R> ScheduleParsingService<F, R>
where
    F: ProjectFileFetcher,
    R: ProjectReader + 'static,
{
    /// Creates a new parsing service.
    #[must_use]
    pub const fn new(fetcher: Arc<F>, reader: Arc<R>) -> Self {
        Self { fetcher, reader }
    }

    /// Downloads the file named by `raw_url` and returns its tasks in reader
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleParsingError::Domain`] when `raw_url` is empty,
    /// [`ScheduleParsingError::Fetch`] when the download fails, and
    /// [`ScheduleParsingError::Read`] when the content cannot be decoded.
    pub async fn parse_url(&self, raw_url: &str) -> ScheduleParsingResult<Vec<ScheduleTask>> {
        let url = FileUrl::new(raw_url)?;
        info!(url = %url, "parsing project file from URL");

        let bytes = self.fetcher.fetch(&url).await.inspect_err(|err| {
            warn!(url = %url, error = %err, "project file download failed");
        })?;
        self.decode(bytes).await
    }

    /// Decodes an uploaded project file and returns its tasks in reader
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleParsingError::Domain`] when `bytes` is empty and
    /// [`ScheduleParsingError::Read`] when the content cannot be decoded.
    pub async fn parse_bytes(&self, bytes: Vec<u8>) -> ScheduleParsingResult<Vec<ScheduleTask>> {
        if bytes.is_empty() {
            return Err(ScheduleDomainError::MissingFile.into());
        }
        info!(bytes = bytes.len(), "parsing uploaded project file");
        self.decode(bytes).await
    }

    /// Decodes on the blocking thread pool, inside the caller's span.
    async fn decode(&self, bytes: Vec<u8>) -> ScheduleParsingResult<Vec<ScheduleTask>> {
        let reader = Arc::clone(&self.reader);
        let span = Span::current();
        let project = tokio::task::spawn_blocking(move || span.in_scope(|| reader.read(&bytes)))
            .await
            .map_err(ScheduleParsingError::Decode)?
            .inspect_err(|err| {
                warn!(error = %err, "project file decoding failed");
            })?;
        info!(
            format = %project.format(),
            tasks = project.tasks().len(),
            "project file parsed"
        );
        Ok(project.into_tasks())
    }
}
