//! In-memory project file fetcher for tests and local runs.

use crate::schedule::{
    domain::FileUrl,
    ports::{ProjectFileFetchError, ProjectFileFetchResult, ProjectFileFetcher},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe fetcher that serves registered payloads by URL.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectFileFetcher {
    files: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryProjectFileFetcher {
    /// Creates an empty fetcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `bytes` under `url`, replacing any earlier payload.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn insert(
        &self,
        url: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> ProjectFileFetchResult<()> {
        let mut files = self.files.write().map_err(|err| {
            ProjectFileFetchError::transport(std::io::Error::other(err.to_string()))
        })?;
        files.insert(url.into(), bytes.into());
        Ok(())
    }
}

#[async_trait]
impl ProjectFileFetcher for InMemoryProjectFileFetcher {
    async fn fetch(&self, url: &FileUrl) -> ProjectFileFetchResult<Vec<u8>> {
        let files = self.files.read().map_err(|err| {
            ProjectFileFetchError::transport(std::io::Error::other(err.to_string()))
        })?;
        files.get(url.as_str()).cloned().ok_or_else(|| {
            ProjectFileFetchError::transport(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                url.as_str().to_owned(),
            ))
        })
    }
}
