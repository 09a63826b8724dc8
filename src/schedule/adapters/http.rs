//! HTTP(S) project file fetcher backed by `reqwest`.

use crate::schedule::{
    domain::FileUrl,
    ports::{ProjectFileFetchError, ProjectFileFetchResult, ProjectFileFetcher},
};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

/// Connection settings for [`HttpProjectFileFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpFetcherSettings {
    timeout: Duration,
    max_file_bytes: Option<u64>,
    user_agent: String,
}

impl HttpFetcherSettings {
    /// Creates settings with the given whole-request timeout and no size
    /// limit.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            max_file_bytes: None,
            user_agent: concat!("mpp-service/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }

    /// Caps the number of bytes accepted from a single download.
    #[must_use]
    pub const fn with_max_file_bytes(mut self, limit: u64) -> Self {
        self.max_file_bytes = Some(limit);
        self
    }

    /// Overrides the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the whole-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the optional download size limit.
    #[must_use]
    pub const fn max_file_bytes(&self) -> Option<u64> {
        self.max_file_bytes
    }
}

/// Fetches project files over HTTP or HTTPS.
#[derive(Debug, Clone)]
pub struct HttpProjectFileFetcher {
    client: Client,
    max_file_bytes: Option<u64>,
}

impl HttpProjectFileFetcher {
    /// Builds a fetcher with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectFileFetchError::Transport`] when the TLS backend or
    /// client cannot be initialised.
    pub fn new(settings: &HttpFetcherSettings) -> ProjectFileFetchResult<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(ProjectFileFetchError::transport)?;
        Ok(Self {
            client,
            max_file_bytes: settings.max_file_bytes,
        })
    }

    fn parse_url(url: &FileUrl) -> ProjectFileFetchResult<Url> {
        let parsed = Url::parse(url.as_str()).map_err(|err| ProjectFileFetchError::InvalidUrl {
            url: url.as_str().to_owned(),
            reason: err.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(ProjectFileFetchError::InvalidUrl {
                url: url.as_str().to_owned(),
                reason: format!("unsupported scheme '{other}'"),
            }),
        }
    }

    fn check_limit(&self, url: &FileUrl, received: u64) -> ProjectFileFetchResult<()> {
        match self.max_file_bytes {
            Some(limit) if received > limit => Err(ProjectFileFetchError::TooLarge {
                url: url.as_str().to_owned(),
                limit,
            }),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl ProjectFileFetcher for HttpProjectFileFetcher {
    async fn fetch(&self, url: &FileUrl) -> ProjectFileFetchResult<Vec<u8>> {
        let target = Self::parse_url(url)?;
        let mut response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(ProjectFileFetchError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProjectFileFetchError::Status {
                url: url.as_str().to_owned(),
                status: status.as_u16(),
            });
        }

        if let Some(declared) = response.content_length() {
            self.check_limit(url, declared)?;
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(ProjectFileFetchError::transport)?
        {
            body.extend_from_slice(&chunk);
            self.check_limit(url, u64::try_from(body.len()).unwrap_or(u64::MAX))?;
        }

        debug!(url = %url, bytes = body.len(), "downloaded project file");
        Ok(body)
    }
}
