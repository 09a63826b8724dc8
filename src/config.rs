//! Process configuration for the MPP service binary.

use crate::schedule::adapters::HttpFetcherSettings;
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

/// Errors returned while validating configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The fetch timeout must be at least one second.
    #[error("fetch timeout must be greater than zero seconds")]
    ZeroTimeout,

    /// The download size limit must allow at least one byte.
    #[error("maximum file size must be greater than zero bytes")]
    ZeroFileLimit,
}

/// MPP service: parses project files referenced by URL into task lists.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "mpp_service", version, about, long_about = None)]
pub struct ServiceConfig {
    /// Socket address to listen on.
    #[arg(long, env = "MPP_SERVICE_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Whole-request timeout for project file downloads, in seconds.
    #[arg(long, env = "MPP_SERVICE_FETCH_TIMEOUT_SECS", default_value_t = 60)]
    pub fetch_timeout_secs: u64,

    /// Largest project file accepted from a URL, in bytes. Unlimited when
    /// unset.
    #[arg(long, env = "MPP_SERVICE_MAX_FILE_BYTES")]
    pub max_file_bytes: Option<u64>,

    /// Tracing filter directive (trace, debug, info, warn, error, or a full
    /// `EnvFilter` expression).
    #[arg(long, env = "MPP_SERVICE_LOG", default_value = "info")]
    pub log_level: String,
}

impl ServiceConfig {
    /// Checks value ranges that clap cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the timeout or size limit is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if matches!(self.max_file_bytes, Some(0)) {
            return Err(ConfigError::ZeroFileLimit);
        }
        Ok(())
    }

    /// Returns the body limit for `POST /parse/file`, shared with downloads.
    #[must_use]
    pub fn upload_limit(&self) -> Option<usize> {
        self.max_file_bytes
            .map(|limit| usize::try_from(limit).unwrap_or(usize::MAX))
    }

    /// Builds HTTP fetcher settings from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when validation fails.
    pub fn fetcher_settings(&self) -> Result<HttpFetcherSettings, ConfigError> {
        self.validate()?;
        let settings = HttpFetcherSettings::new(Duration::from_secs(self.fetch_timeout_secs));
        Ok(match self.max_file_bytes {
            Some(limit) => settings.with_max_file_bytes(limit),
            None => settings,
        })
    }
}
