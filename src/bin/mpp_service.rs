//! Serves the project file parsing API.
//!
//! Usage:
//!
//! ```text
//! mpp_service [--bind 0.0.0.0:8080] [--fetch-timeout-secs 60]
//!             [--max-file-bytes N] [--log-level info]
//! ```
//!
//! Every flag can also be supplied through its `MPP_SERVICE_*` environment
//! variable. A representative request is:
//!
//! ```text
//! curl -X POST --data 'https://example.com/plan.xml' http://localhost:8080/parse
//! ```

use clap::Parser;
use mpp_service::{
    config::ServiceConfig,
    http::router,
    schedule::{
        adapters::{HttpProjectFileFetcher, UniversalProjectReader},
        services::ScheduleParsingService,
    },
    telemetry::init_tracing,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while starting or running the server.
#[derive(Debug, Error)]
enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] mpp_service::config::ConfigError),
    #[error("failed to build HTTP fetcher: {0}")]
    Fetcher(#[from] mpp_service::schedule::ports::ProjectFileFetchError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server terminated: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = ServiceConfig::parse();
    init_tracing(&config.log_level);
    run(&config).await.map_err(Into::into)
}

async fn run(config: &ServiceConfig) -> Result<(), ServerError> {
    let settings = config.fetcher_settings()?;
    let fetcher = HttpProjectFileFetcher::new(&settings)?;
    let service = ScheduleParsingService::new(
        Arc::new(fetcher),
        Arc::new(UniversalProjectReader::new()),
    );

    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind,
            source,
        })?;
    info!(addr = %config.bind, "mpp service listening");

    axum::serve(listener, router(service, config.upload_limit()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("mpp service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
