//! Shared world state for parse endpoint BDD scenarios.

use std::sync::Arc;

use axum::{Router, body::Body, http::Request};
use http_body_util::BodyExt;
use mpp_service::{
    http::router,
    schedule::{
        adapters::{UniversalProjectReader, memory::InMemoryProjectFileFetcher},
        services::ScheduleParsingService,
    },
};
use rstest::fixture;
use tower::ServiceExt;

/// Captured HTTP response.
pub struct CapturedResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Scenario world for parse endpoint behaviour tests.
pub struct ParseWorld {
    pub fetcher: InMemoryProjectFileFetcher,
    pub app: Router,
    pub last_response: Option<CapturedResponse>,
}

impl ParseWorld {
    /// Creates a world with no published files.
    #[must_use]
    pub fn new() -> Self {
        let fetcher = InMemoryProjectFileFetcher::new();
        let service = ScheduleParsingService::new(
            Arc::new(fetcher.clone()),
            Arc::new(UniversalProjectReader::new()),
        );
        let app = router(service, None);
        Self {
            fetcher,
            app,
            last_response: None,
        }
    }

    /// Sends a `POST /parse` request and records the response.
    pub fn post_parse(&mut self, body: String) -> Result<(), eyre::Report> {
        let request = Request::builder()
            .method("POST")
            .uri("/parse")
            .body(Body::from(body))?;
        let app = self.app.clone();
        let captured = run_async(async move {
            let response = app.oneshot(request).await?;
            let status = response.status().as_u16();
            let body = response.into_body().collect().await?.to_bytes().to_vec();
            Ok::<_, eyre::Report>(CapturedResponse { status, body })
        })?;
        self.last_response = Some(captured);
        Ok(())
    }

    /// Returns the most recent response.
    pub fn response(&self) -> Result<&CapturedResponse, eyre::Report> {
        self.last_response
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing response in scenario world"))
    }
}

impl Default for ParseWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ParseWorld {
    ParseWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
