//! HTTP surface for the MPP service.
//!
//! Routes:
//!
//! - `POST /parse`: body is a project file URL; responds with the task list
//! - `POST /parse/file`: body is the project file itself
//! - `GET /health`: liveness probe
//!
//! Failures are reported as plain text. Missing input yields `400`, every
//! other failure yields `500` with an `Error parsing file: ` prefix. That
//! includes uploads larger than the configured limit.

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::{HealthResponse, health, parse_file, parse_url};

use crate::schedule::{
    ports::{ProjectFileFetcher, ProjectReader},
    services::ScheduleParsingService,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;

/// Shared, read-only dependencies for request handlers.
pub struct AppState<F, R>
where
    F: ProjectFileFetcher,
    R: ProjectReader,
{
    /// Parsing service used by every route.
    pub service: Arc<ScheduleParsingService<F, R>>,
}

impl<F, R> Clone for AppState<F, R>
where
    F: ProjectFileFetcher,
    R: ProjectReader,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

/// Builds the service router.
///
/// `max_upload_bytes` caps the body accepted by `POST /parse/file`; `None`
/// accepts uploads of any size.
pub fn router<F, R>(
    service: ScheduleParsingService<F, R>,
    max_upload_bytes: Option<usize>,
) -> Router
where
    F: ProjectFileFetcher + 'static,
    R: ProjectReader + 'static,
{
    let state = AppState {
        service: Arc::new(service),
    };
    let upload_limit =
        max_upload_bytes.map_or_else(DefaultBodyLimit::disable, DefaultBodyLimit::max);
    Router::new()
        .route("/parse", post(parse_url::<F, R>))
        .route("/parse/file", post(parse_file::<F, R>).layer(upload_limit))
        .route("/health", get(health))
        .with_state(state)
}
