//! Request handlers.
//!
//! Bodies are extracted as raw bytes so that oversized or non-UTF-8 input
//! reaches [`ApiError`] instead of axum's own rejection responses.

use super::{AppState, error::ApiError};
use crate::schedule::{
    domain::ScheduleTask,
    ports::{ProjectFileFetcher, ProjectReader},
};
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};
use serde::{Deserialize, Serialize};
use tracing::{Instrument, info_span};
use uuid::Uuid;

/// `POST /parse`: fetches the URL given as the request body and returns its
/// tasks.
///
/// Invalid UTF-8 in the body is replaced rather than rejected, so such a URL
/// fails when it is fetched.
///
/// # Errors
///
/// Returns [`ApiError::MissingInput`] for an empty body and
/// [`ApiError::Parse`] for any body, fetch or decode failure.
pub async fn parse_url<F, R>(
    State(state): State<AppState<F, R>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Vec<ScheduleTask>>, ApiError>
where
    F: ProjectFileFetcher,
    R: ProjectReader + 'static,
{
    let span = info_span!("request", request_id = %Uuid::new_v4(), route = "/parse");
    async move {
        let payload = body?;
        let raw_url = String::from_utf8_lossy(&payload);
        let tasks = state.service.parse_url(&raw_url).await?;
        Ok::<_, ApiError>(Json(tasks))
    }
    .instrument(span)
    .await
}

/// `POST /parse/file`: decodes the uploaded file and returns its tasks.
///
/// # Errors
///
/// Returns [`ApiError::MissingInput`] for an empty body and
/// [`ApiError::Parse`] when the upload exceeds the size limit or cannot be
/// decoded.
pub async fn parse_file<F, R>(
    State(state): State<AppState<F, R>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Vec<ScheduleTask>>, ApiError>
where
    F: ProjectFileFetcher,
    R: ProjectReader + 'static,
{
    let span = info_span!("request", request_id = %Uuid::new_v4(), route = "/parse/file");
    async move {
        let payload = body?;
        let tasks = state.service.parse_bytes(Vec::from(payload)).await?;
        Ok::<_, ApiError>(Json(tasks))
    }
    .instrument(span)
    .await
}

/// Liveness payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the process is serving.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// `GET /health`: reports that the service is up.
#[expect(clippy::unused_async, reason = "axum routes take async handlers")]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}
