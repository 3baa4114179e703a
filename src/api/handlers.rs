use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;

use crate::data_models::TravelQuery;
use crate::error::RelayError;
use crate::relay::Relay;

use super::models::{
    ErrorResponse, ExploreResponse, HealthResponse, SearchRequest, SearchResponse,
};

const SEARCH_FAILED: &str = "Failed to process travel search";
const EXPLORE_FAILED: &str = "Failed to fetch popular destinations";

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    /// Validation failures become 400s with their static message; any upstream
    /// failure becomes a 500 under `summary`, carrying the upstream message.
    fn from_relay(err: RelayError, summary: &str) -> ApiError {
        if err.is_client_error() {
            return ApiError {
                status: StatusCode::BAD_REQUEST,
                body: ErrorResponse {
                    error: err.to_string(),
                    message: None,
                },
            };
        }

        tracing::error!("{summary}: {err}");
        ApiError {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorResponse {
                error: summary.to_string(),
                message: Some(err.upstream_message()),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
    })
}

pub async fn search_handler(
    State(relay): State<Arc<Relay>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let start = Instant::now();

    let summary = relay
        .search(TravelQuery::from(request))
        .await
        .map_err(|e| ApiError::from_relay(e, SEARCH_FAILED))?;

    tracing::info!(
        references = summary.references.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "flight search done"
    );

    Ok(Json(SearchResponse::from(summary)))
}

pub async fn explore_handler(
    State(relay): State<Arc<Relay>>,
) -> Result<Json<ExploreResponse>, ApiError> {
    let start = Instant::now();

    let digest = relay
        .explore()
        .await
        .map_err(|e| ApiError::from_relay(e, EXPLORE_FAILED))?;

    tracing::info!(
        references = digest.references.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "explore done"
    );

    Ok(Json(ExploreResponse::from(digest)))
}
