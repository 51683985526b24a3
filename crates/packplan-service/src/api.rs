//! Request handling for the pack calculator API.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use packplan_core::{Distribution, PackSize};

/// Requests above this quantity are rejected before reaching the solver;
/// the solver itself carries no ceiling.
pub const MAX_ITEMS: u64 = 1_000_000;

/// Shared immutable state: the validated catalog snapshot taken at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pack_sizes: Arc<Vec<PackSize>>,
}

impl AppState {
    pub fn new(pack_sizes: Vec<PackSize>) -> Self {
        Self {
            pack_sizes: Arc::new(pack_sizes),
        }
    }
}

/// JSON payload for `POST /calculate`.
///
/// `items` is signed so that negative quantities deserialize and are
/// rejected with a clear validation message instead of a decode error.
#[derive(Debug, Deserialize)]
pub struct CalculationRequest {
    pub items: i64,
}

/// JSON response for `POST /calculate`.
#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    pub pack_distribution: Distribution,
    pub total_items: u64,
}

/// Builds the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

enum ApiError {
    /// Request failed validation; surfaced to the client as its own fault.
    BadRequest(String),
    /// The solver reported a failure for an accepted request.
    Conflict(String),
    /// The solver task could not be joined.
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message).into_response(),
            ApiError::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}

fn validate_request(request: &CalculationRequest) -> Result<u64, ApiError> {
    if request.items <= 0 {
        return Err(ApiError::BadRequest(
            "items must be a positive integer".to_string(),
        ));
    }
    let items = request.items as u64;
    if items > MAX_ITEMS {
        return Err(ApiError::BadRequest(format!(
            "items must be at most {MAX_ITEMS}"
        )));
    }
    Ok(items)
}

async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<CalculationRequest>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let items = validate_request(&request).inspect_err(|_| {
        warn!(items = request.items, "rejected calculation request");
    })?;

    // The DP is pure CPU work; keep it off the async workers.
    let sizes = Arc::clone(&state.pack_sizes);
    let distribution = tokio::task::spawn_blocking(move || packplan_solver::solve(items, &sizes))
        .await
        .map_err(|_| ApiError::Internal)?
        .map_err(|err| {
            warn!(items, error = %err, "pack calculation failed");
            ApiError::Conflict(err.to_string())
        })?;

    // The shipped total is derived here; the solver's contract stays
    // distribution-only.
    let total_items = distribution.total_items();
    info!(
        items,
        total_items,
        pack_count = distribution.pack_count(),
        "calculation complete"
    );
    Ok(Json(CalculationResponse {
        pack_distribution: distribution,
        total_items,
    }))
}
