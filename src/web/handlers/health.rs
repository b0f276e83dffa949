//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::state::AppState;
use crate::web::dto::{CheckStatus, HealthChecks, HealthResponse};

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Backend reachable
/// - **503 Service Unavailable**: Backend unreachable or erroring
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "backend": {
///       "status": "ok",
///       "message": "Reachable, 12 links"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let backend = check_backend(&state).await;
    let healthy = backend.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { backend },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Probes the backend through the list call.
async fn check_backend(state: &AppState) -> CheckStatus {
    match state.links_api.list_links().await {
        Ok(links) => CheckStatus::ok(format!("Reachable, {} links", links.len())),
        Err(e) => CheckStatus::error(format!("Backend check failed: {e}")),
    }
}
