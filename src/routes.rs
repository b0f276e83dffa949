//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                     - Link list page with creation form
//! - `POST /links`                - Create a link (form post)
//! - `POST /links/{code}/delete`  - Delete a link (form post)
//! - `GET  /code/{code}`          - Statistics page for a specific link
//! - `GET  /health`               - Health check: backend reachability (JSON)
//! - `/static/*`                  - Stylesheet and dashboard script
//! - anything else                - Not-found page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::middleware::trace;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::{health_handler, not_found_handler};
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware,
/// without path normalization. Used directly by integration tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::page_routes())
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(trace::layer())
}

/// Constructs the full application service with trailing-slash trimming.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
