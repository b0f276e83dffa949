//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    create_link_handler, dashboard_handler, delete_link_handler, stats_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Dashboard page routes.
///
/// # Endpoints
///
/// - `GET  /` - Link list page with creation form
/// - `POST /links` - Create a link from the form
/// - `POST /links/{code}/delete` - Delete a link
/// - `GET  /code/{code}` - Statistics page for a specific link
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/links", post(create_link_handler))
        .route("/links/{code}/delete", post(delete_link_handler))
        .route("/code/{code}", get(stats_handler))
}
