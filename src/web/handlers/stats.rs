//! Link statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use crate::client::ApiError;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::dto::StatsView;

/// Template for the link statistics page.
///
/// Renders `templates/stats.html` with the three metric cards (total clicks,
/// last clicked, created at) plus the original and short URLs.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub view: StatsView,
}

/// Renders the statistics page for a specific link.
///
/// # Endpoint
///
/// `GET /code/{code}`
///
/// A missing record renders the error page at 404; any other fetch failure
/// renders it at 502. Both carry a link back to the dashboard.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatsTemplate, AppError> {
    match state.links_api.get_link(&code).await {
        Ok(link) => Ok(StatsTemplate {
            view: StatsView::build(&link, &state),
        }),
        Err(ApiError::NotFound) => Err(AppError::not_found("Link not found")),
        Err(e) => {
            tracing::warn!(code = %code, "Failed to fetch stats: {e}");
            Err(AppError::bad_gateway("Failed to fetch stats"))
        }
    }
}
