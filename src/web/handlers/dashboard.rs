//! Link list page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use chrono::Utc;

use crate::domain::Link;
use crate::state::AppState;
use crate::web::dto::{CreateFormView, LinkRow};

/// Template for the link list page.
///
/// Renders `templates/dashboard.html` with:
/// - The creation form (open or closed, with sticky values after a failure)
/// - The link table, or the empty-state message, or the fetch-failure message
/// - An optional banner for a failed delete
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub rows: Vec<LinkRow>,
    pub list_error: Option<String>,
    pub form: CreateFormView,
    pub banner: Option<String>,
}

/// Renders the link list page.
///
/// # Endpoint
///
/// `GET /`
///
/// Fetches the full collection from the backend on every request; a fetch
/// failure degrades to an inline message rather than an error page.
pub async fn dashboard_handler(State(state): State<AppState>) -> DashboardTemplate {
    dashboard_page(&state, CreateFormView::closed(), None).await
}

/// Builds the list page in a given form/banner state.
///
/// Shared with the create and delete handlers, which re-render this page to
/// surface their outcome.
pub(crate) async fn dashboard_page(
    state: &AppState,
    form: CreateFormView,
    banner: Option<String>,
) -> DashboardTemplate {
    match state.links_api.list_links().await {
        Ok(links) => DashboardTemplate {
            rows: build_rows(state, &links),
            list_error: None,
            form,
            banner,
        },
        Err(e) => {
            tracing::warn!("Failed to fetch links: {e}");
            DashboardTemplate {
                rows: Vec::new(),
                list_error: Some("Failed to fetch links".to_string()),
                form,
                banner,
            }
        }
    }
}

/// Maps the fetched collection onto table rows.
pub(crate) fn build_rows(state: &AppState, links: &[Link]) -> Vec<LinkRow> {
    let now = Utc::now();
    links
        .iter()
        .map(|link| LinkRow::build(link, state, now))
        .collect()
}
