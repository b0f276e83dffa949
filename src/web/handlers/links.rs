//! Create and delete handlers for the link list page.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};

use crate::client::{ApiError, CreateLinkRequest};
use crate::domain::Link;
use crate::state::AppState;
use crate::web::dto::{CreateFormView, CreateLinkForm};
use crate::web::handlers::dashboard::{DashboardTemplate, build_rows, dashboard_page};

/// Handles the creation form submit.
///
/// # Endpoint
///
/// `POST /links` (form-encoded `url`, `short_code`)
///
/// On success the list page renders with the returned record first and the
/// form closed. On a 409 conflict, or on any other failure, the page renders
/// with the form open, a message, and the entered values intact.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Form(form): Form<CreateLinkForm>,
) -> DashboardTemplate {
    if let Err(message) = form.check() {
        return dashboard_page(&state, CreateFormView::reopened(&form, message), None).await;
    }

    let request = CreateLinkRequest {
        url: form.url.trim().to_string(),
        short_code: form.custom_code(),
    };

    match state.links_api.create_link(request).await {
        Ok(link) => created_page(&state, link).await,
        Err(ApiError::Conflict) => {
            dashboard_page(
                &state,
                CreateFormView::reopened(&form, "Short code already exists"),
                None,
            )
            .await
        }
        Err(e) => {
            tracing::warn!("Failed to create link: {e}");
            dashboard_page(
                &state,
                CreateFormView::reopened(&form, "Failed to create link"),
                None,
            )
            .await
        }
    }
}

/// Builds the list page right after a successful create.
///
/// The created record renders first regardless of backend list order,
/// deduplicated against the re-fetched collection by code. A failed re-fetch
/// here still shows the created record rather than an error.
async fn created_page(state: &AppState, created: Link) -> DashboardTemplate {
    let mut links = state.links_api.list_links().await.unwrap_or_default();
    links.retain(|link| link.short_code != created.short_code);
    links.insert(0, created);

    DashboardTemplate {
        rows: build_rows(state, &links),
        list_error: None,
        form: CreateFormView::closed(),
        banner: None,
    }
}

/// Handles the per-row delete form.
///
/// # Endpoint
///
/// `POST /links/{code}/delete`
///
/// The browser-side confirmation dialog has already run by the time this is
/// reached. Success redirects back to the list; failure re-renders the list
/// with a banner.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Response {
    match state.links_api.delete_link(&code).await {
        Ok(()) => Redirect::to("/").into_response(),
        Err(e) => {
            tracing::warn!(code = %code, "Failed to delete link: {e}");
            dashboard_page(
                &state,
                CreateFormView::closed(),
                Some("Failed to delete link".to_string()),
            )
            .await
            .into_response()
        }
    }
}
