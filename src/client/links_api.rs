//! Backend API trait and wire types.

use crate::domain::Link;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Request body for creating a link.
///
/// `short_code` is omitted from the JSON entirely when the user leaves the
/// custom code blank, so the backend generates one.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
}

/// Errors returned by the backend API client.
///
/// HTTP status is surfaced to callers for interpretation: handlers
/// distinguish a duplicate-code conflict from a missing record and from
/// everything else.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 409 — the requested short code is taken.
    #[error("short code already exists")]
    Conflict,

    /// The backend answered 404 — no link matches the code.
    #[error("link not found")]
    NotFound,

    /// Any other non-success status.
    #[error("backend returned {0}")]
    Status(StatusCode),

    /// Connection, timeout, or body decoding failure.
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client interface for the shortener backend.
///
/// # Backend surface
///
/// - `GET /links` - full collection
/// - `POST /links` - create, 409 on duplicate code
/// - `GET /links/{code}` - single record, 404 when missing
/// - `DELETE /links/{code}` - deletion confirmation
///
/// # Implementations
///
/// - [`crate::client::HttpLinksApi`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinksApi: Send + Sync {
    /// Fetches the full link collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] or [`ApiError::Status`] when the
    /// backend cannot be reached or answers with a non-success status.
    async fn list_links(&self) -> Result<Vec<Link>, ApiError>;

    /// Creates a new link.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Conflict`] when the requested short code exists.
    async fn create_link(&self, request: CreateLinkRequest) -> Result<Link, ApiError>;

    /// Fetches a single link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no link matches the code.
    async fn get_link(&self, code: &str) -> Result<Link, ApiError>;

    /// Deletes a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when no link matches the code.
    async fn delete_link(&self, code: &str) -> Result<(), ApiError>;
}
