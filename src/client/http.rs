//! Reqwest implementation of [`LinksApi`] against a fixed backend origin.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use crate::client::links_api::{ApiError, CreateLinkRequest, LinksApi};
use crate::domain::Link;

/// HTTP client for the shortener backend.
///
/// Holds a shared [`reqwest::Client`] and the backend origin; each call
/// builds the endpoint path under `/links`. No retries and no in-flight
/// de-duplication — callers see exactly one response per request.
pub struct HttpLinksApi {
    client: Client,
    base_url: String,
}

impl HttpLinksApi {
    /// Creates a client for the given backend origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying TLS backend fails to initialize.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn links_url(&self) -> String {
        format!("{}/links", self.base_url)
    }

    fn link_url(&self, code: &str) -> String {
        format!("{}/links/{}", self.base_url, code)
    }
}

/// Maps a non-success status to the caller-facing error taxonomy.
fn status_error(status: StatusCode) -> ApiError {
    match status {
        StatusCode::CONFLICT => ApiError::Conflict,
        StatusCode::NOT_FOUND => ApiError::NotFound,
        other => ApiError::Status(other),
    }
}

/// Passes a response through when successful, otherwise maps its status.
fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(status_error(status))
    }
}

#[async_trait]
impl LinksApi for HttpLinksApi {
    async fn list_links(&self) -> Result<Vec<Link>, ApiError> {
        let response = self.client.get(self.links_url()).send().await?;
        let links = check_status(response)?.json::<Vec<Link>>().await?;

        tracing::debug!(count = links.len(), "Fetched link collection");
        Ok(links)
    }

    async fn create_link(&self, request: CreateLinkRequest) -> Result<Link, ApiError> {
        let response = self
            .client
            .post(self.links_url())
            .json(&request)
            .send()
            .await?;

        let link = check_status(response)?.json::<Link>().await?;

        tracing::info!(code = %link.short_code, "Created link");
        Ok(link)
    }

    async fn get_link(&self, code: &str) -> Result<Link, ApiError> {
        let response = self.client.get(self.link_url(code)).send().await?;
        let link = check_status(response)?.json::<Link>().await?;

        Ok(link)
    }

    async fn delete_link(&self, code: &str) -> Result<(), ApiError> {
        let response = self.client.delete(self.link_url(code)).send().await?;
        check_status(response)?;

        tracing::info!(code = %code, "Deleted link");
        Ok(())
    }
}
