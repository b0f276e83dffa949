//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::client::LinksApi;

/// Application state: the backend client handle and display configuration.
///
/// No mutable state lives here — every page load re-fetches from the backend.
#[derive(Clone)]
pub struct AppState {
    pub links_api: Arc<dyn LinksApi>,
    /// Origin used to build displayed and copied short URLs.
    pub short_base_url: String,
}

impl AppState {
    pub fn new(links_api: Arc<dyn LinksApi>, short_base_url: impl Into<String>) -> Self {
        let short_base_url = short_base_url.into().trim_end_matches('/').to_string();

        Self {
            links_api,
            short_base_url,
        }
    }
}
