//! # Shortlink Dashboard
//!
//! A web dashboard for a URL-shortening backend, built with Axum and Askama.
//!
//! This service is a presentation layer only: short-code generation, redirect
//! handling, and click counting all live in an external backend reached over
//! HTTP. The dashboard renders server-side HTML pages for link management and
//! per-link statistics, and issues REST calls through a typed API client.
//!
//! ## Architecture
//!
//! - **Domain** ([`domain`]) - The `Link` record as received from the backend
//! - **Client** ([`client`]) - `LinksApi` trait and its reqwest implementation
//! - **Web** ([`web`]) - Askama page handlers, view models, and routes
//! - **Utils** ([`utils`]) - Presentation helpers (relative time, truncation)
//!
//! ## Quick Start
//!
//! ```bash
//! # Point the dashboard at the shortener backend
//! export BACKEND_URL="http://localhost:5000"
//!
//! # Start the dashboard
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See the [`config`] module for available options.

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod utils;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for integration tests.
pub mod prelude {
    pub use crate::client::{ApiError, CreateLinkRequest, HttpLinksApi, LinksApi};
    pub use crate::domain::Link;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
