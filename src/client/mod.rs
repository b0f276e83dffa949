//! Typed client for the shortener backend REST API.
//!
//! The [`LinksApi`] trait is the seam between page handlers and the backend;
//! [`HttpLinksApi`] is the reqwest-backed implementation used in production.

pub mod http;
pub mod links_api;

pub use http::HttpLinksApi;
pub use links_api::{ApiError, CreateLinkRequest, LinksApi};
