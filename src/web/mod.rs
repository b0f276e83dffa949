//! Web layer: server-rendered dashboard pages.
//!
//! Uses Askama templates for server-side rendering; every page re-fetches
//! its data from the backend through the API client.
//!
//! # Modules
//!
//! - [`handlers`] - Page rendering handlers
//! - [`dto`] - View models passed into templates
//! - [`routes`] - Page route configuration

pub mod dto;
pub mod handlers;
pub mod routes;
