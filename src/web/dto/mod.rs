//! View models passed into page templates.

pub mod create_form;
pub mod health;
pub mod link_row;
pub mod stats_view;

pub use create_form::{CreateFormView, CreateLinkForm};
pub use health::{CheckStatus, HealthChecks, HealthResponse};
pub use link_row::LinkRow;
pub use stats_view::StatsView;
