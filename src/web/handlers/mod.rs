//! Page rendering handlers for the dashboard.

mod dashboard;
mod health;
mod links;
mod not_found;
mod stats;

pub use dashboard::dashboard_handler;
pub use health::health_handler;
pub use links::{create_link_handler, delete_link_handler};
pub use not_found::not_found_handler;
pub use stats::stats_handler;
