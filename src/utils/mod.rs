//! Presentation helpers shared across page view models.

pub mod relative_time;
pub mod truncate;
