//! View model for the statistics page.

use crate::domain::Link;
use crate::state::AppState;
use crate::utils::relative_time::format_absolute;

/// Data rendered on the per-link statistics page.
#[derive(Debug, Clone)]
pub struct StatsView {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_display: String,
    /// Absolute last-click timestamp, or "Never" when the link was never
    /// visited.
    pub last_clicked_display: String,
}

impl StatsView {
    pub fn build(link: &Link, state: &AppState) -> Self {
        let last_clicked_display = match link.last_clicked_at {
            Some(at) => format_absolute(at),
            None => "Never".to_string(),
        };

        Self {
            short_code: link.short_code.clone(),
            short_url: link.short_url(&state.short_base_url),
            original_url: link.original_url.clone(),
            clicks: link.clicks,
            created_display: format_absolute(link.created_at),
            last_clicked_display,
        }
    }
}
