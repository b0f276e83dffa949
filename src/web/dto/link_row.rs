//! Row view model for the link table.

use chrono::{DateTime, Utc};

use crate::domain::Link;
use crate::state::AppState;
use crate::utils::relative_time::format_relative;
use crate::utils::truncate::truncate_with_ellipsis;

/// Characters of the original URL shown in the table cell; the full URL
/// stays available in the cell's title attribute.
const URL_DISPLAY_MAX: usize = 60;

/// One rendered table row.
#[derive(Debug, Clone)]
pub struct LinkRow {
    pub short_code: String,
    /// Full short URL, used by the copy control and the open-in-new-tab link.
    pub short_url: String,
    pub original_url: String,
    pub original_url_display: String,
    pub clicks: i64,
    pub created_ago: String,
    pub stats_href: String,
}

impl LinkRow {
    pub fn build(link: &Link, state: &AppState, now: DateTime<Utc>) -> Self {
        Self {
            short_code: link.short_code.clone(),
            short_url: link.short_url(&state.short_base_url),
            original_url: link.original_url.clone(),
            original_url_display: truncate_with_ellipsis(&link.original_url, URL_DISPLAY_MAX),
            clicks: link.clicks,
            created_ago: format_relative(link.created_at, now),
            stats_href: format!("/code/{}", link.short_code),
        }
    }
}
