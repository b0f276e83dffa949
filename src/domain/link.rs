//! Link record as owned and serialized by the shortener backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shortened link with its click analytics.
///
/// Received in full from the backend (camelCase wire format); the dashboard
/// never mutates clicks or timestamps, it only reflects backend state.
/// `short_code` uniquely identifies a link within the displayed collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub short_code: String,
    pub original_url: String,
    /// Monotonically non-decreasing click counter, owned by the backend.
    #[serde(default)]
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_clicked_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Builds the full short URL for this link against a base origin.
    pub fn short_url(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.short_code)
    }
}
