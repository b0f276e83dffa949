//! Human-readable relative timestamps for the link table.

use chrono::{DateTime, Utc};

/// Formats how long ago `at` was relative to `now`, e.g. "3 minutes ago".
///
/// Timestamps at or after `now` (clock skew between dashboard and backend)
/// render as "just now".
pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let seconds = elapsed.num_seconds();

    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = elapsed.num_days();
    if days < 30 {
        return plural(days, "day");
    }

    // Months run on a 30-day approximation, so the month branch must cover
    // everything short of a full year or ages of 360..365 days would fall
    // through with zero years.
    if days < 365 {
        return plural(days / 30, "month");
    }

    plural(days / 365, "year")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Formats an absolute timestamp for the stats page, e.g.
/// "Apr 2, 2025, 3:04:05 PM".
pub fn format_absolute(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 2, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_just_now_boundaries() {
        assert_eq!(format_relative(now(), now()), "just now");
        assert_eq!(
            format_relative(now() - Duration::seconds(59), now()),
            "just now"
        );
        // Future timestamp from clock skew.
        assert_eq!(
            format_relative(now() + Duration::seconds(30), now()),
            "just now"
        );
    }

    #[test]
    fn test_minutes_hours_days() {
        assert_eq!(
            format_relative(now() - Duration::seconds(60), now()),
            "1 minute ago"
        );
        assert_eq!(
            format_relative(now() - Duration::minutes(45), now()),
            "45 minutes ago"
        );
        assert_eq!(
            format_relative(now() - Duration::hours(1), now()),
            "1 hour ago"
        );
        assert_eq!(
            format_relative(now() - Duration::hours(23), now()),
            "23 hours ago"
        );
        assert_eq!(
            format_relative(now() - Duration::days(1), now()),
            "1 day ago"
        );
        assert_eq!(
            format_relative(now() - Duration::days(29), now()),
            "29 days ago"
        );
    }

    #[test]
    fn test_months_and_years() {
        assert_eq!(
            format_relative(now() - Duration::days(31), now()),
            "1 month ago"
        );
        assert_eq!(
            format_relative(now() - Duration::days(200), now()),
            "6 months ago"
        );
        assert_eq!(
            format_relative(now() - Duration::days(400), now()),
            "1 year ago"
        );
        assert_eq!(
            format_relative(now() - Duration::days(365), now()),
            "1 year ago"
        );
        assert_eq!(
            format_relative(now() - Duration::days(800), now()),
            "2 years ago"
        );
    }

    #[test]
    fn test_almost_a_year_stays_in_months() {
        // 360..365 days divide to 12 "months" but zero whole years; these
        // ages must still render as months, never "0 years ago".
        for days in [360, 362, 364] {
            let out = format_relative(now() - Duration::days(days), now());
            assert_eq!(out, "12 months ago", "at {days} days");
        }
    }

    #[test]
    fn test_format_absolute() {
        let at = Utc.with_ymd_and_hms(2025, 4, 2, 15, 4, 5).unwrap();
        assert_eq!(format_absolute(at), "Apr 2, 2025, 3:04:05 PM");
    }
}
