//! Presentation helpers consumed by the CLI and API renderers.
//!
//! The aggregator never calls these; they exist so every surface formats
//! article metadata the same way.

use chrono::{DateTime, FixedOffset, Utc};

/// Placeholder shown when an article carries no image.
pub const DEFAULT_IMAGE_URL: &str = "https://www.tgsin.in/images/joomlart/demo/default.jpg";

const WORDS_PER_MINUTE: usize = 150;

/// Parses the timestamp shapes the three providers emit: RFC 3339
/// (`2024-01-05T10:00:00Z`, `...-05:00`) and the NYT search form with a
/// colon-less offset (`2024-01-05T10:00:00+0000`).
fn parse_published_at(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
        .ok()
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Formats `published_at` relative to `now` ("5 minutes ago", "1 day ago").
///
/// Months are 30 days and years are 12 months. Timestamps in the future read
/// as "0 seconds ago". Input that does not parse is returned unchanged.
#[must_use]
pub fn format_relative_time(published_at: &str, now: DateTime<Utc>) -> String {
    let Some(date) = parse_published_at(published_at) else {
        return published_at.to_string();
    };

    let seconds = (now - date.with_timezone(&Utc)).num_seconds().max(0);
    if seconds < 60 {
        return format!("{seconds} seconds ago");
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = hours / 24;
    if days < 30 {
        return plural(days, "day");
    }

    let months = days / 30;
    if months < 12 {
        return plural(months, "month");
    }

    plural(months / 12, "year")
}

/// Estimates reading time at 150 words per minute, never less than one minute.
#[must_use]
pub fn calculate_read_time(content: Option<&str>) -> String {
    let words = content.map_or(0, |c| c.split_whitespace().count());
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn seconds_are_always_plural() {
        assert_eq!(
            format_relative_time("2024-06-01T11:59:15Z", now()),
            "45 seconds ago"
        );
    }

    #[test]
    fn singular_and_plural_units() {
        assert_eq!(
            format_relative_time("2024-06-01T11:59:00Z", now()),
            "1 minute ago"
        );
        assert_eq!(
            format_relative_time("2024-06-01T09:00:00Z", now()),
            "3 hours ago"
        );
        assert_eq!(
            format_relative_time("2024-05-31T12:00:00Z", now()),
            "1 day ago"
        );
    }

    #[test]
    fn months_and_years_use_thirty_day_months() {
        assert_eq!(
            format_relative_time("2024-04-01T12:00:00Z", now()),
            "2 months ago"
        );
        assert_eq!(
            format_relative_time("2022-01-01T12:00:00Z", now()),
            "2 years ago"
        );
    }

    #[test]
    fn accepts_nytimes_offset_without_colon() {
        assert_eq!(
            format_relative_time("2024-06-01T07:00:00-0400", now()),
            "1 hour ago"
        );
    }

    #[test]
    fn future_timestamps_clamp_to_zero() {
        assert_eq!(
            format_relative_time("2024-06-02T12:00:00Z", now()),
            "0 seconds ago"
        );
    }

    #[test]
    fn unparseable_input_passes_through() {
        assert_eq!(format_relative_time("yesterday", now()), "yesterday");
    }

    #[test]
    fn read_time_rounds_up_with_one_minute_floor() {
        assert_eq!(calculate_read_time(None), "1 min read");
        assert_eq!(calculate_read_time(Some("   ")), "1 min read");
        assert_eq!(calculate_read_time(Some("word ".repeat(150).as_str())), "1 min read");
        assert_eq!(calculate_read_time(Some("word ".repeat(151).as_str())), "2 min read");
    }
}
