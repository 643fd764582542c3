// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting and parsing.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse a forecast-feed timestamp (`YYYY-MM-DD HH:MM:SS`, local civil time).
///
/// The weather feed does not carry a UTC offset, so the result stays naive;
/// callers compare it against a naive "now" in the same local frame.
pub fn parse_forecast_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%d %H:%M:%S").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_forecast_time() {
        let parsed = parse_forecast_time("2026-08-06 18:00:00").expect("should parse");
        assert_eq!(parsed.year(), 2026);
        assert_eq!(parsed.hour(), 18);
    }

    #[test]
    fn test_parse_forecast_time_rejects_garbage() {
        assert!(parse_forecast_time("today at noon").is_none());
        assert!(parse_forecast_time("").is_none());
    }
}
