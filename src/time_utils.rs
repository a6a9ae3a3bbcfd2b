// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Parse a `YYYY-MM-DD` calendar date (used as a clap value parser).
pub fn parse_day(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("expected a date in YYYY-MM-DD form, got '{}': {}", s, e))
}

/// Unix timestamp (seconds) of midnight UTC on `day`.
pub fn day_start_epoch_secs(day: NaiveDate) -> i64 {
    day.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Parse a source-reported instant with strict RFC 3339 rules.
pub fn parse_rfc3339_utc(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}
