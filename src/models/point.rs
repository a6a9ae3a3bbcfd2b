// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Time-series point and its InfluxDB line protocol encoding.

use chrono::{DateTime, TimeZone};
use std::collections::BTreeMap;
use std::fmt;

/// Nanosecond-precision point timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    nanos: i64,
}

impl Timestamp {
    /// The Unix epoch (instant zero).
    pub const EPOCH: Timestamp = Timestamp { nanos: 0 };

    /// Returns `None` if `datetime` is outside the nanosecond range
    /// (roughly years 1677 to 2262).
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Option<Timestamp> {
        datetime
            .timestamp_nanos_opt()
            .map(|nanos| Timestamp { nanos })
    }

    pub fn nanos(&self) -> i64 {
        self.nanos
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Float(f64),
    Integer(i64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Integer(v) => write!(f, "{}i", v),
        }
    }
}

/// One write unit: measurement, tag set, field set, timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub measurement: &'static str,
    pub tags: BTreeMap<&'static str, String>,
    pub fields: BTreeMap<&'static str, FieldValue>,
    pub timestamp: Timestamp,
}

impl Point {
    /// Encode as a single line protocol line (no trailing newline).
    ///
    /// Tags and fields are written in key order. Tags with an empty value
    /// are left out.
    pub fn to_line(&self) -> String {
        let tags = self
            .tags
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| {
                format!(
                    ",{}={}",
                    escape_tags_or_field_key(key),
                    escape_tags_or_field_key(value)
                )
            })
            .collect::<Vec<String>>()
            .join("");
        let fields = self
            .fields
            .iter()
            .map(|(key, value)| format!("{}={}", escape_tags_or_field_key(key), value))
            .collect::<Vec<String>>()
            .join(",");
        format!(
            "{}{} {} {}",
            escape_measurement(self.measurement),
            tags,
            fields,
            self.timestamp.nanos
        )
    }
}

fn escape_tags_or_field_key(value: &str) -> String {
    value
        .replace(',', "\\,")
        .replace('=', "\\=")
        .replace(' ', "\\ ")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
        .replace('\u{0c}', "\\f")
}

fn escape_measurement(value: &str) -> String {
    value.replace(',', "\\,").replace(' ', "\\ ")
}
