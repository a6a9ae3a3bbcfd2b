// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity → point mapping and the per-point write loop.
//!
//! Handles the core workflow for each record:
//! 1. Parse the start date (epoch fallback on failure)
//! 2. Build the `activity` point
//! 3. Write it and wait for the result
//! 4. Log and skip on failure

use crate::db::PointWriter;
use crate::models::{ActivityRecord, FieldValue, Point, Timestamp};
use crate::time_utils::parse_rfc3339_utc;
use std::collections::BTreeMap;

/// Measurement name for activity points.
pub const MEASUREMENT: &str = "activity";

/// Outcome of writing a batch of activities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub attempted: usize,
    pub written: usize,
    /// IDs of activities whose point was rejected, in input order
    pub failed_ids: Vec<u64>,
}

/// Timestamp for an activity's point.
///
/// An unparseable or out-of-range start date yields [`Timestamp::EPOCH`].
pub fn point_timestamp(record: &ActivityRecord) -> Timestamp {
    match parse_rfc3339_utc(&record.start_date) {
        Ok(start) => match Timestamp::from_datetime(&start) {
            Some(ts) => ts,
            None => {
                tracing::warn!(
                    activity_id = record.id,
                    start_date = %record.start_date,
                    "Start date out of range, using epoch"
                );
                Timestamp::EPOCH
            }
        },
        Err(e) => {
            tracing::warn!(
                activity_id = record.id,
                start_date = %record.start_date,
                error = %e,
                "Invalid start date, using epoch"
            );
            Timestamp::EPOCH
        }
    }
}

/// Build the point for one activity.
pub fn activity_to_point(record: &ActivityRecord) -> Point {
    let tags = BTreeMap::from([
        ("type", record.activity_type.clone()),
        ("name", record.name.clone()),
    ]);

    let fields = BTreeMap::from([
        ("distance", FieldValue::Float(record.distance)),
        ("moving_time", FieldValue::Integer(record.moving_time)),
        ("elapsed_time", FieldValue::Integer(record.elapsed_time)),
        ("elevation", FieldValue::Float(record.total_elevation_gain)),
        ("avg_speed", FieldValue::Float(record.average_speed)),
        ("max_speed", FieldValue::Float(record.max_speed)),
        ("avg_watts", FieldValue::Float(record.average_watts)),
        ("kilojoules", FieldValue::Float(record.kilojoules)),
    ]);

    Point {
        measurement: MEASUREMENT,
        tags,
        fields,
        timestamp: point_timestamp(record),
    }
}

/// Write one point per activity, in order, one write at a time.
///
/// A failed write is logged and skipped; it never stops the loop.
pub async fn write_activities<W>(writer: &W, records: &[ActivityRecord]) -> WriteReport
where
    W: PointWriter,
{
    let mut report = WriteReport::default();

    for record in records {
        let point = activity_to_point(record);
        report.attempted += 1;

        match writer.write_point(&point).await {
            Ok(()) => report.written += 1,
            Err(e) => {
                tracing::warn!(activity_id = record.id, error = %e, "Failed to write activity");
                report.failed_ids.push(record.id);
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, Result};
    use async_trait::async_trait;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Records every point and rejects the writes numbered in `fail_on_calls`.
    #[derive(Default)]
    struct RecordingWriter {
        points: Mutex<Vec<Point>>,
        fail_on_calls: Vec<usize>,
    }

    #[async_trait]
    impl PointWriter for RecordingWriter {
        async fn write_point(&self, point: &Point) -> Result<()> {
            self.points.lock().unwrap().push(point.clone());
            let call = self.points.lock().unwrap().len();
            if self.fail_on_calls.contains(&call) {
                return Err(AppError::InfluxDb("HTTP 500: boom".to_string()));
            }
            Ok(())
        }
    }

    /// Shared in-memory sink for formatted log output.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn record(id: u64, activity_type: &str, start_date: &str) -> ActivityRecord {
        ActivityRecord {
            id,
            name: format!("Activity {}", id),
            activity_type: activity_type.to_string(),
            start_date: start_date.to_string(),
            distance: 1000.0 * id as f64,
            moving_time: 600,
            elapsed_time: 660,
            total_elevation_gain: 12.5,
            average_speed: 3.2,
            max_speed: 6.4,
            average_watts: 180.0,
            kilojoules: 108.0,
        }
    }

    #[test]
    fn test_activity_to_point_maps_all_fields() {
        let point = activity_to_point(&record(3, "Ride", "2023-11-14T08:00:00Z"));

        assert_eq!(point.measurement, "activity");
        assert_eq!(point.tags.len(), 2);
        assert_eq!(point.tags["type"], "Ride");
        assert_eq!(point.tags["name"], "Activity 3");

        assert_eq!(point.fields.len(), 8);
        assert_eq!(point.fields["distance"], FieldValue::Float(3000.0));
        assert_eq!(point.fields["moving_time"], FieldValue::Integer(600));
        assert_eq!(point.fields["elapsed_time"], FieldValue::Integer(660));
        assert_eq!(point.fields["elevation"], FieldValue::Float(12.5));
        assert_eq!(point.fields["avg_speed"], FieldValue::Float(3.2));
        assert_eq!(point.fields["max_speed"], FieldValue::Float(6.4));
        assert_eq!(point.fields["avg_watts"], FieldValue::Float(180.0));
        assert_eq!(point.fields["kilojoules"], FieldValue::Float(108.0));

        assert_eq!(point.timestamp.nanos(), 1_699_948_800_000_000_000);
    }

    #[test]
    fn test_invalid_start_date_uses_epoch() {
        let point = activity_to_point(&record(4, "Run", "yesterday morning"));
        assert_eq!(point.timestamp, Timestamp::EPOCH);

        let point = activity_to_point(&record(5, "Run", ""));
        assert_eq!(point.timestamp.nanos(), 0);
    }

    #[test]
    fn test_missing_average_watts_maps_to_zero() {
        let record: ActivityRecord =
            serde_json::from_str(r#"{"id": 6, "type": "Hike", "start_date": "2023-11-14T08:00:00Z"}"#)
                .unwrap();
        let point = activity_to_point(&record);

        assert_eq!(point.fields["avg_watts"], FieldValue::Float(0.0));
        assert_eq!(point.fields["moving_time"], FieldValue::Integer(0));
    }

    #[tokio::test]
    async fn test_write_activities_continues_after_failure() {
        let writer = RecordingWriter {
            fail_on_calls: vec![2],
            ..Default::default()
        };
        let records = vec![
            record(10, "Run", "2023-11-14T08:00:00Z"),
            record(11, "Ride", "2023-11-14T09:00:00Z"),
            record(12, "Swim", "2023-11-14T10:00:00Z"),
        ];

        let report = write_activities(&writer, &records).await;

        assert_eq!(report.attempted, 3);
        assert_eq!(report.written, 2);
        assert_eq!(report.failed_ids, vec![11]);

        let points = writer.points.lock().unwrap();
        let types: Vec<&str> = points.iter().map(|p| p.tags["type"].as_str()).collect();
        assert_eq!(types, vec!["Run", "Ride", "Swim"]);
    }

    #[tokio::test]
    async fn test_write_activities_logs_each_failure_once() {
        let logs = LogBuffer::default();
        let sink = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .without_time()
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let writer = RecordingWriter {
            fail_on_calls: vec![2],
            ..Default::default()
        };
        let records = vec![
            record(10, "Run", "2023-11-14T08:00:00Z"),
            record(11, "Ride", "2023-11-14T09:00:00Z"),
            record(12, "Swim", "2023-11-14T10:00:00Z"),
        ];

        write_activities(&writer, &records).await;

        let output = logs.contents();
        let failures: Vec<&str> = output
            .lines()
            .filter(|line| line.contains("Failed to write activity"))
            .collect();
        assert_eq!(failures.len(), 1, "log output: {}", output);
        assert!(failures[0].contains("WARN"));
        assert!(failures[0].contains("activity_id=11"));
        assert!(failures[0].contains("HTTP 500: boom"));
    }

    #[tokio::test]
    async fn test_write_activities_empty_input() {
        let writer = RecordingWriter::default();
        let report = write_activities(&writer, &[]).await;

        assert_eq!(report, WriteReport::default());
        assert!(writer.points.lock().unwrap().is_empty());
    }
}
