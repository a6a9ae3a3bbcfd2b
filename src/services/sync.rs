// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-shot Strava → InfluxDB sync for a time window.

use crate::config::{Config, InfluxDbConfig};
use crate::db::InfluxDbClient;
use crate::error::Result;
use crate::models::ActivityRecord;
use crate::services::activity::{write_activities, WriteReport};
use crate::services::StravaClient;
use crate::time_utils::day_start_epoch_secs;
use chrono::NaiveDate;
use secrecy::ExposeSecret;

/// Fetch window in Unix seconds. `after <= before` is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncWindow {
    pub after: i64,
    pub before: i64,
}

impl SyncWindow {
    /// Window from midnight UTC of `after` to midnight UTC of `before`.
    pub fn from_days(after: NaiveDate, before: NaiveDate) -> Self {
        Self {
            after: day_start_epoch_secs(after),
            before: day_start_epoch_secs(before),
        }
    }
}

/// Fetch the first page of activities in `window`.
pub async fn fetch(config: &Config, window: SyncWindow) -> Result<Vec<ActivityRecord>> {
    let strava = StravaClient::with_base_url(&config.strava_api_base_url);
    let activities = strava
        .list_activities(
            config.strava_access_token.expose_secret(),
            window.after,
            window.before,
        )
        .await?;

    tracing::info!(
        after = window.after,
        before = window.before,
        count = activities.len(),
        "Fetched activities"
    );
    Ok(activities)
}

/// Write every activity to InfluxDB through one client.
///
/// Only client construction can fail; per-point failures end up in the
/// returned report.
pub async fn store(influxdb: &InfluxDbConfig, activities: &[ActivityRecord]) -> Result<WriteReport> {
    let client = InfluxDbClient::new(influxdb)?;
    let report = write_activities(&client, activities).await;
    client.close();

    tracing::info!(
        attempted = report.attempted,
        written = report.written,
        failed = report.failed_ids.len(),
        "Finished writing activities"
    );
    Ok(report)
}
