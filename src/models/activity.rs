// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity record as returned by the activity list endpoint.

use serde::{Deserialize, Deserializer};

/// One activity decoded from `GET /athlete/activities`.
///
/// Missing or `null` keys decode to the zero value of the field type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ActivityRecord {
    /// Strava activity ID
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    /// Activity name/title
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Activity type (Ride, Run, Hike, etc.)
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub activity_type: String,
    /// Start date/time (ISO 8601, UTC)
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    /// Distance in meters
    #[serde(deserialize_with = "null_as_default")]
    pub distance: f64,
    /// Moving time in seconds
    #[serde(deserialize_with = "null_as_default")]
    pub moving_time: i64,
    /// Elapsed time in seconds
    #[serde(deserialize_with = "null_as_default")]
    pub elapsed_time: i64,
    /// Elevation gain in meters
    #[serde(deserialize_with = "null_as_default")]
    pub total_elevation_gain: f64,
    /// Meters per second
    #[serde(deserialize_with = "null_as_default")]
    pub average_speed: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_speed: f64,
    /// Watts
    #[serde(deserialize_with = "null_as_default")]
    pub average_watts: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub kilojoules: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
