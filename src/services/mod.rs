// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - fetch, mapping and write logic.

pub mod activity;
pub mod strava;
pub mod sync;

pub use activity::{activity_to_point, write_activities, WriteReport};
pub use strava::StravaClient;
pub use sync::SyncWindow;
