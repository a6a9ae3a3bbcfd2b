// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava-InfluxDB sync: copy Strava activities into an InfluxDB bucket
//!
//! This crate fetches one page of activities for a time window from the
//! Strava API and writes one `activity` point per activity.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
