// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava-InfluxDB sync
//!
//! Fetches Strava activities for a date range and writes them to InfluxDB.

use clap::Parser;
use strava_influx_sync::{cli::Cli, config::Config, services::sync};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging();

    let config = Config::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
    })?;

    let window = cli.window();
    tracing::info!(
        after = %cli.after,
        before = %cli.before,
        "Starting Strava sync"
    );

    let activities = sync::fetch(&config, window).await.inspect_err(|e| {
        if e.is_strava_token_error() {
            tracing::error!(error = %e, "Strava rejected the access token; refresh STRAVA_ACCESS_TOKEN");
        } else if e.is_strava_rate_limited() {
            tracing::error!(error = %e, "Strava rate limit reached; retry after the 15-minute window");
        } else {
            tracing::error!(error = %e, "Error fetching activities");
        }
    })?;

    println!("Fetched {} activities", activities.len());

    // Failed point writes are logged but do not change the exit status.
    sync::store(&config.influxdb, &activities).await?;
    Ok(())
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("strava_influx_sync=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
