// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use secrecy::SecretString;
use strava_influx_sync::config::{Config, InfluxDbConfig};
use wiremock::MockServer;

pub const STRAVA_TOKEN: &str = "test_strava_token";
pub const INFLUX_TOKEN: &str = "test_influx_token";

/// InfluxDB settings pointing at a mock server.
#[allow(dead_code)]
pub fn influx_config(influx: &MockServer) -> InfluxDbConfig {
    InfluxDbConfig {
        url: influx.uri(),
        token: SecretString::from(INFLUX_TOKEN.to_string()),
        org: "test-org".to_string(),
        bucket: "test-bucket".to_string(),
    }
}

/// Full config with both upstreams pointing at mock servers.
#[allow(dead_code)]
pub fn test_config(strava: &MockServer, influx: &MockServer) -> Config {
    Config {
        strava_access_token: SecretString::from(STRAVA_TOKEN.to_string()),
        strava_api_base_url: strava.uri(),
        influxdb: influx_config(influx),
    }
}

/// Bodies of every request the server received, in arrival order.
#[allow(dead_code)]
pub async fn received_bodies(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .into_iter()
        .map(|req| String::from_utf8(req.body).expect("utf-8 body"))
        .collect()
}
