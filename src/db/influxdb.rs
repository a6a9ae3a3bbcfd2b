// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! InfluxDB 2.x client for the `/api/v2/write` endpoint.

use super::PointWriter;
use crate::config::InfluxDbConfig;
use crate::error::{AppError, Result};
use crate::models::Point;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use secrecy::ExposeSecret;

pub const CLIENT_USER_AGENT: &str = concat!("strava-influx-sync/", env!("CARGO_PKG_VERSION"));

/// Write client bound to one organization and bucket.
pub struct InfluxDbClient {
    http: reqwest::Client,
    write_url: String,
    org: String,
    bucket: String,
}

impl InfluxDbClient {
    /// Create a client with the token installed as a default header.
    pub fn new(config: &InfluxDbConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        let mut auth = HeaderValue::from_str(&format!("Token {}", config.token.expose_secret()))
            .map_err(|e| AppError::InfluxDb(format!("Invalid token header: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::InfluxDb(e.to_string()))?;

        Ok(Self {
            http,
            write_url: format!("{}/api/v2/write", config.url.trim_end_matches('/')),
            org: config.org.clone(),
            bucket: config.bucket.clone(),
        })
    }

    /// Release the client. Pending connections are dropped with it.
    pub fn close(self) {
        tracing::debug!(bucket = %self.bucket, "Closing InfluxDB client");
    }

    /// Check response status and return error if not successful.
    async fn check_response(&self, response: reqwest::Response) -> Result<()> {
        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::InfluxDb(format!("HTTP {}: {}", status, body)))
    }
}

#[async_trait]
impl PointWriter for InfluxDbClient {
    async fn write_point(&self, point: &Point) -> Result<()> {
        let body = point.to_line();
        tracing::debug!(url = %self.write_url, body = %body, "InfluxDB write");

        let response = self
            .http
            .post(&self.write_url)
            .query(&[
                ("org", self.org.as_str()),
                ("bucket", self.bucket.as_str()),
                ("precision", "ns"),
            ])
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(body)
            .send()
            .await
            .map_err(|e| AppError::InfluxDb(e.to_string()))?;

        self.check_response(response).await
    }
}
