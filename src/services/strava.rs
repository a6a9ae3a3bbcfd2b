// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for listing activities.
//!
//! Handles:
//! - One-page activity listing for a time window
//! - Token and rate limit detection on error responses

use crate::config::STRAVA_API_BASE_URL;
use crate::error::AppError;
use crate::models::ActivityRecord;

/// Page size requested from the activity list endpoint.
pub const ACTIVITIES_PER_PAGE: u32 = 200;

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for StravaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl StravaClient {
    /// Create a new Strava client against the public API.
    pub fn new() -> Self {
        Self::with_base_url(STRAVA_API_BASE_URL)
    }

    /// Create a client against a different API root (proxies, mock servers).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// List activities started between `after` and `before` (Unix seconds).
    ///
    /// Only the first page of up to [`ACTIVITIES_PER_PAGE`] activities is
    /// returned, in the order Strava sends them.
    pub async fn list_activities(
        &self,
        access_token: &str,
        after: i64,
        before: i64,
    ) -> Result<Vec<ActivityRecord>, AppError> {
        let url = format!("{}/athlete/activities", self.base_url);

        tracing::debug!(after, before, "Listing Strava activities");

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&[
                ("after", after.to_string()),
                ("before", before.to_string()),
                ("per_page", ACTIVITIES_PER_PAGE.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        let body = self.check_response_text(response).await?;

        serde_json::from_str(&body)
            .map_err(|e| AppError::StravaApi(format!("JSON parse error: {}", e)))
    }

    /// Check response status and read the full body.
    async fn check_response_text(&self, response: reqwest::Response) -> Result<String, AppError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                tracing::warn!("Strava rate limit hit (429)");
                return Err(AppError::StravaApi(AppError::STRAVA_RATE_LIMIT.to_string()));
            }

            // Unauthorized - token may be expired
            if status.as_u16() == 401 {
                return Err(AppError::StravaApi(
                    AppError::STRAVA_TOKEN_ERROR.to_string(),
                ));
            }

            return Err(AppError::StravaApi(format!("HTTP {}: {}", status, body)));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::StravaApi(format!("Failed to read response body: {}", e)))
    }
}
