// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

use crate::config::ConfigError;

/// Application error type shared by the fetch and write paths.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Strava API error: {0}")]
    StravaApi(String),

    #[error("InfluxDB error: {0}")]
    InfluxDb(String),
}

impl AppError {
    /// Message used when Strava rejects the access token (HTTP 401).
    pub const STRAVA_TOKEN_ERROR: &'static str = "Strava access token invalid or expired";

    /// Message used when Strava rate limits the request (HTTP 429).
    pub const STRAVA_RATE_LIMIT: &'static str = "Strava rate limit exceeded";

    /// Whether this error means the Strava access token needs replacing.
    pub fn is_strava_token_error(&self) -> bool {
        matches!(self, AppError::StravaApi(msg) if msg == Self::STRAVA_TOKEN_ERROR)
    }

    /// Whether Strava refused the request because of rate limiting.
    pub fn is_strava_rate_limited(&self) -> bool {
        matches!(self, AppError::StravaApi(msg) if msg == Self::STRAVA_RATE_LIMIT)
    }
}

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, AppError>;
