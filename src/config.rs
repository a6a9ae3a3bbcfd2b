//! Configuration loaded from environment variables.
//!
//! Everything is read once at startup into a [`Config`] that is passed by
//! reference to the fetch and write paths.

use secrecy::SecretString;
use std::env;

/// Default Strava API base URL.
pub const STRAVA_API_BASE_URL: &str = "https://www.strava.com/api/v3";

/// Run configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Strava OAuth access token (bearer credential)
    pub strava_access_token: SecretString,
    /// Strava API base URL, overridable for testing
    pub strava_api_base_url: String,
    /// Destination database
    pub influxdb: InfluxDbConfig,
}

/// Connection parameters for the destination InfluxDB bucket.
#[derive(Debug, Clone)]
pub struct InfluxDbConfig {
    /// Base URL, e.g. `http://localhost:8086`
    pub url: String,
    /// API token with write access to the bucket
    pub token: SecretString,
    pub org: String,
    pub bucket: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_env_with(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as missing ones.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, ConfigError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut required = |name: &'static str| {
            get(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let strava_access_token = required("STRAVA_ACCESS_TOKEN")?;
        let url = required("INFLUXDB_URL")?;
        let token = required("INFLUXDB_TOKEN")?;
        let org = required("INFLUXDB_ORG")?;
        let bucket = required("INFLUXDB_BUCKET")?;

        let strava_api_base_url = get("STRAVA_API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| STRAVA_API_BASE_URL.to_string());

        Ok(Self {
            strava_access_token: SecretString::from(strava_access_token),
            strava_api_base_url,
            influxdb: InfluxDbConfig {
                url,
                token: SecretString::from(token),
                org,
                bucket,
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
