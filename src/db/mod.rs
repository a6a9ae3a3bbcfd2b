//! Database layer (InfluxDB).

pub mod influxdb;

pub use influxdb::InfluxDbClient;

use crate::error::Result;
use crate::models::Point;
use async_trait::async_trait;

/// Destination that accepts one point per call.
#[async_trait]
pub trait PointWriter {
    /// Write a single point, returning once the database acknowledged or
    /// rejected it.
    async fn write_point(&self, point: &Point) -> Result<()>;
}
