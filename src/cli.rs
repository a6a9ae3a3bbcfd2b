//! Command-line arguments.

use crate::services::SyncWindow;
use crate::time_utils::parse_day;
use chrono::NaiveDate;
use clap::Parser;

/// Copy Strava activities for a date range into InfluxDB.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fetch activities started after this date (YYYY-MM-DD, midnight UTC)
    #[arg(value_parser = parse_day)]
    pub after: NaiveDate,

    /// Fetch activities started before this date (YYYY-MM-DD, midnight UTC)
    #[arg(value_parser = parse_day)]
    pub before: NaiveDate,
}

impl Cli {
    pub fn window(&self) -> SyncWindow {
        SyncWindow::from_days(self.after, self.before)
    }
}
