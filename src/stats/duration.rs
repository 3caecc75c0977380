use serde::Serialize;
use std::fmt;

use super::or_no_data;
use crate::trip::Trip;

/// Total and average trip duration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DurationStats {
    pub trips: usize,
    pub total_secs: u64,
    /// Truncated to whole seconds. `None` when there are no trips.
    pub mean_secs: Option<u64>,
}

impl DurationStats {
    pub fn from_trips(trips: &[Trip]) -> Self {
        let total_secs: u64 = trips.iter().map(|t| t.duration_secs).sum();
        let mean_secs = (!trips.is_empty()).then(|| total_secs / trips.len() as u64);

        DurationStats {
            trips: trips.len(),
            total_secs,
            mean_secs,
        }
    }
}

/// Formats seconds as `HH:MM:SS`. Hours keep growing past 24.
pub fn format_hms(secs: u64) -> String {
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of trips: {}", self.trips)?;
        writeln!(
            f,
            "Total travel duration (HH:MM:SS): {}",
            format_hms(self.total_secs)
        )?;
        writeln!(
            f,
            "Mean travel duration (HH:MM:SS): {}",
            or_no_data(self.mean_secs.map(format_hms))
        )
    }
}
