use serde::Serialize;
use std::fmt;

use super::or_no_data;
use super::utility::mode;
use crate::trip::Trip;

/// The most popular stations and trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub most_common_start_station: Option<String>,
    pub most_common_end_station: Option<String>,
    /// `"<start> -> <end>"`
    pub most_common_trip: Option<String>,
}

impl StationStats {
    pub fn from_trips(trips: &[Trip]) -> Self {
        StationStats {
            most_common_start_station: mode(trips.iter().map(|t| t.start_station.as_str()))
                .map(str::to_string),
            most_common_end_station: mode(trips.iter().map(|t| t.end_station.as_str()))
                .map(str::to_string),
            most_common_trip: mode(trips.iter().map(Trip::route)),
        }
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Most commonly used start station: {}",
            or_no_data(self.most_common_start_station.as_deref())
        )?;
        writeln!(
            f,
            "Most commonly used end station: {}",
            or_no_data(self.most_common_end_station.as_deref())
        )?;
        writeln!(
            f,
            "Most common trip: {}",
            or_no_data(self.most_common_trip.as_deref())
        )
    }
}
