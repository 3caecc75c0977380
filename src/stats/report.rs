//! The combined statistics for one city and filter.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{DurationStats, StationStats, TimeStats, UserStats};
use crate::city::City;
use crate::filter::{TripFilter, day_name, month_name};
use crate::trip::Trip;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub city: City,
    pub filter: TripFilter,
    pub time: TimeStats,
    pub stations: StationStats,
    pub durations: DurationStats,
    pub users: UserStats,
}

impl Report {
    pub fn build(city: City, filter: TripFilter, trips: &[Trip]) -> Self {
        Report {
            city,
            filter,
            time: TimeStats::from_trips(trips),
            stations: StationStats::from_trips(trips),
            durations: DurationStats::from_trips(trips),
            users: UserStats::from_trips(city, trips),
        }
    }

    /// Flattens the report into a single CSV-friendly row.
    pub fn summary_row(&self) -> SummaryRow {
        let demographics = self.users.demographics.as_ref();

        SummaryRow {
            generated_at: Utc::now(),
            city: self.city.name().to_string(),
            month: self.filter.month_label().to_string(),
            day: self.filter.day_label().to_string(),
            trips: self.durations.trips,
            most_common_month: self.time.most_common_month.map(|m| month_name(m).to_string()),
            most_common_day_of_week: self
                .time
                .most_common_day_of_week
                .map(|d| day_name(d).to_string()),
            most_common_hour: self.time.most_common_hour,
            most_common_start_station: self.stations.most_common_start_station.clone(),
            most_common_end_station: self.stations.most_common_end_station.clone(),
            most_common_trip: self.stations.most_common_trip.clone(),
            total_duration_secs: self.durations.total_secs,
            mean_duration_secs: self.durations.mean_secs,
            earliest_birth_year: demographics.and_then(|d| d.earliest_birth_year),
            latest_birth_year: demographics.and_then(|d| d.latest_birth_year),
            most_common_birth_year: demographics.and_then(|d| d.most_common_birth_year),
        }
    }
}

/// One line of the summary CSV written by `report --append-csv`.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub generated_at: DateTime<Utc>,
    pub city: String,
    pub month: String,
    pub day: String,
    pub trips: usize,
    pub most_common_month: Option<String>,
    pub most_common_day_of_week: Option<String>,
    pub most_common_hour: Option<u32>,
    pub most_common_start_station: Option<String>,
    pub most_common_end_station: Option<String>,
    pub most_common_trip: Option<String>,
    pub total_duration_secs: u64,
    pub mean_duration_secs: Option<u64>,
    pub earliest_birth_year: Option<i32>,
    pub latest_birth_year: Option<i32>,
    pub most_common_birth_year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::fixtures::trip;

    fn sample() -> Vec<Trip> {
        vec![
            trip("2017-06-23 17:10:00", "A", "B", 300),
            trip("2017-06-23 17:20:00", "A", "C", 600),
            trip("2017-06-26 08:00:00", "C", "B", 900),
        ]
    }

    #[test]
    fn test_build() {
        let filter = TripFilter::from_names("june", "all").unwrap();
        let report = Report::build(City::Chicago, filter, &sample());

        assert_eq!(report.durations.trips, 3);
        assert_eq!(report.durations.total_secs, 1800);
        assert_eq!(report.durations.mean_secs, Some(600));
        assert_eq!(report.stations.most_common_start_station.as_deref(), Some("A"));
        assert_eq!(report.stations.most_common_end_station.as_deref(), Some("B"));
        assert_eq!(report.time.most_common_hour, Some(17));
    }

    #[test]
    fn test_summary_row() {
        let filter = TripFilter::from_names("june", "friday").unwrap();
        let row = Report::build(City::Washington, filter, &sample()).summary_row();

        assert_eq!(row.city, "washington");
        assert_eq!(row.month, "June");
        assert_eq!(row.day, "Friday");
        assert_eq!(row.most_common_day_of_week.as_deref(), Some("Friday"));
        assert_eq!(row.most_common_birth_year, None);
    }

    #[test]
    fn test_json_shape() {
        let report = Report::build(City::Chicago, TripFilter::default(), &sample());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["city"], "chicago");
        assert_eq!(json["filter"]["month"], "all");
        assert_eq!(json["durations"]["total_secs"], 1800);
        assert_eq!(json["users"]["user_types"][0]["value"], "Subscriber");
    }
}
