use serde::Serialize;
use std::fmt;

use super::or_no_data;
use super::utility::mode;
use crate::filter::{day_name, month_name};
use crate::trip::Trip;

/// The most frequent times of travel.
///
/// Months are numbered from 1 (January), days from 0 (Monday).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    pub most_common_month: Option<u32>,
    pub most_common_day_of_week: Option<u32>,
    pub most_common_hour: Option<u32>,
}

impl TimeStats {
    pub fn from_trips(trips: &[Trip]) -> Self {
        TimeStats {
            most_common_month: mode(trips.iter().map(Trip::month)),
            most_common_day_of_week: mode(trips.iter().map(Trip::day_of_week)),
            most_common_hour: mode(trips.iter().map(Trip::hour)),
        }
    }
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Most common month: {}",
            or_no_data(self.most_common_month.map(month_name))
        )?;
        writeln!(
            f,
            "Most common day of week: {}",
            or_no_data(self.most_common_day_of_week.map(day_name))
        )?;
        writeln!(
            f,
            "Most common start hour: {}",
            or_no_data(self.most_common_hour)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::fixtures::trip;

    #[test]
    fn test_from_trips() {
        let trips = vec![
            trip("2017-06-23 17:10:00", "A", "B", 60), // Friday
            trip("2017-06-30 17:45:00", "A", "B", 60), // Friday
            trip("2017-01-02 08:00:00", "A", "B", 60), // Monday
        ];
        let stats = TimeStats::from_trips(&trips);

        assert_eq!(stats.most_common_month, Some(6));
        assert_eq!(stats.most_common_day_of_week, Some(4));
        assert_eq!(stats.most_common_hour, Some(17));
    }

    #[test]
    fn test_empty_reports_no_data() {
        let stats = TimeStats::from_trips(&[]);
        assert_eq!(stats, TimeStats::default());

        let text = stats.to_string();
        assert_eq!(text.matches("no data").count(), 3);
    }

    #[test]
    fn test_display_uses_names() {
        let stats = TimeStats {
            most_common_month: Some(3),
            most_common_day_of_week: Some(6),
            most_common_hour: Some(9),
        };
        let text = stats.to_string();
        assert!(text.contains("Most common month: March"));
        assert!(text.contains("Most common day of week: Sunday"));
        assert!(text.contains("Most common start hour: 9"));
    }
}
