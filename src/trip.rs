//! A single bike-share trip and the fields derived from its start time.

use chrono::{Datelike, NaiveDateTime, Timelike};
use std::fmt;

/// Separator used when joining start and end station into a trip label.
pub const ROUTE_SEPARATOR: &str = " -> ";

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub duration_secs: u64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl Trip {
    /// Month of the start time, 1 = January.
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    /// Day of the week of the start time, 0 = Monday.
    pub fn day_of_week(&self) -> u32 {
        self.start_time.weekday().num_days_from_monday()
    }

    /// Hour of the start time, 0-23.
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// `"<start station> -> <end station>"`
    pub fn route(&self) -> String {
        format!(
            "{}{}{}",
            self.start_station, ROUTE_SEPARATOR, self.end_station
        )
    }
}

/// One raw-data line: every field pipe-separated, missing values blank.
impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end_time = self
            .end_time
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        let birth_year = self.birth_year.map(|y| y.to_string()).unwrap_or_default();

        write!(
            f,
            "{} | {} | {} | {} | {} | {} | {} | {}",
            self.start_time.format("%Y-%m-%d %H:%M:%S"),
            end_time,
            self.duration_secs,
            self.start_station,
            self.end_station,
            self.user_type.as_deref().unwrap_or(""),
            self.gender.as_deref().unwrap_or(""),
            birth_year,
        )
    }
}

/// Column titles matching the [`Trip`] display order.
pub const RAW_HEADER: &str = "Start Time | End Time | Trip Duration | Start Station | End Station | User Type | Gender | Birth Year";
