//! Time-based trip filters.
//!
//! A filter restricts trips by the month and/or the day of week of their start
//! time. The word `all` stands for "no restriction" in either dimension.

use anyhow::{Result, anyhow, bail};
use chrono::{Month, Weekday};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::trip::Trip;

pub const ALL: &str = "all";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Name of a month given its number (1 = January).
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("unknown month")
}

/// Name of a day given its offset from Monday (0 = Monday).
pub fn day_name(day: u32) -> &'static str {
    DAY_NAMES.get(day as usize).copied().unwrap_or("unknown day")
}

/// Parses a month name or abbreviation; `all` yields `None`.
pub fn parse_month(s: &str) -> Result<Option<Month>> {
    let s = s.trim();
    if s.eq_ignore_ascii_case(ALL) {
        return Ok(None);
    }
    s.parse::<Month>()
        .map(Some)
        .map_err(|_| anyhow!("unknown month '{s}'"))
}

/// Parses a day name or abbreviation; `all` yields `None`.
pub fn parse_day(s: &str) -> Result<Option<Weekday>> {
    let s = s.trim();
    if s.eq_ignore_ascii_case(ALL) {
        return Ok(None);
    }
    s.parse::<Weekday>()
        .map(Some)
        .map_err(|_| anyhow!("unknown day '{s}'"))
}

/// Which dimensions the user wants to filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Day,
    Month,
    Both,
    None,
}

impl FilterMode {
    pub fn needs_month(&self) -> bool {
        matches!(self, FilterMode::Month | FilterMode::Both)
    }

    pub fn needs_day(&self) -> bool {
        matches!(self, FilterMode::Day | FilterMode::Both)
    }
}

impl FromStr for FilterMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(FilterMode::Day),
            "month" => Ok(FilterMode::Month),
            "both" => Ok(FilterMode::Both),
            "none" => Ok(FilterMode::None),
            other => bail!("unknown filter mode '{other}'"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TripFilter {
    #[serde(serialize_with = "serialize_month")]
    pub month: Option<Month>,
    #[serde(serialize_with = "serialize_day")]
    pub day: Option<Weekday>,
}

impl TripFilter {
    /// Builds a filter from two user-supplied names, each possibly `all`.
    pub fn from_names(month: &str, day: &str) -> Result<Self> {
        Ok(Self {
            month: parse_month(month)?,
            day: parse_day(day)?,
        })
    }

    pub fn is_unrestricted(&self) -> bool {
        self.month.is_none() && self.day.is_none()
    }

    pub fn matches(&self, trip: &Trip) -> bool {
        let month_check = self
            .month
            .is_none_or(|m| trip.month() == m.number_from_month());
        let day_check = self
            .day
            .is_none_or(|d| trip.day_of_week() == d.num_days_from_monday());

        month_check && day_check
    }

    /// Keeps the trips matching this filter, in their original order.
    pub fn apply(&self, trips: Vec<Trip>) -> Vec<Trip> {
        if self.is_unrestricted() {
            return trips;
        }
        trips.into_iter().filter(|t| self.matches(t)).collect()
    }

    /// Month name, or `all`.
    pub fn month_label(&self) -> &'static str {
        self.month
            .map(|m| month_name(m.number_from_month()))
            .unwrap_or(ALL)
    }

    /// Day name, or `all`.
    pub fn day_label(&self) -> &'static str {
        self.day
            .map(|d| day_name(d.num_days_from_monday()))
            .unwrap_or(ALL)
    }
}

impl fmt::Display for TripFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "month: {}, day: {}", self.month_label(), self.day_label())
    }
}

fn serialize_month<S: serde::Serializer>(
    month: &Option<Month>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let label = month.map(|m| month_name(m.number_from_month())).unwrap_or(ALL);
    serializer.serialize_str(label)
}

fn serialize_day<S: serde::Serializer>(
    day: &Option<Weekday>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let label = day.map(|d| day_name(d.num_days_from_monday())).unwrap_or(ALL);
    serializer.serialize_str(label)
}
