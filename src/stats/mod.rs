//! Descriptive statistics over a filtered set of trips.
//!
//! Each submodule is a stateless reducer over `&[Trip]`. Statistics that are
//! undefined for an empty set come back as `None` and render as `no data`.

pub mod duration;
pub mod report;
pub mod stations;
pub mod time;
pub mod users;
pub mod utility;

use std::fmt::Display;

pub use duration::DurationStats;
pub use report::{Report, SummaryRow};
pub use stations::StationStats;
pub use time::TimeStats;
pub use users::{Demographics, UserStats};

pub const NO_DATA: &str = "no data";

/// Renders a statistic, or [`NO_DATA`] when it is undefined.
pub(crate) fn or_no_data<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NO_DATA.to_string(), |v| v.to_string())
}
