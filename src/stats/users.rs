use serde::Serialize;
use std::fmt;

use super::utility::{ValueCount, mode, value_counts};
use super::{NO_DATA, or_no_data};
use crate::city::City;
use crate::trip::Trip;

/// Gender and birth-year breakdown, for cities that publish it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Demographics {
    pub genders: Vec<ValueCount<String>>,
    pub earliest_birth_year: Option<i32>,
    pub latest_birth_year: Option<i32>,
    pub most_common_birth_year: Option<i32>,
}

impl Demographics {
    pub fn from_trips(trips: &[Trip]) -> Self {
        let birth_years = || trips.iter().filter_map(|t| t.birth_year);

        Demographics {
            genders: value_counts(trips.iter().filter_map(|t| t.gender.clone())),
            earliest_birth_year: birth_years().min(),
            latest_birth_year: birth_years().max(),
            most_common_birth_year: mode(birth_years()),
        }
    }
}

/// Who rides: user types and, where available, demographics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub city: City,
    pub user_types: Vec<ValueCount<String>>,
    /// Always `None` for cities without demographic columns.
    pub demographics: Option<Demographics>,
}

impl UserStats {
    pub fn from_trips(city: City, trips: &[Trip]) -> Self {
        let demographics = city
            .has_demographics()
            .then(|| Demographics::from_trips(trips));

        UserStats {
            city,
            user_types: value_counts(trips.iter().filter_map(|t| t.user_type.clone())),
            demographics,
        }
    }
}

fn write_counts(f: &mut fmt::Formatter<'_>, counts: &[ValueCount<String>]) -> fmt::Result {
    if counts.is_empty() {
        return writeln!(f, "  {NO_DATA}");
    }
    for c in counts {
        writeln!(f, "  {}: {}", c.value, c.count)?;
    }
    Ok(())
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Counts per user type:")?;
        write_counts(f, &self.user_types)?;

        let Some(demographics) = &self.demographics else {
            writeln!(f)?;
            return writeln!(f, "No gender or birth year data is available for {}.", self.city);
        };

        writeln!(f)?;
        writeln!(f, "Counts per gender:")?;
        write_counts(f, &demographics.genders)?;

        writeln!(f)?;
        writeln!(
            f,
            "Earliest birth year: {}",
            or_no_data(demographics.earliest_birth_year)
        )?;
        writeln!(
            f,
            "Most recent birth year: {}",
            or_no_data(demographics.latest_birth_year)
        )?;
        writeln!(
            f,
            "Most common birth year: {}",
            or_no_data(demographics.most_common_birth_year)
        )
    }
}
