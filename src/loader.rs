//! Reads a city's trip history from CSV and applies a [`TripFilter`].
//!
//! Files may be plain CSV or gzip-compressed (`.csv.gz`).

use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDateTime;
use flate2::read::GzDecoder;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::city::City;
use crate::filter::TripFilter;
use crate::trip::Trip;

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// A row as it appears in the published datasets.
///
/// Columns not listed here (such as the unnamed index column) are ignored.
/// `Gender` and `Birth Year` are absent from the Washington file.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

impl RawTrip {
    fn into_trip(self) -> Result<Trip> {
        if !self.trip_duration.is_finite() || self.trip_duration < 0.0 {
            bail!("invalid trip duration {}", self.trip_duration);
        }

        let end_time = match self.end_time.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => Some(parse_datetime(s)?),
            _ => None,
        };

        Ok(Trip {
            start_time: parse_datetime(self.start_time.trim())?,
            end_time,
            duration_secs: self.trip_duration.round() as u64,
            start_station: self.start_station,
            end_station: self.end_station,
            user_type: non_empty(self.user_type),
            gender: non_empty(self.gender),
            birth_year: self.birth_year.filter(|y| y.is_finite()).map(|y| y as i32),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses a `Start Time` / `End Time` cell.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| anyhow!("invalid timestamp '{s}'"))
}

/// Locates the dataset for `city` in `data_dir`, preferring the plain CSV
/// over its gzip sibling.
pub fn dataset_path(data_dir: &Path, city: City) -> Result<PathBuf> {
    let plain = data_dir.join(city.file_name());
    if plain.exists() {
        return Ok(plain);
    }

    let gz = data_dir.join(format!("{}.gz", city.file_name()));
    if gz.exists() {
        return Ok(gz);
    }

    bail!(
        "no dataset for {} in {} (expected {})",
        city,
        data_dir.display(),
        city.file_name()
    )
}

fn open_reader(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::with_capacity(64 * 1024, file);

    if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        Ok(Box::new(GzDecoder::new(reader)))
    } else {
        Ok(Box::new(reader))
    }
}

/// Decodes every trip in a CSV stream.
///
/// Row numbers in errors count the header as row 1.
pub fn read_trips<R: Read>(reader: R) -> Result<Vec<Trip>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut trips = Vec::new();
    for (i, result) in rdr.deserialize::<RawTrip>().enumerate() {
        let row = i + 2;
        let raw = result.with_context(|| format!("row {row}"))?;
        trips.push(raw.into_trip().with_context(|| format!("row {row}"))?);
    }

    Ok(trips)
}

/// Loads every trip from a dataset file.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_trips(path: &Path) -> Result<Vec<Trip>> {
    let trips = read_trips(open_reader(path)?)
        .with_context(|| format!("failed to read {}", path.display()))?;
    debug!(rows = trips.len(), "Dataset loaded");
    Ok(trips)
}

/// Loads the dataset for `city` and keeps the trips matching `filter`.
#[tracing::instrument(fields(data_dir = %data_dir.display(), city = %city, filter = %filter))]
pub fn load_data(data_dir: &Path, city: City, filter: &TripFilter) -> Result<Vec<Trip>> {
    let path = dataset_path(data_dir, city)?;
    let trips = load_trips(&path)?;
    let total = trips.len();

    let filtered = filter.apply(trips);
    info!(total, kept = filtered.len(), "Filter applied");

    Ok(filtered)
}
