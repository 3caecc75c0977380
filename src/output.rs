//! Console rendering and persistence for trip statistics.
//!
//! Supports the timed text sections of the interactive session, raw-data
//! pages, JSON serialization, and CSV append.

use anyhow::Result;
use csv::WriterBuilder;
use serde::Serialize;
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

use crate::city::City;
use crate::filter::TripFilter;
use crate::stats::{DurationStats, Report, StationStats, SummaryRow, TimeStats, UserStats};
use crate::trip::{RAW_HEADER, Trip};

const RULE_WIDTH: usize = 40;

/// Computes one statistics section and writes it between a banner and a
/// timing footer.
pub fn write_section<W, T, F>(out: &mut W, banner: &str, compute: F) -> Result<T>
where
    W: Write,
    T: Display,
    F: FnOnce() -> T,
{
    writeln!(out, "\n{banner}\n")?;
    let start = Instant::now();

    let section = compute();
    write!(out, "{section}")?;

    let elapsed = start.elapsed();
    debug!(section = banner, elapsed_us = elapsed.as_micros() as u64, "Section computed");
    writeln!(out, "\nThis took {:.6} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    Ok(section)
}

/// Writes the four statistics sections and returns the assembled report.
pub fn write_statistics<W: Write>(
    out: &mut W,
    city: City,
    filter: TripFilter,
    trips: &[Trip],
) -> Result<Report> {
    let time = write_section(out, "Calculating The Most Frequent Times of Travel...", || {
        TimeStats::from_trips(trips)
    })?;
    let stations = write_section(out, "Calculating The Most Popular Stations and Trip...", || {
        StationStats::from_trips(trips)
    })?;
    let durations = write_section(out, "Calculating Trip Duration...", || {
        DurationStats::from_trips(trips)
    })?;
    let users = write_section(out, "Calculating User Stats...", || {
        UserStats::from_trips(city, trips)
    })?;

    Ok(Report {
        city,
        filter,
        time,
        stations,
        durations,
        users,
    })
}

/// Writes a block of raw trip rows under a column header.
pub fn write_raw_page<W: Write>(out: &mut W, rows: &[Trip]) -> Result<()> {
    writeln!(out, "\n{RAW_HEADER}")?;
    for trip in rows {
        writeln!(out, "{trip}")?;
    }
    Ok(())
}

/// Writes any serializable value as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Appends a [`SummaryRow`] to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &Path, row: &SummaryRow) -> Result<()> {
    let file_exists = path.exists();
    debug!(path = %path.display(), file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // header only on a fresh file
        .from_writer(file);

    writer.serialize(row)?;
    writer.flush()?;

    Ok(())
}
