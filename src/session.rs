//! The interactive exploration loop.

use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

use crate::city::City;
use crate::filter::{FilterMode, TripFilter, parse_day, parse_month};
use crate::loader::load_data;
use crate::output::{write_raw_page, write_statistics};
use crate::prompt::Prompter;
use crate::trip::Trip;

const CITY_QUESTION: &str = "Enter your city (chicago, new york city, washington):";
const CITY_RETRY: &str = "City is not available, please enter chicago, new york city or washington:";
const MODE_QUESTION: &str = "Would you like to filter the data by day, month, both or none?";
const MODE_RETRY: &str = "Invalid choice, please enter day, month, both or none:";
const MONTH_QUESTION: &str = "Which month? (january, february, ... december)";
const MONTH_RETRY: &str = "Invalid month, please enter a month name such as june:";
const DAY_QUESTION: &str = "Which day? (monday, tuesday, ... sunday)";
const DAY_RETRY: &str = "Invalid day, please enter a day name such as monday:";
const RAW_QUESTION: &str = "Would you like to see raw data? Enter yes or no.";
const PAGE_QUESTION: &str = "How many rows would you like to see at a time?";
const PAGE_RETRY: &str = "Please enter a positive whole number:";
const MORE_QUESTION: &str = "Would you like to see more raw data? Enter yes or no.";
const RESTART_QUESTION: &str = "Would you like to restart? Enter yes or no.";

/// Runs explore rounds until the user declines to restart or input ends.
pub fn run<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, data_dir: &Path) -> Result<()> {
    let mut rounds = 0usize;

    loop {
        let Some((city, filter)) = get_filters(prompter)? else {
            break;
        };
        rounds += 1;
        info!(round = rounds, city = %city, filter = %filter, "Exploring");

        let trips = load_data(data_dir, city, &filter)?;
        writeln!(
            prompter.output(),
            "\nLoaded {} trips for {city} ({filter}).",
            trips.len()
        )?;

        show_raw_data(prompter, &trips)?;
        write_statistics(prompter.output(), city, filter, &trips)?;

        if !prompter.confirm(&format!("\n{RESTART_QUESTION}"))? {
            break;
        }
    }

    info!(rounds, "Session finished");
    Ok(())
}

/// Asks for the city, the filter mode, and whichever month/day the mode
/// requires. `None` when input ends first.
pub fn get_filters<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Option<(City, TripFilter)>> {
    let Some(city) = prompter.ask_until_valid(CITY_QUESTION, CITY_RETRY, |s| s.parse::<City>())?
    else {
        return Ok(None);
    };

    let Some(mode) =
        prompter.ask_until_valid(MODE_QUESTION, MODE_RETRY, |s| s.parse::<FilterMode>())?
    else {
        return Ok(None);
    };

    let mut filter = TripFilter::default();

    if mode.needs_month() {
        let Some(month) = prompter.ask_until_valid(MONTH_QUESTION, MONTH_RETRY, require(parse_month))?
        else {
            return Ok(None);
        };
        filter.month = Some(month);
    }

    if mode.needs_day() {
        let Some(day) = prompter.ask_until_valid(DAY_QUESTION, DAY_RETRY, require(parse_day))? else {
            return Ok(None);
        };
        filter.day = Some(day);
    }

    Ok(Some((city, filter)))
}

/// Once the user picked a mode that filters on a dimension, `all` is not an
/// answer for it.
fn require<T>(parse: fn(&str) -> Result<Option<T>>) -> impl Fn(&str) -> Result<T> {
    move |s: &str| match parse(s)? {
        Some(value) => Ok(value),
        None => bail!("a specific value is required"),
    }
}

fn parse_page_size(s: &str) -> Result<usize> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => bail!("invalid page size '{s}'"),
    }
}

/// Pages through the filtered trips while the user keeps asking for more.
pub fn show_raw_data<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    trips: &[Trip],
) -> Result<()> {
    if !prompter.confirm(RAW_QUESTION)? {
        return Ok(());
    }

    let Some(page_size) = prompter.ask_until_valid(PAGE_QUESTION, PAGE_RETRY, parse_page_size)?
    else {
        return Ok(());
    };

    let mut pages = trips.chunks(page_size);
    loop {
        let Some(page) = pages.next() else {
            writeln!(prompter.output(), "\nNo more rows to show.")?;
            return Ok(());
        };
        write_raw_page(prompter.output(), page)?;

        if pages.len() == 0 {
            writeln!(prompter.output(), "\nEnd of data.")?;
            return Ok(());
        }
        if !prompter.confirm(MORE_QUESTION)? {
            return Ok(());
        }
    }
}
