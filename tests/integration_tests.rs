use bikeshare_explorer::city::City;
use bikeshare_explorer::filter::TripFilter;
use bikeshare_explorer::loader::{dataset_path, load_data, load_trips};
use bikeshare_explorer::prompt::Prompter;
use bikeshare_explorer::session;
use bikeshare_explorer::stats::Report;
use std::io::Cursor;
use std::path::PathBuf;

const MONTHS: [&str; 13] = [
    "all",
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const DAYS: [&str; 8] = [
    "all",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

#[test]
fn test_filtered_rows_respect_filter() {
    for city in City::ALL {
        let full = load_trips(&dataset_path(&fixtures(), city).unwrap()).unwrap();
        assert!(!full.is_empty());

        for (mi, month) in MONTHS.iter().enumerate() {
            for (di, day) in DAYS.iter().enumerate() {
                let filter = TripFilter::from_names(month, day).unwrap();
                let trips = load_data(&fixtures(), city, &filter).unwrap();

                assert!(trips.len() <= full.len(), "{city} {month} {day}");
                for trip in &trips {
                    if mi > 0 {
                        assert_eq!(trip.month(), mi as u32);
                    }
                    if di > 0 {
                        assert_eq!(trip.day_of_week(), di as u32 - 1);
                    }
                }

                let expected = full.iter().filter(|t| filter.matches(t)).count();
                assert_eq!(trips.len(), expected);
            }
        }
    }
}

#[test]
fn test_chicago_report() {
    let trips = load_data(&fixtures(), City::Chicago, &TripFilter::default()).unwrap();
    let report = Report::build(City::Chicago, TripFilter::default(), &trips);

    // January and June tie on two trips each, as do Monday and Thursday
    assert_eq!(report.time.most_common_month, Some(1));
    assert_eq!(report.time.most_common_day_of_week, Some(0));
    assert_eq!(report.time.most_common_hour, Some(15));

    assert_eq!(
        report.stations.most_common_start_station.as_deref(),
        Some("Wood St & Hubbard St")
    );
    assert_eq!(
        report.stations.most_common_end_station.as_deref(),
        Some("Damen Ave & Chicago Ave")
    );
    assert_eq!(
        report.stations.most_common_trip.as_deref(),
        Some("Wood St & Hubbard St -> Damen Ave & Chicago Ave")
    );

    assert_eq!(report.durations.trips, 6);
    assert_eq!(report.durations.total_secs, 3831);
    assert_eq!(report.durations.mean_secs, Some(638));

    assert_eq!(report.users.user_types[0].value, "Subscriber");
    assert_eq!(report.users.user_types[0].count, 5);

    let demographics = report.users.demographics.as_ref().unwrap();
    assert_eq!(demographics.genders[0].value, "Male");
    assert_eq!(demographics.genders[0].count, 3);
    assert_eq!(demographics.earliest_birth_year, Some(1975));
    assert_eq!(demographics.latest_birth_year, Some(1992));
    assert_eq!(demographics.most_common_birth_year, Some(1992));
}

#[test]
fn test_washington_report_has_no_demographics() {
    let trips = load_data(&fixtures(), City::Washington, &TripFilter::default()).unwrap();
    let report = Report::build(City::Washington, TripFilter::default(), &trips);

    assert!(report.users.demographics.is_none());
    assert_eq!(report.durations.total_secs, 489 + 1375 + 638 + 1827);
    assert_eq!(report.durations.mean_secs, Some(1082));
}

#[test]
fn test_empty_selection_reports_no_data() {
    let filter = TripFilter::from_names("december", "all").unwrap();
    let trips = load_data(&fixtures(), City::NewYorkCity, &filter).unwrap();
    assert!(trips.is_empty());

    let report = Report::build(City::NewYorkCity, filter, &trips);
    assert_eq!(report.time.most_common_hour, None);
    assert_eq!(report.stations.most_common_trip, None);
    assert_eq!(report.durations.mean_secs, None);
}

#[test]
fn test_interactive_session() {
    let input = "denver\nchicago\nmonth\njune\nyes\n1\nno\nyes\nwashington\nnone\nno\nno\n";
    let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());

    session::run(&mut prompter, &fixtures()).unwrap();

    let out = String::from_utf8(prompter.into_output()).unwrap();
    assert!(out.contains("City is not available"));
    assert!(out.contains("Loaded 2 trips for chicago (month: June, day: all)."));
    assert!(out.contains("Wood St & Hubbard St"));
    assert!(out.contains("Loaded 4 trips for washington (month: all, day: all)."));
    assert!(out.contains("No gender or birth year data is available for washington."));
    assert_eq!(out.matches("Calculating User Stats...").count(), 2);
    assert_eq!(out.matches("Would you like to restart?").count(), 2);
}

#[test]
fn test_interactive_session_ends_on_eof() {
    let mut prompter = Prompter::new(Cursor::new(b"chicago\n".to_vec()), Vec::new());
    session::run(&mut prompter, &fixtures()).unwrap();

    let out = String::from_utf8(prompter.into_output()).unwrap();
    assert!(!out.contains("Loaded"));
}
