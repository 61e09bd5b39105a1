extern crate almanac;

use almanac::{ClockTime, DatePiece, DateTime, Month, TimePiece};
use almanac::math::days_in_month;


#[test]
fn every_day_of_a_leap_year_survives_the_trip() {
    for month in 1 .. 13 {
        for day in 1 ..= days_in_month(2024, month) {
            let dt = DateTime::ymd_hms(2024, Month::from_one(month).unwrap(), day, 12, 34, 56).unwrap();
            let back = DateTime::from_clock_time(&dt.to_clock_time()).unwrap();
            assert_eq!(back, dt);
        }
    }
}

#[test]
fn the_rebasing_conventions() {
    let dt = DateTime::ymd_hms(2024, Month::January, 1, 0, 0, 0).unwrap();
    let clock = dt.to_clock_time();

    // Months are 0-based, years count from 1900, yeardays from 0.
    assert_eq!(clock.month, 0);
    assert_eq!(clock.year, 124);
    assert_eq!(clock.yearday, 0);
    assert_eq!(clock.weekday, 1);  // a Monday
    assert_eq!(clock.day, 1);      // days of the month stay 1-based
}

#[test]
fn ingestion_rebases_back() {
    let clock = ClockTime {
        seconds: 30, minutes: 31, hours: 23,
        day: 13, month: 1, year: 109,
        weekday: 5, yearday: 43, is_dst: false,
    };

    let dt = DateTime::from_clock_time(&clock).unwrap();
    assert_eq!(dt.year(), 2009);
    assert_eq!(dt.month(), Month::February);
    assert_eq!(dt.day(), 13);
    assert_eq!(dt.hour(), 23);
    assert_eq!(dt.minute(), 31);
    assert_eq!(dt.second(), 30);
}

#[test]
fn garbage_clock_readings_are_rejected() {
    let clock = ClockTime {
        seconds: 0, minutes: 0, hours: 0,
        day: 31, month: 3, year: 124,  // the 31st of April
        weekday: 0, yearday: 0, is_dst: false,
    };

    assert!(DateTime::from_clock_time(&clock).is_err());

    let clock = ClockTime {
        seconds: 0, minutes: 0, hours: 0,
        day: 1, month: 12, year: 124,  // month 12 doesn't exist 0-based
        weekday: 0, yearday: 0, is_dst: false,
    };

    assert!(DateTime::from_clock_time(&clock).is_err());
}

#[cfg(unix)]
#[test]
fn the_real_clock_parses() {
    assert!(DateTime::now_utc().is_ok());
    assert!(DateTime::now_local().is_ok());
}
