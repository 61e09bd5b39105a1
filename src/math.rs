//! Pure calendar arithmetic: leap years, weekdays, day counts, and the
//! various external date numbering schemes.
//!
//! Everything in this module is a closed-form calculation over plain year,
//! month, and day numbers, with months running from 1 (January) to 12
//! (December) and weekdays from 0 (Sunday) to 6 (Saturday).
//!
//! None of these functions validate their input. `validate_ymd` exists for
//! exactly that purpose, and the datestamp constructors in `cal` call it
//! before anything else; the calculations themselves trust their caller
//! and produce garbage for out-of-range values rather than failing. Run
//! `validate_ymd` first if the components come from outside.

/// The length of each month in a non-leap year, January first.
const MONTH_LENGTHS: [i8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];


/// Returns whether the given year is a leap year: divisible by 4, except
/// for century years not divisible by 400.
///
/// ### Examples
///
/// ```
/// use almanac::math::is_leap_year;
///
/// assert_eq!(is_leap_year(2000), true);
/// assert_eq!(is_leap_year(1900), false);
/// assert_eq!(is_leap_year(2024), true);
/// ```
pub fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given month of the given year,
/// taking February’s leap day into account.
///
/// The month must be in the range 1 to 12.
pub fn days_in_month(year: i64, month: i8) -> i8 {
    if month == 2 && is_leap_year(year) {
        29
    }
    else {
        MONTH_LENGTHS[month as usize - 1]
    }
}

/// Calculates the day of the year, from 1 to 366, for the given date.
///
/// The month must be in the range 1 to 12; this is a precondition, not
/// something that gets checked here.
///
/// ### Examples
///
/// ```
/// use almanac::math::day_of_year;
///
/// assert_eq!(day_of_year(2024, 1, 1), 1);
/// assert_eq!(day_of_year(2024, 3, 1), 61);
/// assert_eq!(day_of_year(2024, 12, 31), 366);
/// ```
pub fn day_of_year(year: i64, month: i8, day: i8) -> i16 {
    let mut total = 0_i16;

    for length in &MONTH_LENGTHS[.. month as usize - 1] {
        total += *length as i16;
    }

    if month > 2 && is_leap_year(year) {
        total += 1;
    }

    total + day as i16
}

/// Calculates the day of the week for the given date, with Sunday as day 0
/// and Saturday as day 6, using Zeller’s congruence.
///
/// January and February are counted as months 13 and 14 of the previous
/// year, which is the shift that makes Zeller’s formula work: the leap day,
/// if there is one, ends up at the very end of the shifted year, where it
/// can’t disturb the arithmetic for the months before it.
///
/// ### Examples
///
/// ```
/// use almanac::math::day_of_week;
///
/// assert_eq!(day_of_week(2024, 1, 1), 1);   // a Monday
/// assert_eq!(day_of_week(2024, 2, 29), 4);  // a Thursday
/// ```
pub fn day_of_week(year: i64, month: i8, day: i8) -> i8 {
    let (y, m) = if month < 3 { (year - 1, month as i64 + 12) }
                         else { (year, month as i64) };

    let k = y % 100;
    let j = y / 100;

    let mut h = (day as i64 + (13 * (m + 1)) / 5 + k + k / 4 + j / 4 - 2 * j) % 7;
    if h <= 0 {
        h += 7;
    }

    ((h + 6) % 7) as i8
}

/// Calculates the week number, from 1 to 53, for the given date.
///
/// This is an approximation of the ISO-8601 week: it divides the year into
/// weeks starting from the weekday of the 1st of January, and dates falling
/// on or after the 29th of December that land past week 52 are counted as
/// week 1 of the following year. It does *not* implement the full ISO
/// “Thursday rule”, so dates at the very edges of a year can disagree with
/// a strict ISO-8601 reckoning.
pub fn week_number(year: i64, month: i8, day: i8) -> i8 {
    let jan_1 = day_of_week(year, 1, 1);
    let week = (day_of_year(year, month, day) as i64 + 6 + jan_1 as i64) / 7;

    if week > 52 && month == 12 && day >= 29 {
        1
    }
    else {
        week as i8
    }
}

/// Converts the given date to its Julian day number, the continuous count
/// of days used for calendar arithmetic across month and year boundaries.
///
/// ### Examples
///
/// ```
/// use almanac::math::julian_day;
///
/// assert_eq!(julian_day(2000, 1, 1), 2_451_545);
/// ```
pub fn julian_day(year: i64, month: i8, day: i8) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year + 4800 - a;
    let m = month as i64 + 12 * a - 3;

    day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Converts the given date to its date key, the integer `YYYYMMDD`
/// encoding.
///
/// Date keys are strictly monotonic with calendar order for valid dates,
/// which makes them usable as sort keys and map keys, and they survive
/// being written out and read back by other processes.
///
/// ### Examples
///
/// ```
/// use almanac::math::date_key;
///
/// assert_eq!(date_key(2024, 11, 28), 2024_11_28);
/// ```
pub fn date_key(year: i64, month: i8, day: i8) -> i64 {
    year * 10000 + month as i64 * 100 + day as i64
}

/// Converts the given date and time of day to a spreadsheet-style serial
/// date: the Julian day number as a float, with the time of day as the
/// fractional part.
///
/// No adjustment is made for the historical leap-year bug that real
/// spreadsheets carry around.
pub fn excel_serial_date(year: i64, month: i8, day: i8, hour: i8, minute: i8, second: i8) -> f64 {
    julian_day(year, month, day) as f64
        + hour as f64 / 24.0
        + minute as f64 / 1440.0
        + second as f64 / 86400.0
}

/// Returns whether the given year, month, and day form a real calendar
/// date: the year within 1 to 9999, the month within 1 to 12, and the day
/// no greater than the month’s length for that year.
///
/// ### Examples
///
/// ```
/// use almanac::math::validate_ymd;
///
/// assert_eq!(validate_ymd(2024, 2, 29), true);
/// assert_eq!(validate_ymd(2023, 2, 29), false);
/// assert_eq!(validate_ymd(2024, 13, 1), false);
/// ```
pub fn validate_ymd(year: i64, month: i8, day: i8) -> bool {
    if year < 1 || year > 9999 || month < 1 || month > 12 || day < 1 || day > 31 {
        return false;
    }

    day <= days_in_month(year, month)
}

/// Returns whether the given day is the last day of its month, taking
/// February’s leap day into account.
pub fn is_end_of_month(year: i64, month: i8, day: i8) -> bool {
    day == days_in_month(year, month)
}


#[cfg(test)]
mod test {
    use super::*;

    mod leap_years {
        use super::*;

        #[test]
        fn centuries() {
            assert!(is_leap_year(1600));
            assert!(!is_leap_year(1700));
            assert!(!is_leap_year(1800));
            assert!(!is_leap_year(1900));
            assert!(is_leap_year(2000));
        }

        #[test]
        fn ordinary_years() {
            assert!(is_leap_year(2024));
            assert!(!is_leap_year(2025));
            assert!(!is_leap_year(2023));
        }
    }

    mod days_of_year {
        use super::*;

        #[test]
        fn around_the_leap_day() {
            assert_eq!(day_of_year(2024, 2, 29), 60);
            assert_eq!(day_of_year(2024, 3, 1), 61);
            assert_eq!(day_of_year(2023, 3, 1), 60);
        }

        #[test]
        fn year_ends() {
            assert_eq!(day_of_year(2024, 12, 31), 366);
            assert_eq!(day_of_year(2023, 12, 31), 365);
        }
    }

    mod weekdays {
        use super::*;

        #[test]
        fn fixtures() {
            assert_eq!(day_of_week(2024, 1, 1), 1);
            assert_eq!(day_of_week(2024, 1, 31), 3);
            assert_eq!(day_of_week(2024, 2, 29), 4);
            assert_eq!(day_of_week(2024, 12, 31), 2);
        }

        #[test]
        fn january_shift() {
            // The Jan/Feb-to-previous-year shift has to hold up right at
            // the year boundary.
            assert_eq!(day_of_week(2023, 12, 31), 0);
            assert_eq!(day_of_week(2024, 1, 1), 1);
        }

        #[test]
        fn sequential() {
            let mut previous = day_of_week(2024, 6, 1);
            for day in 2 .. 31 {
                let next = day_of_week(2024, 6, day);
                assert_eq!(next, (previous + 1) % 7);
                previous = next;
            }
        }
    }

    mod week_numbers {
        use super::*;

        #[test]
        fn first_and_last() {
            assert_eq!(week_number(2024, 1, 1), 1);
            assert_eq!(week_number(2024, 12, 31), 1);
        }

        #[test]
        fn midyear() {
            assert_eq!(week_number(2024, 7, 1), 27);
        }
    }

    mod julian_days {
        use super::*;

        #[test]
        fn known_epochs() {
            assert_eq!(julian_day(2000, 1, 1), 2_451_545);
            assert_eq!(julian_day(1970, 1, 1), 2_440_588);
        }

        #[test]
        fn consecutive() {
            assert_eq!(julian_day(2024, 2, 29), julian_day(2024, 2, 28) + 1);
            assert_eq!(julian_day(2024, 3, 1), julian_day(2024, 2, 29) + 1);
        }
    }

    mod month_lengths {
        use super::*;

        #[test]
        fn february() {
            assert_eq!(days_in_month(2024, 2), 29);
            assert_eq!(days_in_month(2023, 2), 28);
        }

        #[test]
        fn ends() {
            assert!(is_end_of_month(2024, 2, 29));
            assert!(!is_end_of_month(2024, 2, 28));
            assert!(is_end_of_month(2023, 2, 28));
            assert!(is_end_of_month(2024, 4, 30));
        }
    }

    mod serials {
        use super::*;

        #[test]
        fn midnight_is_whole() {
            assert_eq!(excel_serial_date(2000, 1, 1, 0, 0, 0), 2_451_545.0);
        }

        #[test]
        fn noon_is_half() {
            assert_eq!(excel_serial_date(2000, 1, 1, 12, 0, 0), 2_451_545.5);
        }
    }
}
