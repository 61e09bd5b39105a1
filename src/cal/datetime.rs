//! Dates, date-times, time spans, months, and weekdays.

use std::error::Error as ErrorTrait;
use std::fmt;

use cal::{DatePiece, TimePiece};
use math;
use system::ClockTime;
use util::RangeExt;

use self::Month::*;
use self::Weekday::*;


/// A **date** is a single day on the Gregorian calendar: a year from 1 to
/// 9999, a month, and a day of the month.
///
/// Dates are immutable values, ordered by year, then month, then day.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct Date {
    year:  i64,
    month: Month,
    day:   i8,
}

/// A **date-time** is a date with a time of day attached, to second
/// precision. There are no sub-second fields, and no time zone.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct DateTime {
    date:   Date,
    hour:   i8,
    minute: i8,
    second: i8,
}

/// A **time span** is a length of time expressed in calendar units.
///
/// The fields are signed and deliberately *not* normalised: a span of 400
/// days stays 400 days, rather than being folded into a year and change,
/// because how long “a year and change” is depends on which year you start
/// counting from. It’s a transport value; no arithmetic is defined on it.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TimeSpan {
    pub years:   i64,
    pub months:  i64,
    pub days:    i64,
    pub hours:   i64,
    pub minutes: i64,
    pub seconds: i64,
}


impl Date {

    /// Creates a new date from the given year, month, and day fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in a combination that doesn’t exist on the calendar will
    /// return an error.
    ///
    /// ### Examples
    ///
    /// ```
    /// use almanac::{Date, Month, DatePiece};
    ///
    /// let date = Date::ymd(1969, Month::July, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(Date::ymd(2100, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        if math::validate_ymd(year, month as i8, day) {
            Ok(Self { year, month, day })
        }
        else {
            Err(Error::InvalidDate)
        }
    }

    /// Creates a new date from the given fields **without checking them**.
    ///
    /// This is the raw-component constructor: it trusts the caller, so it’s
    /// possible to build the 31st of February with it, and the calendar
    /// calculations on such a value are garbage. Use `ymd` unless the
    /// components have already been validated.
    pub fn new(year: i64, month: Month, day: i8) -> Self {
        Self { year, month, day }
    }

    /// The week number of this date, from 1 to 53.
    ///
    /// See `math::week_number` for the (approximate) reckoning used.
    pub fn week_number(&self) -> i8 {
        math::week_number(self.year, self.month as i8, self.day)
    }

    /// The Julian day number of this date.
    pub fn julian_day(&self) -> i64 {
        math::julian_day(self.year, self.month as i8, self.day)
    }

    /// The `YYYYMMDD` integer key of this date.
    ///
    /// ### Examples
    ///
    /// ```
    /// use almanac::{Date, Month};
    ///
    /// let date = Date::ymd(2024, Month::November, 28).unwrap();
    /// assert_eq!(date.date_key(), 2024_11_28);
    /// ```
    pub fn date_key(&self) -> i64 {
        math::date_key(self.year, self.month as i8, self.day)
    }

    /// Whether this date is the last day of its month.
    pub fn is_end_of_month(&self) -> bool {
        math::is_end_of_month(self.year, self.month as i8, self.day)
    }
}

impl DatePiece for Date {
    fn year(&self) -> i64 { self.year }
    fn month(&self) -> Month { self.month }
    fn day(&self) -> i8 { self.day }
}

impl fmt::Debug for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Date({:04}-{:02}-{:02})", self.year, self.month as i8, self.day)
    }
}


impl DateTime {

    /// Creates a new date-time from a date and the given time-of-day
    /// fields.
    ///
    /// The time fields are checked for validity before instantiation, and
    /// passing in values out of range will return an error. The date is
    /// trusted, having been checked by its own constructor.
    pub fn new(date: Date, hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        if hour.is_within(0 .. 24) && minute.is_within(0 .. 60) && second.is_within(0 .. 60) {
            Ok(Self { date, hour, minute, second })
        }
        else {
            Err(Error::InvalidDate)
        }
    }

    /// Creates a new date-time at midnight on the given date.
    ///
    /// This is the `Date` → `DateTime` direction of the lossless
    /// conversion pair; `date` is the other.
    pub fn midnight(date: Date) -> Self {
        Self { date, hour: 0, minute: 0, second: 0 }
    }

    /// Creates a new date-time from the six individual fields, checking
    /// all of them.
    ///
    /// ### Examples
    ///
    /// ```
    /// use almanac::{DateTime, Month, TimePiece};
    ///
    /// let dt = DateTime::ymd_hms(2024, Month::March, 7, 9, 30, 0).unwrap();
    /// assert_eq!(dt.hour(), 9);
    ///
    /// assert!(DateTime::ymd_hms(2024, Month::March, 7, 24, 0, 0).is_err());
    /// ```
    pub fn ymd_hms(year: i64, month: Month, day: i8, hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        Self::new(Date::ymd(year, month, day)?, hour, minute, second)
    }

    /// Returns the date portion of this date-time, dropping the time of
    /// day.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Converts a decomposed clock reading into a date-time, re-basing the
    /// clock’s 0-based month and 1900-based year to calendar conventions.
    ///
    /// The result is validated, because a clock reading is outside input
    /// like any other.
    pub fn from_clock_time(clock: &ClockTime) -> Result<Self, Error> {
        let month = Month::from_zero(clock.month)?;
        Self::ymd_hms(clock.year + 1900, month, clock.day,
                      clock.hours, clock.minutes, clock.seconds)
    }

    /// Converts this date-time back to the decomposed clock form, deriving
    /// the weekday and yearday fields on the way out.
    pub fn to_clock_time(&self) -> ClockTime {
        ClockTime {
            seconds: self.second,
            minutes: self.minute,
            hours:   self.hour,
            day:     self.date.day,
            month:   self.date.month as i8 - 1,
            year:    self.date.year - 1900,
            weekday: math::day_of_week(self.date.year, self.date.month as i8, self.date.day),
            yearday: math::day_of_year(self.date.year, self.date.month as i8, self.date.day) - 1,
            is_dst:  false,
        }
    }

    /// Creates a new date-time set to the current local time.
    #[cfg(unix)]
    pub fn now_local() -> Result<Self, Error> {
        let clock = unsafe { ::system::sys_local_time() };
        Self::from_clock_time(&clock)
    }

    /// Creates a new date-time set to the current UTC time.
    #[cfg(unix)]
    pub fn now_utc() -> Result<Self, Error> {
        let clock = unsafe { ::system::sys_utc_time() };
        Self::from_clock_time(&clock)
    }
}

impl DatePiece for DateTime {
    fn year(&self) -> i64 { self.date.year }
    fn month(&self) -> Month { self.date.month }
    fn day(&self) -> i8 { self.date.day }
}

impl TimePiece for DateTime {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
}

impl From<Date> for DateTime {
    fn from(date: Date) -> Self {
        Self::midnight(date)
    }
}

impl fmt::Debug for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DateTime({:04}-{:02}-{:02}T{:02}:{:02}:{:02})",
               self.date.year, self.date.month as i8, self.date.day,
               self.hour, self.minute, self.second)
    }
}


impl TimeSpan {

    /// Creates a new time span with the given calendar-unit lengths.
    pub fn new(years: i64, months: i64, days: i64, hours: i64, minutes: i64, seconds: i64) -> Self {
        Self { years, months, days, hours, minutes, seconds }
    }

    /// Creates a new zero-length time span.
    pub fn zero() -> Self {
        Self::new(0, 0, 0, 0, 0, 0)
    }
}


/// An error that can occur when building or parsing calendar values.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {

    /// The year, month, and day don’t combine into a real calendar date,
    /// or a time-of-day field is out of range.
    InvalidDate,

    /// A string being parsed doesn’t follow its grammar.
    InvalidFormat,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidDate   => write!(f, "no such date on the calendar"),
            Error::InvalidFormat => write!(f, "string does not follow the expected format"),
        }
    }
}

impl ErrorTrait for Error {
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i8` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            January   => 31, February  => if leap_year { 29 } else { 28 },
            March     => 31, April     => 30,
            May       => 31, June      => 30,
            July      => 31, August    => 31,
            September => 30, October   => 31,
            November  => 30, December  => 31,
        }
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use almanac::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self, Error> {
        Ok(match month {
             1 => January,   2 => February,   3 => March,
             4 => April,     5 => May,        6 => June,
             7 => July,      8 => August,     9 => September,
            10 => October,  11 => November,  12 => December,
             _ => return Err(Error::InvalidDate),
        })
    }

    /// Returns the month based on a number, with January as **Month 0**,
    /// February as **Month 1**, and so on. This is the convention the
    /// system clock reports months in.
    ///
    /// ```rust
    /// use almanac::Month;
    /// assert_eq!(Month::from_zero(5), Ok(Month::June));
    /// assert!(Month::from_zero(12).is_err());
    /// ```
    pub fn from_zero(month: i8) -> Result<Self, Error> {
        Ok(match month {
            0 => January,   1 => February,   2 => March,
            3 => April,     4 => May,        5 => June,
            6 => July,      7 => August,     8 => September,
            9 => October,  10 => November,  11 => December,
            _ => return Err(Error::InvalidDate),
        })
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

// Sunday is Day 0, matching the index that Zeller’s congruence hands back
// and the index the system clock reports. There’s no Ord instance because
// there’s no real standard as to whether Sunday should come before Monday,
// or the other way around.

impl Weekday {

    /// Return the weekday based on a number, with Sunday as Day 0, Monday
    /// as Day 1, and so on.
    ///
    /// ```rust
    /// use almanac::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: i8) -> Result<Self, Error> {
        Ok(match weekday {
            0 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            6 => Saturday,   _ => return Err(Error::InvalidDate),
        })
    }
}
