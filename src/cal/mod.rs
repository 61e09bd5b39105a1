//! Gregorian calendar values and the operations over them: dates,
//! date-times, time-unit offsets, formatting, and holiday calendars.

pub mod datetime;
pub mod fmt;
pub mod holiday;
pub mod offset;

use math;

use self::datetime::{Month, Weekday};


/// The **date piece** trait is used for date and time values that have
/// date components of years, months, and days.
///
/// The derived pieces — the weekday, the day of the year, and so on — have
/// provided implementations that calculate them on demand from the three
/// stored components, so a type only has to say where its year, month, and
/// day live.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    fn year(&self) -> i64;

    /// The month of the year.
    fn month(&self) -> Month;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> i8;

    /// The day of the year, from 1 to 366.
    fn yearday(&self) -> i16 {
        math::day_of_year(self.year(), self.month() as i8, self.day())
    }

    /// The day of the week.
    fn weekday(&self) -> Weekday {
        // Zeller’s congruence always lands in 0..7, so the conversion
        // can’t actually fail.
        Weekday::from_zero(math::day_of_week(self.year(), self.month() as i8, self.day()))
                .unwrap_or(Weekday::Sunday)
    }

    /// The number of years into the century.
    /// This is the same as the last two digits of the year.
    fn year_of_century(&self) -> i64 { self.year() % 100 }
}


/// The **time piece** trait is used for date and time values that have
/// time components of hours, minutes, and seconds.
pub trait TimePiece {

    /// The hour of the day.
    fn hour(&self) -> i8;

    /// The minute of the hour.
    fn minute(&self) -> i8;

    /// The second of the minute.
    fn second(&self) -> i8;
}
