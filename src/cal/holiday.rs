//! Holiday calendars: weekend rules, recurring holidays, and one-off
//! dated holidays, with the membership queries over them.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use cal::datetime::{Error, Month, Weekday};
use math;

use self::DateRoll::*;


/// A **regular holiday** recurs on the same month and day every year, like
/// the 25th of December.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Holiday {
    pub month: Month,
    pub day:   i8,
}


/// A **holiday calendar** owns a weekend rule, a list of regular holidays,
/// and a set of labelled one-off holidays, and answers whether any given
/// date is a working day.
///
/// The calendar is a plain owned value: create one, add holidays to it,
/// pass it to whatever needs it. There’s no global instance and no
/// internal locking; if a calendar is shared across threads, the holder
/// has to serialise additions against queries itself.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct HolidayCalendar {
    regular: Vec<Holiday>,
    special: HashMap<i64, String>,
    weekend: (Weekday, Weekday),
}

impl HolidayCalendar {

    /// Creates a new empty calendar with the given two weekend days.
    ///
    /// ### Examples
    ///
    /// ```
    /// use almanac::{HolidayCalendar, Weekday};
    ///
    /// let cal = HolidayCalendar::new(Weekday::Saturday, Weekday::Sunday);
    /// assert!(cal.is_weekend(Weekday::Sunday));
    /// assert!(!cal.is_weekend(Weekday::Wednesday));
    /// ```
    pub fn new(first: Weekday, second: Weekday) -> Self {
        Self {
            regular: Vec::new(),
            special: HashMap::new(),
            weekend: (first, second),
        }
    }

    /// Adds a holiday that recurs on the same month and day every year.
    ///
    /// Duplicates are kept as they come; adding Christmas twice is
    /// harmless, as the queries only ask whether at least one entry
    /// matches.
    pub fn add_regular_holiday(&mut self, month: Month, day: i8) {
        self.regular.push(Holiday { month, day });
    }

    /// Adds a labelled holiday tied to one specific date. Adding a second
    /// label for the same date replaces the first.
    pub fn add_special_holiday(&mut self, year: i64, month: Month, day: i8, label: &str) {
        let key = math::date_key(year, month as i8, day);
        let _ = self.special.insert(key, label.to_owned());
    }

    /// Returns whether the given weekday falls on the weekend under this
    /// calendar’s rule.
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        weekday == self.weekend.0 || weekday == self.weekend.1
    }

    /// Returns whether the given month and day match a regular holiday, in
    /// any year.
    pub fn is_regular_holiday(&self, month: Month, day: i8) -> bool {
        self.regular.iter().any(|h| h.month == month && h.day == day)
    }

    /// Returns the label of the special holiday on the given date, if
    /// there is one.
    pub fn special_holiday(&self, year: i64, month: Month, day: i8) -> Option<&str> {
        let key = math::date_key(year, month as i8, day);
        self.special.get(&key).map(|label| &label[..])
    }

    /// Returns whether the given date is a non-working day: a weekend day,
    /// a special holiday, or a regular holiday.
    ///
    /// The weekend test runs on the date’s *weekday*, computed through
    /// Zeller’s congruence — not on its day of the month.
    ///
    /// ### Examples
    ///
    /// ```
    /// use almanac::{HolidayCalendar, Month, Weekday};
    ///
    /// let mut cal = HolidayCalendar::new(Weekday::Saturday, Weekday::Sunday);
    /// cal.add_regular_holiday(Month::December, 25);
    ///
    /// assert!(cal.is_holiday(2024, Month::December, 25));
    /// assert!(cal.is_holiday(2024, Month::December, 22));   // a Sunday
    /// assert!(!cal.is_holiday(2024, Month::December, 23));  // a working Monday
    /// ```
    pub fn is_holiday(&self, year: i64, month: Month, day: i8) -> bool {
        // Zeller’s congruence always lands in 0..7.
        let weekday = Weekday::from_zero(math::day_of_week(year, month as i8, day))
                              .unwrap_or(Weekday::Sunday);

        self.is_weekend(weekday)
            || self.special.contains_key(&math::date_key(year, month as i8, day))
            || self.is_regular_holiday(month, day)
    }
}


/// A business-day adjustment policy: what to do with a date that lands on
/// a non-working day.
///
/// Only the representation lives here — the names round-trip through
/// strings for configuration, but applying a policy to a calendar is out
/// of this crate’s scope.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum DateRoll {

    /// Leave the date where it is.
    None,

    /// Move forward to the next business day.
    Following,

    /// Move back to the previous business day.
    Preceding,

    /// Move forward, unless that crosses into the next month, in which
    /// case move back.
    ModifiedFollowing,

    /// Move back, unless that crosses into the previous month, in which
    /// case move forward.
    ModifiedPreceding,
}

impl DateRoll {

    /// The canonical name of this policy, as used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            None              => "none",
            Following         => "following",
            Preceding         => "preceding",
            ModifiedFollowing => "modifiedfollowing",
            ModifiedPreceding => "modifiedpreceding",
        }
    }
}

impl fmt::Display for DateRoll {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DateRoll {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(match input {
            "none"              => None,
            "following"         => Following,
            "preceding"         => Preceding,
            "modifiedfollowing" => ModifiedFollowing,
            "modifiedpreceding" => ModifiedPreceding,
            _                   => return Err(Error::InvalidFormat),
        })
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn weekend_only() -> HolidayCalendar {
        HolidayCalendar::new(Weekday::Saturday, Weekday::Sunday)
    }

    #[test]
    fn empty_calendar_has_weekends() {
        let cal = weekend_only();
        assert!(cal.is_holiday(2024, Month::January, 6));   // Saturday
        assert!(cal.is_holiday(2024, Month::January, 7));   // Sunday
        assert!(!cal.is_holiday(2024, Month::January, 8));  // Monday
    }

    #[test]
    fn regular_holidays_recur() {
        let mut cal = weekend_only();
        cal.add_regular_holiday(Month::December, 25);

        for year in &[1999, 2024, 2025, 2100] {
            assert!(cal.is_regular_holiday(Month::December, 25));
            assert!(cal.is_holiday(*year, Month::December, 25));
        }
        assert!(!cal.is_regular_holiday(Month::December, 26));
    }

    #[test]
    fn duplicates_are_kept() {
        let mut cal = weekend_only();
        cal.add_regular_holiday(Month::December, 25);
        cal.add_regular_holiday(Month::December, 25);
        assert!(cal.is_regular_holiday(Month::December, 25));
    }

    #[test]
    fn special_holidays_are_year_specific() {
        let mut cal = weekend_only();
        cal.add_special_holiday(2024, Month::November, 28, "Thanksgiving");

        assert!(cal.is_holiday(2024, Month::November, 28));
        assert_eq!(cal.special_holiday(2024, Month::November, 28), Some("Thanksgiving"));

        // The same date a year on is only a holiday if the weekend or a
        // regular holiday says so; 2025-11-28 is a working Friday.
        assert!(!cal.is_holiday(2025, Month::November, 28));
        assert_eq!(cal.special_holiday(2025, Month::November, 28), Option::None);
    }

    #[test]
    fn last_label_wins() {
        let mut cal = weekend_only();
        cal.add_special_holiday(2024, Month::November, 28, "Thursday Off");
        cal.add_special_holiday(2024, Month::November, 28, "Thanksgiving");
        assert_eq!(cal.special_holiday(2024, Month::November, 28), Some("Thanksgiving"));
    }

    #[test]
    fn weekend_test_uses_the_weekday() {
        // 2024-01-06 is a Saturday even though 6 is no weekday index; the
        // weekend check has to run on the computed weekday, not the day
        // of the month.
        let cal = weekend_only();
        assert!(cal.is_holiday(2024, Month::January, 6));
        assert!(!cal.is_holiday(2024, Month::January, 3));  // a Wednesday
    }

    #[test]
    fn unusual_weekends() {
        let cal = HolidayCalendar::new(Weekday::Friday, Weekday::Saturday);
        assert!(cal.is_holiday(2024, Month::January, 5));   // Friday
        assert!(!cal.is_holiday(2024, Month::January, 7));  // Sunday
    }

    mod rolls {
        use super::*;

        #[test]
        fn round_trip() {
            for roll in &[None, Following, Preceding, ModifiedFollowing, ModifiedPreceding] {
                assert_eq!(roll.name().parse(), Ok(*roll));
            }
        }

        #[test]
        fn unknown_name() {
            assert_eq!("sideways".parse::<DateRoll>(), Err(Error::InvalidFormat));
        }
    }
}
