extern crate almanac;

use almanac::{DateRoll, Error, HolidayCalendar, Month, Weekday};


fn western() -> HolidayCalendar {
    HolidayCalendar::new(Weekday::Saturday, Weekday::Sunday)
}


#[test]
fn christmas_every_year() {
    let mut cal = western();
    cal.add_regular_holiday(Month::December, 25);

    for year in &[1999_i64, 2024, 2025, 2077] {
        assert!(cal.is_regular_holiday(Month::December, 25));
        assert!(cal.is_holiday(*year, Month::December, 25));
    }
}

#[test]
fn thanksgiving_2024_only() {
    let mut cal = western();
    cal.add_special_holiday(2024, Month::November, 28, "Thanksgiving");

    assert!(cal.is_holiday(2024, Month::November, 28));

    // The 29th depends only on the weekend and regular rules; it was a
    // Friday, so it’s a working day here.
    assert!(!cal.is_holiday(2024, Month::November, 29));

    // And the same date in other years is unaffected.
    assert!(!cal.is_holiday(2025, Month::November, 28));
}

#[test]
fn labels_are_retrievable_and_overwritable() {
    let mut cal = western();
    cal.add_special_holiday(2024, Month::November, 28, "Turkey Day");
    cal.add_special_holiday(2024, Month::November, 28, "Thanksgiving");

    assert_eq!(cal.special_holiday(2024, Month::November, 28), Some("Thanksgiving"));
    assert_eq!(cal.special_holiday(2023, Month::November, 28), None);
}

// Handing `is_weekend` a day of the *month* would make (say) the 6th of
// any month test as “Saturday” and the 1st never test as a weekend at
// all. The holiday query has to compute the weekday from the full date
// first; these cases pin that down.
#[test]
fn weekend_check_computes_the_weekday_first() {
    let cal = western();

    // 2024-01-06 is a Saturday: a holiday, and for the right reason.
    assert!(cal.is_holiday(2024, Month::January, 6));

    // 2024-01-01 is day 1 of the month but a Monday: a working day.
    assert!(!cal.is_holiday(2024, Month::January, 1));

    // 2024-03-10 is day 10, far outside any weekday index, but a Sunday.
    assert!(cal.is_holiday(2024, Month::March, 10));
}

#[test]
fn friday_saturday_weekends() {
    let cal = HolidayCalendar::new(Weekday::Friday, Weekday::Saturday);

    assert!(cal.is_holiday(2024, Month::January, 5));    // Friday
    assert!(cal.is_holiday(2024, Month::January, 6));    // Saturday
    assert!(!cal.is_holiday(2024, Month::January, 7));   // Sunday
}

#[test]
fn all_three_rules_combine() {
    let mut cal = western();
    cal.add_regular_holiday(Month::January, 1);
    cal.add_special_holiday(2024, Month::April, 3, "Audit day");

    assert!(cal.is_holiday(2024, Month::January, 1));    // regular
    assert!(cal.is_holiday(2024, Month::April, 3));      // special (a Wednesday)
    assert!(cal.is_holiday(2024, Month::April, 6));      // weekend
    assert!(!cal.is_holiday(2024, Month::April, 4));     // just a Thursday
}

mod rolls {
    use super::*;

    #[test]
    fn names_round_trip() {
        let rolls = [
            DateRoll::None, DateRoll::Following, DateRoll::Preceding,
            DateRoll::ModifiedFollowing, DateRoll::ModifiedPreceding,
        ];

        for roll in &rolls {
            assert_eq!(roll.name().parse::<DateRoll>(), Ok(*roll));
            assert_eq!(roll.to_string(), roll.name());
        }
    }

    #[test]
    fn unknown_names_fail() {
        assert_eq!("forward".parse::<DateRoll>(), Err(Error::InvalidFormat));
        assert_eq!("".parse::<DateRoll>(), Err(Error::InvalidFormat));
    }
}
