//! Time units and the compact `<digits><unit-code>` offset grammar.

use std::fmt;
use std::str::FromStr;

use cal::datetime::Error;

use self::TimeUnit::*;


/// A unit of calendar or clock time, from a single second up to a whole
/// century.
///
/// Each unit has a canonical lowercase English name and a single-character
/// code used by the offset grammar. The codes are case-sensitive: `m` is a
/// minute but `M` a month, `d` a day but `D` a decade, `s` a second but
/// `S` a semester.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum TimeUnit {
    Second, Minute, Hour, Day, Week, Month,
    Quarter, Semester, Year, Decade, Century,
}

impl TimeUnit {

    /// The canonical lowercase English name of this unit.
    pub fn name(self) -> &'static str {
        match self {
            Second   => "second",    Minute  => "minute",
            Hour     => "hour",      Day     => "day",
            Week     => "week",      Month   => "month",
            Quarter  => "quarter",   Semester => "semester",
            Year     => "year",      Decade  => "decade",
            Century  => "century",
        }
    }

    /// The single-character code of this unit in the offset grammar.
    pub fn code(self) -> char {
        match self {
            Second   => 's',  Minute   => 'm',  Hour   => 'h',
            Day      => 'd',  Week     => 'w',  Month  => 'M',
            Quarter  => 'Q',  Semester => 'S',  Year   => 'Y',
            Decade   => 'D',  Century  => 'C',
        }
    }

    /// Returns the unit for the given code character.
    ///
    /// The set of codes is closed, and there is no fallback: anything
    /// outside it is an `InvalidFormat` error rather than a silent
    /// default.
    ///
    /// ### Examples
    ///
    /// ```
    /// use almanac::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::from_code('w'), Ok(TimeUnit::Week));
    /// assert!(TimeUnit::from_code('x').is_err());
    /// ```
    pub fn from_code(code: char) -> Result<Self, Error> {
        Ok(match code {
            's' => Second,   'm' => Minute,    'h' => Hour,
            'd' => Day,      'w' => Week,      'M' => Month,
            'Q' => Quarter,  'S' => Semester,  'Y' => Year,
            'D' => Decade,   'C' => Century,
             _  => return Err(Error::InvalidFormat),
        })
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// A **time offset** is a count of some time unit: ten days, three months,
/// a negative amount when pointing backwards.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct TimeOffset {
    pub amount: i64,
    pub unit:   TimeUnit,
}

impl TimeOffset {

    /// Creates a new offset of the given number of units.
    pub fn of(amount: i64, unit: TimeUnit) -> Self {
        Self { amount, unit }
    }

    /// Parses an offset from the compact `<digits><unit-code>` form, such
    /// as `"10d"` or `"3M"`.
    ///
    /// The scan is a single left-to-right pass: digits accumulate into the
    /// amount, and any other character must be a unit code. When more than
    /// one unit code appears, the last one wins; a character that is
    /// neither a digit nor a known code fails with `InvalidFormat`. The
    /// empty string parses as zero seconds — a documented default of the
    /// grammar, not an error.
    ///
    /// There is no sign and no overflow check; the grammar carries
    /// non-negative amounts only.
    ///
    /// ### Examples
    ///
    /// ```
    /// use almanac::{TimeOffset, TimeUnit};
    ///
    /// assert_eq!(TimeOffset::parse("10d"), Ok(TimeOffset::of(10, TimeUnit::Day)));
    /// assert_eq!(TimeOffset::parse("3M"), Ok(TimeOffset::of(3, TimeUnit::Month)));
    /// assert!(TimeOffset::parse("5x").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut amount = 0_i64;
        let mut unit = Second;

        for c in input.chars() {
            match c.to_digit(10) {
                Some(digit) => amount = amount * 10 + digit as i64,
                None        => unit = TimeUnit::from_code(c)?,
            }
        }

        Ok(Self { amount, unit })
    }
}

impl FromStr for TimeOffset {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl fmt::Display for TimeOffset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.code())
    }
}
