//! Datetime-to-string routines: the pattern tokens, and the engine that
//! substitutes them.
//!
//! A pattern is scanned left to right, longest token first at each
//! position, so at a `d` the scanner tries `ddd` before `dd`. Characters
//! that don’t start a token pass through as literals, which is what makes
//! mixed patterns like `"yyyy-MM-dd hh:mm:ss"` work.
//!
//! | Token  | Output                                    |
//! |--------|-------------------------------------------|
//! | `yyyy` | four-digit year, zero-padded              |
//! | `yy`   | last two digits of the year               |
//! | `MMM`  | three-letter English month abbreviation   |
//! | `MM`   | two-digit month, zero-padded              |
//! | `ddd`  | three-letter English weekday abbreviation |
//! | `dd`   | two-digit day, zero-padded                |
//! | `hh`   | two-digit hour, 24-hour clock             |
//! | `mm`   | two-digit minute                          |
//! | `ss`   | two-digit second                          |
//!
//! Numeric fields are truncated to their digit width, so a year past 9999
//! prints only its low four digits. This is a known limitation of the
//! positional digit extraction, kept rather than silently widened.

use cal::{DatePiece, TimePiece};
use math;


/// The three-letter month abbreviations, concatenated; the slice for month
/// *m* starts at `(m - 1) * 3`.
const MONTH_NAMES: &'static str = "JanFebMarAprMayJunJulAugSepOctNovDec";

/// The three-letter weekday abbreviations, concatenated, Sunday first.
const WEEKDAY_NAMES: &'static str = "SunMonTueWedThuFriSat";


/// One piece of a parsed pattern: either a literal run of characters, or a
/// field to be substituted.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Field<'a> {
    Literal(&'a str),

    Year,
    YearOfCentury,

    MonthName,
    Month,

    WeekdayName,
    Day,

    Hour,
    Minute,
    Second,
}

impl<'a> Field<'a> {
    fn format<T>(&self, when: &T, w: &mut Vec<u8>) where T: DatePiece + TimePiece {
        match *self {
            Field::Literal(s)    => w.extend_from_slice(s.as_bytes()),
            Field::Year          => push_digits(w, when.year(), 4),
            Field::YearOfCentury => push_digits(w, when.year(), 2),
            Field::MonthName     => push_name(w, MONTH_NAMES, when.month() as usize - 1),
            Field::Month         => push_digits(w, when.month() as i64, 2),
            Field::WeekdayName   => {
                let weekday = math::day_of_week(when.year(), when.month() as i8, when.day());
                push_name(w, WEEKDAY_NAMES, weekday as usize);
            },
            Field::Day           => push_digits(w, when.day() as i64, 2),
            Field::Hour          => push_digits(w, when.hour() as i64, 2),
            Field::Minute        => push_digits(w, when.minute() as i64, 2),
            Field::Second        => push_digits(w, when.second() as i64, 2),
        }
    }
}

/// Writes the given value as exactly `width` decimal digits, most
/// significant first.
///
/// The value is truncated to its low `width` digits first, which both
/// keeps over-wide values from spilling into neighbouring fields and keeps
/// the digit extraction away from negative remainders.
fn push_digits(w: &mut Vec<u8>, value: i64, width: u32) {
    let value = value.rem_euclid(10_i64.pow(width));

    let mut divisor = 10_i64.pow(width - 1);
    while divisor > 0 {
        w.push(b'0' + ((value / divisor) % 10) as u8);
        divisor /= 10;
    }
}

/// Writes the three-letter abbreviation at the given index of one of the
/// concatenated name tables.
fn push_name(w: &mut Vec<u8>, names: &str, index: usize) {
    w.extend_from_slice(&names.as_bytes()[index * 3 .. index * 3 + 3]);
}


/// A parsed pattern, ready to format any number of date-times.
///
/// The literal fields borrow slices of the original pattern string, so a
/// `DateFormat` shares its lifetime; parse once and reuse it when the same
/// pattern gets applied repeatedly.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct DateFormat<'a> {
    pub fields: Vec<Field<'a>>,
    pattern_len: usize,
}

impl<'a> DateFormat<'a> {

    /// Parses a pattern into its fields. This can’t fail: any character
    /// that doesn’t begin a known token is a literal, and consecutive
    /// literal characters are collected into a single borrowed slice.
    pub fn parse(pattern: &'a str) -> DateFormat<'a> {
        let mut fields = Vec::new();
        let mut anchor = None;
        let mut i = 0;

        while i < pattern.len() {
            let rest = &pattern[i ..];

            // Longest token first at each position, and a token only
            // matches if the whole of it is still there.
            let token = if rest.starts_with("yyyy") { Some((Field::Year, 4)) }
                   else if rest.starts_with("yy")   { Some((Field::YearOfCentury, 2)) }
                   else if rest.starts_with("MMM")  { Some((Field::MonthName, 3)) }
                   else if rest.starts_with("MM")   { Some((Field::Month, 2)) }
                   else if rest.starts_with("ddd")  { Some((Field::WeekdayName, 3)) }
                   else if rest.starts_with("dd")   { Some((Field::Day, 2)) }
                   else if rest.starts_with("hh")   { Some((Field::Hour, 2)) }
                   else if rest.starts_with("mm")   { Some((Field::Minute, 2)) }
                   else if rest.starts_with("ss")   { Some((Field::Second, 2)) }
                   else { None };

            match token {
                Some((field, length)) => {
                    if let Some(pos) = anchor.take() {
                        fields.push(Field::Literal(&pattern[pos .. i]));
                    }
                    fields.push(field);
                    i += length;
                },
                None => {
                    if anchor.is_none() {
                        anchor = Some(i);
                    }
                    // Tokens are all ASCII, but literals needn’t be, so
                    // step over the whole character.
                    i += rest.chars().next().map_or(1, |c| c.len_utf8());
                },
            }
        }

        // Collect any literal characters after the last field.
        if let Some(pos) = anchor {
            fields.push(Field::Literal(&pattern[pos ..]));
        }

        DateFormat { fields, pattern_len: pattern.len() }
    }

    /// Formats the given date-time value, returning a freshly-allocated
    /// string that the caller owns.
    ///
    /// One buffer is allocated per call, sized to the pattern length up
    /// front; the multi-letter tokens can only keep the output the same
    /// length or shorter, so it never reallocates for all-token patterns.
    pub fn format<T>(&self, when: &T) -> String where T: DatePiece + TimePiece {
        let mut buf = Vec::with_capacity(self.pattern_len);

        for field in &self.fields {
            field.format(when, &mut buf);
        }

        String::from_utf8(buf).unwrap()  // Assume UTF-8
    }
}


/// Parses the pattern and formats the value in one go. For repeated use of
/// one pattern, parse a `DateFormat` once instead.
///
/// ### Examples
///
/// ```
/// use almanac::{DateTime, Month};
/// use almanac::fmt::format_date_time;
///
/// let dt = DateTime::ymd_hms(2024, Month::March, 7, 9, 30, 5).unwrap();
/// assert_eq!(format_date_time(&dt, "yyyy-MM-dd"), "2024-03-07");
/// assert_eq!(format_date_time(&dt, "hh:mm:ss"), "09:30:05");
/// ```
pub fn format_date_time<T>(when: &T, pattern: &str) -> String where T: DatePiece + TimePiece {
    DateFormat::parse(pattern).format(when)
}
