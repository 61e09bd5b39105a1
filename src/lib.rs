#![crate_name = "almanac"]
#![crate_type = "rlib"]
#![crate_type = "dylib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Library for [ calendar arithmetic ](https://crates.io/crates/almanac),
//! date-time formatting, and holiday calendars.
//!
//! # Examples
//!
//! ```
//! use almanac::{DateTime, Month, Weekday, HolidayCalendar, TimeOffset};
//! use almanac::fmt::format_date_time;
//!
//! let dt = DateTime::ymd_hms(2024, Month::March, 7, 9, 30, 0).unwrap();
//! assert_eq!(format_date_time(&dt, "ddd yyyy-MM-dd"), "Thu 2024-03-07");
//!
//! let offset: TimeOffset = "10d".parse().unwrap();
//! assert_eq!(offset.amount, 10);
//!
//! let mut cal = HolidayCalendar::new(Weekday::Saturday, Weekday::Sunday);
//! cal.add_regular_holiday(Month::December, 25);
//! assert!(cal.is_holiday(2024, Month::December, 25));
//! ```

extern crate libc;

pub mod cal;
pub mod math;
pub mod system;
mod util;

pub use cal::{DatePiece, TimePiece};
pub use cal::datetime::{Date, DateTime, TimeSpan, Month, Weekday, Error};
pub use cal::fmt;
pub use cal::fmt::DateFormat;
pub use cal::holiday::{Holiday, HolidayCalendar, DateRoll};
pub use cal::offset::{TimeUnit, TimeOffset};
pub use system::ClockTime;
