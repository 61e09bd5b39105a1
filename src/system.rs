//! System-dependent functions, or anything that this library is unable to
//! do without help from the OS.
//!
//! The rest of the crate never looks at the clock itself: it receives a
//! `ClockTime`, the instant already broken down into calendar fields, and
//! re-bases it to its own conventions. This module is the only place that
//! talks to the OS, and the only place with any `unsafe` in it.

#[cfg(unix)]
use std::mem;

#[cfg(unix)]
use libc;


/// A decomposed clock reading, in the fields and conventions the C
/// library’s broken-down time uses: the month is 0-based, the year counts
/// from 1900, and the yearday from 0.
///
/// `DateTime::from_clock_time` converts one of these into calendar
/// conventions, validating on the way in.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct ClockTime {

    /// Second of the minute, 0 to 59.
    pub seconds: i8,

    /// Minute of the hour, 0 to 59.
    pub minutes: i8,

    /// Hour of the day, 0 to 23.
    pub hours: i8,

    /// Day of the month, 1 to 31.
    pub day: i8,

    /// Month of the year, **0 to 11**.
    pub month: i8,

    /// Years since **1900**.
    pub year: i64,

    /// Day of the week, 0 (Sunday) to 6.
    pub weekday: i8,

    /// Day of the year, **0** to 365.
    pub yearday: i16,

    /// Whether daylight-saving time was in effect.
    pub is_dst: bool,
}

#[cfg(unix)]
impl ClockTime {
    fn from_tm(tm: &libc::tm) -> Self {
        Self {
            seconds: tm.tm_sec as i8,
            minutes: tm.tm_min as i8,
            hours:   tm.tm_hour as i8,
            day:     tm.tm_mday as i8,
            month:   tm.tm_mon as i8,
            year:    tm.tm_year as i64,
            weekday: tm.tm_wday as i8,
            yearday: tm.tm_yday as i16,
            is_dst:  tm.tm_isdst > 0,
        }
    }
}


/// Returns the system’s current time, broken down in the local time zone.
#[cfg(unix)]
pub unsafe fn sys_local_time() -> ClockTime {
    let mut timestamp: libc::time_t = 0;
    let _ = libc::time(&mut timestamp);

    let mut tm: libc::tm = mem::zeroed();
    let _ = libc::localtime_r(&timestamp, &mut tm);

    ClockTime::from_tm(&tm)
}

/// Returns the system’s current time, broken down in UTC.
#[cfg(unix)]
pub unsafe fn sys_utc_time() -> ClockTime {
    let mut timestamp: libc::time_t = 0;
    let _ = libc::time(&mut timestamp);

    let mut tm: libc::tm = mem::zeroed();
    let _ = libc::gmtime_r(&timestamp, &mut tm);

    ClockTime::from_tm(&tm)
}
