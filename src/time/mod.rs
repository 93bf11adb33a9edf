//! Calendar timestamps and Julian Day conversion
//!
//! The Julian Day is the continuous time scale every other computation in
//! this crate runs on: a real number of days, increasing monotonically with
//! calendar time, with JD 2451545.0 at the J2000.0 epoch (2000-01-01 12:00
//! UT). Conversion from a calendar date uses the integer Gregorian-calendar
//! formula (Fliegel–Van Flandern), with the time of day folded in as a
//! fraction centered on noon.
//!
//! Calendar fields are interpreted in Universal Time and are not validated:
//! an out-of-range day still yields a well-defined (if meaningless) Julian
//! Day. The proleptic Gregorian calendar is assumed for all dates.

use crate::constants::{DAY_MS, J2000, JULIAN_CENTURY_DAYS, UNIX_EPOCH_JD};
use crate::{EclipticaError, Result};
use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Calendar tuple for representing a date and time in Universal Time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarTuple {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CalendarTuple {
    /// Create a calendar timestamp from explicit fields.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Create a calendar timestamp at 00:00:00 UT on the given date.
    pub fn from_date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }
}

impl From<DateTime<Utc>> for CalendarTuple {
    fn from(dt: DateTime<Utc>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 / 1_000_000_000.0,
        }
    }
}

/// Julian day number (noon-based) for a proleptic Gregorian calendar date.
///
/// January and February are shifted into the preceding year before the
/// integer formula is applied.
fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let janfeb = if month <= 2 { 1i64 } else { 0i64 };
    let y = year as i64 + 4800 - janfeb;
    let m = month as i64 - 2 + 12 * janfeb;

    1461 * y / 4 + 367 * m / 12 - 3 * ((year as i64 + 4900 - janfeb) / 100) / 4 - 32075
        + day as i64
}

/// Convert a calendar timestamp to a Julian Day.
///
/// The fractional day is centered on noon, so 2000-01-01T12:00:00 UT maps to
/// exactly 2451545.0 (the J2000.0 epoch). Total over all representable
/// inputs; invalid calendar fields are not rejected.
pub fn julian_day(cal: &CalendarTuple) -> f64 {
    let jdn = julian_day_number(cal.year, cal.month, cal.day) as f64;
    jdn + (cal.hour as f64 - 12.0) / 24.0 + cal.minute as f64 / 1440.0 + cal.second / 86_400.0
}

/// Convert a chrono UTC instant to a Julian Day.
pub fn julian_day_from_datetime(dt: &DateTime<Utc>) -> f64 {
    julian_day(&CalendarTuple::from(*dt))
}

/// Convert a Julian Day to a chrono UTC instant, by way of the Unix epoch
/// offset (JD 2440587.5), rounded to the nearest millisecond.
pub fn datetime_from_julian_day(jd: f64) -> Result<DateTime<Utc>> {
    let millis = ((jd - UNIX_EPOCH_JD) * DAY_MS).round() as i64;
    DateTime::<Utc>::from_timestamp_millis(millis).ok_or(EclipticaError::InstantOutOfRange(jd))
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000) / JULIAN_CENTURY_DAYS
}
