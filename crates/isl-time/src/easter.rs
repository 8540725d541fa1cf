//! Easter Sunday via the anonymous Gregorian computus.
//!
//! This is the Meeus/Jones/Butcher algorithm, published in *Nature* in 1876.
//! It is a fixed sequence of integer divisions over the year and yields a
//! Sunday between March 22 and April 25 inclusive.  The algorithm is only
//! valid for the Gregorian calendar, so years before [`MIN_EASTER_YEAR`]
//! are rejected with [`Error::Domain`].

use crate::date::Date;
use isl_core::errors::{Error, Result};

/// First year for which [`easter_sunday`] is defined.
pub const MIN_EASTER_YEAR: u16 = 1583;

/// Return the `(month, day)` of Easter Sunday in `year`.
///
/// # Errors
/// [`Error::Domain`] if `year < 1583`.
pub fn easter_month_day(year: u16) -> Result<(u8, u8)> {
    if year < MIN_EASTER_YEAR {
        tracing::debug!(year, min = MIN_EASTER_YEAR, "easter requested outside Gregorian domain");
        return Err(Error::Domain {
            year,
            min: MIN_EASTER_YEAR,
        });
    }
    let y = year as i32;

    // Position in the 19-year Metonic cycle.
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    // Lunar correction.
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    // Epact-derived days from March 21 to the Paschal full moon.
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    // Days from the full moon to the following Sunday.
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;

    let n = h + l - 7 * m + 114;
    Ok(((n / 31) as u8, (n % 31 + 1) as u8))
}

/// Return the date of Easter Sunday in `year`.
///
/// # Errors
/// [`Error::Domain`] if `year < 1583`.
///
/// # Example
/// ```
/// use isl_time::easter::easter_sunday;
/// use isl_time::Date;
///
/// assert_eq!(easter_sunday(2013).unwrap(), Date::from_ymd(2013, 3, 31).unwrap());
/// assert!(easter_sunday(1582).is_err());
/// ```
pub fn easter_sunday(year: u16) -> Result<Date> {
    let (month, day) = easter_month_day(year)?;
    Date::from_ymd(year, month, day)
}

/// Return the date `offset` days from Easter Sunday in `year`.
pub fn easter_offset(year: u16, offset: i32) -> Result<Date> {
    easter_sunday(year)?.add_days(offset)
}
