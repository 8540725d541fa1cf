//! # icelandic-holidays
//!
//! Determine whether a date is an Icelandic public holiday, a business day
//! or a bank day.
//!
//! This crate is a **façade** over the workspace crates.  The free functions
//! below accept any date type implementing [`CalendarDay`]; enable the
//! `chrono` feature to pass `chrono::NaiveDate` or `chrono::NaiveDateTime`
//! directly.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! icelandic-holidays = "0.6"
//! ```
//!
//! ```rust
//! use icelandic_holidays::{is_bank_day, is_business_day, is_holiday, Date};
//!
//! # fn main() -> icelandic_holidays::Result<()> {
//! let national_day = Date::from_ymd(2013, 6, 17)?;
//! assert!(is_holiday(&national_day)?);
//! assert!(!is_business_day(&national_day)?);
//!
//! // New Year's Eve is a holiday, but banks settle when it is a weekday.
//! let new_years_eve = Date::from_ymd(2013, 12, 31)?;
//! assert!(is_holiday(&new_years_eve)?);
//! assert!(is_bank_day(&new_years_eve)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Movable feasts need the date of Easter, which is only defined from 1583
//! onward.  Queries that reach an Easter-based rule for an earlier year fail
//! with [`Error::Domain`]; nothing is clamped or defaulted.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type and `Result` alias.
pub use isl_core as core;

/// Dates, Easter, and the Iceland calendar.
pub use isl_time as time;

pub use isl_core::{Error, Result};
pub use isl_time::{
    BusinessDayConvention, Calendar, CalendarDay, Date, DayKind, Holiday, Iceland, Month, Weekday,
};

/// Return `true` if `date` is one of the sixteen Icelandic public holidays.
///
/// # Errors
/// [`Error::Domain`] if an Easter-based rule is reached for a year before
/// 1583, or [`Error::Date`] if `date` cannot be represented.
pub fn is_holiday(date: &impl CalendarDay) -> Result<bool> {
    Iceland.is_holiday(date.to_date()?)
}

/// Return `true` if `date` is Monday–Friday.
pub fn is_weekday(date: &impl CalendarDay) -> bool {
    date.day_of_week().is_weekday()
}

/// Return `true` if `date` is a weekday and not a holiday.
///
/// # Errors
/// As for [`is_holiday`]; weekends return `Ok(false)` without evaluating
/// any holiday rule.
pub fn is_business_day(date: &impl CalendarDay) -> Result<bool> {
    if !is_weekday(date) {
        return Ok(false);
    }
    Iceland.is_business_day(date.to_date()?)
}

/// Return `true` if banks settle on `date`.
///
/// Business days are bank days, and so is New Year's Eve when it falls on a
/// weekday.
///
/// # Errors
/// As for [`is_business_day`].
pub fn is_bank_day(date: &impl CalendarDay) -> Result<bool> {
    if !is_weekday(date) {
        return Ok(false);
    }
    Iceland.is_bank_day(date.to_date()?)
}

/// Return the holiday falling on `date`, if any.
///
/// # Errors
/// As for [`is_holiday`].
pub fn holiday(date: &impl CalendarDay) -> Result<Option<Holiday>> {
    Iceland.holiday(date.to_date()?)
}

/// Return the date of Easter Sunday in `year`.
///
/// # Errors
/// [`Error::Domain`] if `year < 1583`.
pub fn easter_sunday(year: u16) -> Result<Date> {
    isl_time::easter::easter_sunday(year)
}
