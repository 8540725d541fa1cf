//! # isl-time
//!
//! Dates, the Gregorian Easter computus, and the Icelandic holiday calendar.
//!
//! Everything here is a pure function of its inputs: no global state, no
//! I/O, and every type is `Send + Sync`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait.
pub mod calendar;

/// The capability set accepted from foreign date types.
pub mod calendar_day;

/// Concrete calendar implementations.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Easter Sunday computation.
pub mod easter;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::Calendar;
pub use calendar_day::CalendarDay;
pub use calendars::iceland::{DayKind, Holiday, Iceland};
pub use date::Date;
pub use easter::{easter_sunday, MIN_EASTER_YEAR};
pub use month::Month;
pub use weekday::Weekday;
