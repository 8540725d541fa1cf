//! `CalendarDay` — the capability set the holiday engine needs from a date.
//!
//! Callers may keep their own date type; anything that can report a year,
//! month, day and weekday can be classified.  [`Date`] implements the trait
//! directly, and with the `chrono` feature so do `chrono::NaiveDate` and
//! `chrono::NaiveDateTime` (the time of day is ignored).

use crate::date::Date;
use crate::weekday::Weekday;
use isl_core::errors::Result;
use isl_core::fail;

/// A Gregorian calendar day, as seen by the holiday engine.
pub trait CalendarDay {
    /// Calendar year.
    fn calendar_year(&self) -> i32;

    /// Month of the year (1–12).
    fn calendar_month(&self) -> u32;

    /// Day of the month (1–31).
    fn calendar_day(&self) -> u32;

    /// Day of the week.
    fn day_of_week(&self) -> Weekday;

    /// Convert to a [`Date`].
    ///
    /// # Errors
    /// Returns an error if the year lies outside `1..=9999` or the
    /// components do not form a valid date.
    fn to_date(&self) -> Result<Date> {
        let (y, m, d) = (
            self.calendar_year(),
            self.calendar_month(),
            self.calendar_day(),
        );
        match (u16::try_from(y), u8::try_from(m), u8::try_from(d)) {
            (Ok(y), Ok(m), Ok(d)) => Date::from_ymd(y, m, d),
            _ => fail!("{y:04}-{m:02}-{d:02} is outside the supported date range"),
        }
    }
}

impl CalendarDay for Date {
    fn calendar_year(&self) -> i32 {
        i32::from(self.year())
    }

    fn calendar_month(&self) -> u32 {
        u32::from(self.month())
    }

    fn calendar_day(&self) -> u32 {
        u32::from(self.day_of_month())
    }

    fn day_of_week(&self) -> Weekday {
        self.weekday()
    }

    fn to_date(&self) -> Result<Date> {
        Ok(*self)
    }
}

#[cfg(feature = "chrono")]
impl CalendarDay for chrono::NaiveDate {
    fn calendar_year(&self) -> i32 {
        chrono::Datelike::year(self)
    }

    fn calendar_month(&self) -> u32 {
        chrono::Datelike::month(self)
    }

    fn calendar_day(&self) -> u32 {
        chrono::Datelike::day(self)
    }

    fn day_of_week(&self) -> Weekday {
        chrono::Datelike::weekday(self).into()
    }
}

#[cfg(feature = "chrono")]
impl CalendarDay for chrono::NaiveDateTime {
    fn calendar_year(&self) -> i32 {
        self.date().calendar_year()
    }

    fn calendar_month(&self) -> u32 {
        self.date().calendar_month()
    }

    fn calendar_day(&self) -> u32 {
        self.date().calendar_day()
    }

    fn day_of_week(&self) -> Weekday {
        self.date().day_of_week()
    }
}
