//! `Date` type.
//!
//! Dates are stored as a serial number of days.  Serial 1 is
//! **January 1, 1900**, so earlier dates carry zero or negative serials.
//!
//! # Range
//! The proleptic Gregorian calendar from 0001-01-01 to 9999-12-31.  The
//! range deliberately reaches back before 1583 so that the holiday engine
//! can report a domain error for those years instead of refusing to build
//! the date in the first place.

use crate::month::Month;
use crate::weekday::Weekday;
use isl_core::errors::Result;
use isl_core::{ensure, fail};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Smallest representable year.
    pub const MIN_YEAR: u16 = 1;

    /// Largest representable year.
    pub const MAX_YEAR: u16 = 9999;

    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(serial_from_ymd(Self::MIN_YEAR, 1, 1));

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(serial_from_ymd(Self::MAX_YEAR, 12, 31));

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (1 = 1900-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            fail!("serial {serial} out of range [{}, {}]", Self::MIN.0, Self::MAX.0);
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            fail!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            );
        }
        if !(1..=12).contains(&month) {
            fail!("month {month} out of range [1, 12]");
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            fail!("day {day} out of range [1, {days_in}] for {year}-{month:02}");
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from year, [`Month`], and day-of-month.
    pub fn from_parts(year: u16, month: Month, day: u8) -> Result<Self> {
        Self::from_ymd(year, month.number(), day)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        match Month::from_number(self.month()) {
            Some(m) => m,
            None => unreachable!("ymd_from_serial always yields a month in 1..=12"),
        }
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let year = self.year();
        (self.0 - serial_from_ymd(year, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Jan 1, 1900 (serial 1) is a Monday (ordinal 1).
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        match Weekday::from_ordinal(w) {
            Some(wd) => wd,
            None => unreachable!("rem_euclid always in 1..=7"),
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        match self.0.checked_add(n) {
            Some(serial) => Self::from_serial(serial),
            None => fail!("date arithmetic: {self} + {n} days overflows"),
        }
    }

    /// Step back by `n` days.  Returns an error if the result is out of range.
    pub fn sub_days(self, n: i32) -> Result<Self> {
        match n.checked_neg() {
            Some(neg) => self.add_days(neg),
            None => fail!("date arithmetic: {self} - {n} days overflows"),
        }
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the first date on or after `self` that falls on `weekday`.
    ///
    /// Walks forward one day at a time; at most six steps are taken.
    pub fn first_on_or_after(self, weekday: Weekday) -> Result<Self> {
        let mut d = self;
        for _ in 0..7 {
            if d.weekday() == weekday {
                return Ok(d);
            }
            d = d.add_days(1)?;
        }
        unreachable!("every weekday occurs within seven consecutive days")
    }

    /// Return the *n*-th occurrence of `weekday` in `month` of `year`.
    ///
    /// # Errors
    /// Returns an error if `n` is not in `1..=5` or larger than the number of
    /// such weekdays in the month.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        ensure!((1..=5).contains(&n), "nth_weekday: n must be in [1, 5], got {n}");
        let first = Date::from_ymd(year, month, 1)?.first_on_or_after(weekday)?;
        let day = first.day_of_month() + 7 * (n - 1);
        ensure!(
            day <= days_in_month(year, month),
            "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
        );
        Date::from_ymd(year, month, day)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl std::str::FromStr for Date {
    type Err = isl_core::Error;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().splitn(3, '-');
        let mut field = |what: &str| -> Result<u32> {
            match parts.next().map(str::parse::<u32>) {
                Some(Ok(v)) => Ok(v),
                _ => fail!("cannot parse {what} in {s:?}"),
            }
        };
        let y = field("year")?;
        let m = field("month")?;
        let d = field("day")?;
        match (u16::try_from(y), u8::try_from(m), u8::try_from(d)) {
            (Ok(y), Ok(m), Ok(d)) => Date::from_ymd(y, m, d),
            _ => fail!("{s:?} is not a valid date"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Days in a full 400-year Gregorian cycle.
const CYCLE_DAYS: i32 = 146_097;

/// Offset between a March-based day count from 0000-03-01 and serial 0
/// (1899-12-31).
const SERIAL_OFFSET: i32 = 693_900;

/// Convert (year, month, day) to a serial number.
///
/// Years are shifted to start on March 1 so the leap day falls at the end of
/// each year and of each 400-year cycle.
const fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let m = month as i32;
    let y = year as i32 - if m <= 2 { 1 } else { 0 };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i32 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * CYCLE_DAYS + doe - SERIAL_OFFSET
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let z = serial + SERIAL_OFFSET;
    let era = z.div_euclid(CYCLE_DAYS);
    let doe = z - era * CYCLE_DAYS;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / (CYCLE_DAYS - 1)) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + if m <= 2 { 1 } else { 0 };
    (y as u16, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
