//! `Calendar` trait.
//!
//! A calendar knows which dates are holidays and, from that, which are
//! business days.  Holiday evaluation is fallible (movable feasts depend on
//! an Easter computation with a restricted domain), so every query that
//! touches holidays returns a [`Result`] and propagates the error unchanged.

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use isl_core::errors::Result;

/// A holiday calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Iceland"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a named public holiday.
    ///
    /// Weekends are not holidays by themselves; see [`Calendar::is_weekend`].
    fn is_holiday(&self, date: Date) -> Result<bool>;

    /// Return `true` if `date` is a weekend according to this calendar.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is a weekday that is not a holiday.
    ///
    /// Weekends short-circuit: holiday rules are only evaluated for weekdays.
    fn is_business_day(&self, date: Date) -> Result<bool> {
        Ok(!self.is_weekend(date) && !self.is_holiday(date)?)
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => {
                let mut d = date;
                while !self.is_business_day(d)? {
                    d = d.add_days(1)?;
                }
                Ok(d)
            }
            BusinessDayConvention::Preceding => {
                let mut d = date;
                while !self.is_business_day(d)? {
                    d = d.sub_days(1)?;
                }
                Ok(d)
            }
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = self.adjust(date, BusinessDayConvention::Following)?;
                if adjusted.month() != date.month() {
                    self.adjust(date, BusinessDayConvention::Preceding)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = self.adjust(date, BusinessDayConvention::Preceding)?;
                if adjusted.month() != date.month() {
                    self.adjust(date, BusinessDayConvention::Following)
                } else {
                    Ok(adjusted)
                }
            }
        }
    }

    /// Advance `date` by `n` business days (backwards if `n < 0`).
    fn advance_business_days(&self, date: Date, n: i32) -> Result<Date> {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.unsigned_abs();
        let mut d = date;
        while remaining > 0 {
            d = d.add_days(step)?;
            if self.is_business_day(d)? {
                remaining -= 1;
            }
        }
        Ok(d)
    }

    /// Count the business days between `d1` (exclusive) and `d2`
    /// (inclusive).  Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> Result<i32> {
        let sign = if d2 >= d1 { 1 } else { -1 };
        let (start, end) = if d2 >= d1 { (d1, d2) } else { (d2, d1) };
        let mut count = 0;
        let mut d = start;
        while d < end {
            d = d.add_days(1)?;
            if self.is_business_day(d)? {
                count += 1;
            }
        }
        Ok(sign * count)
    }

    /// List the non-business days in the inclusive range `[from, to]`.
    ///
    /// With `include_weekends == false` only holidays falling on weekdays
    /// are returned.
    fn holiday_list(&self, from: Date, to: Date, include_weekends: bool) -> Result<Vec<Date>> {
        let mut holidays = Vec::new();
        let mut d = from;
        while d <= to {
            let weekend = self.is_weekend(d);
            if (include_weekends && weekend) || (!weekend && self.is_holiday(d)?) {
                holidays.push(d);
            }
            if d == to {
                break;
            }
            d = d.add_days(1)?;
        }
        Ok(holidays)
    }
}
