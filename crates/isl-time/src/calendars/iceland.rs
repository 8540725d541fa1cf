//! Iceland calendar.
//!
//! Public holidays as observed since 2013:
//! * New Year's Day (Jan 1, *Nýársdagur*)
//! * Holy Thursday (Easter − 3, *Skírdagur*)
//! * Good Friday (Easter − 2, *Föstudagurinn langi*)
//! * Easter Sunday (*Páskadagur*)
//! * Easter Monday (Easter + 1, *Annar í páskum*)
//! * First Day of Summer (first Thursday on or after Apr 19, *Sumardagurinn fyrsti*)
//! * Labour Day (May 1, *Verkalýðsdagurinn*)
//! * Ascension Day (Easter + 39, *Uppstigningardagur*)
//! * Pentecost (Easter + 49, *Hvítasunnudagur*)
//! * Whit Monday (Easter + 50, *Annar í hvítasunnu*)
//! * National Day (Jun 17, *Þjóðhátíðardagurinn*)
//! * Merchant Holiday (first Monday in August, *Frídagur verslunarmanna*)
//! * Christmas Eve (Dec 24 from 13:00, *Aðfangadagur*)
//! * Christmas Day (Dec 25, *Jóladagur*)
//! * Second Day of Christmas (Dec 26, *Annar í jólum*)
//! * New Year's Eve (Dec 31 from 13:00, *Gamlársdagur*)
//!
//! Christmas Eve and New Year's Eve count as full holidays.  New Year's Eve
//! is nevertheless a bank-settlement day when it falls on a weekday.

use crate::calendar::Calendar;
use crate::date::Date;
use crate::easter::easter_offset;
use crate::month::Month;
use crate::weekday::Weekday;
use isl_core::errors::Result;

/// One of the sixteen Icelandic public holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Holiday {
    /// January 1.
    NewYearsDay,
    /// Thursday before Easter.
    HolyThursday,
    /// Friday before Easter.
    GoodFriday,
    /// Easter Sunday.
    EasterSunday,
    /// Monday after Easter.
    EasterMonday,
    /// First Thursday on or after April 19.
    FirstDayOfSummer,
    /// May 1.
    LabourDay,
    /// 39 days after Easter.
    AscensionDay,
    /// 49 days after Easter.
    Pentecost,
    /// 50 days after Easter.
    WhitMonday,
    /// June 17.
    NationalDay,
    /// First Monday of August.
    MerchantHoliday,
    /// December 24.
    ChristmasEve,
    /// December 25.
    ChristmasDay,
    /// December 26.
    SecondDayOfChristmas,
    /// December 31.
    NewYearsEve,
}

/// How a holiday's date is determined.
#[derive(Debug, Clone, Copy)]
enum Rule {
    Fixed(Month, u8),
    EasterOffset(i32),
    FirstOnOrAfter(Month, u8, Weekday),
}

impl Holiday {
    /// Every holiday, in evaluation order.
    pub const ALL: [Holiday; 16] = [
        Holiday::NewYearsDay,
        Holiday::HolyThursday,
        Holiday::GoodFriday,
        Holiday::EasterSunday,
        Holiday::EasterMonday,
        Holiday::FirstDayOfSummer,
        Holiday::LabourDay,
        Holiday::AscensionDay,
        Holiday::Pentecost,
        Holiday::WhitMonday,
        Holiday::NationalDay,
        Holiday::MerchantHoliday,
        Holiday::ChristmasEve,
        Holiday::ChristmasDay,
        Holiday::SecondDayOfChristmas,
        Holiday::NewYearsEve,
    ];

    fn rule(self) -> Rule {
        match self {
            Holiday::NewYearsDay => Rule::Fixed(Month::January, 1),
            Holiday::HolyThursday => Rule::EasterOffset(-3),
            Holiday::GoodFriday => Rule::EasterOffset(-2),
            Holiday::EasterSunday => Rule::EasterOffset(0),
            Holiday::EasterMonday => Rule::EasterOffset(1),
            Holiday::FirstDayOfSummer => Rule::FirstOnOrAfter(Month::April, 19, Weekday::Thursday),
            Holiday::LabourDay => Rule::Fixed(Month::May, 1),
            Holiday::AscensionDay => Rule::EasterOffset(39),
            Holiday::Pentecost => Rule::EasterOffset(49),
            Holiday::WhitMonday => Rule::EasterOffset(50),
            Holiday::NationalDay => Rule::Fixed(Month::June, 17),
            Holiday::MerchantHoliday => Rule::FirstOnOrAfter(Month::August, 1, Weekday::Monday),
            Holiday::ChristmasEve => Rule::Fixed(Month::December, 24),
            Holiday::ChristmasDay => Rule::Fixed(Month::December, 25),
            Holiday::SecondDayOfChristmas => Rule::Fixed(Month::December, 26),
            Holiday::NewYearsEve => Rule::Fixed(Month::December, 31),
        }
    }

    /// English name.
    pub fn name(self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "New Year's Day",
            Holiday::HolyThursday => "Holy Thursday",
            Holiday::GoodFriday => "Good Friday",
            Holiday::EasterSunday => "Easter Sunday",
            Holiday::EasterMonday => "Easter Monday",
            Holiday::FirstDayOfSummer => "First Day of Summer",
            Holiday::LabourDay => "Labour Day",
            Holiday::AscensionDay => "Ascension Day",
            Holiday::Pentecost => "Pentecost",
            Holiday::WhitMonday => "Whit Monday",
            Holiday::NationalDay => "National Day",
            Holiday::MerchantHoliday => "Merchant Holiday",
            Holiday::ChristmasEve => "Christmas Eve",
            Holiday::ChristmasDay => "Christmas Day",
            Holiday::SecondDayOfChristmas => "Second Day of Christmas",
            Holiday::NewYearsEve => "New Year's Eve",
        }
    }

    /// Icelandic name.
    pub fn icelandic_name(self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "Nýársdagur",
            Holiday::HolyThursday => "Skírdagur",
            Holiday::GoodFriday => "Föstudagurinn langi",
            Holiday::EasterSunday => "Páskadagur",
            Holiday::EasterMonday => "Annar í páskum",
            Holiday::FirstDayOfSummer => "Sumardagurinn fyrsti",
            Holiday::LabourDay => "Verkalýðsdagurinn",
            Holiday::AscensionDay => "Uppstigningardagur",
            Holiday::Pentecost => "Hvítasunnudagur",
            Holiday::WhitMonday => "Annar í hvítasunnu",
            Holiday::NationalDay => "Þjóðhátíðardagurinn",
            Holiday::MerchantHoliday => "Frídagur verslunarmanna",
            Holiday::ChristmasEve => "Aðfangadagur",
            Holiday::ChristmasDay => "Jóladagur",
            Holiday::SecondDayOfChristmas => "Annar í jólum",
            Holiday::NewYearsEve => "Gamlársdagur",
        }
    }

    /// Return `true` for holidays observed only from 13:00.
    pub fn is_half_day(self) -> bool {
        matches!(self, Holiday::ChristmasEve | Holiday::NewYearsEve)
    }

    /// Return `true` if the date depends on Easter.
    pub fn is_movable(self) -> bool {
        matches!(self.rule(), Rule::EasterOffset(_))
    }

    /// Return the date of this holiday in `year`.
    ///
    /// # Errors
    /// [`Error::Domain`](isl_core::Error::Domain) for Easter-based holidays
    /// before 1583.
    pub fn date_in(self, year: u16) -> Result<Date> {
        match self.rule() {
            Rule::Fixed(month, day) => Date::from_parts(year, month, day),
            Rule::EasterOffset(offset) => easter_offset(year, offset),
            Rule::FirstOnOrAfter(month, day, weekday) => {
                Date::from_parts(year, month, day)?.first_on_or_after(weekday)
            }
        }
    }

    /// Return `true` if `date` is this holiday.
    ///
    /// Fixed-date and weekday-search rules never compute Easter, so they
    /// succeed for any year.
    pub fn falls_on(self, date: Date) -> Result<bool> {
        let (year, month, day) = date.ymd();
        match self.rule() {
            Rule::Fixed(m, d) => Ok(month == m.number() && day == d),
            Rule::EasterOffset(offset) => Ok(date == easter_offset(year, offset)?),
            Rule::FirstOnOrAfter(m, _, _) if month != m.number() => Ok(false),
            Rule::FirstOnOrAfter(..) => Ok(date == self.date_in(year)?),
        }
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification of a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayKind {
    /// A weekday that is not a holiday.
    BusinessDay,
    /// A holiday on which banks still settle (New Year's Eve on a weekday).
    BankDay,
    /// A public holiday.
    Holiday,
    /// A Saturday or Sunday that is not a holiday.
    Weekend,
}

impl DayKind {
    /// Return `true` if banks settle on a day of this kind.
    pub fn is_bank_day(self) -> bool {
        matches!(self, DayKind::BusinessDay | DayKind::BankDay)
    }
}

/// Iceland calendar.
///
/// Saturdays, Sundays and the sixteen [`Holiday`]s are non-business days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iceland;

impl Iceland {
    /// Return the first holiday in [`Holiday::ALL`] order that falls on
    /// `date`, if any.
    ///
    /// Rules are evaluated in order and evaluation stops at the first match,
    /// so a pre-1583 January 1 is still reported as New Year's Day.
    pub fn holiday(&self, date: Date) -> Result<Option<Holiday>> {
        for holiday in Holiday::ALL {
            if holiday.falls_on(date)? {
                tracing::trace!(%date, %holiday, "holiday rule matched");
                return Ok(Some(holiday));
            }
        }
        Ok(None)
    }

    /// Return every holiday falling on `date`.
    ///
    /// Rules occasionally coincide, e.g. Ascension Day and Labour Day in
    /// 2008, or Holy Thursday and the First Day of Summer in 2038.
    pub fn holidays_on(&self, date: Date) -> Result<Vec<Holiday>> {
        let mut found = Vec::new();
        for holiday in Holiday::ALL {
            if holiday.falls_on(date)? {
                found.push(holiday);
            }
        }
        Ok(found)
    }

    /// Return all holidays of `year` with their dates, sorted by date.
    ///
    /// Coinciding holidays keep their [`Holiday::ALL`] order.
    pub fn holidays_in(&self, year: u16) -> Result<Vec<(Date, Holiday)>> {
        let mut dated = Holiday::ALL
            .iter()
            .map(|&h| h.date_in(year).map(|date| (date, h)))
            .collect::<Result<Vec<_>>>()?;
        dated.sort_by_key(|&(date, _)| date);
        Ok(dated)
    }

    /// Return `true` if `date` falls on Monday–Friday.
    pub fn is_weekday(&self, date: Date) -> bool {
        date.weekday().is_weekday()
    }

    /// Return `true` if banks settle on `date`.
    ///
    /// Every business day is a bank day.  New Year's Eve is a holiday but
    /// still a bank day when it falls on a weekday.
    pub fn is_bank_day(&self, date: Date) -> Result<bool> {
        Ok(self.is_business_day(date)?
            || (Holiday::NewYearsEve.falls_on(date)? && self.is_weekday(date)))
    }

    /// Classify `date`.
    pub fn classify(&self, date: Date) -> Result<DayKind> {
        if self.is_business_day(date)? {
            return Ok(DayKind::BusinessDay);
        }
        if self.is_bank_day(date)? {
            return Ok(DayKind::BankDay);
        }
        if self.is_holiday(date)? {
            return Ok(DayKind::Holiday);
        }
        Ok(DayKind::Weekend)
    }

    /// Return the first bank day strictly after `date`.
    pub fn next_bank_day(&self, date: Date) -> Result<Date> {
        let mut d = date.add_days(1)?;
        while !self.is_bank_day(d)? {
            d = d.add_days(1)?;
        }
        Ok(d)
    }
}

impl Calendar for Iceland {
    fn name(&self) -> &str {
        "Iceland"
    }

    fn is_holiday(&self, date: Date) -> Result<bool> {
        Ok(self.holiday(date)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isl_core::Error;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn new_years_day() {
        let cal = Iceland;
        assert!(cal.is_holiday(date(2013, 1, 1)).unwrap());
        assert_eq!(cal.holiday(date(2013, 1, 1)).unwrap(), Some(Holiday::NewYearsDay));
    }

    #[test]
    fn first_day_of_summer() {
        // 2013-04-19 is a Friday → first Thursday on or after is Apr 25
        assert_eq!(Holiday::FirstDayOfSummer.date_in(2013).unwrap(), date(2013, 4, 25));
        // 2012-04-19 is itself a Thursday
        assert_eq!(Holiday::FirstDayOfSummer.date_in(2012).unwrap(), date(2012, 4, 19));
        assert!(!Holiday::FirstDayOfSummer.falls_on(date(2013, 4, 18)).unwrap());
    }

    #[test]
    fn merchant_holiday() {
        assert_eq!(Holiday::MerchantHoliday.date_in(2013).unwrap(), date(2013, 8, 5));
        // Aug 1 2016 is a Monday
        assert_eq!(Holiday::MerchantHoliday.date_in(2016).unwrap(), date(2016, 8, 1));
        assert!(!Holiday::MerchantHoliday.falls_on(date(2013, 8, 12)).unwrap());
    }

    #[test]
    fn easter_holidays_2013() {
        let expected = [
            (Holiday::HolyThursday, date(2013, 3, 28)),
            (Holiday::GoodFriday, date(2013, 3, 29)),
            (Holiday::EasterSunday, date(2013, 3, 31)),
            (Holiday::EasterMonday, date(2013, 4, 1)),
            (Holiday::AscensionDay, date(2013, 5, 9)),
            (Holiday::Pentecost, date(2013, 5, 19)),
            (Holiday::WhitMonday, date(2013, 5, 20)),
        ];
        for (holiday, d) in expected {
            assert!(holiday.is_movable());
            assert_eq!(holiday.date_in(2013).unwrap(), d, "{holiday}");
            assert!(holiday.falls_on(d).unwrap(), "{holiday} on {d}");
            assert_eq!(Iceland.holiday(d).unwrap(), Some(holiday));
        }
    }

    #[test]
    fn new_years_eve_is_a_bank_day_on_weekdays() {
        let cal = Iceland;
        let nye = date(2013, 12, 31); // Tuesday
        assert!(cal.is_holiday(nye).unwrap());
        assert!(!cal.is_business_day(nye).unwrap());
        assert!(cal.is_bank_day(nye).unwrap());
        assert_eq!(cal.classify(nye).unwrap(), DayKind::BankDay);

        let weekend_nye = date(2011, 12, 31); // Saturday
        assert!(!cal.is_bank_day(weekend_nye).unwrap());
        assert_eq!(cal.classify(weekend_nye).unwrap(), DayKind::Holiday);
    }

    #[test]
    fn christmas_eve_is_not_a_bank_day() {
        let d = date(2013, 12, 24); // Tuesday
        assert!(!Iceland.is_bank_day(d).unwrap());
        assert!(Holiday::ChristmasEve.is_half_day());
    }

    #[test]
    fn classify_plain_days() {
        let cal = Iceland;
        assert_eq!(cal.classify(date(2013, 1, 8)).unwrap(), DayKind::BusinessDay);
        assert_eq!(cal.classify(date(2013, 1, 5)).unwrap(), DayKind::Weekend);
        assert_eq!(cal.classify(date(2013, 3, 31)).unwrap(), DayKind::Holiday);
        assert!(DayKind::BankDay.is_bank_day());
        assert!(!DayKind::Weekend.is_bank_day());
    }

    #[test]
    fn pre_gregorian_years() {
        let cal = Iceland;
        // New Year's Day is checked before any Easter rule.
        assert!(cal.is_holiday(date(1582, 1, 1)).unwrap());
        assert_eq!(
            cal.is_holiday(date(1582, 2, 1)),
            Err(Error::Domain {
                year: 1582,
                min: 1583
            })
        );
        // Weekends never reach the holiday rules.
        assert!(!cal.is_business_day(date(1582, 2, 6)).unwrap());
        assert!(cal.is_business_day(date(1582, 2, 1)).unwrap_err().is_domain());
        // Non-Easter rules are total.
        assert!(Holiday::NationalDay.falls_on(date(1000, 6, 17)).unwrap());
        assert!(Holiday::MerchantHoliday.date_in(1000).is_ok());
    }

    #[test]
    fn coinciding_holidays() {
        let cal = Iceland;
        // Easter 2008 = Mar 23 → Ascension = May 1
        assert_eq!(
            cal.holidays_on(date(2008, 5, 1)).unwrap(),
            vec![Holiday::LabourDay, Holiday::AscensionDay]
        );
        // Easter 2038 = Apr 25 → Holy Thursday = Apr 22 = first Thursday after Apr 18
        assert_eq!(
            cal.holidays_on(date(2038, 4, 22)).unwrap(),
            vec![Holiday::HolyThursday, Holiday::FirstDayOfSummer]
        );
        assert_eq!(cal.holiday(date(2038, 4, 22)).unwrap(), Some(Holiday::HolyThursday));
    }

    #[test]
    fn holidays_in_2013() {
        let list = Iceland.holidays_in(2013).unwrap();
        assert_eq!(list.len(), 16);
        assert!(list.windows(2).all(|w| w[0].0 <= w[1].0));
        assert_eq!(list[0], (date(2013, 1, 1), Holiday::NewYearsDay));
        assert_eq!(list[15], (date(2013, 12, 31), Holiday::NewYearsEve));
    }

    #[test]
    fn next_bank_day_skips_easter() {
        // Wed 2013-03-27 → Thu/Fri/Sat/Sun/Mon are closed → Tue 2013-04-02
        assert_eq!(Iceland.next_bank_day(date(2013, 3, 27)).unwrap(), date(2013, 4, 2));
        // Mon 2013-12-30 → New Year's Eve settles
        assert_eq!(Iceland.next_bank_day(date(2013, 12, 30)).unwrap(), date(2013, 12, 31));
    }

    #[test]
    fn names() {
        assert_eq!(Holiday::MerchantHoliday.to_string(), "Merchant Holiday");
        assert_eq!(Holiday::NewYearsEve.icelandic_name(), "Gamlársdagur");
        assert_eq!(Iceland.name(), "Iceland");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let list = Iceland.holidays_in(2013).unwrap();
        let json = serde_json::to_string(&list[0]).unwrap();
        assert_eq!(json, r#"["2013-01-01","NewYearsDay"]"#);
        let back: (Date, Holiday) = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list[0]);
    }
}
