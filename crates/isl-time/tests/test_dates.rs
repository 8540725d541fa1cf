//! Integration tests for `Date` and the Easter computus.

use isl_time::date::{days_in_month, is_leap_year};
use isl_time::easter::{easter_month_day, easter_sunday};
use isl_time::{Calendar, Date, Iceland, Weekday, MIN_EASTER_YEAR};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Easter ───────────────────────────────────────────────────────────────────

#[test]
fn easter_spot_checks() {
    let known = [
        (1709, 3, 31),
        (1710, 4, 20),
        (1734, 4, 25),
        (1736, 4, 1),
        (1784, 4, 11),
        (2008, 3, 23),
        (2215, 4, 16),
        (2240, 4, 12),
        (2292, 4, 10),
    ];
    for (y, m, d) in known {
        assert_eq!(easter_month_day(y).unwrap(), (m, d), "Easter {y}");
        assert_eq!(Iceland.holiday(date(y, m, d)).unwrap().map(|h| h.name()), Some("Easter Sunday"));
    }
}

#[test]
fn exactly_one_easter_per_year() {
    let cal = Iceland;
    for year in 1800..=2200 {
        let easter = easter_sunday(year).unwrap();
        let mut count = 0;
        let mut d = date(year, 1, 1);
        while d.year() == year {
            if d == easter {
                count += 1;
            }
            d = d.add_days(1).unwrap();
        }
        assert_eq!(count, 1, "{year}");
        assert!(cal.is_holiday(easter).unwrap());
    }
}

#[test]
fn easter_domain() {
    assert!(easter_sunday(MIN_EASTER_YEAR).is_ok());
    let err = easter_sunday(MIN_EASTER_YEAR - 1).unwrap_err();
    assert!(err.is_domain());
    assert_eq!(
        err.to_string(),
        "year 1582 is out of domain: Easter is only defined for years >= 1583"
    );
}

// ─── Dates ────────────────────────────────────────────────────────────────────

#[test]
fn consecutive_serials_walk_the_calendar() {
    // Check every day from 1582 to 2400 against the previous one.
    let mut prev = date(1582, 1, 1);
    let end = date(2400, 12, 31);
    while prev < end {
        let next = prev.add_days(1).unwrap();
        let (y, m, d) = prev.ymd();
        let expected = if d < days_in_month(y, m) {
            (y, m, d + 1)
        } else if m < 12 {
            (y, m + 1, 1)
        } else {
            (y + 1, 1, 1)
        };
        assert_eq!(next.ymd(), expected, "after {prev}");
        assert_eq!(
            next.weekday().ordinal(),
            prev.weekday().ordinal() % 7 + 1,
            "weekday after {prev}"
        );
        prev = next;
    }
}

#[test]
fn leap_years() {
    assert!(is_leap_year(1600));
    assert!(!is_leap_year(1700));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2012));
    assert!(!is_leap_year(2013));
}

#[test]
fn known_weekdays() {
    assert_eq!(date(2013, 1, 8).weekday(), Weekday::Tuesday);
    assert_eq!(date(2013, 2, 14).weekday(), Weekday::Thursday);
    assert_eq!(date(2013, 8, 5).weekday(), Weekday::Monday);
    assert_eq!(date(1970, 1, 1).weekday(), Weekday::Thursday);
}

// ─── Properties ───────────────────────────────────────────────────────────────

fn any_date() -> impl Strategy<Value = Date> {
    (Date::MIN.serial()..=Date::MAX.serial()).prop_map(|s| Date::from_serial(s).unwrap())
}

fn gregorian_date() -> impl Strategy<Value = Date> {
    (date(MIN_EASTER_YEAR, 1, 1).serial()..=Date::MAX.serial())
        .prop_map(|s| Date::from_serial(s).unwrap())
}

proptest! {
    #[test]
    fn ymd_roundtrip(d in any_date()) {
        let (y, m, day) = d.ymd();
        prop_assert_eq!(Date::from_ymd(y, m, day).unwrap(), d);
        prop_assert_eq!(d.to_string().parse::<Date>().unwrap(), d);
    }

    #[test]
    fn easter_window(year in MIN_EASTER_YEAR..=Date::MAX_YEAR) {
        let e = easter_sunday(year).unwrap();
        prop_assert_eq!(e.weekday(), Weekday::Sunday);
        prop_assert!(e >= date(year, 3, 22));
        prop_assert!(e <= date(year, 4, 25));
    }

    #[test]
    fn pre_gregorian_years_are_rejected(year in Date::MIN_YEAR..MIN_EASTER_YEAR) {
        prop_assert!(easter_sunday(year).unwrap_err().is_domain());
    }

    #[test]
    fn business_day_complements_holiday_on_weekdays(d in gregorian_date()) {
        let cal = Iceland;
        let holiday = cal.is_holiday(d).unwrap();
        let business = cal.is_business_day(d).unwrap();
        if cal.is_weekday(d) {
            prop_assert_eq!(business, !holiday);
        } else {
            prop_assert!(!business);
        }
    }

    #[test]
    fn bank_day_is_business_day_or_weekday_new_years_eve(d in gregorian_date()) {
        let cal = Iceland;
        let bank = cal.is_bank_day(d).unwrap();
        let business = cal.is_business_day(d).unwrap();
        let nye = d.month() == 12 && d.day_of_month() == 31;
        prop_assert_eq!(bank, business || (nye && cal.is_weekday(d)));
    }
}
