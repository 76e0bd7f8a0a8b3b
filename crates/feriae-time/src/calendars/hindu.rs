//! Hindu lunisolar calendar, old (arya) arithmetic variant.
//!
//! The old Hindu lunisolar calendar is defined by two mean periods: the
//! arya solar year (1577917500/4320000 days) and the arya lunar month
//! (1577917500/53433336 days). Months are lunar, numbered 1 (Chaitra) to
//! 12 (Phalguna); days are tithis 1–30. A lunar month that starts and ends
//! within one solar month is a leap month. Epoch: the Kali Yuga epoch,
//! 18 February 3102 BCE (Julian).
//!
//! Rule dates address non-leap months; the arithmetic places a requested
//! (month, day) in the non-leap occurrence of that month.

use super::AlternateCalendar;
use crate::julian::fixed_from_julian;
use feriae_core::errors::{Error, Result};
use feriae_core::Year;

const HINDU_EPOCH: i64 = fixed_from_julian(-3101, 2, 18);

const ARYA_SOLAR_YEAR: f64 = 1_577_917_500.0 / 4_320_000.0;
const ARYA_SOLAR_MONTH: f64 = ARYA_SOLAR_YEAR / 12.0;
const ARYA_LUNAR_MONTH: f64 = 1_577_917_500.0 / 53_433_336.0;
const ARYA_LUNAR_DAY: f64 = ARYA_LUNAR_MONTH / 30.0;

/// The old Hindu lunisolar (arya) calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct HinduCalendar;

impl AlternateCalendar for HinduCalendar {
    fn name(&self) -> &'static str {
        "Hindu lunisolar (arya)"
    }

    fn to_fixed(&self, year: Year, month: u8, day: u8) -> Result<i64> {
        if !(1..=12).contains(&month) {
            return Err(Error::Conversion(format!(
                "hindu month {month} out of range [1, 12]"
            )));
        }
        if !(1..=30).contains(&day) {
            return Err(Error::Conversion(format!(
                "hindu day {day} out of range [1, 30]"
            )));
        }
        let mina = (12.0 * f64::from(year) - 1.0) * ARYA_SOLAR_MONTH;
        let lunar_new_year = ARYA_LUNAR_MONTH * ((mina / ARYA_LUNAR_MONTH).floor() + 1.0);
        // Ordinal of the leap month in this year, if any; a non-leap month at
        // or after it sits one lunar month later.
        let leap_ordinal = ((lunar_new_year - mina) / (ARYA_SOLAR_MONTH - ARYA_LUNAR_MONTH)).ceil();
        let months = if leap_ordinal <= f64::from(month) {
            f64::from(month)
        } else {
            f64::from(month) - 1.0
        };
        let offset =
            lunar_new_year + ARYA_LUNAR_MONTH * months + (f64::from(day) - 1.0) * ARYA_LUNAR_DAY + 0.75;
        Ok(HINDU_EPOCH + offset.floor() as i64)
    }

    fn from_fixed(&self, fixed: i64) -> Result<(Year, u8, u8)> {
        let sun = (fixed - HINDU_EPOCH) as f64 + 0.25;
        if sun < 0.0 {
            return Err(Error::Conversion(format!(
                "serial {fixed} precedes the Kali Yuga epoch"
            )));
        }
        let new_moon = sun - sun.rem_euclid(ARYA_LUNAR_MONTH);
        let month = ((new_moon / ARYA_SOLAR_MONTH).ceil() as i64).rem_euclid(12) + 1;
        let day = ((sun / ARYA_LUNAR_DAY).floor() as i64).rem_euclid(30) + 1;
        let year = ((new_moon + ARYA_SOLAR_MONTH) / ARYA_SOLAR_YEAR).ceil() as i64 - 1;
        let year = Year::try_from(year)
            .map_err(|_| Error::Conversion(format!("hindu year overflow for serial {fixed}")))?;
        Ok((year, month as u8, day as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::Date;

    #[test]
    fn new_year_of_kali_yuga_5101() {
        // Chaitra 1, K.Y. 5101 falls in the spring of 2000 CE.
        let fixed = HinduCalendar.to_fixed(5101, 1, 1).unwrap();
        let d = Date::from_fixed(fixed).unwrap();
        assert_eq!((d.year(), d.month()), (2000, 4));
        assert_eq!(HinduCalendar.from_fixed(fixed).unwrap(), (5101, 1, 1));
    }

    #[test]
    fn year_numbers_track_gregorian() {
        // K.Y. year ≈ Gregorian year + 3101 around the spring new year.
        for (gy, ky) in [(1900, 5001), (2000, 5101), (2024, 5125)] {
            let mid = Date::from_ymd(gy, 7, 1).unwrap();
            let (year, _, _) = HinduCalendar.from_fixed(mid.fixed()).unwrap();
            assert_eq!(year, ky, "K.Y. year at mid-{gy}");
        }
    }

    #[test]
    fn phalguna_full_moon_lands_in_spring() {
        // Holi (Phalguna 15) falls in February–April of every Gregorian year.
        for year in 2019..2026 {
            let dates =
                super::super::dates_in_gregorian_year(&HinduCalendar, year, 12, 15, 0).unwrap();
            assert_eq!(dates.len(), 1, "Phalguna purnima count in {year}");
            assert!((2..=4).contains(&dates[0].month()), "{}", dates[0]);
        }
    }

    #[test]
    fn pre_epoch_serial_is_an_error() {
        assert!(HinduCalendar.from_fixed(HINDU_EPOCH - 400).is_err());
    }

    #[test]
    fn rejects_impossible_fields() {
        assert!(HinduCalendar.to_fixed(5101, 13, 1).is_err());
        assert!(HinduCalendar.to_fixed(5101, 1, 31).is_err());
    }
}
