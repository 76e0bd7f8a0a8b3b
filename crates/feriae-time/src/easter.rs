//! Easter Sunday computus.
//!
//! Two algorithms are implemented: the full Gregorian (Gauss/Clavius)
//! computus and the Julian computus. Both derive the date from a composite
//! value `x` with `month = x / 31` and `day = x % 31 + 1`.

use crate::date::Date;
use crate::julian::date_from_julian;
use feriae_core::errors::Result;
use feriae_core::Year;
use serde::{Deserialize, Serialize};

/// Which computus to use for an Easter-relative rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Chronology {
    /// Historical policy: Julian computus for years up to 1583, Gregorian
    /// afterwards. The pre-1584 branch takes the Julian formula's month and
    /// day *as is*, without converting between calendars.
    #[default]
    Auto,
    /// Julian computus; the resulting Julian-calendar date is converted to
    /// its Gregorian equivalent.
    Julian,
    /// Full Gregorian computus, valid at any proleptic Gregorian year.
    Gregorian,
}

/// Compute Easter Sunday for `year` under the given chronology.
pub fn easter_sunday(year: Year, chronology: Chronology) -> Result<Date> {
    match chronology {
        Chronology::Gregorian => {
            let (month, day) = gregorian_easter(year);
            Date::from_ymd(year, month, day)
        }
        Chronology::Julian => {
            let (month, day) = julian_easter(year);
            date_from_julian(year, month, day)
        }
        Chronology::Auto => {
            if year <= 1583 {
                let (month, day) = julian_easter(year);
                Date::from_ymd(year, month, day)
            } else {
                let (month, day) = gregorian_easter(year);
                Date::from_ymd(year, month, day)
            }
        }
    }
}

/// Gregorian (Gauss/Clavius) computus. Returns (month, day).
fn gregorian_easter(year: Year) -> (u8, u8) {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let j = c % 4;
    let k = (32 + 2 * e + 2 * i - h - j) % 7;
    let l = (a + 11 * h + 22 * k) / 451;
    let x = h + k - 7 * l + 114;
    ((x / 31) as u8, (x % 31 + 1) as u8)
}

/// Julian computus. Returns (month, day) in the Julian calendar.
fn julian_easter(year: Year) -> (u8, u8) {
    let a = year % 4;
    let b = year % 7;
    let c = year % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    let x = d + e + 114;
    ((x / 31) as u8, (x % 31 + 1) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn gregorian_known_years() {
        let cases = [
            (2011, 4, 24),
            (2013, 3, 31),
            (2023, 4, 9),
            (2024, 3, 31),
            (2000, 4, 23),
            (1999, 4, 4),
            (1818, 3, 22), // earliest possible date
            (1943, 4, 25), // latest possible date
        ];
        for (y, m, d) in cases {
            assert_eq!(
                easter_sunday(y, Chronology::Gregorian).unwrap(),
                date(y, m, d),
                "Easter {y}"
            );
        }
    }

    #[test]
    fn auto_matches_gregorian_after_1583() {
        for y in [1584, 1700, 2011, 2013, 2100] {
            assert_eq!(
                easter_sunday(y, Chronology::Auto).unwrap(),
                easter_sunday(y, Chronology::Gregorian).unwrap()
            );
        }
    }

    #[test]
    fn auto_uses_julian_formula_before_1584() {
        // The historical branch keeps the Julian month/day uninterpreted.
        let (m, d) = super::julian_easter(1500);
        assert_eq!(easter_sunday(1500, Chronology::Auto).unwrap(), date(1500, m, d));
        // 1500: Julian computus gives April 19.
        assert_eq!((m, d), (4, 19));
    }

    #[test]
    fn julian_chronology_converts() {
        // Orthodox Easter 2023: Julian April 3 = Gregorian April 16.
        assert_eq!(
            easter_sunday(2023, Chronology::Julian).unwrap(),
            date(2023, 4, 16)
        );
        // Orthodox Easter 2024: Julian April 22 = Gregorian May 5.
        assert_eq!(
            easter_sunday(2024, Chronology::Julian).unwrap(),
            date(2024, 5, 5)
        );
    }

    #[test]
    fn easter_is_always_a_sunday() {
        use crate::weekday::Weekday;
        for y in 1584..2200 {
            let e = easter_sunday(y, Chronology::Gregorian).unwrap();
            assert_eq!(e.weekday(), Weekday::Sunday, "Easter {y} = {e}");
        }
    }
}
