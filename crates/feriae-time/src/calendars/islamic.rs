//! Islamic (Hijri) calendar, tabular/civil variant.
//!
//! The civil calendar is the arithmetic approximation used for
//! administrative purposes: alternating 30/29-day months and a 30-year
//! cycle of 11 leap years in which the final month gains a 30th day.
//! Epoch: 16 July 622 (Julian), the Friday epoch.

use super::AlternateCalendar;
use crate::julian::fixed_from_julian;
use feriae_core::errors::{Error, Result};
use feriae_core::Year;

const ISLAMIC_EPOCH: i64 = fixed_from_julian(622, 7, 16);

/// The tabular (civil) Islamic calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct IslamicCalendar;

impl IslamicCalendar {
    /// Whether a Hijri year is a leap year of the 30-year cycle.
    pub fn is_leap_year(year: Year) -> bool {
        (14 + 11 * i64::from(year)).rem_euclid(30) < 11
    }

    /// Number of days in a Hijri month.
    pub fn days_in_month(year: Year, month: u8) -> u8 {
        if month % 2 == 1 || (month == 12 && Self::is_leap_year(year)) {
            30
        } else {
            29
        }
    }
}

impl AlternateCalendar for IslamicCalendar {
    fn name(&self) -> &'static str {
        "Islamic (civil)"
    }

    fn to_fixed(&self, year: Year, month: u8, day: u8) -> Result<i64> {
        if !(1..=12).contains(&month) {
            return Err(Error::Conversion(format!(
                "islamic month {month} out of range [1, 12]"
            )));
        }
        let days_in = Self::days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Conversion(format!(
                "islamic day {day} out of range [1, {days_in}] for {year}-{month:02} AH"
            )));
        }
        let y = i64::from(year);
        let m = i64::from(month);
        Ok(ISLAMIC_EPOCH - 1
            + (y - 1) * 354
            + (3 + 11 * y).div_euclid(30)
            + 29 * (m - 1)
            + m.div_euclid(2)
            + i64::from(day))
    }

    fn from_fixed(&self, fixed: i64) -> Result<(Year, u8, u8)> {
        let year = ((fixed - ISLAMIC_EPOCH) * 30 + 10_646).div_euclid(10_631);
        let year = Year::try_from(year)
            .map_err(|_| Error::Conversion(format!("islamic year overflow for serial {fixed}")))?;
        let prior_days = fixed - self.to_fixed(year, 1, 1)?;
        let month = ((prior_days * 11 + 330) / 325) as u8;
        let day = (fixed - self.to_fixed(year, month, 1)? + 1) as u8;
        Ok((year, month, day))
    }
}
