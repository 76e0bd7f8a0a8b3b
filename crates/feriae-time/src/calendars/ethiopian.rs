//! Ethiopian-Orthodox calendar.
//!
//! Coptic-style arithmetic with the Amete-Mihret epoch (29 August 8 CE,
//! Julian): twelve 30-day months plus an epagomenal 13th month of five
//! days, six in leap years (every year ≡ 3 mod 4).

use super::AlternateCalendar;
use crate::julian::fixed_from_julian;
use feriae_core::errors::{Error, Result};
use feriae_core::Year;

const ETHIOPIAN_EPOCH: i64 = fixed_from_julian(8, 8, 29);

/// The Ethiopian-Orthodox (Amete Mihret) calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct EthiopianCalendar;

impl EthiopianCalendar {
    /// Whether an Ethiopian year gains a sixth epagomenal day.
    pub fn is_leap_year(year: Year) -> bool {
        year.rem_euclid(4) == 3
    }

    /// Number of days in an Ethiopian month.
    pub fn days_in_month(year: Year, month: u8) -> u8 {
        if month == 13 {
            if Self::is_leap_year(year) {
                6
            } else {
                5
            }
        } else {
            30
        }
    }
}

impl AlternateCalendar for EthiopianCalendar {
    fn name(&self) -> &'static str {
        "Ethiopian-Orthodox"
    }

    fn to_fixed(&self, year: Year, month: u8, day: u8) -> Result<i64> {
        if !(1..=13).contains(&month) {
            return Err(Error::Conversion(format!(
                "ethiopian month {month} out of range [1, 13]"
            )));
        }
        let days_in = Self::days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Conversion(format!(
                "ethiopian day {day} out of range [1, {days_in}] for {year}-{month:02} E.C."
            )));
        }
        let y = i64::from(year);
        Ok(ETHIOPIAN_EPOCH - 1
            + 365 * (y - 1)
            + y.div_euclid(4)
            + 30 * (i64::from(month) - 1)
            + i64::from(day))
    }

    fn from_fixed(&self, fixed: i64) -> Result<(Year, u8, u8)> {
        let year = (4 * (fixed - ETHIOPIAN_EPOCH) + 1463).div_euclid(1461);
        let year = Year::try_from(year)
            .map_err(|_| Error::Conversion(format!("ethiopian year overflow for serial {fixed}")))?;
        let month = ((fixed - self.to_fixed(year, 1, 1)?).div_euclid(30) + 1) as u8;
        let day = (fixed + 1 - self.to_fixed(year, month, 1)?) as u8;
        Ok((year, month, day))
    }
}
