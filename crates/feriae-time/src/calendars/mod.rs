//! Alternate-calendar trait and implementations.
//!
//! An alternate calendar converts between its own (year, month, day) triple
//! and the rata-die serial shared with [`Date`]. Because these calendars'
//! year lengths differ from the Gregorian year, a single (month, day) can
//! occur zero, one, or two times within one Gregorian year;
//! [`dates_in_gregorian_year`] resolves all occurrences.

mod ethiopian;
mod hindu;
mod islamic;

pub use ethiopian::EthiopianCalendar;
pub use hindu::HinduCalendar;
pub use islamic::IslamicCalendar;

use crate::date::Date;
use feriae_core::errors::Result;
use feriae_core::Year;

/// A calendar whose dates can be converted to and from rata-die serials.
pub trait AlternateCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Islamic (civil)"`).
    fn name(&self) -> &'static str;

    /// Convert a (year, month, day) in this calendar to a rata-die serial.
    ///
    /// Returns a conversion error for a month or day the calendar cannot
    /// contain.
    fn to_fixed(&self, year: Year, month: u8, day: u8) -> Result<i64>;

    /// Decompose a rata-die serial into this calendar's (year, month, day).
    fn from_fixed(&self, fixed: i64) -> Result<(Year, u8, u8)>;
}

/// Resolve every occurrence of an alternate-calendar (month, day) within a
/// Gregorian year.
///
/// The search window is widened by `|shift_days|` on both sides so that a
/// shifted observance anchored just outside the year is still found; each
/// candidate is shifted by `shift_days` and kept only if it falls inside the
/// Gregorian year itself.
pub fn dates_in_gregorian_year(
    calendar: &dyn AlternateCalendar,
    gregorian_year: Year,
    month: u8,
    day: u8,
    shift_days: i32,
) -> Result<Vec<Date>> {
    let jan_1 = Date::from_ymd(gregorian_year, 1, 1)?;
    let dec_31 = Date::from_ymd(gregorian_year, 12, 31)?;
    let widen = i64::from(shift_days.abs());

    let (alt_low, _, _) = calendar.from_fixed(jan_1.fixed() - widen)?;
    let (alt_high, _, _) = calendar.from_fixed(dec_31.fixed() + widen)?;

    let mut dates = Vec::new();
    for alt_year in alt_low..=alt_high {
        let fixed = calendar.to_fixed(alt_year, month, day)? + i64::from(shift_days);
        let candidate = Date::from_fixed(fixed)?;
        if candidate >= jan_1 && candidate <= dec_31 {
            dates.push(candidate);
        }
    }
    Ok(dates)
}
