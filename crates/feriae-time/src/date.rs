//! `Date` type.
//!
//! Dates are represented as a *rata die* serial number: day 1 is January 1
//! of year 1 in the proleptic Gregorian calendar. The serial form makes
//! weekday math and cross-calendar conversion plain integer arithmetic.
//!
//! # Serial number convention
//! * Serial 1 = 0001-01-01 (a Monday).
//! * The valid range is 0001-01-01 to 9999-12-31.
//! * Conversions to and from other calendars exchange the serial as `i64`
//!   so that epoch arithmetic for pre-common-era epochs cannot overflow.

use crate::weekday::Weekday;
use feriae_core::errors::{Error, Result};
use feriae_core::Year;

/// A proleptic Gregorian calendar date, stored as a rata-die serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: 0001-01-01.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: 9999-12-31.
    pub const MAX: Date = Date(fixed_from_gregorian(9999, 12, 31) as i32);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(fixed_from_gregorian(year as i64, month, day) as i32))
    }

    /// Create a date from a rata-die serial number.
    ///
    /// Returns an error if the serial falls outside the representable range;
    /// this is how out-of-range alternate-calendar conversions surface.
    pub fn from_fixed(fixed: i64) -> Result<Self> {
        if fixed < Self::MIN.0 as i64 || fixed > Self::MAX.0 as i64 {
            return Err(Error::Date(format!(
                "serial {fixed} outside the representable range [0001-01-01, 9999-12-31]"
            )));
        }
        Ok(Date(fixed as i32))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the rata-die serial number.
    pub fn fixed(&self) -> i64 {
        self.0 as i64
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> Year {
        gregorian_from_fixed(self.0 as i64).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        gregorian_from_fixed(self.0 as i64).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        gregorian_from_fixed(self.0 as i64).2
    }

    /// Return the weekday. Serial 1 (0001-01-01) is a Monday.
    pub fn weekday(&self) -> Weekday {
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days. Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Date::from_fixed(self.0 as i64 + n as i64)
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = gregorian_from_fixed(self.0 as i64);
        let last = days_in_month(y, m);
        Date(fixed_from_gregorian(y as i64, m, last) as i32)
    }

    /// Return the *n*-th occurrence (1-based) of `weekday` in `year`/`month`.
    ///
    /// # Errors
    /// Returns an error if `n` is zero or the month has no such occurrence.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: Year, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let first_wd = first.weekday().ordinal();
        let target_wd = weekday.ordinal();
        let skip = (target_wd as i32 - first_wd as i32).rem_euclid(7) as u8;
        let day = 1 + skip + 7 * (n - 1);
        if day > days_in_month(year, month) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day)
    }

    /// Return the last occurrence of `weekday` in `year`/`month`.
    pub fn last_weekday_in_month(weekday: Weekday, year: Year, month: u8) -> Result<Self> {
        let eom = Date::from_ymd(year, month, 1)?.end_of_month();
        let back = (eom.weekday().ordinal() as i32 - weekday.ordinal() as i32).rem_euclid(7);
        eom.add_days(-back)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = gregorian_from_fixed(self.0 as i64);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Gregorian helpers ─────────────────────────────────────────────────────────

/// Whether a given proleptic Gregorian year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
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

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Convert (year, month, day) to a rata-die serial.
///
/// No range validation; callers validate where the result becomes a `Date`.
pub(crate) const fn fixed_from_gregorian(year: i64, month: u8, day: u8) -> i64 {
    let y = year - 1;
    let mut fixed = 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400);
    fixed += MONTH_OFFSET[(month - 1) as usize];
    if month > 2 && ((year % 4 == 0 && year % 100 != 0) || year % 400 == 0) {
        fixed += 1;
    }
    fixed + day as i64
}

/// Decompose a rata-die serial into (year, month, day).
pub(crate) fn gregorian_from_fixed(fixed: i64) -> (Year, u8, u8) {
    // Cycle decomposition: 400-year, 100-year, 4-year, 1-year.
    let d0 = fixed - 1;
    let n400 = d0.div_euclid(146_097);
    let d1 = d0.rem_euclid(146_097);
    let n100 = d1.div_euclid(36_524);
    let d2 = d1.rem_euclid(36_524);
    let n4 = d2.div_euclid(1_461);
    let d3 = d2.rem_euclid(1_461);
    let n1 = d3.div_euclid(365);
    let mut year = (400 * n400 + 100 * n100 + 4 * n4 + n1) as Year;
    if !(n100 == 4 || n1 == 4) {
        year += 1;
    }
    let mut remaining = (fixed - fixed_from_gregorian(year as i64, 1, 1) + 1) as i32;
    let mut month = 1u8;
    loop {
        let days = days_in_month(year, month) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        month += 1;
    }
    (year, month, remaining as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
