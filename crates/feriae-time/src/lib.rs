//! # feriae-time
//!
//! Date arithmetic and calendar mathematics for the feriae holiday engine:
//! the proleptic Gregorian [`Date`] type, Easter Sunday computus, and the
//! alternate calendars (Islamic, Ethiopian-Orthodox, Hindu) used by
//! declarative holiday rules.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Alternate-calendar trait and implementations.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Easter Sunday computus.
pub mod easter;

/// Proleptic Julian calendar conversion.
pub mod julian;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendars::{
    dates_in_gregorian_year, AlternateCalendar, EthiopianCalendar, HinduCalendar, IslamicCalendar,
};
pub use date::Date;
pub use easter::{easter_sunday, Chronology};
pub use month::Month;
pub use weekday::Weekday;
