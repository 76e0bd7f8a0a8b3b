//! `Holiday` — the immutable result value of an evaluation.

use feriae_time::Date;
use serde::{Deserialize, Serialize};

/// Officiality of a holiday.
///
/// A closed enumeration; officiality is a property queried through
/// [`HolidayType::is_official`], not a type hierarchy.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolidayType {
    /// A statutory public holiday.
    #[default]
    OfficialHoliday,
    /// An observance without statutory force.
    UnofficialHoliday,
}

impl HolidayType {
    /// Return `true` for statutory holidays.
    pub fn is_official(&self) -> bool {
        matches!(self, HolidayType::OfficialHoliday)
    }
}

/// A single computed holiday.
///
/// Equality, ordering, and hashing are by value (date, description key,
/// type); evaluation produces fresh values and never mutates them. The
/// description key is resolved to human-readable text by an external
/// [`DescriptionResolver`](crate::provider::DescriptionResolver), never
/// during date computation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Holiday {
    /// The Gregorian date the holiday falls on.
    pub date: Date,
    /// Localization key identifying the holiday.
    pub description_key: String,
    /// Officiality.
    pub holiday_type: HolidayType,
}

impl Holiday {
    /// Create a holiday value.
    pub fn new(date: Date, description_key: impl Into<String>, holiday_type: HolidayType) -> Self {
        Holiday {
            date,
            description_key: description_key.into(),
            holiday_type,
        }
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.description_key)
    }
}
