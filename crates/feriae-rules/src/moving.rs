//! Moving-condition resolution.
//!
//! A moving condition substitutes a computed date that falls on an
//! inconvenient weekday (e.g. "if on Sunday, observe the following Monday").

use feriae_core::errors::Result;
use feriae_time::{Date, Weekday};
use serde::{Deserialize, Serialize};

/// Direction a substituted date moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoveDirection {
    /// Move forward in time.
    Next,
    /// Move backward in time.
    Previous,
}

/// A single substitution condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovingCondition {
    /// Weekday that triggers the substitution.
    pub substitute: Weekday,
    /// Direction to search in.
    pub direction: MoveDirection,
    /// Weekday the date is moved to.
    pub weekday: Weekday,
}

/// Apply an ordered list of moving conditions to a computed date.
///
/// Conditions are tried in configured order and only the **first** one whose
/// trigger weekday matches is applied; the rest are ignored. The move itself
/// is same-day inclusive: a date already on the target weekday stays put.
pub fn apply_moving(date: Date, conditions: &[MovingCondition]) -> Result<Date> {
    for condition in conditions {
        if date.weekday() == condition.substitute {
            let step = match condition.direction {
                MoveDirection::Next => 1,
                MoveDirection::Previous => -1,
            };
            let mut moved = date;
            while moved.weekday() != condition.weekday {
                moved = moved.add_days(step)?;
            }
            return Ok(moved);
        }
    }
    Ok(date)
}
