//! # feriae-rules
//!
//! The holiday rule evaluation engine: the declarative rule model, validity
//! and cycle predicates, moving-condition substitution, hierarchical
//! composition along a region path, and the public evaluation API.
//!
//! A loaded configuration is immutable; evaluation is a pure function of
//! (configuration, year, region path) and is safe to run concurrently.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` — the evaluation API over a composed configuration.
pub mod calendar;

/// Per-variant date resolution.
mod evaluate;

/// `HierarchyNode` — the region tree.
pub mod hierarchy;

/// `Holiday` and `HolidayType` values.
pub mod holiday;

/// Validity window and year-cycle predicate.
pub mod limited;

/// Moving-condition (substitution) resolution.
pub mod moving;

/// External collaborator interfaces and the caller-owned registry.
pub mod provider;

/// The closed set of rule variants.
pub mod rule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::HolidayCalendar;
pub use hierarchy::HierarchyNode;
pub use holiday::{Holiday, HolidayType};
pub use limited::{Limited, YearCycle};
pub use moving::{MoveDirection, MovingCondition};
pub use provider::{CalendarRegistry, ConfigurationProvider, DescriptionResolver};
pub use rule::{
    ChristianHolidayKind, Direction, EthiopianOrthodoxHolidayKind, FixedDate, FixedWeekday,
    HinduHolidayKind, HolidayRule, IslamicHolidayKind, RelativeShift, RuleCommon, WeekdayOrdinal,
};
