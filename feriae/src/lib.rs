//! # feriae
//!
//! A declarative, multi-calendar holiday rule evaluation engine.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `feriae-*` crates.
//!
//! Holidays are described by declarative rules (fixed dates, weekday
//! selectors, Easter-relative feasts, Islamic / Ethiopian-Orthodox / Hindu
//! calendar dates), organised in a region tree whose path segments refine
//! the result set. Evaluation is a pure function of (configuration, year,
//! region path).
//!
//! ## Quick start
//!
//! ```rust
//! use feriae::rules::calendar::HolidayCalendar;
//! use feriae::rules::hierarchy::HierarchyNode;
//! use feriae::rules::rule::{FixedDate, FixedRule, HolidayRule, RuleCommon};
//! use feriae::time::Month;
//!
//! let mut root = HierarchyNode::new("xx");
//! root.rules.push(HolidayRule::Fixed(FixedRule {
//!     date: FixedDate { month: Month::January, day: 1 },
//!     common: RuleCommon {
//!         description_key: "NEW_YEAR".into(),
//!         ..RuleCommon::default()
//!     },
//! }));
//!
//! let calendar = HolidayCalendar::new(root).unwrap();
//! let holidays = calendar.holidays_in_year(2024, &[]).unwrap();
//! assert_eq!(holidays.len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and primitive aliases.
pub use feriae_core as core;

/// Date arithmetic, Easter computus, and alternate calendars.
pub use feriae_time as time;

/// Rule model, hierarchy composition, and the evaluation API.
pub use feriae_rules as rules;
