//! `HolidayCalendar` — the evaluation API over a composed configuration.

use crate::hierarchy::HierarchyNode;
use crate::holiday::Holiday;
use feriae_core::errors::Result;
use feriae_core::Year;
use feriae_time::Date;
use std::collections::BTreeSet;

/// A validated, immutable holiday configuration ready for evaluation.
///
/// Composition runs the fatal configuration checks once (duplicate sibling
/// ids, malformed rule data); after that, evaluation holds no mutable state
/// and may run concurrently from any number of threads.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    root: HierarchyNode,
}

impl HolidayCalendar {
    /// Compose a configuration tree, validating it.
    pub fn new(root: HierarchyNode) -> Result<Self> {
        root.validate()?;
        Ok(HolidayCalendar { root })
    }

    /// All holidays of `year` along the region path.
    ///
    /// The path is walked from the root: each matched segment merges that
    /// node's holidays into the result; unmatched segments are ignored.
    pub fn holidays_in_year(&self, year: Year, path: &[&str]) -> Result<BTreeSet<Holiday>> {
        self.root.evaluate(year, path)
    }

    /// All holidays falling inside `[from, to]` (inclusive) along the region
    /// path. An empty range (`from > to`) yields an empty set.
    pub fn holidays_in_range(
        &self,
        from: Date,
        to: Date,
        path: &[&str],
    ) -> Result<BTreeSet<Holiday>> {
        let mut holidays = BTreeSet::new();
        if from > to {
            return Ok(holidays);
        }
        for year in from.year()..=to.year() {
            for holiday in self.root.evaluate(year, path)? {
                if holiday.date >= from && holiday.date <= to {
                    holidays.insert(holiday);
                }
            }
        }
        Ok(holidays)
    }

    /// Whether `date` is a holiday along the region path.
    pub fn is_holiday(&self, date: Date, path: &[&str]) -> Result<bool> {
        Ok(self
            .holidays_in_year(date.year(), path)?
            .iter()
            .any(|holiday| holiday.date == date))
    }

    /// The region tree, for callers enumerating valid paths.
    pub fn hierarchy(&self) -> &HierarchyNode {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{FixedDate, FixedRule, HolidayRule, RuleCommon};
    use feriae_time::Month;

    fn fixed(key: &str, month: Month, day: u8) -> HolidayRule {
        HolidayRule::Fixed(FixedRule {
            date: FixedDate { month, day },
            common: RuleCommon {
                description_key: key.into(),
                ..RuleCommon::default()
            },
        })
    }

    fn calendar() -> HolidayCalendar {
        let mut root = HierarchyNode::new("xx");
        root.rules.push(fixed("NEW_YEAR", Month::January, 1));
        root.rules.push(fixed("NATIONAL_DAY", Month::July, 20));
        HolidayCalendar::new(root).unwrap()
    }

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn year_query() {
        let cal = calendar();
        let holidays = cal.holidays_in_year(2011, &[]).unwrap();
        assert_eq!(holidays.len(), 2);
    }

    #[test]
    fn range_query_filters_by_inclusion() {
        let cal = calendar();
        // Mid-2011 through mid-2012 spans one national day and one new year.
        let holidays = cal
            .holidays_in_range(date(2011, 6, 1), date(2012, 6, 1), &[])
            .unwrap();
        let dates: Vec<Date> = holidays.iter().map(|h| h.date).collect();
        assert_eq!(dates, vec![date(2011, 7, 20), date(2012, 1, 1)]);
    }

    #[test]
    fn range_boundaries_are_inclusive() {
        let cal = calendar();
        let holidays = cal
            .holidays_in_range(date(2011, 1, 1), date(2011, 7, 20), &[])
            .unwrap();
        assert_eq!(holidays.len(), 2);
    }

    #[test]
    fn empty_range_is_empty_not_an_error() {
        let cal = calendar();
        let holidays = cal
            .holidays_in_range(date(2012, 1, 1), date(2011, 1, 1), &[])
            .unwrap();
        assert!(holidays.is_empty());
    }

    #[test]
    fn membership_query() {
        let cal = calendar();
        assert!(cal.is_holiday(date(2011, 7, 20), &[]).unwrap());
        assert!(!cal.is_holiday(date(2011, 7, 21), &[]).unwrap());
    }

    #[test]
    fn duplicate_sibling_ids_are_fatal_at_composition() {
        let mut root = HierarchyNode::new("xx");
        root.children.push(HierarchyNode::new("a"));
        root.children.push(HierarchyNode::new("A"));
        assert!(HolidayCalendar::new(root).is_err());
    }

    #[test]
    fn calendar_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HolidayCalendar>();
    }
}
