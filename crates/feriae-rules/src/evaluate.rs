//! Per-variant date resolution.
//!
//! Each rule variant resolves to zero or more Gregorian dates for a query
//! year; the shared driver applies validity and moving conditions around
//! the variant-specific logic.

use crate::holiday::Holiday;
use crate::moving::apply_moving;
use crate::rule::{Direction, FixedDate, FixedWeekday, HolidayRule, RelativeShift};
use feriae_core::errors::Result;
use feriae_core::Year;
use feriae_time::calendars::{
    dates_in_gregorian_year, EthiopianCalendar, HinduCalendar, IslamicCalendar,
};
use feriae_time::easter::easter_sunday;
use feriae_time::{Date, Weekday};

impl Direction {
    fn step(&self) -> i32 {
        match self {
            Direction::Before => -1,
            Direction::After => 1,
        }
    }
}

/// Scan day-by-day from (but excluding) `anchor` until `weekday` matches.
fn scan_weekday_exclusive(anchor: Date, direction: Direction, weekday: Weekday) -> Result<Date> {
    let step = direction.step();
    let mut date = anchor.add_days(step)?;
    while date.weekday() != weekday {
        date = date.add_days(step)?;
    }
    Ok(date)
}

impl FixedDate {
    /// Resolve against a year. `None` only for Feb 29 in a non-leap year,
    /// which emits no holiday.
    pub(crate) fn resolve(&self, year: Year) -> Option<Date> {
        Date::from_ymd(year, self.month.number(), self.day).ok()
    }
}

impl FixedWeekday {
    pub(crate) fn resolve(&self, year: Year) -> Result<Date> {
        match self.ordinal.count() {
            Some(n) => Date::nth_weekday(n, self.weekday, year, self.month.number()),
            None => Date::last_weekday_in_month(self.weekday, year, self.month.number()),
        }
    }
}

impl HolidayRule {
    /// Evaluate the rule for a year.
    ///
    /// Returns the (possibly empty) list of holidays the rule contributes:
    /// nothing when the rule is not valid for the year or its date does not
    /// exist in the year, one date for most variants, up to two for the
    /// alternate-calendar variants.
    pub fn holidays(&self, year: Year) -> Result<Vec<Holiday>> {
        if !self.is_valid(year) {
            return Ok(Vec::new());
        }
        let common = self.common();
        let mut holidays = Vec::new();
        for date in self.resolve(year)? {
            let observed = apply_moving(date, &common.moving)?;
            holidays.push(Holiday::new(
                observed,
                common.description_key.clone(),
                common.holiday_type,
            ));
        }
        Ok(holidays)
    }

    fn resolve(&self, year: Year) -> Result<Vec<Date>> {
        match self {
            HolidayRule::Fixed(r) => Ok(r.date.resolve(year).into_iter().collect()),

            HolidayRule::RelativeToFixed(r) => {
                let Some(anchor) = r.anchor.resolve(year) else {
                    return Ok(Vec::new());
                };
                let date = match r.shift {
                    RelativeShift::Weekday(weekday) => {
                        scan_weekday_exclusive(anchor, r.direction, weekday)?
                    }
                    RelativeShift::Days(days) => {
                        anchor.add_days(r.direction.step() * i32::from(days))?
                    }
                };
                Ok(vec![date])
            }

            HolidayRule::FixedWeekdayInMonth(r) => Ok(vec![r.fixed_weekday.resolve(year)?]),

            HolidayRule::RelativeToWeekdayInMonth(r) => {
                let anchor = r.anchor.resolve(year)?;
                Ok(vec![scan_weekday_exclusive(anchor, r.direction, r.weekday)?])
            }

            HolidayRule::FixedWeekdayBetweenFixed(r) => {
                let (Some(from), Some(to)) = (r.from.resolve(year), r.to.resolve(year)) else {
                    return Ok(Vec::new());
                };
                let mut date = from;
                loop {
                    if date.weekday() == r.weekday {
                        return Ok(vec![date]);
                    }
                    if date == to {
                        // Zero matches: no holiday emitted.
                        return Ok(Vec::new());
                    }
                    date = date.add_days(1)?;
                }
            }

            HolidayRule::FixedWeekdayRelativeToFixed(r) => {
                let Some(anchor) = r.anchor.resolve(year) else {
                    return Ok(Vec::new());
                };
                let first = scan_weekday_exclusive(anchor, r.direction, r.weekday)?;
                let extra_weeks = i32::from(r.ordinal.count().unwrap_or(1)) - 1;
                Ok(vec![first.add_days(r.direction.step() * 7 * extra_weeks)?])
            }

            HolidayRule::Christian(r) => {
                let easter = easter_sunday(year, r.chronology)?;
                Ok(vec![easter.add_days(r.kind.days_after_easter())?])
            }

            HolidayRule::RelativeToEasterSunday(r) => {
                let easter = easter_sunday(year, r.chronology)?;
                Ok(vec![easter.add_days(r.days)?])
            }

            HolidayRule::Islamic(r) => {
                let (month, day) = r.kind.month_day();
                dates_in_gregorian_year(&IslamicCalendar, year, month, day, r.shift_days)
            }

            HolidayRule::EthiopianOrthodox(r) => {
                let (month, day) = r.kind.month_day();
                dates_in_gregorian_year(&EthiopianCalendar, year, month, day, r.shift_days)
            }

            HolidayRule::Hindu(r) => {
                let (month, day) = r.kind.month_day();
                dates_in_gregorian_year(&HinduCalendar, year, month, day, r.shift_days)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::HolidayType;
    use crate::limited::{Limited, YearCycle};
    use crate::moving::{MoveDirection, MovingCondition};
    use crate::rule::*;
    use feriae_time::easter::Chronology;
    use feriae_time::Month;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn common(key: &str) -> RuleCommon {
        RuleCommon {
            description_key: key.into(),
            ..RuleCommon::default()
        }
    }

    fn single(rule: &HolidayRule, year: Year) -> Date {
        let holidays = rule.holidays(year).unwrap();
        assert_eq!(holidays.len(), 1, "expected one holiday, got {holidays:?}");
        holidays[0].date
    }

    #[test]
    fn fixed() {
        let rule = HolidayRule::Fixed(FixedRule {
            date: FixedDate { month: Month::October, day: 3 },
            common: common("UNITY_DAY"),
        });
        assert_eq!(single(&rule, 2011), date(2011, 10, 3));
    }

    #[test]
    fn fixed_leap_day_skips_common_years() {
        let rule = HolidayRule::Fixed(FixedRule {
            date: FixedDate { month: Month::February, day: 29 },
            common: common("LEAP_DAY"),
        });
        assert!(rule.holidays(2011).unwrap().is_empty());
        assert_eq!(single(&rule, 2012), date(2012, 2, 29));
    }

    #[test]
    fn fixed_weekday_in_month() {
        // Second Monday of July 2011: first Monday is Jul 4, so Jul 11.
        let rule = HolidayRule::FixedWeekdayInMonth(FixedWeekdayInMonthRule {
            fixed_weekday: FixedWeekday {
                month: Month::July,
                weekday: Weekday::Monday,
                ordinal: WeekdayOrdinal::Second,
            },
            common: common("CIVIC_DAY"),
        });
        assert_eq!(single(&rule, 2011), date(2011, 7, 11));
    }

    #[test]
    fn fixed_weekday_in_month_last() {
        // Last Monday of May 2011 = May 30.
        let rule = HolidayRule::FixedWeekdayInMonth(FixedWeekdayInMonthRule {
            fixed_weekday: FixedWeekday {
                month: Month::May,
                weekday: Weekday::Monday,
                ordinal: WeekdayOrdinal::Last,
            },
            common: common("MEMORIAL"),
        });
        assert_eq!(single(&rule, 2011), date(2011, 5, 30));
    }

    #[test]
    fn relative_to_fixed_by_weekday() {
        // Aug 5, 2011 is a Friday; the Thursday after is Aug 11.
        let rule = HolidayRule::RelativeToFixed(RelativeToFixedRule {
            anchor: FixedDate { month: Month::August, day: 5 },
            direction: Direction::After,
            shift: RelativeShift::Weekday(Weekday::Thursday),
            common: common("X"),
        });
        assert_eq!(single(&rule, 2011), date(2011, 8, 11));
    }

    #[test]
    fn relative_to_fixed_by_days() {
        let rule = HolidayRule::RelativeToFixed(RelativeToFixedRule {
            anchor: FixedDate { month: Month::August, day: 5 },
            direction: Direction::Before,
            shift: RelativeShift::Days(3),
            common: common("X"),
        });
        assert_eq!(single(&rule, 2011), date(2011, 8, 2));
    }

    #[test]
    fn relative_to_weekday_in_month() {
        // First Tuesday after the first Monday of November 2011:
        // first Monday is Nov 7, so Nov 8.
        let rule = HolidayRule::RelativeToWeekdayInMonth(RelativeToWeekdayInMonthRule {
            anchor: FixedWeekday {
                month: Month::November,
                weekday: Weekday::Monday,
                ordinal: WeekdayOrdinal::First,
            },
            weekday: Weekday::Tuesday,
            direction: Direction::After,
            common: common("ELECTION_DAY"),
        });
        assert_eq!(single(&rule, 2011), date(2011, 11, 8));
    }

    #[test]
    fn anchor_is_excluded_from_the_scan() {
        // Anchor weekday equals target weekday: must land a full week out.
        let rule = HolidayRule::RelativeToWeekdayInMonth(RelativeToWeekdayInMonthRule {
            anchor: FixedWeekday {
                month: Month::July,
                weekday: Weekday::Monday,
                ordinal: WeekdayOrdinal::First,
            },
            weekday: Weekday::Monday,
            direction: Direction::After,
            common: common("X"),
        });
        assert_eq!(single(&rule, 2011), date(2011, 7, 11));
    }

    #[test]
    fn fixed_weekday_between_fixed() {
        // The Wednesday between Sep 15 and Sep 21, 2011 is Sep 21.
        let rule = HolidayRule::FixedWeekdayBetweenFixed(FixedWeekdayBetweenFixedRule {
            from: FixedDate { month: Month::September, day: 15 },
            to: FixedDate { month: Month::September, day: 21 },
            weekday: Weekday::Wednesday,
            common: common("X"),
        });
        assert_eq!(single(&rule, 2011), date(2011, 9, 21));
    }

    #[test]
    fn fixed_weekday_between_fixed_no_match() {
        // A two-day window with no Friday in it.
        let rule = HolidayRule::FixedWeekdayBetweenFixed(FixedWeekdayBetweenFixedRule {
            from: FixedDate { month: Month::September, day: 19 },
            to: FixedDate { month: Month::September, day: 20 },
            weekday: Weekday::Friday,
            common: common("X"),
        });
        assert!(rule.holidays(2011).unwrap().is_empty());
    }

    #[test]
    fn fixed_weekday_relative_to_fixed() {
        // Second Monday after Aug 5, 2011 (a Friday): Aug 8, then Aug 15.
        let rule = HolidayRule::FixedWeekdayRelativeToFixed(FixedWeekdayRelativeToFixedRule {
            anchor: FixedDate { month: Month::August, day: 5 },
            ordinal: WeekdayOrdinal::Second,
            weekday: Weekday::Monday,
            direction: Direction::After,
            common: common("X"),
        });
        assert_eq!(single(&rule, 2011), date(2011, 8, 15));
    }

    #[test]
    fn christian_feasts_2023() {
        // Easter 2023 is April 9.
        let cases = [
            (ChristianHolidayKind::GoodFriday, date(2023, 4, 7)),
            (ChristianHolidayKind::EasterMonday, date(2023, 4, 10)),
            (ChristianHolidayKind::AscensionDay, date(2023, 5, 18)),
            (ChristianHolidayKind::WhitMonday, date(2023, 5, 29)),
            (ChristianHolidayKind::CorpusChristi, date(2023, 6, 8)),
        ];
        for (kind, expected) in cases {
            let rule = HolidayRule::Christian(ChristianRule {
                kind,
                chronology: Chronology::Auto,
                common: common("X"),
            });
            assert_eq!(single(&rule, 2023), expected, "{kind:?}");
        }
    }

    #[test]
    fn relative_to_easter_sunday() {
        let rule = |days| {
            HolidayRule::RelativeToEasterSunday(RelativeToEasterSundayRule {
                days,
                chronology: Chronology::Auto,
                common: common("X"),
            })
        };
        assert_eq!(single(&rule(1), 2013), date(2013, 4, 1));
        assert_eq!(single(&rule(-1), 2013), date(2013, 3, 30));
    }

    #[test]
    fn islamic_new_year_2008_occurs_twice() {
        let rule = HolidayRule::Islamic(IslamicRule {
            kind: IslamicHolidayKind::Newyear,
            shift_days: 0,
            common: common("ISLAMIC_NEW_YEAR"),
        });
        let dates: Vec<Date> = rule.holidays(2008).unwrap().iter().map(|h| h.date).collect();
        assert_eq!(dates, vec![date(2008, 1, 10), date(2008, 12, 29)]);
    }

    #[test]
    fn ethiopian_new_year_2024() {
        let rule = HolidayRule::EthiopianOrthodox(EthiopianOrthodoxRule {
            kind: EthiopianOrthodoxHolidayKind::Enkutatash,
            shift_days: 0,
            common: common("ENKUTATASH"),
        });
        assert_eq!(single(&rule, 2024), date(2024, 9, 11));
    }

    #[test]
    fn invalid_year_emits_nothing() {
        let rule = HolidayRule::Fixed(FixedRule {
            date: FixedDate { month: Month::October, day: 3 },
            common: RuleCommon {
                description_key: "X".into(),
                holiday_type: HolidayType::OfficialHoliday,
                limited: Limited {
                    valid_from: Some(1990),
                    valid_to: None,
                    cycle: YearCycle::EveryYear,
                },
                moving: Vec::new(),
            },
        });
        assert!(rule.holidays(1989).unwrap().is_empty());
        assert_eq!(single(&rule, 1990), date(1990, 10, 3));
    }

    #[test]
    fn moving_condition_applies_after_resolution() {
        // Dec 25, 2011 is a Sunday; observed the following Monday.
        let rule = HolidayRule::Fixed(FixedRule {
            date: FixedDate { month: Month::December, day: 25 },
            common: RuleCommon {
                description_key: "CHRISTMAS".into(),
                moving: vec![MovingCondition {
                    substitute: Weekday::Sunday,
                    direction: MoveDirection::Next,
                    weekday: Weekday::Monday,
                }],
                ..RuleCommon::default()
            },
        });
        assert_eq!(single(&rule, 2011), date(2011, 12, 26));
        // 2012: Dec 25 is a Tuesday; no substitution.
        assert_eq!(single(&rule, 2012), date(2012, 12, 25));
    }
}
