//! Validity window and year-cycle predicate shared by every rule variant.

use feriae_core::Year;
use serde::{Deserialize, Serialize};

/// Recurrence cycle restricting the years a rule applies in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum YearCycle {
    /// The rule applies every year.
    #[default]
    EveryYear,
    /// Odd-numbered years only.
    OddYears,
    /// Even-numbered years only.
    EvenYears,
    /// Every second year, anchored at `valid_from`.
    TwoYears,
    /// Every third year, anchored at `valid_from`.
    ThreeYears,
    /// Every fourth year, anchored at `valid_from`.
    FourYears,
    /// Every fifth year, anchored at `valid_from`.
    FiveYears,
    /// Every sixth year, anchored at `valid_from`.
    SixYears,
}

impl YearCycle {
    /// Cycle length of the anchored N-year variants, `None` otherwise.
    fn period(&self) -> Option<Year> {
        match self {
            YearCycle::EveryYear | YearCycle::OddYears | YearCycle::EvenYears => None,
            YearCycle::TwoYears => Some(2),
            YearCycle::ThreeYears => Some(3),
            YearCycle::FourYears => Some(4),
            YearCycle::FiveYears => Some(5),
            YearCycle::SixYears => Some(6),
        }
    }
}

impl std::str::FromStr for YearCycle {
    type Err = feriae_core::Error;

    /// Parse a configuration token. Providers reading formats without serde
    /// support use this; an unrecognized token is a fatal configuration
    /// error naming the offending value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EVERY_YEAR" => Ok(YearCycle::EveryYear),
            "ODD_YEARS" => Ok(YearCycle::OddYears),
            "EVEN_YEARS" => Ok(YearCycle::EvenYears),
            "2_YEARS" | "TWO_YEARS" => Ok(YearCycle::TwoYears),
            "3_YEARS" | "THREE_YEARS" => Ok(YearCycle::ThreeYears),
            "4_YEARS" | "FOUR_YEARS" => Ok(YearCycle::FourYears),
            "5_YEARS" | "FIVE_YEARS" => Ok(YearCycle::FiveYears),
            "6_YEARS" | "SIX_YEARS" => Ok(YearCycle::SixYears),
            other => Err(feriae_core::Error::UnknownEnumerator {
                kind: "year cycle",
                value: other.to_owned(),
            }),
        }
    }
}

/// Validity record attached to every holiday rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limited {
    /// First year (inclusive) the rule applies in; also the anchor for the
    /// N-year cycles.
    #[serde(default)]
    pub valid_from: Option<Year>,
    /// Last year (inclusive) the rule applies in.
    #[serde(default)]
    pub valid_to: Option<Year>,
    /// Recurrence cycle.
    #[serde(default)]
    pub cycle: YearCycle,
}

impl Limited {
    /// Whether the rule applies in `year`.
    ///
    /// An N-year cycle without a `valid_from` anchor cannot be evaluated; it
    /// is treated as valid every year, matching long-standing configuration
    /// behavior. A warning is traced because the combination is almost
    /// certainly a configuration mistake.
    pub fn is_valid(&self, year: Year) -> bool {
        let in_range = self.valid_from.map_or(true, |from| from <= year)
            && self.valid_to.map_or(true, |to| to >= year);
        if !in_range {
            return false;
        }
        match self.cycle {
            YearCycle::EveryYear => true,
            YearCycle::OddYears => year % 2 != 0,
            YearCycle::EvenYears => year % 2 == 0,
            cycle => match (cycle.period(), self.valid_from) {
                (Some(n), Some(from)) => (year - from) % n == 0,
                (Some(_), None) => {
                    tracing::warn!(
                        ?cycle,
                        "cycle has no valid_from anchor; treating rule as valid every year"
                    );
                    true
                }
                (None, _) => unreachable!("anchored cycles always have a period"),
            },
        }
    }
}
