//! The closed set of holiday rule variants.
//!
//! `HolidayRule` replaces the reflective, per-element dispatch of classic
//! rule engines with a tagged union: every variant is matched exhaustively
//! in the evaluator, so a new rule kind cannot be half-wired.

use crate::holiday::HolidayType;
use crate::limited::Limited;
use crate::moving::MovingCondition;
use feriae_core::errors::Result;
use feriae_core::{ensure, fail, Year};
use feriae_time::easter::Chronology;
use feriae_time::{Month, Weekday};
use serde::{Deserialize, Serialize};

// ── Shared building blocks ────────────────────────────────────────────────────

/// Fields carried by every rule variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleCommon {
    /// Localization key for the holiday's description.
    pub description_key: String,
    /// Officiality of the produced holiday.
    #[serde(default)]
    pub holiday_type: HolidayType,
    /// Validity window and recurrence cycle.
    #[serde(flatten)]
    pub limited: Limited,
    /// Ordered substitution conditions.
    #[serde(default)]
    pub moving: Vec<MovingCondition>,
}

/// Scan direction relative to an anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    /// Toward earlier dates.
    Before,
    /// Toward later dates.
    After,
}

/// Ordinal selector for weekday-in-month rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeekdayOrdinal {
    /// First occurrence in the month.
    First,
    /// Second occurrence.
    Second,
    /// Third occurrence.
    Third,
    /// Fourth occurrence.
    Fourth,
    /// Last occurrence in the month.
    Last,
}

impl WeekdayOrdinal {
    /// 1-based occurrence count; `None` for [`WeekdayOrdinal::Last`].
    pub(crate) fn count(&self) -> Option<u8> {
        match self {
            WeekdayOrdinal::First => Some(1),
            WeekdayOrdinal::Second => Some(2),
            WeekdayOrdinal::Third => Some(3),
            WeekdayOrdinal::Fourth => Some(4),
            WeekdayOrdinal::Last => None,
        }
    }
}

/// A (month, day) pair resolved against a query year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedDate {
    /// Month of the year.
    pub month: Month,
    /// Day of the month.
    pub day: u8,
}

impl FixedDate {
    fn validate(&self) -> Result<()> {
        let max = match self.month.number() {
            2 => 29,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        };
        ensure!(
            self.day >= 1 && self.day <= max,
            "day {} out of range [1, {max}] for {}",
            self.day,
            self.month
        );
        Ok(())
    }
}

/// A weekday-in-month anchor (e.g. "the second Monday of July").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedWeekday {
    /// Month of the year.
    pub month: Month,
    /// Weekday to select.
    pub weekday: Weekday,
    /// Which occurrence within the month.
    pub ordinal: WeekdayOrdinal,
}

/// Offset of a relative rule: scan to a weekday, or jump a fixed number of
/// days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelativeShift {
    /// Scan day-by-day (anchor-exclusive) until this weekday matches.
    Weekday(Weekday),
    /// Jump this many calendar days.
    Days(u16),
}

// ── Named holiday kinds ───────────────────────────────────────────────────────

/// Easter-relative feasts, each a fixed day offset from Easter Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum ChristianHolidayKind {
    Easter,
    CleanMonday,
    ShroveMonday,
    MardiGras,
    Carnival,
    AshWednesday,
    MaundyThursday,
    GoodFriday,
    EasterSaturday,
    EasterMonday,
    EasterTuesday,
    GeneralPrayerDay,
    AscensionDay,
    Pentecost,
    WhitSunday,
    WhitMonday,
    PentecostMonday,
    CorpusChristi,
    SacredHeart,
}

impl ChristianHolidayKind {
    /// Day offset from Easter Sunday.
    pub fn days_after_easter(&self) -> i32 {
        use ChristianHolidayKind::*;
        match self {
            CleanMonday | ShroveMonday => -48,
            MardiGras | Carnival => -47,
            AshWednesday => -46,
            MaundyThursday => -3,
            GoodFriday => -2,
            EasterSaturday => -1,
            Easter => 0,
            EasterMonday => 1,
            EasterTuesday => 2,
            GeneralPrayerDay => 26,
            AscensionDay => 39,
            Pentecost | WhitSunday => 49,
            WhitMonday | PentecostMonday => 50,
            CorpusChristi => 60,
            SacredHeart => 68,
        }
    }
}

/// Islamic holidays, each a fixed (month, day) in the Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum IslamicHolidayKind {
    Newyear,
    Aschura,
    MawlidAnNabi,
    LailatAlMiraj,
    LailatAlBarat,
    Ramadan,
    LailatAlQadr,
    IdAlFitr,
    #[serde(rename = "ID_AL_FITR_2")]
    IdAlFitr2,
    #[serde(rename = "ID_AL_FITR_3")]
    IdAlFitr3,
    Arafaat,
    IdUlAdha,
    #[serde(rename = "ID_UL_ADHA_2")]
    IdUlAdha2,
    #[serde(rename = "ID_UL_ADHA_3")]
    IdUlAdha3,
}

impl std::str::FromStr for IslamicHolidayKind {
    type Err = feriae_core::Error;

    /// Parse a configuration token; an unrecognized token is a fatal
    /// configuration error naming the offending value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use IslamicHolidayKind::*;
        match s {
            "NEWYEAR" => Ok(Newyear),
            "ASCHURA" => Ok(Aschura),
            "MAWLID_AN_NABI" => Ok(MawlidAnNabi),
            "LAILAT_AL_MIRAJ" => Ok(LailatAlMiraj),
            "LAILAT_AL_BARAT" => Ok(LailatAlBarat),
            "RAMADAN" => Ok(Ramadan),
            "LAILAT_AL_QADR" => Ok(LailatAlQadr),
            "ID_AL_FITR" => Ok(IdAlFitr),
            "ID_AL_FITR_2" => Ok(IdAlFitr2),
            "ID_AL_FITR_3" => Ok(IdAlFitr3),
            "ARAFAAT" => Ok(Arafaat),
            "ID_UL_ADHA" => Ok(IdUlAdha),
            "ID_UL_ADHA_2" => Ok(IdUlAdha2),
            "ID_UL_ADHA_3" => Ok(IdUlAdha3),
            other => Err(feriae_core::Error::UnknownEnumerator {
                kind: "islamic holiday",
                value: other.to_owned(),
            }),
        }
    }
}

impl IslamicHolidayKind {
    /// The Hijri (month, day) this holiday falls on.
    pub fn month_day(&self) -> (u8, u8) {
        use IslamicHolidayKind::*;
        match self {
            Newyear => (1, 1),
            Aschura => (1, 10),
            MawlidAnNabi => (3, 12),
            LailatAlMiraj => (7, 27),
            LailatAlBarat => (8, 15),
            Ramadan => (9, 1),
            LailatAlQadr => (9, 27),
            IdAlFitr => (10, 1),
            IdAlFitr2 => (10, 2),
            IdAlFitr3 => (10, 3),
            Arafaat => (12, 9),
            IdUlAdha => (12, 10),
            IdUlAdha2 => (12, 11),
            IdUlAdha3 => (12, 12),
        }
    }
}

/// Ethiopian-Orthodox holidays, each a fixed (month, day) in the Ethiopian
/// calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum EthiopianOrthodoxHolidayKind {
    Enkutatash,
    Meskel,
    Timkat,
}

impl EthiopianOrthodoxHolidayKind {
    /// The Ethiopian (month, day) this holiday falls on.
    pub fn month_day(&self) -> (u8, u8) {
        match self {
            EthiopianOrthodoxHolidayKind::Enkutatash => (1, 1),
            EthiopianOrthodoxHolidayKind::Meskel => (1, 17),
            EthiopianOrthodoxHolidayKind::Timkat => (5, 11),
        }
    }
}

/// Hindu holidays, each a fixed (month, tithi) in the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum HinduHolidayKind {
    Holi,
}

impl HinduHolidayKind {
    /// The lunisolar (month, day) this holiday falls on.
    pub fn month_day(&self) -> (u8, u8) {
        match self {
            // Phalguna purnima.
            HinduHolidayKind::Holi => (12, 15),
        }
    }
}

// ── Rule variants ─────────────────────────────────────────────────────────────

/// A holiday on a fixed (month, day).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedRule {
    /// The date, resolved against the query year.
    pub date: FixedDate,
    /// Shared rule fields.
    #[serde(flatten)]
    pub common: RuleCommon,
}

/// A holiday relative to a fixed date, by weekday scan or day offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeToFixedRule {
    /// The fixed anchor date.
    pub anchor: FixedDate,
    /// Which side of the anchor to search.
    pub direction: Direction,
    /// Weekday scan or fixed day count.
    pub shift: RelativeShift,
    /// Shared rule fields.
    #[serde(flatten)]
    pub common: RuleCommon,
}

/// A holiday on the n-th (or last) weekday of a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedWeekdayInMonthRule {
    /// The weekday-in-month selector.
    #[serde(flatten)]
    pub fixed_weekday: FixedWeekday,
    /// Shared rule fields.
    #[serde(flatten)]
    pub common: RuleCommon,
}

/// A holiday on the nearest weekday before/after a weekday-in-month anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeToWeekdayInMonthRule {
    /// The weekday-in-month anchor.
    pub anchor: FixedWeekday,
    /// Weekday to scan for, anchor-exclusive.
    pub weekday: Weekday,
    /// Which side of the anchor to search.
    pub direction: Direction,
    /// Shared rule fields.
    #[serde(flatten)]
    pub common: RuleCommon,
}

/// A holiday on the single matching weekday between two fixed dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedWeekdayBetweenFixedRule {
    /// Inclusive start of the range.
    pub from: FixedDate,
    /// Inclusive end of the range.
    pub to: FixedDate,
    /// Weekday to find.
    pub weekday: Weekday,
    /// Shared rule fields.
    #[serde(flatten)]
    pub common: RuleCommon,
}

/// A holiday on the n-th occurrence of a weekday before/after a fixed date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedWeekdayRelativeToFixedRule {
    /// The fixed anchor date.
    pub anchor: FixedDate,
    /// Which occurrence (FIRST through FOURTH) of the weekday.
    pub ordinal: WeekdayOrdinal,
    /// Weekday to scan for, anchor-exclusive.
    pub weekday: Weekday,
    /// Which side of the anchor to search.
    pub direction: Direction,
    /// Shared rule fields.
    #[serde(flatten)]
    pub common: RuleCommon,
}

/// A named Easter-relative feast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChristianRule {
    /// Which feast.
    pub kind: ChristianHolidayKind,
    /// Which computus to anchor on.
    #[serde(default)]
    pub chronology: Chronology,
    /// Shared rule fields.
    #[serde(flatten)]
    pub common: RuleCommon,
}

/// A raw day offset from Easter Sunday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeToEasterSundayRule {
    /// Signed day offset from Easter Sunday.
    pub days: i32,
    /// Which computus to anchor on.
    #[serde(default)]
    pub chronology: Chronology,
    /// Shared rule fields.
    #[serde(flatten)]
    pub common: RuleCommon,
}

/// A named Islamic holiday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IslamicRule {
    /// Which holiday.
    pub kind: IslamicHolidayKind,
    /// Day shift applied to every occurrence.
    #[serde(default)]
    pub shift_days: i32,
    /// Shared rule fields.
    #[serde(flatten)]
    pub common: RuleCommon,
}

/// A named Ethiopian-Orthodox holiday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthiopianOrthodoxRule {
    /// Which holiday.
    pub kind: EthiopianOrthodoxHolidayKind,
    /// Day shift applied to every occurrence.
    #[serde(default)]
    pub shift_days: i32,
    /// Shared rule fields.
    #[serde(flatten)]
    pub common: RuleCommon,
}

/// A named Hindu holiday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HinduRule {
    /// Which holiday.
    pub kind: HinduHolidayKind,
    /// Day shift applied to every occurrence.
    #[serde(default)]
    pub shift_days: i32,
    /// Shared rule fields.
    #[serde(flatten)]
    pub common: RuleCommon,
}

/// A holiday rule — the closed variant type the evaluator matches on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolidayRule {
    /// Fixed (month, day).
    Fixed(FixedRule),
    /// Relative to a fixed date.
    RelativeToFixed(RelativeToFixedRule),
    /// N-th (or last) weekday of a month.
    FixedWeekdayInMonth(FixedWeekdayInMonthRule),
    /// Relative to a weekday-in-month anchor.
    RelativeToWeekdayInMonth(RelativeToWeekdayInMonthRule),
    /// Single matching weekday between two fixed dates.
    FixedWeekdayBetweenFixed(FixedWeekdayBetweenFixedRule),
    /// N-th weekday before/after a fixed date.
    FixedWeekdayRelativeToFixed(FixedWeekdayRelativeToFixedRule),
    /// Named Easter-relative feast.
    Christian(ChristianRule),
    /// Raw day offset from Easter Sunday.
    RelativeToEasterSunday(RelativeToEasterSundayRule),
    /// Named Islamic holiday.
    Islamic(IslamicRule),
    /// Named Ethiopian-Orthodox holiday.
    EthiopianOrthodox(EthiopianOrthodoxRule),
    /// Named Hindu holiday.
    Hindu(HinduRule),
}

impl HolidayRule {
    /// The fields shared by every variant.
    pub fn common(&self) -> &RuleCommon {
        match self {
            HolidayRule::Fixed(r) => &r.common,
            HolidayRule::RelativeToFixed(r) => &r.common,
            HolidayRule::FixedWeekdayInMonth(r) => &r.common,
            HolidayRule::RelativeToWeekdayInMonth(r) => &r.common,
            HolidayRule::FixedWeekdayBetweenFixed(r) => &r.common,
            HolidayRule::FixedWeekdayRelativeToFixed(r) => &r.common,
            HolidayRule::Christian(r) => &r.common,
            HolidayRule::RelativeToEasterSunday(r) => &r.common,
            HolidayRule::Islamic(r) => &r.common,
            HolidayRule::EthiopianOrthodox(r) => &r.common,
            HolidayRule::Hindu(r) => &r.common,
        }
    }

    /// Whether the rule applies in `year` (validity window and cycle).
    pub fn is_valid(&self, year: Year) -> bool {
        self.common().limited.is_valid(year)
    }

    /// Check rule data that the type system cannot rule out.
    ///
    /// Called once when a configuration is composed; violations are fatal
    /// configuration errors.
    pub fn validate(&self) -> Result<()> {
        match self {
            HolidayRule::Fixed(r) => r.date.validate(),
            HolidayRule::RelativeToFixed(r) => r.anchor.validate(),
            HolidayRule::FixedWeekdayInMonth(_) => Ok(()),
            HolidayRule::RelativeToWeekdayInMonth(_) => Ok(()),
            HolidayRule::FixedWeekdayBetweenFixed(r) => {
                r.from.validate()?;
                r.to.validate()?;
                let from = (r.from.month.number(), r.from.day);
                let to = (r.to.month.number(), r.to.day);
                if from > to {
                    fail!(
                        "weekday range is reversed: {} {} comes after {} {}",
                        r.from.month,
                        r.from.day,
                        r.to.month,
                        r.to.day
                    );
                }
                Ok(())
            }
            HolidayRule::FixedWeekdayRelativeToFixed(r) => {
                r.anchor.validate()?;
                if r.ordinal.count().is_none() {
                    fail!("ordinal LAST is not meaningful relative to a fixed date");
                }
                Ok(())
            }
            HolidayRule::Christian(_)
            | HolidayRule::RelativeToEasterSunday(_)
            | HolidayRule::Islamic(_)
            | HolidayRule::EthiopianOrthodox(_)
            | HolidayRule::Hindu(_) => Ok(()),
        }
    }
}
