//! The region hierarchy: a tree of nodes, each contributing holiday rules.

use crate::holiday::Holiday;
use crate::rule::HolidayRule;
use feriae_core::errors::Result;
use feriae_core::{fail, Year};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::collections::HashSet;

/// One node of the region tree (a country, state, or city).
///
/// Children are addressed by id; sibling ids must be unique, compared
/// case-insensitively because path lookup is case-insensitive. Uniqueness is
/// enforced once, when the configuration is composed into a
/// [`HolidayCalendar`](crate::calendar::HolidayCalendar).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HierarchyNode {
    /// Identifier, unique among siblings.
    pub id: String,
    /// Localization key for the region name.
    #[serde(default)]
    pub description_key: Option<String>,
    /// Rules contributed at this level.
    #[serde(default)]
    pub rules: Vec<HolidayRule>,
    /// Sub-regions.
    #[serde(default)]
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// A leaf node with no rules, useful as a building block.
    pub fn new(id: impl Into<String>) -> Self {
        HierarchyNode {
            id: id.into(),
            description_key: None,
            rules: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Validate the subtree: sibling-id uniqueness and per-rule data checks.
    pub(crate) fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for child in &self.children {
            if !seen.insert(child.id.to_ascii_lowercase()) {
                fail!(
                    "duplicate sibling id {:?} under node {:?}",
                    child.id,
                    self.id
                );
            }
            child.validate()?;
        }
        for rule in &self.rules {
            rule.validate()?;
        }
        Ok(())
    }

    /// Evaluate this node's rules for `year` and merge in the subtree
    /// addressed by `path`.
    ///
    /// The head of `path` is matched case-insensitively against child ids;
    /// an unmatched segment is not an error — it simply contributes no
    /// further specialization.
    pub fn evaluate(&self, year: Year, path: &[&str]) -> Result<BTreeSet<Holiday>> {
        let mut holidays = BTreeSet::new();
        for rule in &self.rules {
            holidays.extend(rule.holidays(year)?);
        }
        if let Some((head, tail)) = path.split_first() {
            match self
                .children
                .iter()
                .find(|child| child.id.eq_ignore_ascii_case(head))
            {
                Some(child) => holidays.extend(child.evaluate(year, tail)?),
                None => tracing::debug!(
                    segment = *head,
                    node = %self.id,
                    "region segment matches no child; ignoring"
                ),
            }
        }
        Ok(holidays)
    }
}
