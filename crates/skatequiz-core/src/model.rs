//! Core data model types.
//!
//! A recall unit is always six ordered descriptions split into two tiers of
//! three. These types carry that shape through loading, matching, and
//! feedback.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of answer slots in a recall unit.
pub const SLOT_COUNT: usize = 6;

/// Number of slots in each tier.
pub const TIER_SIZE: usize = 3;

/// One of the two fixed partitions of the six slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Slots 0..3.
    MostImportant,
    /// Slots 3..6.
    Additional,
}

impl Tier {
    /// The tier a slot index belongs to.
    pub fn of(slot: usize) -> Tier {
        if slot < TIER_SIZE {
            Tier::MostImportant
        } else {
            Tier::Additional
        }
    }

    /// Slot indices covered by this tier.
    pub fn slots(self) -> std::ops::Range<usize> {
        match self {
            Tier::MostImportant => 0..TIER_SIZE,
            Tier::Additional => TIER_SIZE..SLOT_COUNT,
        }
    }

    /// Heading shown above the tier's input rows.
    pub fn heading(self) -> &'static str {
        match self {
            Tier::MostImportant => "Most important (1-3)",
            Tier::Additional => "Additional (4-6)",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::MostImportant => write!(f, "most important"),
            Tier::Additional => write!(f, "additional"),
        }
    }
}

/// Six ordered reference descriptions for one category.
///
/// Only the recall loader constructs these, after the six-item contract has
/// been checked, so a value of this type is always complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceItemSet {
    category: String,
    descriptions: [String; SLOT_COUNT],
}

impl ReferenceItemSet {
    pub(crate) fn new(category: String, descriptions: [String; SLOT_COUNT]) -> Self {
        Self {
            category,
            descriptions,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Descriptions in reference order.
    pub fn descriptions(&self) -> &[String; SLOT_COUNT] {
        &self.descriptions
    }
}

/// A multiple-choice question: a prompt and its single correct option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipleChoiceItem {
    pub prompt: String,
    pub answer: String,
}

/// Where one user slot landed in the best assignment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// User slot, 0..6.
    pub user_slot: usize,
    /// Reference slot assigned to it, 0..6.
    pub reference_slot: usize,
    /// Unadjusted similarity between the two texts.
    pub similarity: f64,
}

impl MatchResult {
    pub fn same_tier(&self) -> bool {
        Tier::of(self.user_slot) == Tier::of(self.reference_slot)
    }

    pub fn in_place(&self) -> bool {
        self.user_slot == self.reference_slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_partition() {
        assert_eq!(Tier::of(0), Tier::MostImportant);
        assert_eq!(Tier::of(2), Tier::MostImportant);
        assert_eq!(Tier::of(3), Tier::Additional);
        assert_eq!(Tier::of(5), Tier::Additional);
        assert_eq!(Tier::MostImportant.slots(), 0..3);
        assert_eq!(Tier::Additional.slots(), 3..6);
    }

    #[test]
    fn match_result_placement() {
        let swapped = MatchResult {
            user_slot: 0,
            reference_slot: 1,
            similarity: 1.0,
        };
        assert!(swapped.same_tier());
        assert!(!swapped.in_place());

        let crossed = MatchResult {
            user_slot: 2,
            reference_slot: 4,
            similarity: 0.9,
        };
        assert!(!crossed.same_tier());
    }
}
