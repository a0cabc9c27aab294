//! Optimal one-to-one assignment of user answers to reference answers.
//!
//! With six slots there are only 720 bijections, so the search is
//! exhaustive. The objective prefers, in order: recalling the content,
//! placing it in the right tier, and placing it in the exact slot.
//!
//! Exhaustive search stops being viable once the slot count grows; at that
//! point this should become a weighted bipartite matching (Hungarian
//! algorithm) over the same adjusted scores.

use serde::Serialize;

use crate::model::{MatchResult, Tier, SLOT_COUNT};
use crate::similarity::similarity;

/// Similarities below this contribute only a fraction of their value.
pub const WEAK_MATCH_BELOW: f64 = 0.45;

/// Multiplier applied to weak similarities.
pub const WEAK_MATCH_FACTOR: f64 = 0.2;

/// Subtracted when a user slot is mapped into the other tier.
pub const TIER_PENALTY: f64 = 0.12;

/// Subtracted when a user slot is mapped to any other slot.
pub const POSITION_PENALTY: f64 = 0.06;

/// `sims[i][j]` = similarity of user answer `i` to reference answer `j`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreMatrix {
    sims: [[f64; SLOT_COUNT]; SLOT_COUNT],
}

impl ScoreMatrix {
    /// Score every user answer against every reference answer.
    pub fn compute<U: AsRef<str>, R: AsRef<str>>(
        user_texts: &[U; SLOT_COUNT],
        reference_texts: &[R; SLOT_COUNT],
    ) -> Self {
        let mut sims = [[0.0; SLOT_COUNT]; SLOT_COUNT];
        for (i, user) in user_texts.iter().enumerate() {
            for (j, reference) in reference_texts.iter().enumerate() {
                sims[i][j] = similarity(user.as_ref(), reference.as_ref());
            }
        }
        Self { sims }
    }

    pub fn from_rows(sims: [[f64; SLOT_COUNT]; SLOT_COUNT]) -> Self {
        Self { sims }
    }

    pub fn get(&self, user_slot: usize, reference_slot: usize) -> f64 {
        self.sims[user_slot][reference_slot]
    }

    /// Contribution of mapping `user_slot` to `reference_slot` to the
    /// assignment objective.
    pub fn adjusted(&self, user_slot: usize, reference_slot: usize) -> f64 {
        let mut s = self.get(user_slot, reference_slot);
        if s < WEAK_MATCH_BELOW {
            s *= WEAK_MATCH_FACTOR;
        }
        if Tier::of(user_slot) != Tier::of(reference_slot) {
            s -= TIER_PENALTY;
        }
        if user_slot != reference_slot {
            s -= POSITION_PENALTY;
        }
        s
    }

    /// Objective value of a whole permutation (`perm[user] = reference`).
    pub fn total(&self, perm: &[usize; SLOT_COUNT]) -> f64 {
        perm.iter()
            .enumerate()
            .map(|(i, &j)| self.adjusted(i, j))
            .sum()
    }

    /// Best permutation under [`ScoreMatrix::total`].
    ///
    /// Permutations are visited in lexicographic order and only a strictly
    /// better total replaces the incumbent, so among exact ties the
    /// lexicographically smallest wins. That order carries no meaning.
    pub fn solve(&self) -> [MatchResult; SLOT_COUNT] {
        let mut perm: [usize; SLOT_COUNT] = std::array::from_fn(|i| i);
        let mut best_perm = perm;
        let mut best_total = self.total(&perm);

        while next_permutation(&mut perm) {
            let total = self.total(&perm);
            if total > best_total {
                best_total = total;
                best_perm = perm;
            }
        }

        tracing::debug!(?best_perm, best_total, "assignment solved");

        std::array::from_fn(|i| MatchResult {
            user_slot: i,
            reference_slot: best_perm[i],
            similarity: self.get(i, best_perm[i]),
        })
    }
}

/// Best one-to-one mapping of six user answers onto six reference answers.
///
/// Never fails: every slot gets a reference slot, and the reported
/// similarity is the raw one, not the penalized objective term.
pub fn best_assignment<U: AsRef<str>, R: AsRef<str>>(
    user_texts: &[U; SLOT_COUNT],
    reference_texts: &[R; SLOT_COUNT],
) -> [MatchResult; SLOT_COUNT] {
    ScoreMatrix::compute(user_texts, reference_texts).solve()
}

/// Advance `perm` to the next permutation in lexicographic order.
/// Returns `false` (leaving `perm` untouched) once it is the last one.
fn next_permutation(perm: &mut [usize]) -> bool {
    let Some(pivot) = perm.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let floor = perm[pivot];
    let Some(successor) = perm.iter().rposition(|&x| x > floor) else {
        return false;
    };
    perm.swap(pivot, successor);
    perm[pivot + 1..].reverse();
    true
}
