//! Blended character/token similarity between two free-text answers.
//!
//! The character part is a Ratcliff/Obershelp ratio (typo tolerance), the
//! token part a Jaccard overlap of plural-tolerant word sets (reordering
//! tolerance).

use std::collections::{HashMap, HashSet};

use crate::text::{normalize, token_presence_set, tokenize};

/// Weight of the character-level ratio in the blend.
pub const CHAR_WEIGHT: f64 = 0.65;

/// Weight of the token overlap in the blend.
pub const TOKEN_WEIGHT: f64 = 0.35;

/// Similarity of two free-text answers, in `[0, 1]`.
///
/// Two texts that both normalize to nothing are identical (1.0); exactly
/// one blank text scores 0.0. The result does not depend on argument order.
pub fn similarity(user_text: &str, reference_text: &str) -> f64 {
    let user = normalize(user_text);
    let reference = normalize(reference_text);

    match (user.is_empty(), reference.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let char_ratio = sequence_ratio(&user, &reference);
    let token_score = token_overlap(
        &token_presence_set(&tokenize(&user)),
        &token_presence_set(&tokenize(&reference)),
    );

    CHAR_WEIGHT * char_ratio + TOKEN_WEIGHT * token_score
}

/// Jaccard index of two token-presence sets.
pub fn token_overlap(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.0,
        (false, false) => {
            let shared = a.intersection(b).count();
            let total = a.union(b).count();
            shared as f64 / total as f64
        }
    }
}

/// Ratcliff/Obershelp ratio: `2 * matched / (len(a) + len(b))`.
///
/// The pair is put in lexicographic order first. The greedy block search is
/// sensitive to which side is scanned, so fixing the order makes the ratio
/// symmetric. No characters are treated as junk, whatever the text length.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let (a, b) = if a <= b { (a, b) } else { (b, a) };
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched = BlockMatcher::new(a, b).matched_len();
    2.0 * matched as f64 / total as f64
}

struct BlockMatcher<'a> {
    a: &'a [u8],
    b: &'a [u8],
    /// Positions of each byte in `b`, ascending.
    b2j: HashMap<u8, Vec<usize>>,
}

impl<'a> BlockMatcher<'a> {
    fn new(a: &'a [u8], b: &'a [u8]) -> Self {
        let mut b2j: HashMap<u8, Vec<usize>> = HashMap::new();
        for (j, &byte) in b.iter().enumerate() {
            b2j.entry(byte).or_default().push(j);
        }
        Self { a, b, b2j }
    }

    /// Total size of all matching blocks.
    fn matched_len(&self) -> usize {
        let mut total = 0;
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            total += k;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }
        total
    }

    /// Longest common block within `a[alo..ahi]` and `b[blo..bhi]`,
    /// earliest in `a` (then in `b`) among equals.
    fn longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_k) = (alo, blo, 0);
        let mut run_at: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next_run_at = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| run_at.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_run_at.insert(j, k);
                    if k > best_k {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_k = k;
                    }
                }
            }
            run_at = next_run_at;
        }

        (best_i, best_j, best_k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn identical_texts_score_one() {
        for text in ["Keep level", "Good take-off and landing", "'''", "a"] {
            assert!(approx(similarity(text, text), 1.0), "text: {text:?}");
        }
        assert!(approx(similarity("GOOD timing!", "good timing"), 1.0));
    }

    #[test]
    fn blank_handling() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("  ?! ", ""), 1.0);
        assert_eq!(similarity("", "abc"), 0.0);
        assert_eq!(similarity("abc", "   "), 0.0);
    }

    #[test]
    fn symmetric() {
        let pairs = [
            ("Keap level", "Keep level"),
            ("strong edges", "edges are strong"),
            ("abcd", "bcda"),
            ("Good control", "Clean exit"),
            ("xyz", "abc"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn typo_still_scores_high() {
        let s = similarity("Keap level", "Keep level");
        assert!(s > 0.55, "got {s}");
        assert!(s < 1.0);
    }

    #[test]
    fn plurals_count_as_shared_tokens() {
        let with_plural = similarity("strong edge", "strong edges");
        let unrelated = similarity("strong edge", "weak exits");
        assert!(with_plural > 0.8, "got {with_plural}");
        assert!(unrelated < with_plural);
    }

    #[test]
    fn sequence_ratio_matches_known_values() {
        // difflib.SequenceMatcher(None, "abcd", "bcde").ratio() == 0.75
        assert!(approx(sequence_ratio("abcd", "bcde"), 0.75));
        assert!(approx(sequence_ratio("keap level", "keep level"), 0.9));
        assert!(approx(sequence_ratio("abc", "xyz"), 0.0));
        assert!(approx(sequence_ratio("", ""), 1.0));
    }

    #[test]
    fn sequence_ratio_handles_long_texts() {
        let long_a = "good edges and flow ".repeat(15);
        let long_b = "good edge and flows ".repeat(15);
        let r = sequence_ratio(&long_a, &long_b);
        assert!(r > 0.8 && r < 1.0, "got {r}");
        assert!(approx(sequence_ratio(&long_a, &long_a), 1.0));
    }

    #[test]
    fn token_overlap_edges() {
        let empty = HashSet::new();
        let one: HashSet<String> = ["a".to_string()].into_iter().collect();
        assert_eq!(token_overlap(&empty, &empty), 1.0);
        assert_eq!(token_overlap(&empty, &one), 0.0);
        assert_eq!(token_overlap(&one, &one), 1.0);
    }
}
