//! Per-slot verdicts and word highlighting for a recall attempt.
//!
//! Everything here is a pure function of the assignment result and the
//! texts; presentation layers only decide how to paint it.

use std::fmt;

use serde::Serialize;

use crate::assignment::best_assignment;
use crate::model::{MatchResult, ReferenceItemSet, SLOT_COUNT};
use crate::text::{normalize, token_presence_set, token_variants, tokenize};

/// Matches below this similarity are reported as not close.
pub const NOT_CLOSE_BELOW: f64 = 0.55;

/// How one user slot fared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Nothing was typed.
    Blank,
    /// The best match is too weak to count.
    NotClose,
    /// Matched the reference item for this very slot.
    CorrectSpot,
    /// Matched an item of the same tier, in another slot.
    WrongOrder,
    /// Matched an item of the other tier.
    WrongGroup,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Blank => "Blank",
            Verdict::NotClose => "Not close",
            Verdict::CorrectSpot => "correct spot",
            Verdict::WrongOrder => "wrong order",
            Verdict::WrongGroup => "wrong group",
        }
    }

    /// Whether the answer was recognised as one of the reference items.
    pub fn is_match(self) -> bool {
        matches!(
            self,
            Verdict::CorrectSpot | Verdict::WrongOrder | Verdict::WrongGroup
        )
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a user slot from its text and assignment.
pub fn classify(user_text: &str, result: &MatchResult) -> Verdict {
    if user_text.trim().is_empty() {
        Verdict::Blank
    } else if result.similarity < NOT_CLOSE_BELOW {
        Verdict::NotClose
    } else if result.in_place() {
        Verdict::CorrectSpot
    } else if result.same_tier() {
        Verdict::WrongOrder
    } else {
        Verdict::WrongGroup
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// A word that (or whose singular) appears in the other text.
    Present,
    /// A word missing from the other text.
    Absent,
    /// Whitespace, punctuation, or a word with an apostrophe.
    Neutral,
}

/// A run of the original text with its highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
}

/// Split `text` into word and non-word runs, marking each plain word by
/// whether it occurs in `other`. The original spelling and spacing are kept.
pub fn highlight_words(text: &str, other: &str) -> Vec<Segment> {
    if text.trim().is_empty() {
        return vec![Segment {
            text: " ".to_string(),
            kind: SegmentKind::Neutral,
        }];
    }

    let other_set = token_presence_set(&tokenize(other));
    split_runs(text)
        .into_iter()
        .map(|run| {
            let kind = if run.chars().all(|c| c.is_ascii_alphanumeric()) {
                let normalized = normalize(run);
                let token = normalized.trim_matches('\'');
                if token_variants(token)
                    .iter()
                    .any(|v| other_set.contains(v))
                {
                    SegmentKind::Present
                } else {
                    SegmentKind::Absent
                }
            } else {
                SegmentKind::Neutral
            };
            Segment {
                text: run.to_string(),
                kind,
            }
        })
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '\''
}

/// Maximal runs of `[A-Za-z0-9']` and of everything else, in order.
fn split_runs(text: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;
    for (idx, c) in text.char_indices() {
        let word = is_word_char(c);
        if current.is_some_and(|w| w != word) {
            runs.push(&text[start..idx]);
            start = idx;
        }
        current = Some(word);
    }
    if start < text.len() {
        runs.push(&text[start..]);
    }
    runs
}

/// Feedback for a single user slot.
#[derive(Debug, Clone, Serialize)]
pub struct SlotFeedback {
    pub slot: usize,
    pub user_text: String,
    pub verdict: Verdict,
    pub reference_slot: usize,
    pub similarity: f64,
    /// The user's text highlighted against the matched reference item (the
    /// same-slot item for weak matches). Empty for blank slots.
    pub highlight: Vec<Segment>,
}

impl SlotFeedback {
    /// Status line, e.g. `Matches #2 (wrong order)`.
    pub fn status(&self) -> String {
        if self.verdict.is_match() {
            format!("Matches #{} ({})", self.reference_slot + 1, self.verdict)
        } else {
            self.verdict.to_string()
        }
    }
}

/// Graded recall attempt for one reference set.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub category: String,
    pub slots: Vec<SlotFeedback>,
    /// Reference descriptions in their correct order.
    pub reference: Vec<String>,
}

impl Review {
    pub fn count(&self, verdict: Verdict) -> usize {
        self.slots.iter().filter(|s| s.verdict == verdict).count()
    }
}

/// Match six user answers against a reference set and grade every slot.
pub fn review<S: AsRef<str>>(user_texts: &[S; SLOT_COUNT], reference: &ReferenceItemSet) -> Review {
    let descriptions = reference.descriptions();
    let matches = best_assignment(user_texts, descriptions);

    let slots = matches
        .iter()
        .map(|m| {
            let user_text = user_texts[m.user_slot].as_ref();
            let verdict = classify(user_text, m);
            let highlight = match verdict {
                Verdict::Blank => Vec::new(),
                Verdict::NotClose => highlight_words(user_text, &descriptions[m.user_slot]),
                _ => highlight_words(user_text, &descriptions[m.reference_slot]),
            };
            SlotFeedback {
                slot: m.user_slot,
                user_text: user_text.to_string(),
                verdict,
                reference_slot: m.reference_slot,
                similarity: m.similarity,
                highlight,
            }
        })
        .collect();

    Review {
        category: reference.category().to_string(),
        slots,
        reference: descriptions.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(user_slot: usize, reference_slot: usize, similarity: f64) -> MatchResult {
        MatchResult {
            user_slot,
            reference_slot,
            similarity,
        }
    }

    fn reference_set() -> ReferenceItemSet {
        ReferenceItemSet::new(
            "Lifts".into(),
            [
                "Keep level".into(),
                "Good timing".into(),
                "Strong edges".into(),
                "Smooth entry".into(),
                "Clean exit".into(),
                "Good control".into(),
            ],
        )
    }

    #[test]
    fn classification_rules() {
        assert_eq!(classify("", &result(0, 0, 1.0)), Verdict::Blank);
        assert_eq!(classify("   ", &result(0, 3, 0.9)), Verdict::Blank);
        assert_eq!(classify("abc", &result(0, 0, 0.54)), Verdict::NotClose);
        assert_eq!(classify("abc", &result(0, 0, 0.55)), Verdict::CorrectSpot);
        assert_eq!(classify("abc", &result(0, 2, 0.9)), Verdict::WrongOrder);
        assert_eq!(classify("abc", &result(4, 3, 0.9)), Verdict::WrongOrder);
        assert_eq!(classify("abc", &result(2, 3, 0.9)), Verdict::WrongGroup);
    }

    #[test]
    fn highlight_marks_present_and_absent_words() {
        let segments = highlight_words("Strong edge, bad exit", "Strong edges");
        let kinds: Vec<_> = segments.iter().map(|s| (s.text.as_str(), s.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                ("Strong", SegmentKind::Present),
                (" ", SegmentKind::Neutral),
                ("edge", SegmentKind::Present),
                (", ", SegmentKind::Neutral),
                ("bad", SegmentKind::Absent),
                (" ", SegmentKind::Neutral),
                ("exit", SegmentKind::Absent),
            ]
        );
    }

    #[test]
    fn highlight_keeps_apostrophe_words_neutral() {
        let segments = highlight_words("don't fall", "fall");
        assert_eq!(segments[0].text, "don't");
        assert_eq!(segments[0].kind, SegmentKind::Neutral);
        assert_eq!(segments[2].kind, SegmentKind::Present);
        let rebuilt: String = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(rebuilt, "don't fall");
    }

    #[test]
    fn highlight_blank_is_single_space() {
        let segments = highlight_words("", "anything");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentKind::Neutral);
    }

    #[test]
    fn review_with_one_typo() {
        let set = reference_set();
        let user = [
            "Keap level",
            "Good timing",
            "Strong edges",
            "Smooth entry",
            "Clean exit",
            "Good control",
        ];
        let review = review(&user, &set);
        assert_eq!(review.category, "Lifts");
        assert_eq!(review.count(Verdict::CorrectSpot), 6);
        assert!(review.slots[0].similarity > NOT_CLOSE_BELOW);
        assert_eq!(review.slots[0].status(), "Matches #1 (correct spot)");
        assert_eq!(review.slots[0].highlight[0].kind, SegmentKind::Absent);
        assert_eq!(review.slots[0].highlight[2].kind, SegmentKind::Present);
    }

    #[test]
    fn review_swapped_first_tier() {
        let set = reference_set();
        let user = [
            "Good timing",
            "Keep level",
            "Strong edges",
            "Smooth entry",
            "Clean exit",
            "Good control",
        ];
        let review = review(&user, &set);
        assert_eq!(review.slots[0].verdict, Verdict::WrongOrder);
        assert_eq!(review.slots[0].reference_slot, 1);
        assert_eq!(review.slots[1].verdict, Verdict::WrongOrder);
        assert_eq!(review.slots[0].status(), "Matches #2 (wrong order)");
    }

    #[test]
    fn review_blank_and_unrelated() {
        let set = reference_set();
        let user = [
            "",
            "Good timing",
            "Strong edges",
            "xylophone",
            "Clean exit",
            "Good control",
        ];
        let review = review(&user, &set);
        assert_eq!(review.slots[0].verdict, Verdict::Blank);
        assert!(review.slots[0].highlight.is_empty());
        assert_eq!(review.slots[3].verdict, Verdict::NotClose);
        assert_eq!(review.slots[3].status(), "Not close");
        assert_eq!(review.reference.len(), SLOT_COUNT);
    }

    #[test]
    fn review_serializes_snake_case() {
        let user = ["Keep level", "", "", "", "", ""];
        let json = serde_json::to_value(review(&user, &reference_set())).unwrap();
        assert_eq!(json["slots"][0]["verdict"], "correct_spot");
        assert_eq!(json["slots"][0]["highlight"][0]["kind"], "present");
        assert_eq!(json["slots"][1]["verdict"], "blank");
    }
}
