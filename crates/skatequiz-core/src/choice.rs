//! Multiple-choice quizzes: question bank loading and the sequential engine.
//!
//! File format (first row is always a header):
//!
//! ```text
//! Category;Description;Answer
//! Jumps;Fall;-5
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::DataError;
use crate::model::MultipleChoiceItem;
use crate::source::{delimited_rows, read_data_file};

/// Questions grouped by category, plus every answer seen in the file.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    by_category: BTreeMap<String, Vec<MultipleChoiceItem>>,
    answers: BTreeSet<String>,
}

impl QuestionBank {
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let text = read_data_file(path)?;
        let mut bank = Self::default();
        for row in delimited_rows(&text, path)?.into_iter().skip(1) {
            let [category, prompt, answer, ..] = row.as_slice() else {
                continue;
            };
            bank.push(category, prompt, answer);
        }
        if bank.by_category.is_empty() {
            return Err(DataError::Empty {
                path: path.to_path_buf(),
            });
        }
        tracing::debug!(
            path = %path.display(),
            categories = bank.by_category.len(),
            answers = bank.answers.len(),
            "loaded question bank"
        );
        Ok(bank)
    }

    fn push(&mut self, category: &str, prompt: &str, answer: &str) {
        self.by_category
            .entry(category.to_string())
            .or_default()
            .push(MultipleChoiceItem {
                prompt: prompt.to_string(),
                answer: answer.to_string(),
            });
        self.answers.insert(answer.to_string());
    }

    /// Category names, sorted.
    pub fn categories(&self) -> Vec<&str> {
        self.by_category.keys().map(String::as_str).collect()
    }

    pub fn questions(&self, category: &str) -> &[MultipleChoiceItem] {
        self.by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every distinct answer in the file, sorted.
    pub fn all_answers(&self) -> Vec<&str> {
        self.answers.iter().map(String::as_str).collect()
    }

    /// A fresh engine over the category's questions in random order.
    pub fn start<R: Rng + ?Sized>(&self, category: &str, rng: &mut R) -> MultipleChoiceEngine {
        let mut questions = self.questions(category).to_vec();
        questions.shuffle(rng);
        MultipleChoiceEngine::new(questions)
    }
}

/// Lay out the answer options as rows of buttons.
///
/// Options are keyed by their first word. When any key is an integer the
/// rows run from the highest integer down to the lowest, and integers no
/// option starts with get a row holding just that number. Otherwise the
/// distinct keys are listed in descending order. Each row is sorted by
/// option length.
pub fn answer_rows<S: AsRef<str>>(answers: &[S]) -> Vec<Vec<String>> {
    let mut rows: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut numeric = Vec::new();
    for answer in answers {
        let answer = answer.as_ref();
        let base = answer.split(' ').next().unwrap_or(answer);
        rows.entry(base).or_default().push(answer);
        if let Ok(n) = base.parse::<i64>() {
            numeric.push(n);
        }
    }

    let bases: Vec<String> = match (numeric.iter().min(), numeric.iter().max()) {
        (Some(&min), Some(&max)) => (min..=max).rev().map(|n| n.to_string()).collect(),
        _ => {
            let mut keys: Vec<String> = rows.keys().map(|k| k.to_string()).collect();
            keys.sort_unstable_by(|a, b| b.cmp(a));
            keys
        }
    };

    bases
        .into_iter()
        .map(|base| {
            let mut values: Vec<String> = match rows.get(base.as_str()) {
                Some(values) => values.iter().map(|v| v.to_string()).collect(),
                None => vec![base],
            };
            values.sort_by_key(String::len);
            values
        })
        .collect()
}

/// Snapshot of a multiple-choice run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub current_index: usize,
    pub score: usize,
    pub attempts_on_current: usize,
}

/// Sequential quiz: one question at a time, advancing only on a correct
/// answer. A question scores a point only if its first attempt was right.
#[derive(Debug, Clone)]
pub struct MultipleChoiceEngine {
    questions: Vec<MultipleChoiceItem>,
    progress: QuizProgress,
}

impl MultipleChoiceEngine {
    pub fn new(questions: Vec<MultipleChoiceItem>) -> Self {
        Self {
            questions,
            progress: QuizProgress {
                current_index: 0,
                score: 0,
                attempts_on_current: 0,
            },
        }
    }

    /// The question being asked, or `None` once the quiz is complete.
    pub fn current_question(&self) -> Option<&MultipleChoiceItem> {
        self.questions.get(self.progress.current_index)
    }

    /// Submit an answer to the current question (exact string match).
    ///
    /// Returns `false` without changing anything if the quiz is complete.
    pub fn check_answer(&mut self, submitted: &str) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        if question.answer == submitted {
            if self.progress.attempts_on_current == 0 {
                self.progress.score += 1;
            }
            self.progress.current_index += 1;
            self.progress.attempts_on_current = 0;
            true
        } else {
            self.progress.attempts_on_current += 1;
            false
        }
    }

    pub fn progress(&self) -> QuizProgress {
        self.progress
    }

    pub fn score(&self) -> usize {
        self.progress.score
    }

    /// Zero-based index of the current question.
    pub fn position(&self) -> usize {
        self.progress.current_index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.progress.current_index >= self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn item(prompt: &str, answer: &str) -> MultipleChoiceItem {
        MultipleChoiceItem {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    #[test]
    fn right_first_time_scores() {
        let mut engine = MultipleChoiceEngine::new(vec![item("Fall", "-5")]);
        assert!(engine.check_answer("-5"));
        assert_eq!(engine.score(), 1);
        assert!(engine.is_complete());
        assert!(engine.current_question().is_none());
    }

    #[test]
    fn wrong_then_right_scores_nothing() {
        let mut engine =
            MultipleChoiceEngine::new(vec![item("Fall", "-5"), item("Two-foot landing", "-3")]);
        assert!(!engine.check_answer("-3"));
        assert!(!engine.check_answer("-2"));
        assert_eq!(engine.progress().attempts_on_current, 2);
        assert_eq!(engine.position(), 0);
        assert!(engine.check_answer("-5"));
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.progress().attempts_on_current, 0);
        assert_eq!(engine.current_question().unwrap().prompt, "Two-foot landing");
        assert!(engine.check_answer("-3"));
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.len(), 2);
    }

    #[test]
    fn complete_quiz_ignores_answers() {
        let mut engine = MultipleChoiceEngine::new(vec![]);
        assert!(engine.is_complete());
        assert!(engine.is_empty());
        assert!(!engine.check_answer("-1"));
        assert_eq!(engine.progress().attempts_on_current, 0);
    }

    #[test]
    fn rows_fill_integer_gaps() {
        let rows = answer_rows(&["-1", "-1 to -2", "-3", "-5", "-2 to -3"]);
        assert_eq!(
            rows,
            vec![
                vec!["-1".to_string(), "-1 to -2".to_string()],
                vec!["-2 to -3".to_string()],
                vec!["-3".to_string()],
                vec!["-4".to_string()],
                vec!["-5".to_string()],
            ]
        );
    }

    #[test]
    fn rows_without_integers_sort_descending() {
        let rows = answer_rows(&["Jump", "Axel", "Lift high", "Lift"]);
        assert_eq!(
            rows,
            vec![
                vec!["Lift".to_string(), "Lift high".to_string()],
                vec!["Jump".to_string()],
                vec!["Axel".to_string()],
            ]
        );
    }

    #[test]
    fn bank_loads_and_skips_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("minus.csv");
        std::fs::write(
            &path,
            "Jumps;Fall;-5\nJumps;Fall;-5\nJumps;Downgrade;-2 to -3\nLifts;Touch down;-1\nLifts;short\n",
        )
        .unwrap();
        let bank = QuestionBank::load(&path).unwrap();
        assert_eq!(bank.categories(), vec!["Jumps", "Lifts"]);
        assert_eq!(bank.questions("Jumps").len(), 2);
        assert_eq!(bank.all_answers(), vec!["-1", "-2 to -3", "-5"]);
        assert!(bank.questions("Spins").is_empty());

        let mut rng = StdRng::seed_from_u64(1);
        let engine = bank.start("Jumps", &mut rng);
        assert_eq!(engine.len(), 2);
    }

    #[test]
    fn bank_missing_file() {
        let err = QuestionBank::load(Path::new("nope/minus.csv")).unwrap_err();
        assert!(matches!(err, DataError::SourceMissing { .. }));
    }
}
