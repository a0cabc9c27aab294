//! Interactive quiz sessions over any line-based input and output.

use std::collections::HashSet;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rand::Rng;

use skatequiz_core::choice::{answer_rows, QuestionBank};
use skatequiz_core::feedback::review;
use skatequiz_core::model::{Tier, SLOT_COUNT};
use skatequiz_core::recall::RecallDataStore;

use crate::render::review_text;

/// Line-oriented prompt/answer terminal.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one line. `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Let the user pick one of `categories` by number or name.
    pub fn choose_category(&mut self, categories: &[&str]) -> Result<Option<String>> {
        self.say("Categories:")?;
        for (i, category) in categories.iter().enumerate() {
            self.say(format!("  {}. {category}", i + 1))?;
        }
        loop {
            let Some(answer) = self.ask("Choose a category: ")? else {
                return Ok(None);
            };
            let answer = answer.trim();
            let by_number = answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| categories.get(i));
            let by_name = categories.iter().find(|c| **c == answer);
            match by_number.or(by_name) {
                Some(category) => return Ok(Some(category.to_string())),
                None => self.say(format!("'{answer}' is not one of the categories"))?,
            }
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

fn resolve_category(known: &[&str], requested: Option<&str>) -> Result<Option<String>> {
    match requested {
        Some(category) if known.contains(&category) => Ok(Some(category.to_string())),
        Some(category) => anyhow::bail!(
            "unknown category '{category}'. Available: {}",
            known.join(", ")
        ),
        None => Ok(None),
    }
}

/// Free recall: type the six descriptions, get graded, optionally retry.
pub fn run_recall<R: BufRead, W: Write, G: Rng + ?Sized>(
    term: &mut Terminal<R, W>,
    store: &RecallDataStore,
    category: Option<&str>,
    rng: &mut G,
) -> Result<()> {
    let categories = store.categories();
    let category = match resolve_category(&categories, category)? {
        Some(category) => category,
        None => match term.choose_category(&categories)? {
            Some(category) => category,
            None => return Ok(()),
        },
    };

    loop {
        let set = store
            .choose_set(&category, rng)
            .with_context(|| format!("no reference set for '{category}'"))?;

        term.say(format!("\n{category}: list the six positive aspects"))?;
        let mut answers: [String; SLOT_COUNT] = Default::default();
        for tier in [Tier::MostImportant, Tier::Additional] {
            term.say(tier.heading())?;
            for slot in tier.slots() {
                answers[slot] = term.ask(&format!("  {}> ", slot + 1))?.unwrap_or_default();
            }
        }

        let graded = review(&answers, set);
        term.say(review_text(&graded))?;

        match term.ask("Try again? [y/N] ")? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => continue,
            _ => return Ok(()),
        }
    }
}

/// Outcome of a multiple-choice run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenaltyScore {
    pub points: usize,
    pub questions: usize,
}

/// Multiple choice: pick the reduction for each error, retrying until right.
pub fn run_penalties<R: BufRead, W: Write, G: Rng + ?Sized>(
    term: &mut Terminal<R, W>,
    bank: &QuestionBank,
    category: Option<&str>,
    rng: &mut G,
) -> Result<Option<PenaltyScore>> {
    let categories = bank.categories();
    let category = match resolve_category(&categories, category)? {
        Some(category) => category,
        None => match term.choose_category(&categories)? {
            Some(category) => category,
            None => return Ok(None),
        },
    };

    let mut engine = bank.start(&category, rng);
    let rows = answer_rows(&bank.all_answers());
    let options: HashSet<&str> = rows.iter().flatten().map(String::as_str).collect();

    term.say(format!("\n{category}: choose the GOE reduction"))?;
    term.say("Options:")?;
    for row in &rows {
        term.say(format!("  {}", row.join("  |  ")))?;
    }

    let mut tried: HashSet<String> = HashSet::new();
    loop {
        let Some(prompt) = engine.current_question().map(|q| q.prompt.clone()) else {
            break;
        };
        term.say(format!(
            "\nQuestion {} of {}: {prompt}",
            engine.position() + 1,
            engine.len()
        ))?;
        let Some(answer) = term.ask("Answer: ")? else {
            break;
        };
        let answer = answer.trim();
        if answer.is_empty() {
            continue;
        }
        if !options.contains(answer) {
            term.say(format!("'{answer}' is not one of the options"))?;
            continue;
        }
        if tried.contains(answer) {
            term.say(format!("Already tried '{answer}'"))?;
            continue;
        }
        if engine.check_answer(answer) {
            term.say("Correct!")?;
            tried.clear();
        } else {
            term.say("Wrong, try again.")?;
            tried.insert(answer.to_string());
        }
    }

    let score = PenaltyScore {
        points: engine.score(),
        questions: engine.len(),
    };
    term.say(format!("\nPoints: {} / {}", score.points, score.questions))?;
    Ok(Some(score))
}
