//! The `skatequiz check` command: grade six answers without prompting.

use std::path::PathBuf;

use anyhow::{Context, Result};

use skatequiz_core::feedback::review;
use skatequiz_core::model::SLOT_COUNT;
use skatequiz_core::recall::RecallDataStore;
use skatequiz_core::routes::{Discipline, Mode};

use crate::commands::resolve_data_path;
use crate::config::SkatequizConfig;
use crate::render::review_text;

pub fn execute(
    config: &SkatequizConfig,
    discipline: Discipline,
    data: Option<PathBuf>,
    category: String,
    answers_path: PathBuf,
    format: String,
) -> Result<()> {
    let path = resolve_data_path(config, discipline, Mode::Recall, data)?;
    let store = RecallDataStore::load(&path)?;
    let set = store.sets_for(&category).first().with_context(|| {
        format!(
            "unknown category '{category}'. Available: {}",
            store.categories().join(", ")
        )
    })?;

    let content = std::fs::read_to_string(&answers_path)
        .with_context(|| format!("failed to read answers: {}", answers_path.display()))?;
    let lines: Vec<&str> = content.lines().collect();
    anyhow::ensure!(
        lines.len() <= SLOT_COUNT,
        "expected at most {SLOT_COUNT} answer lines, found {}",
        lines.len()
    );
    let mut answers: [String; SLOT_COUNT] = Default::default();
    for (slot, line) in lines.iter().enumerate() {
        answers[slot] = line.trim().to_string();
    }

    let graded = review(&answers, set);
    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&graded)?),
        "text" => {
            println!("{category}");
            print!("{}", review_text(&graded));
        }
        other => anyhow::bail!("unknown format '{other}' (expected text or json)"),
    }
    Ok(())
}
