//! The `skatequiz penalties` command.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use skatequiz_core::choice::QuestionBank;
use skatequiz_core::routes::{Discipline, Mode};

use crate::commands::{resolve_data_path, session_rng};
use crate::config::SkatequizConfig;
use crate::session::{run_penalties, Terminal};

pub fn execute(
    config: &SkatequizConfig,
    discipline: Discipline,
    category: Option<String>,
    data: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let path = resolve_data_path(config, discipline, Mode::Penalties, data)?;
    let bank = QuestionBank::load(&path)
        .with_context(|| format!("cannot start the penalties quiz from {}", path.display()))?;

    let mut rng = session_rng(seed);
    let mut term = Terminal::new(io::stdin().lock(), io::stdout().lock());
    if let Some(score) = run_penalties(&mut term, &bank, category.as_deref(), &mut rng)? {
        tracing::debug!(points = score.points, questions = score.questions, "quiz finished");
    }
    Ok(())
}
