//! The `skatequiz recall` command.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use skatequiz_core::recall::RecallDataStore;
use skatequiz_core::routes::{Discipline, Mode};

use crate::commands::{resolve_data_path, session_rng};
use crate::config::SkatequizConfig;
use crate::session::{run_recall, Terminal};

pub fn execute(
    config: &SkatequizConfig,
    discipline: Discipline,
    category: Option<String>,
    data: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let path = resolve_data_path(config, discipline, Mode::Recall, data)?;
    let store = RecallDataStore::load(&path)
        .with_context(|| format!("cannot start the recall quiz from {}", path.display()))?;

    let mut rng = session_rng(seed);
    let mut term = Terminal::new(io::stdin().lock(), io::stdout().lock());
    run_recall(&mut term, &store, category.as_deref(), &mut rng)
}
