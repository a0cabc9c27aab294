//! The `skatequiz categories` command.

use std::path::PathBuf;

use anyhow::Result;

use skatequiz_core::choice::QuestionBank;
use skatequiz_core::recall::RecallDataStore;
use skatequiz_core::routes::{Discipline, Mode};

use crate::commands::resolve_data_path;
use crate::config::SkatequizConfig;

pub fn execute(
    config: &SkatequizConfig,
    discipline: Discipline,
    mode: Option<Mode>,
    data: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(
        data.is_none() || mode.is_some(),
        "--data needs --mode to know how to read the file"
    );
    let modes = match mode {
        Some(mode) => vec![mode],
        None => vec![Mode::Recall, Mode::Penalties],
    };

    for mode in modes {
        let path = resolve_data_path(config, discipline, mode, data.clone())?;
        println!("{mode} ({}):", path.display());
        match mode {
            Mode::Recall => {
                let store = RecallDataStore::load(&path)?;
                for category in store.categories() {
                    println!("  {category}");
                }
            }
            Mode::Penalties => {
                let bank = QuestionBank::load(&path)?;
                for category in bank.categories() {
                    println!(
                        "  {category} ({} questions)",
                        bank.questions(category).len()
                    );
                }
            }
        }
    }
    Ok(())
}
