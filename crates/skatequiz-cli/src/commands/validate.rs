//! The `skatequiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

use skatequiz_core::choice::QuestionBank;
use skatequiz_core::recall::RecallDataStore;
use skatequiz_core::routes::Mode;

pub fn execute(data: PathBuf, mode: Mode) -> Result<()> {
    match mode {
        Mode::Recall => validate_recall(data),
        Mode::Penalties => {
            let bank = QuestionBank::load(&data)?;
            let questions: usize = bank
                .categories()
                .iter()
                .map(|c| bank.questions(c).len())
                .sum();
            println!(
                "{}: {} categories, {questions} questions, {} distinct answers",
                data.display(),
                bank.categories().len(),
                bank.all_answers().len()
            );
            println!("All categories valid.");
            Ok(())
        }
    }
}

fn validate_recall(data: PathBuf) -> Result<()> {
    let (store, errors) = RecallDataStore::load_lenient(&data)?;
    anyhow::ensure!(
        !store.is_empty() || !errors.is_empty(),
        "no categories found in {}",
        data.display()
    );
    println!(
        "{}: {} valid categories",
        data.display(),
        store.categories().len()
    );
    for category in store.categories() {
        println!("  OK     {category}");
    }
    for error in &errors {
        println!("  ERROR  {error}");
    }

    if errors.is_empty() {
        println!("All categories valid.");
        Ok(())
    } else {
        anyhow::bail!("{} invalid categories found", errors.len())
    }
}
