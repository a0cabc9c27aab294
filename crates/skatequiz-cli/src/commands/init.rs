//! The `skatequiz init` command.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::CONFIG_FILE_NAME;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new(CONFIG_FILE_NAME), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("quiz_data").context("failed to create quiz_data/")?;
    write_if_missing(Path::new("quiz_data/pair-skating-plus.csv"), SAMPLE_RECALL)?;
    write_if_missing(Path::new("quiz_data/pair-skating-minus.csv"), SAMPLE_PENALTIES)?;

    println!("\nNext steps:");
    println!("  1. Add your own categories to the files in quiz_data/");
    println!("  2. Run: skatequiz validate --data quiz_data/pair-skating-plus.csv");
    println!("  3. Run: skatequiz recall");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# skatequiz configuration

data_dir = "quiz_data"
check_updates = true

[update]
owner = "debnera"
repo = "isu-quiz"
api_base = "https://api.github.com"
timeout_secs = 10
"#;

const SAMPLE_RECALL: &str = "Element Category;Description
Lifts;1) Good speed and ice coverage during the lift
Lifts;2) Effortless throughout including ease of rotation
Lifts;3) Good body positions of both partners in the air
Lifts;4) Creative or difficult entry and exit
Lifts;5) Effortless changes of position in the air
Lifts;6) Element matches the music
Death Spirals;Good speed or acceleration during the element
Death Spirals;Good body positions of both partners
Death Spirals;Effortless throughout
Death Spirals;Creative or difficult entry and exit
Death Spirals;Lady's head close to the ice
Death Spirals;Element matches the music
";

const SAMPLE_PENALTIES: &str = "Category;Description;Answer
Throw Jumps;Fall;-5
Throw Jumps;Two-foot landing;-3
Throw Jumps;Downgraded;-2 to -3
Throw Jumps;Under-rotated;-1 to -2
Throw Jumps;Long preparation;-1 to -2
";
