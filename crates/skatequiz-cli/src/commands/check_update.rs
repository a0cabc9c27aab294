//! The `skatequiz check-update` command.

use anyhow::Result;

use skatequiz_update::{check_for_update, GithubReleases};

use crate::config::SkatequizConfig;

pub async fn execute(config: &SkatequizConfig, current: &str) -> Result<()> {
    let feed = GithubReleases::new(&config.update)?;
    match check_for_update(&feed, current, &config.update.releases_page()).await {
        Some(info) => println!("{}", info.notice()),
        None => println!("No newer release found (running {current})."),
    }
    Ok(())
}
