pub mod categories;
pub mod check;
pub mod check_update;
pub mod init;
pub mod menu;
pub mod penalties;
pub mod recall;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use skatequiz_core::routes::{lookup, Discipline, Mode};

use crate::config::SkatequizConfig;

/// The data file for a quiz: the explicit `--data` path, or the route's
/// file under the configured data directory.
pub fn resolve_data_path(
    config: &SkatequizConfig,
    discipline: Discipline,
    mode: Mode,
    data: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(path) = data {
        return Ok(path);
    }
    let route = lookup(discipline, mode);
    match route.data_file {
        Some(file) => Ok(config.data_dir.join(file)),
        None => anyhow::bail!("{} is not implemented yet", route.label),
    }
}

/// Seeded when a seed is given, so sessions can be replayed.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
