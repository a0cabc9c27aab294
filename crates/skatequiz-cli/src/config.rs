//! Application configuration (`skatequiz.toml`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use skatequiz_update::UpdateConfig;

pub const CONFIG_FILE_NAME: &str = "skatequiz.toml";

/// Top-level skatequiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkatequizConfig {
    /// Directory holding the quiz data files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Look for a newer release in the background.
    #[serde(default = "default_check_updates")]
    pub check_updates: bool,
    #[serde(default)]
    pub update: UpdateConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("quiz_data")
}
fn default_check_updates() -> bool {
    true
}

impl Default for SkatequizConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            check_updates: default_check_updates(),
            update: UpdateConfig::default(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. the explicit path (must exist)
/// 2. `skatequiz.toml` in the current directory
/// 3. `~/.config/skatequiz/config.toml`
///
/// Environment overrides: `SKATEQUIZ_DATA_DIR`, `SKATEQUIZ_NO_UPDATE_CHECK`.
pub fn load_config_from(path: Option<&Path>) -> Result<SkatequizConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => [Some(PathBuf::from(CONFIG_FILE_NAME)), global_config_path()]
            .into_iter()
            .flatten()
            .find(|candidate| candidate.exists()),
    };

    let mut config = match &config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<SkatequizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => SkatequizConfig::default(),
    };
    tracing::debug!(path = ?config_path, "loaded configuration");

    if let Ok(dir) = std::env::var("SKATEQUIZ_DATA_DIR") {
        if !dir.is_empty() {
            config.data_dir = PathBuf::from(dir);
        }
    }
    if std::env::var("SKATEQUIZ_NO_UPDATE_CHECK").is_ok_and(|v| !v.is_empty()) {
        config.check_updates = false;
    }

    config.data_dir = PathBuf::from(resolve_env_vars(&config.data_dir.to_string_lossy()));
    config.update.owner = resolve_env_vars(&config.update.owner);
    config.update.repo = resolve_env_vars(&config.update.repo);
    config.update.api_base = resolve_env_vars(&config.update.api_base);

    Ok(config)
}

fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|h| {
        PathBuf::from(h)
            .join(".config")
            .join("skatequiz")
            .join("config.toml")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_SKATEQUIZ_TEST_VAR", "rinks");
        assert_eq!(resolve_env_vars("${_SKATEQUIZ_TEST_VAR}"), "rinks");
        assert_eq!(
            resolve_env_vars("/srv/${_SKATEQUIZ_TEST_VAR}/data"),
            "/srv/rinks/data"
        );
        assert_eq!(resolve_env_vars("no ${closing"), "no ${closing");
        std::env::remove_var("_SKATEQUIZ_TEST_VAR");
    }

    #[test]
    fn default_config() {
        let config = SkatequizConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("quiz_data"));
        assert!(config.check_updates);
        assert_eq!(config.update.repo, "isu-quiz");
    }

    #[test]
    fn parse_partial_config() {
        let toml_str = r#"
data_dir = "/opt/quiz"
check_updates = false

[update]
owner = "someone-else"
timeout_secs = 3
"#;
        let config: SkatequizConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/opt/quiz"));
        assert!(!config.check_updates);
        assert_eq!(config.update.owner, "someone-else");
        assert_eq!(config.update.repo, "isu-quiz");
        assert_eq!(config.update.timeout_secs, 3);
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from(Some(Path::new("/no/such/skatequiz.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "check_updates = false\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert!(!config.check_updates);
    }

    #[test]
    fn malformed_config_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "data_dir = [").unwrap();
        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config"));
    }
}
