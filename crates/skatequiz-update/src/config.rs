//! Update check configuration.

use serde::{Deserialize, Serialize};

/// Where to look for releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateConfig {
    /// Repository owner on the release host.
    #[serde(default = "default_owner")]
    pub owner: String,
    /// Repository name.
    #[serde(default = "default_repo")]
    pub repo: String,
    /// Base URL of the releases API.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_owner() -> String {
    "debnera".to_string()
}
fn default_repo() -> String {
    "isu-quiz".to_string()
}
fn default_api_base() -> String {
    "https://api.github.com".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            repo: default_repo(),
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl UpdateConfig {
    /// Human-facing page listing all releases.
    pub fn releases_page(&self) -> String {
        format!("https://github.com/{}/{}/releases", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_project_releases() {
        let config = UpdateConfig::default();
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(
            config.releases_page(),
            "https://github.com/debnera/isu-quiz/releases"
        );
    }

    #[test]
    fn partial_table_fills_defaults() {
        let config: UpdateConfig = serde_json::from_str(r#"{"repo": "fork"}"#).unwrap();
        assert_eq!(config.owner, "debnera");
        assert_eq!(config.repo, "fork");
        assert_eq!(config.api_base, "https://api.github.com");
    }
}
