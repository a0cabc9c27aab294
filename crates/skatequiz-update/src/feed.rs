//! Release feeds: where the latest published version comes from.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use crate::config::UpdateConfig;
use crate::error::UpdateError;

/// A source of "latest release" information.
#[async_trait]
pub trait ReleaseFeed: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Tag of the most recent published release.
    async fn latest_tag(&self) -> anyhow::Result<String>;
}

/// GitHub's "latest release" endpoint.
pub struct GithubReleases {
    api_base: String,
    owner: String,
    repo: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct LatestRelease {
    tag_name: Option<String>,
}

impl GithubReleases {
    pub fn new(config: &UpdateConfig) -> Result<Self, UpdateError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(format!("{}-update-check", config.repo))
            .build()
            .map_err(|e| UpdateError::Network(e.to_string()))?;

        Ok(Self {
            api_base: config.api_base.trim_end_matches('/').to_string(),
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            timeout_secs: config.timeout_secs,
            client,
        })
    }

    fn latest_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_base, self.owner, self.repo
        )
    }
}

#[async_trait]
impl ReleaseFeed for GithubReleases {
    fn name(&self) -> &str {
        "github"
    }

    #[instrument(skip(self), fields(repo = %format!("{}/{}", self.owner, self.repo)))]
    async fn latest_tag(&self) -> anyhow::Result<String> {
        let response = self
            .client
            .get(self.latest_url())
            .header("accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    UpdateError::Timeout(self.timeout_secs)
                } else {
                    UpdateError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(UpdateError::Http { status }.into());
        }

        let release: LatestRelease = response
            .json()
            .await
            .map_err(|e| UpdateError::InvalidResponse(e.to_string()))?;

        release
            .tag_name
            .filter(|tag| !tag.trim().is_empty())
            .ok_or_else(|| UpdateError::InvalidResponse("missing tag_name".into()).into())
    }
}
