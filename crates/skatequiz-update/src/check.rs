//! Comparing the running version with the latest release.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinHandle;

use crate::feed::ReleaseFeed;
use crate::version::{parse_semantic_version, SemVer};

/// A newer release is available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateInfo {
    pub current: SemVer,
    pub latest: SemVer,
    /// Tag as published, e.g. `v0.2.0`.
    pub tag: String,
    /// Page where the release can be downloaded.
    pub releases_page: String,
}

impl UpdateInfo {
    pub fn notice(&self) -> String {
        format!(
            "A new version {} is available (you have {}). Download it from {}",
            self.tag, self.current, self.releases_page
        )
    }
}

/// Ask the feed for its latest release and compare it with `current`.
///
/// Never fails: a network error, missing tag, or unparsable version all
/// mean "no update" and are only logged at debug level.
pub async fn check_for_update(
    feed: &dyn ReleaseFeed,
    current: &str,
    releases_page: &str,
) -> Option<UpdateInfo> {
    let Some(current_version) = parse_semantic_version(current) else {
        tracing::debug!(current, "running version is not semantic, skipping update check");
        return None;
    };

    let tag = match feed.latest_tag().await {
        Ok(tag) => tag,
        Err(e) => {
            tracing::debug!(feed = feed.name(), error = %e, "update check failed");
            return None;
        }
    };

    let Some(latest) = parse_semantic_version(&tag) else {
        tracing::debug!(tag = %tag, "latest release tag has no version");
        return None;
    };

    tracing::debug!(%current_version, %latest, "compared versions");
    (latest > current_version).then(|| UpdateInfo {
        current: current_version,
        latest,
        tag,
        releases_page: releases_page.to_string(),
    })
}

/// Run [`check_for_update`] on a background task.
pub fn spawn_update_check(
    feed: Arc<dyn ReleaseFeed>,
    current: String,
    releases_page: String,
) -> JoinHandle<Option<UpdateInfo>> {
    tokio::spawn(async move { check_for_update(feed.as_ref(), &current, &releases_page).await })
}
