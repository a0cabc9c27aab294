//! In-memory release feed for tests and offline runs.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use crate::feed::ReleaseFeed;

/// A feed that always answers with the same tag, or always fails.
pub struct StaticFeed {
    tag: Option<String>,
    call_count: AtomicU32,
}

impl StaticFeed {
    pub fn with_tag(tag: &str) -> Self {
        Self {
            tag: Some(tag.to_string()),
            call_count: AtomicU32::new(0),
        }
    }

    /// A feed whose every request fails.
    pub fn unreachable() -> Self {
        Self {
            tag: None,
            call_count: AtomicU32::new(0),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ReleaseFeed for StaticFeed {
    fn name(&self) -> &str {
        "static"
    }

    async fn latest_tag(&self) -> anyhow::Result<String> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        match &self.tag {
            Some(tag) => Ok(tag.clone()),
            None => anyhow::bail!("release feed unreachable"),
        }
    }
}
