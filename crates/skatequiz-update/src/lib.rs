//! skatequiz-update — Checks a release feed for newer versions.
//!
//! The check is fire-and-forget: it runs on a background task, never
//! surfaces errors to the user, and only reports back when a strictly newer
//! release exists.

pub mod check;
pub mod config;
pub mod error;
pub mod feed;
pub mod mock;
pub mod version;

pub use check::{check_for_update, spawn_update_check, UpdateInfo};
pub use config::UpdateConfig;
pub use error::UpdateError;
pub use feed::{GithubReleases, ReleaseFeed};
pub use version::{parse_semantic_version, SemVer};
