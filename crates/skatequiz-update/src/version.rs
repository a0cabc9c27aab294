//! Loose semantic version parsing for release tags.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static VERSION_IN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v?(\d+)\.(\d+)\.(\d+)").expect("version pattern is valid"));

/// `major.minor.patch`, ordered numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SemVer {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Find the first `MAJOR.MINOR.PATCH` in a tag such as `v0.1.2`, `0.1.2`,
/// or `v0.1.2-3-gabc1234`.
pub fn parse_semantic_version(tag: &str) -> Option<SemVer> {
    let caps = VERSION_IN_TAG.captures(tag)?;
    Some(SemVer {
        major: caps[1].parse().ok()?,
        minor: caps[2].parse().ok()?,
        patch: caps[3].parse().ok()?,
    })
}
