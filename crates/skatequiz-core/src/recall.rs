//! Recall data: six ordered descriptions per category.
//!
//! File format, one row per description:
//!
//! ```text
//! Category;Description
//! Lifts;1) Good take-off and landing
//! ```
//!
//! A leading `N) ` marker (N in 1..6) on any row switches the whole category
//! to positional ordering; otherwise file order is kept.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use rand::seq::IndexedRandom;
use rand::Rng;
use regex::Regex;

use crate::error::DataError;
use crate::model::{ReferenceItemSet, SLOT_COUNT};
use crate::source::{delimited_rows, read_data_file};

static NUMBERED_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([1-6])\)\s*(.+?)\s*$").expect("numbered row pattern is valid")
});

/// First-field values that mark a header row.
const HEADER_NAMES: [&str; 2] = ["category", "element category"];

/// Reference sets keyed by category.
#[derive(Debug, Clone, Default)]
pub struct RecallDataStore {
    sets_by_category: BTreeMap<String, Vec<ReferenceItemSet>>,
    source: Option<PathBuf>,
}

impl RecallDataStore {
    /// Load a recall file, failing on the first invalid category.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let grouped = read_grouped(path)?;
        let mut store = Self::with_source(path);
        for (category, descriptions) in grouped {
            let set = parse_exact_six(&category, &descriptions)?;
            store.insert(set);
        }
        store.ensure_not_empty(path)?;
        tracing::debug!(
            path = %path.display(),
            categories = store.sets_by_category.len(),
            "loaded recall data"
        );
        Ok(store)
    }

    /// Load a recall file, skipping invalid categories.
    ///
    /// Each skipped category is logged and returned alongside the store.
    /// Source failures still abort.
    pub fn load_lenient(path: &Path) -> Result<(Self, Vec<DataError>), DataError> {
        let grouped = read_grouped(path)?;
        let mut store = Self::with_source(path);
        let mut skipped = Vec::new();
        for (category, descriptions) in grouped {
            match parse_exact_six(&category, &descriptions) {
                Ok(set) => store.insert(set),
                Err(e) => {
                    tracing::warn!("skipping category '{category}': {e}");
                    skipped.push(e);
                }
            }
        }
        Ok((store, skipped))
    }

    /// Build a store from rows already in memory (category, description).
    pub fn from_rows<I, C, D>(rows: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = (C, D)>,
        C: Into<String>,
        D: Into<String>,
    {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (category, description) in rows {
            grouped
                .entry(category.into())
                .or_default()
                .push(description.into());
        }
        let mut store = Self::default();
        for (category, descriptions) in grouped {
            store.insert(parse_exact_six(&category, &descriptions)?);
        }
        Ok(store)
    }

    fn with_source(path: &Path) -> Self {
        Self {
            sets_by_category: BTreeMap::new(),
            source: Some(path.to_path_buf()),
        }
    }

    fn insert(&mut self, set: ReferenceItemSet) {
        self.sets_by_category
            .entry(set.category().to_string())
            .or_default()
            .push(set);
    }

    fn ensure_not_empty(&self, path: &Path) -> Result<(), DataError> {
        if self.sets_by_category.is_empty() {
            return Err(DataError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    /// Category names, sorted.
    pub fn categories(&self) -> Vec<&str> {
        self.sets_by_category.keys().map(String::as_str).collect()
    }

    pub fn sets_for(&self, category: &str) -> &[ReferenceItemSet] {
        self.sets_by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Pick one set of `category` at random.
    pub fn choose_set<R: Rng + ?Sized>(&self, category: &str, rng: &mut R) -> Option<&ReferenceItemSet> {
        self.sets_for(category).choose(rng)
    }

    pub fn is_empty(&self) -> bool {
        self.sets_by_category.is_empty()
    }

    /// File the store was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Read rows and group descriptions by category, keeping file order within
/// each category.
fn read_grouped(path: &Path) -> Result<BTreeMap<String, Vec<String>>, DataError> {
    let text = read_data_file(path)?;
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for row in delimited_rows(&text, path)? {
        let [category, description, ..] = row.as_slice() else {
            continue;
        };
        if category.is_empty() || description.is_empty() {
            continue;
        }
        if HEADER_NAMES.contains(&category.to_lowercase().as_str()) {
            continue;
        }
        grouped
            .entry(category.clone())
            .or_default()
            .push(description.clone());
    }
    Ok(grouped)
}

/// Enforce the six-item contract for one category.
fn parse_exact_six(category: &str, descriptions: &[String]) -> Result<ReferenceItemSet, DataError> {
    let items: [String; SLOT_COUNT] = descriptions
        .iter()
        .map(|d| d.trim().to_string())
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|_| DataError::WrongItemCount {
            category: category.to_string(),
            found: descriptions.len(),
        })?;

    let numbered: Vec<Option<(usize, String)>> = items
        .iter()
        .map(|d| {
            NUMBERED_ROW.captures(d).and_then(|caps| {
                let position = caps[1].parse::<usize>().ok()?;
                Some((position, caps[2].to_string()))
            })
        })
        .collect();

    if numbered.iter().all(Option::is_none) {
        return Ok(ReferenceItemSet::new(category.to_string(), items));
    }

    let mut by_position: [Option<String>; SLOT_COUNT] = Default::default();
    for (raw, parsed) in items.iter().zip(numbered) {
        let Some((position, text)) = parsed else {
            return Err(DataError::UnnumberedRow {
                category: category.to_string(),
                row: raw.clone(),
            });
        };
        let slot = &mut by_position[position - 1];
        if slot.is_some() {
            return Err(DataError::DuplicatePosition {
                category: category.to_string(),
                position,
            });
        }
        *slot = Some(text);
    }

    let mut ordered = Vec::with_capacity(SLOT_COUNT);
    for (idx, slot) in by_position.into_iter().enumerate() {
        match slot {
            Some(text) => ordered.push(text),
            None => {
                return Err(DataError::MissingPosition {
                    category: category.to_string(),
                    position: idx + 1,
                })
            }
        }
    }
    let descriptions: [String; SLOT_COUNT] = ordered
        .try_into()
        .map_err(|_| DataError::WrongItemCount {
            category: category.to_string(),
            found: descriptions.len(),
        })?;
    Ok(ReferenceItemSet::new(category.to_string(), descriptions))
}
