//! skatequiz-core — Answer matching, scoring, and quiz data.
//!
//! This crate holds everything the trainer needs apart from presentation:
//! text normalization, fuzzy similarity, the six-slot assignment search,
//! feedback classification, and the loaders for recall and
//! multiple-choice data files.

pub mod assignment;
pub mod choice;
pub mod error;
pub mod feedback;
pub mod model;
pub mod recall;
pub mod routes;
pub mod similarity;
pub mod source;
pub mod text;

pub use assignment::{best_assignment, ScoreMatrix};
pub use error::DataError;
pub use model::{MatchResult, ReferenceItemSet, Tier, SLOT_COUNT};
pub use similarity::similarity;
pub use text::normalize;
