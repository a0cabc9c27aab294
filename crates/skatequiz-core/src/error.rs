//! Data loading error types.
//!
//! Source failures (a file that is absent or unreadable) abort a whole load.
//! Validation failures describe a single category that breaks the
//! six-item contract.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading quiz data files.
#[derive(Debug, Error)]
pub enum DataError {
    /// The data file does not exist.
    #[error("data source not found: {}", path.display())]
    SourceMissing { path: PathBuf },

    /// The data file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The delimited rows could not be parsed.
    #[error("malformed rows in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A recall category does not have exactly six descriptions.
    #[error("category '{category}' must have exactly 6 descriptions, found {found}")]
    WrongItemCount { category: String, found: usize },

    /// A category uses `N)` numbering but this row has no number.
    #[error("category '{category}' uses numbering but row '{row}' is not numbered")]
    UnnumberedRow { category: String, row: String },

    /// A numbered category lacks one of the positions 1..6.
    #[error("category '{category}' uses numbering but is missing position {position})")]
    MissingPosition { category: String, position: usize },

    /// A numbered category repeats a position.
    #[error("category '{category}' repeats position {position})")]
    DuplicatePosition { category: String, position: usize },

    /// The file parsed but contained no usable category.
    #[error("no categories found in {}", path.display())]
    Empty { path: PathBuf },
}

impl DataError {
    /// Returns `true` for category-level contract violations, as opposed to
    /// failures of the data source itself.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DataError::WrongItemCount { .. }
                | DataError::UnnumberedRow { .. }
                | DataError::MissingPosition { .. }
                | DataError::DuplicatePosition { .. }
        )
    }

    /// The category this error refers to, if it is category-level.
    pub fn category(&self) -> Option<&str> {
        match self {
            DataError::WrongItemCount { category, .. }
            | DataError::UnnumberedRow { category, .. }
            | DataError::MissingPosition { category, .. }
            | DataError::DuplicatePosition { category, .. } => Some(category),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_carry_category() {
        let err = DataError::WrongItemCount {
            category: "Lifts".into(),
            found: 5,
        };
        assert!(err.is_validation());
        assert_eq!(err.category(), Some("Lifts"));
        assert!(err.to_string().contains("found 5"));
    }

    #[test]
    fn source_errors_are_not_validation() {
        let err = DataError::SourceMissing {
            path: PathBuf::from("missing.csv"),
        };
        assert!(!err.is_validation());
        assert_eq!(err.category(), None);
        assert!(err.to_string().contains("missing.csv"));
    }
}
