//! Error types shared by the finder crates.
//!
//! Each variant says which path or pattern was involved so callers
//! can report it without extra bookkeeping.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience type for fallible finder operations.
pub type Result<T> = std::result::Result<T, FinderError>;

/// Things that can go wrong while searching or hashing.
#[derive(Error, Debug)]
pub enum FinderError {
    /// Walking an existing root failed part way through, e.g. a
    /// directory that cannot be read. A root that does not exist at
    /// all never produces this.
    #[error("failed to walk '{root}': {source}")]
    Traversal {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Couldn't open or read a file.
    #[error("failed to read file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A glob or regular expression that doesn't compile.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl FinderError {
    /// Creates an IO error with the path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a traversal error for the given root.
    pub fn traversal(root: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::Traversal {
            root: root.into(),
            source,
        }
    }

    pub(crate) fn invalid_pattern(pattern: &str, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }
}
