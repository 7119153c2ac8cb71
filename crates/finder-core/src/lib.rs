//! Finder Core - entries, pattern matchers and errors
//!
//! This crate holds the pieces of finder that don't touch the
//! filesystem walk itself: the [`Entry`] record produced for every
//! match, the [`Kind`] filter, the two pattern grammars and the shared
//! error type.
//!
//! # Example
//!
//! ```
//! use finder_core::{NamePatterns, PathMatcher};
//!
//! let globs = NamePatterns::new(&["*.rs"]).unwrap();
//! assert!(globs.is_match("lib.rs"));
//!
//! let paths = PathMatcher::new(&[r"src/\w+\.rs"]).unwrap();
//! assert!(paths.is_match("crates/core/src/lib.rs"));
//! ```

pub mod entry;
pub mod error;
pub mod pattern;

pub use entry::{base_name, Entry, Kind, Results};
pub use error::{FinderError, Result};
pub use pattern::{NamePatterns, PathMatcher};
