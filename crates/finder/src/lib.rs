//! Finder - glob-driven file and directory search
//!
//! This crate walks one or more root directories and collects the
//! entries whose base name matches a set of glob patterns:
//! - Include and exclude patterns are shell globs on the base name
//! - Results can be limited to files or directories
//! - Finished results can be narrowed by regular expressions on the full path
//!
//! It also hashes files and whole directory trees.
//!
//! # Example
//!
//! ```no_run
//! use finder::Finder;
//!
//! let sources = Finder::new()
//!     .in_dirs(["src", "tests"])
//!     .find_files(["*.rs"])
//!     .exclude(["mod.rs"])
//!     .get();
//!
//! let mut paths: Vec<_> = sources.keys().collect();
//! paths.sort();
//! for path in paths {
//!     println!("{}", path.display());
//! }
//! ```

mod hash;
mod query;
mod root;
mod walker;

pub use finder_core::{Entry, FinderError, Kind, Result, Results};
pub use hash::{directory_files_hash, directory_hash, file_hash, FileHashes, PartialHashes};
pub use query::{find, find_directories, find_files, in_dirs, path_matches, Finder};
pub use root::project_root;
pub use walker::WalkOptions;
