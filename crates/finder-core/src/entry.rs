//! Search result representation.
//!
//! An Entry is what a walk records for every path that survives
//! filtering: the path itself, whether it's a directory, and the
//! name split into stem and extension.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Result set of a search, keyed by the path the walk produced.
///
/// Iteration order is unspecified. Sort the keys before doing anything
/// that has to be reproducible.
pub type Results = HashMap<PathBuf, Entry>;

/// Which kinds of entries a search keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Regular files, symlinks and anything else that isn't a directory.
    Files,
    /// Directories only.
    Directories,
    /// No constraint.
    #[default]
    Any,
}

impl Kind {
    /// Returns true if an entry with the given type passes this filter.
    pub fn admits(self, is_dir: bool) -> bool {
        match self {
            Self::Files => !is_dir,
            Self::Directories => is_dir,
            Self::Any => true,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Files => "files",
            Self::Directories => "directories",
            Self::Any => "any",
        };
        write!(f, "{}", s)
    }
}

/// A file or directory found by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Path as formed by the walk (the root joined with child names).
    pub path: PathBuf,

    pub is_dir: bool,

    /// Extension including the leading dot, or empty.
    pub extension: String,

    /// Base name with the extension removed.
    pub name: String,

    /// Size in bytes as reported by the walk's metadata.
    pub size: u64,

    /// Last modification time, if the platform reports one.
    pub modified: Option<SystemTime>,
}

impl Entry {
    /// Builds an entry for `path`.
    ///
    /// `metadata` is optional because the walk may fail to stat an entry
    /// it can still name; size then reads as zero.
    pub fn new(path: impl Into<PathBuf>, is_dir: bool, metadata: Option<&Metadata>) -> Self {
        let path = path.into();
        let base = base_name(&path);
        let extension = extension(&base).to_string();
        let name = base
            .strip_suffix(extension.as_str())
            .unwrap_or(&base)
            .to_string();

        Self {
            path,
            is_dir,
            extension,
            name,
            size: metadata.map(Metadata::len).unwrap_or(0),
            modified: metadata.and_then(|m| m.modified().ok()),
        }
    }

    /// Full base name (stem plus extension).
    pub fn file_name(&self) -> String {
        format!("{}{}", self.name, self.extension)
    }
}

/// Final component of `path`.
///
/// Paths without a normal final component (`.`, `/`, `..`) are returned
/// whole so they can still be matched against patterns.
pub fn base_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

/// Everything from the last dot of a base name onwards.
///
/// Unlike `Path::extension`, a leading dot counts: `.bashrc` has the
/// extension `.bashrc` and an empty stem.
pub fn extension(base: &str) -> &str {
    match base.rfind('.') {
        Some(idx) => &base[idx..],
        None => "",
    }
}
