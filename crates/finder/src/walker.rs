//! Directory traversal.
//!
//! Walks a root depth-first, directory before children, and records
//! every entry that gets past the exclude, include and kind filters.

use finder_core::{base_name, Entry, FinderError, Kind, NamePatterns, Result, Results};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Options for walking a root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Follow symbolic links when walking directories.
    pub follow_links: bool,
}

/// The three filters applied to every visited entry.
#[derive(Debug)]
pub(crate) struct Filter {
    pub includes: NamePatterns,
    pub excludes: NamePatterns,
    pub kind: Kind,
}

impl Filter {
    /// Exclude first, then include, then kind.
    ///
    /// Exclusion only hides the entry itself; the walk still descends
    /// into an excluded directory.
    pub fn accepts(&self, name: &str, is_dir: bool) -> bool {
        !self.excludes.is_match(name) && self.includes.is_match(name) && self.kind.admits(is_dir)
    }
}

/// Walks `root` and adds accepted entries to `results`.
///
/// Returns the number of entries added. A root that doesn't exist adds
/// nothing and is not an error. Any other walk error stops this root;
/// entries recorded before it stay in `results`, except a directory
/// whose contents could not be read, which is taken back out.
pub(crate) fn walk_root(
    root: &Path,
    filter: &Filter,
    options: &WalkOptions,
    results: &mut Results,
) -> Result<usize> {
    let walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .sort_by_file_name();

    let mut added = 0;
    let mut last: Option<PathBuf> = None;
    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 && is_not_found(&e) => {
                debug!("Root {} does not exist, skipping", root.display());
                return Ok(0);
            }
            Err(e) => {
                // walkdir yields a directory before failing to read it.
                if let (Some(failed), Some(last)) = (e.path(), last.as_deref()) {
                    if failed == last {
                        results.remove(last);
                    }
                }
                return Err(FinderError::traversal(root, e));
            }
        };

        let is_dir = entry.file_type().is_dir();
        let name = base_name(entry.path());
        if !filter.accepts(&name, is_dir) {
            continue;
        }

        debug!("Matched {}", entry.path().display());
        let metadata = entry.metadata().ok();
        let path = entry.into_path();
        results.insert(path.clone(), Entry::new(path.clone(), is_dir, metadata.as_ref()));
        last = Some(path);
        added += 1;
    }

    Ok(added)
}

fn is_not_found(err: &walkdir::Error) -> bool {
    err.io_error()
        .map(|e| e.kind() == ErrorKind::NotFound)
        .unwrap_or(false)
}
