//! The search builder.
//!
//! A [`Finder`] collects roots, include patterns, exclude patterns and
//! a kind filter, then walks on demand. Nothing is cached: every call
//! to [`Finder::get`] walks the roots again.

use crate::walker::{walk_root, Filter, WalkOptions};
use finder_core::{Kind, NamePatterns, PathMatcher, Result, Results};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// Builder-style file and directory search.
///
/// Patterns from [`find`](Self::find), [`find_files`](Self::find_files)
/// and [`find_directories`](Self::find_directories) accumulate, but
/// each of those calls also sets the kind filter, and the last call
/// wins:
///
/// ```no_run
/// use finder::{Finder, Kind};
///
/// let finder = Finder::new()
///     .find_files(["*.rs"])
///     .find_directories(["src"]);
/// assert_eq!(finder.kind(), Kind::Directories);
/// assert_eq!(finder.patterns(), ["*.rs", "src"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Finder {
    roots: Vec<PathBuf>,
    patterns: Vec<String>,
    excludes: Vec<String>,
    kind: Kind,
    options: WalkOptions,
}

impl Finder {
    /// Creates an empty search that accepts any kind of entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds directories to search in. They are not checked until the
    /// search runs; missing ones simply contribute nothing.
    pub fn in_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Searches for files and directories whose name matches any pattern.
    pub fn find<I, S>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include(patterns, Kind::Any)
    }

    /// Searches only for files whose name matches any pattern.
    pub fn find_files<I, S>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include(patterns, Kind::Files)
    }

    /// Searches only for directories whose name matches any pattern.
    pub fn find_directories<I, S>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include(patterns, Kind::Directories)
    }

    /// Drops entries whose name matches any of these patterns, even if
    /// they also match an include pattern.
    pub fn exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Follow symbolic links while walking. Off by default.
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }

    fn include<I, S>(mut self, patterns: I, kind: Kind) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns.extend(patterns.into_iter().map(Into::into));
        self.kind = kind;
        self
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn excludes(&self) -> &[String] {
        &self.excludes
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn options(&self) -> &WalkOptions {
        &self.options
    }

    /// Runs the search.
    ///
    /// Invalid patterns never match. If walking a root fails part way,
    /// the rest of that root is skipped and the error is logged; what
    /// was found so far is kept. Use [`try_get`](Self::try_get) to see
    /// those errors instead.
    pub fn get(&self) -> Results {
        let filter = Filter {
            includes: NamePatterns::lenient(&self.patterns),
            excludes: NamePatterns::lenient(&self.excludes),
            kind: self.kind,
        };

        let start = Instant::now();
        let mut results = Results::new();
        for root in &self.roots {
            if let Err(e) = walk_root(root, &filter, &self.options, &mut results) {
                warn!("{}, skipping the rest of this root", e);
            }
        }
        self.log_summary(&results, start);
        results
    }

    /// Runs the search, failing on the first invalid pattern or walk
    /// error.
    ///
    /// A root that doesn't exist is still not an error.
    pub fn try_get(&self) -> Result<Results> {
        let filter = Filter {
            includes: NamePatterns::new(&self.patterns)?,
            excludes: NamePatterns::new(&self.excludes)?,
            kind: self.kind,
        };

        let start = Instant::now();
        let mut results = Results::new();
        for root in &self.roots {
            walk_root(root, &filter, &self.options, &mut results)?;
        }
        self.log_summary(&results, start);
        Ok(results)
    }

    /// Runs the search and keeps only entries whose full path matches
    /// one of the regular expressions, anchored at the end of the path.
    pub fn matching<S: AsRef<str>>(&self, patterns: &[S]) -> Results {
        let matcher = PathMatcher::lenient(patterns);
        self.get()
            .into_iter()
            .filter(|(path, _)| matcher.is_match(&path.to_string_lossy()))
            .collect()
    }

    /// Like [`matching`](Self::matching), but fails on an invalid
    /// expression and runs the search through [`try_get`](Self::try_get).
    pub fn try_matching<S: AsRef<str>>(&self, patterns: &[S]) -> Result<Results> {
        let matcher = PathMatcher::new(patterns)?;
        Ok(self
            .try_get()?
            .into_iter()
            .filter(|(path, _)| matcher.is_match(&path.to_string_lossy()))
            .collect())
    }

    fn log_summary(&self, results: &Results, start: Instant) {
        info!(
            "Found {} entries in {} roots ({}) in {:?}",
            results.len(),
            self.roots.len(),
            self.kind,
            start.elapsed()
        );
    }
}

/// Starts a search for files and directories matching `patterns`.
pub fn find<I, S>(patterns: I) -> Finder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Finder::new().find(patterns)
}

/// Starts a search for files matching `patterns`.
pub fn find_files<I, S>(patterns: I) -> Finder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Finder::new().find_files(patterns)
}

/// Starts a search for directories matching `patterns`.
pub fn find_directories<I, S>(patterns: I) -> Finder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Finder::new().find_directories(patterns)
}

/// Starts a search rooted at `dirs`.
pub fn in_dirs<I, P>(dirs: I) -> Finder
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    Finder::new().in_dirs(dirs)
}

/// Returns true if `path` matches any of the regular expressions,
/// anchored at the end. Invalid expressions never match.
pub fn path_matches<S: AsRef<str>>(path: &Path, patterns: &[S]) -> bool {
    PathMatcher::lenient(patterns).is_match(&path.to_string_lossy())
}
