//! Pattern matchers.
//!
//! Two grammars are in play and they are deliberately separate:
//!
//! - [`NamePatterns`] holds shell globs matched against a single base
//!   name. These drive include/exclude filtering during a walk.
//! - [`PathMatcher`] holds regular expressions matched against a whole
//!   path, anchored at the end of input. These drive post-filtering of
//!   a finished result set.
//!
//! Both come in a strict flavour that reports the first bad pattern and
//! a lenient one that logs it and treats it as never matching.

use crate::error::{FinderError, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use regex::Regex;
use tracing::warn;

/// Compiled set of glob patterns for base-name matching.
///
/// `*` matches any run of characters except a path separator, `?` a
/// single character, `[...]` a character class (`[!...]` negated).
#[derive(Debug, Clone)]
pub struct NamePatterns {
    set: GlobSet,
    len: usize,
}

impl NamePatterns {
    /// Compiles every pattern, failing on the first one that is invalid.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|e| FinderError::invalid_pattern(pattern, e.kind()))?;
            builder.add(glob);
        }
        Self::finish(builder, patterns.len())
    }

    /// Compiles the valid patterns and skips the rest with a warning.
    pub fn lenient<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut builder = GlobSetBuilder::new();
        let mut len = 0;
        for pattern in patterns {
            let pattern = pattern.as_ref();
            match GlobBuilder::new(pattern).literal_separator(true).build() {
                Ok(glob) => {
                    builder.add(glob);
                    len += 1;
                }
                Err(e) => warn!("Ignoring invalid glob '{}': {}", pattern, e.kind()),
            }
        }
        Self::finish(builder, len).unwrap_or_else(|e| {
            warn!("Failed to build glob set: {}", e);
            Self::empty()
        })
    }

    /// A set that matches nothing.
    pub fn empty() -> Self {
        Self {
            set: GlobSet::empty(),
            len: 0,
        }
    }

    fn finish(builder: GlobSetBuilder, len: usize) -> Result<Self> {
        let set = builder
            .build()
            .map_err(|e| FinderError::invalid_pattern("<set>", e))?;
        Ok(Self { set, len })
    }

    /// Returns true if any pattern matches `name`.
    pub fn is_match(&self, name: &str) -> bool {
        self.set.is_match(name)
    }

    /// Number of compiled patterns.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Regular expressions matched against full paths.
///
/// Each pattern is wrapped as `(?:pattern)$`, so it must match at the
/// end of the path but may start anywhere.
#[derive(Debug, Clone, Default)]
pub struct PathMatcher {
    regexes: Vec<Regex>,
}

impl PathMatcher {
    /// Compiles every pattern, failing on the first one that is invalid.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let regexes = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                anchored(p).map_err(|e| FinderError::invalid_pattern(p, e))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { regexes })
    }

    /// Compiles the valid patterns and skips the rest with a warning.
    pub fn lenient<S: AsRef<str>>(patterns: &[S]) -> Self {
        let regexes = patterns
            .iter()
            .filter_map(|p| {
                let p = p.as_ref();
                match anchored(p) {
                    Ok(re) => Some(re),
                    Err(e) => {
                        warn!("Ignoring invalid regex '{}': {}", p, e);
                        None
                    }
                }
            })
            .collect();
        Self { regexes }
    }

    /// Returns true if any expression matches the end of `path`.
    pub fn is_match(&self, path: &str) -> bool {
        self.regexes.iter().any(|re| re.is_match(path))
    }
}

fn anchored(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    Regex::new(&format!("(?:{})$", pattern))
}
