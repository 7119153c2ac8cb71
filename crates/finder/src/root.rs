//! Process-wide project root.

use finder_core::{FinderError, Result};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

static PROJECT_ROOT: OnceCell<PathBuf> = OnceCell::new();

/// Returns the working directory as it was on the first successful call.
///
/// The value is computed once and kept for the life of the process;
/// later changes of the working directory are not picked up. A failed
/// lookup is not cached, so the next call tries again.
pub fn project_root() -> Result<&'static Path> {
    PROJECT_ROOT
        .get_or_try_init(|| std::env::current_dir().map_err(|e| FinderError::io(".", e)))
        .map(PathBuf::as_path)
}
