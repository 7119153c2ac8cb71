//! Content hashing for files and directory trees.
//!
//! Digests are XXH3-128 rendered as 32 lowercase hex characters. That's
//! plenty for spotting changed or corrupted content, but it is not a
//! cryptographic hash and shouldn't be used against tampering.

use crate::query::find;
use finder_core::{FinderError, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use xxhash_rust::xxh3::Xxh3;

/// Per-file digests keyed by path, in path order.
pub type FileHashes = BTreeMap<PathBuf, String>;

const BUFFER_SIZE: usize = 64 * 1024;

/// A directory hash that stopped part way.
///
/// Holds every digest computed before the failure.
#[derive(Error, Debug)]
#[error("{source}")]
pub struct PartialHashes {
    pub hashes: FileHashes,
    #[source]
    pub source: FinderError,
}

impl From<PartialHashes> for FinderError {
    fn from(partial: PartialHashes) -> Self {
        partial.source
    }
}

/// Hashes the contents of a single file.
///
/// # Example
///
/// ```no_run
/// let digest = finder::file_hash("Cargo.toml").unwrap();
/// assert_eq!(digest.len(), 32);
/// ```
pub fn file_hash(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| FinderError::io(path, e))?;

    let mut hasher = Xxh3::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];
    loop {
        let read = match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(FinderError::io(path, e)),
        };
        hasher.update(&buffer[..read]);
    }

    Ok(to_hex(hasher.digest128()))
}

/// Hashes every file under `path`, the root included if it is a file.
///
/// Files are hashed in path order. On the first failure the digests
/// computed so far come back inside the error.
pub fn directory_files_hash(
    path: impl AsRef<Path>,
) -> std::result::Result<FileHashes, PartialHashes> {
    let path = path.as_ref();
    let results = find(["*"]).in_dirs([path]).get();

    let mut files: Vec<PathBuf> = results
        .into_values()
        .filter(|entry| !entry.is_dir)
        .map(|entry| entry.path)
        .collect();
    files.sort();

    let mut hashes = FileHashes::new();
    for file in files {
        match file_hash(&file) {
            Ok(digest) => {
                debug!("Hashed {}: {}", file.display(), digest);
                hashes.insert(file, digest);
            }
            Err(source) => return Err(PartialHashes { hashes, source }),
        }
    }

    Ok(hashes)
}

/// Combines the digests of every file under `path` into one digest.
///
/// The per-file digests are fed in path order, so the result only
/// depends on the tree's contents.
pub fn directory_hash(path: impl AsRef<Path>) -> Result<String> {
    let hashes = directory_files_hash(path)?;

    let mut hasher = Xxh3::new();
    for digest in hashes.values() {
        hasher.update(digest.as_bytes());
    }

    Ok(to_hex(hasher.digest128()))
}

fn to_hex(digest: u128) -> String {
    format!("{:032x}", digest)
}
