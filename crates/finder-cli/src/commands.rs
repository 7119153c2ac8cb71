//! CLI command implementations.

use colored::Colorize;
use finder::{directory_files_hash, directory_hash, file_hash, project_root, Finder};
use serde::Serialize;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Flags collected by the `find` subcommand.
pub struct FindOptions {
    pub patterns: Vec<String>,
    pub dirs: Vec<PathBuf>,
    pub files: bool,
    pub dirs_only: bool,
    pub exclude: Vec<String>,
    pub matches: Vec<String>,
    pub follow_links: bool,
    pub json: bool,
}

impl FindOptions {
    fn to_finder(&self) -> Finder {
        let finder = Finder::new()
            .in_dirs(self.dirs.iter().cloned())
            .exclude(self.exclude.iter().cloned())
            .follow_links(self.follow_links);

        let patterns = self.patterns.iter().cloned();
        if self.files {
            finder.find_files(patterns)
        } else if self.dirs_only {
            finder.find_directories(patterns)
        } else {
            finder.find(patterns)
        }
    }
}

/// Search and print matching paths in sorted order.
pub fn find(options: &FindOptions) -> Result<()> {
    let finder = options.to_finder();
    let results = if options.matches.is_empty() {
        finder.try_get()?
    } else {
        finder.try_matching(&options.matches)?
    };

    let mut entries: Vec<_> = results.into_values().collect();
    entries.sort_by(|a, b| a.path.cmp(&b.path));

    if options.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        let path = entry.path.display().to_string();
        if entry.is_dir {
            println!("{}", path.blue().bold());
        } else {
            println!("{}", path);
        }
    }

    if entries.is_empty() {
        eprintln!("{}", "No matches found".yellow());
    }

    Ok(())
}

#[derive(Serialize)]
struct DigestOutput<'a> {
    path: &'a Path,
    digest: String,
}

/// Print the digest of a file, a directory, or every file in a directory.
pub fn hash(path: &Path, per_file: bool, json: bool) -> Result<()> {
    if path.is_file() {
        let digest = file_hash(path)?;
        return print_digests(&[(path.to_path_buf(), digest)], json);
    }

    if per_file {
        let hashes = match directory_files_hash(path) {
            Ok(hashes) => hashes,
            Err(partial) => {
                eprintln!(
                    "{} stopped after {} files",
                    "⚠".yellow(),
                    partial.hashes.len()
                );
                return Err(partial.into());
            }
        };
        let digests: Vec<_> = hashes.into_iter().collect();
        return print_digests(&digests, json);
    }

    let digest = directory_hash(path)?;
    print_digests(&[(path.to_path_buf(), digest)], json)
}

fn print_digests(digests: &[(PathBuf, String)], json: bool) -> Result<()> {
    if json {
        let output: Vec<_> = digests
            .iter()
            .map(|(path, digest)| DigestOutput {
                path,
                digest: digest.clone(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for (path, digest) in digests {
        println!("{}  {}", digest.cyan(), path.display());
    }
    Ok(())
}

/// Print the cached project root.
pub fn root() -> Result<()> {
    println!("{}", project_root()?.display());
    Ok(())
}
