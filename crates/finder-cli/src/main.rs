//! Finder CLI - command-line interface for finder
//!
//! Searches directories with glob patterns and fingerprints files
//! and directory trees.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "finder")]
#[command(author = "Finder Contributors")]
#[command(version)]
#[command(about = "Find files and directories by name pattern", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for entries whose name matches glob patterns
    Find {
        /// Glob patterns matched against each entry's base name
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Directories to search in (defaults to current directory)
        #[arg(short = 'i', long = "in", default_value = ".")]
        dirs: Vec<PathBuf>,

        /// Only report files
        #[arg(short, long, conflicts_with = "dirs_only")]
        files: bool,

        /// Only report directories
        #[arg(short = 'd', long = "dirs")]
        dirs_only: bool,

        /// Glob patterns to leave out
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Regular expressions the full path must end with
        #[arg(short, long = "match")]
        matches: Vec<String>,

        /// Follow symbolic links
        #[arg(long)]
        follow_links: bool,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the content hash of a file or directory
    Hash {
        /// File or directory to hash
        path: PathBuf,

        /// Print the digest of every file instead of one combined digest
        #[arg(short, long)]
        files: bool,

        /// Print digests as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the project root
    Root,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.command {
        Commands::Find {
            patterns,
            dirs,
            files,
            dirs_only,
            exclude,
            matches,
            follow_links,
            json,
        } => {
            let options = commands::FindOptions {
                patterns,
                dirs,
                files,
                dirs_only,
                exclude,
                matches,
                follow_links,
                json,
            };
            commands::find(&options)
        }
        Commands::Hash { path, files, json } => commands::hash(&path, files, json),
        Commands::Root => commands::root(),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
