//! CLI argument parsing for bkreview.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bkreview: BitKeeper content retrieval and diff parsing for code review.
///
/// Fetches file contents at a revision and turns BitKeeper diffs into
/// per-file change records.
#[derive(Parser, Debug)]
#[command(name = "bkreview")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: .bkreview.yaml in the current directory, if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Repository path or BitKeeper URL (overrides the config file).
    #[arg(long, global = true)]
    pub repo: Option<String>,

    /// Site scope to run `bk` under (overrides the config file).
    #[arg(long, global = true)]
    pub local_site: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for bkreview.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the contents of a file at a revision.
    ///
    /// Runs `bk get` against the configured repository and writes the raw
    /// bytes to stdout.
    Cat(CatArgs),

    /// Parse a BitKeeper diff into per-file change records.
    ///
    /// Prints one JSON object per file.
    Parse(ParseArgs),

    /// Check that a path is a usable BitKeeper repository.
    Check(CheckArgs),

    /// Interpret the filename and revision fields of a diff marker.
    Revision(RevisionArgs),
}

/// Arguments for the `cat` command.
#[derive(Parser, Debug)]
pub struct CatArgs {
    /// Repository-relative path of the file.
    pub path: String,

    /// Revision to read (HEAD for the latest).
    #[arg(short, long, default_value = "HEAD")]
    pub revision: String,

    /// Base commit id; overrides --revision when given.
    #[arg(long)]
    pub base_commit: Option<String>,
}

/// Arguments for the `parse` command.
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Diff file to parse (stdin when omitted).
    pub file: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Repository path or BitKeeper URL.
    pub path: String,

    /// Username (accepted for compatibility, unused by BitKeeper).
    #[arg(long)]
    pub username: Option<String>,

    /// Password (accepted for compatibility, unused by BitKeeper).
    #[arg(long)]
    pub password: Option<String>,
}

/// Arguments for the `revision` command.
#[derive(Parser, Debug)]
pub struct RevisionArgs {
    /// Filename field of the marker.
    pub file: String,

    /// Revision field of the marker.
    #[arg(default_value = "")]
    pub revision: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
