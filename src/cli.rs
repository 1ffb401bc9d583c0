//! Defines the command-line interface for the application.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "md-linkclean",
    version,
    about = "Rewrite Markdown citation links so the visible text is the target's domain name."
)]
pub struct Cli {
    /// The Markdown file to process.
    #[arg(value_name = "FILE_PATH")]
    pub file: PathBuf,

    /// Write the output to a new file instead of modifying the original.
    #[arg(short, long, value_name = "OUTPUT_PATH")]
    pub output: Option<PathBuf>,

    /// Print the rewritten document to stdout without writing any files.
    #[arg(long, conflicts_with = "diff")]
    pub dry_run: bool,

    /// Print a unified diff of the pending changes instead of writing files.
    #[arg(long)]
    pub diff: bool,
}
