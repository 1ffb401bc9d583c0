//! Core library for md-linkclean, containing the link rewriting logic.

pub mod cli;
pub mod rewrite;

use crate::cli::Cli;
use crate::rewrite::{count_links, rewrite_links};
use anyhow::Context;
use clap::Parser;
use similar::TextDiff;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

enum OutputMode {
    Write,
    DryRun,
    Diff,
}

/// The main entry point for the application logic.
pub fn run() -> anyhow::Result<()> {
    // Initialize the logger. This will be configured by the RUST_LOG environment variable.
    env_logger::init();

    let Cli {
        file,
        output,
        dry_run,
        diff,
    } = Cli::parse();

    let input_content = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read input file: {}", file.display()))?;

    // The whole document is transformed in memory before anything is written,
    // so a failed write never leaves a half-rewritten file behind.
    let output_content = rewrite_links(&input_content);

    log::debug!(
        "{} link occurrence(s) in {}",
        count_links(&input_content),
        file.display()
    );

    let output_mode = if diff {
        OutputMode::Diff
    } else if dry_run {
        OutputMode::DryRun
    } else {
        OutputMode::Write
    };

    match output_mode {
        OutputMode::DryRun => {
            io::stdout().write_all(output_content.as_bytes())?;
            return Ok(());
        }
        OutputMode::Diff => {
            let diff_output = TextDiff::from_lines(&input_content, &output_content)
                .unified_diff()
                .header("original", "modified")
                .to_string();

            io::stdout().write_all(diff_output.as_bytes())?;
            return Ok(());
        }
        OutputMode::Write => {}
    }

    if let Some(output_path) = &output {
        fs::write(output_path, &output_content).with_context(|| {
            format!("Failed to write to output file: {}", output_path.display())
        })?;

        println!("Successfully processed {}", file.display());
        println!("Created new file: {}", output_path.display());
    } else {
        // In-place modification.
        // 1. Create a named temporary file in the same directory as the original file.
        // This is crucial for ensuring an atomic rename operation later.
        // A bare file name has an empty parent, meaning the current directory.
        let parent_dir = match file.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut temp_file = tempfile::Builder::new()
            .prefix(".md-linkclean-")
            .suffix(".tmp")
            .tempfile_in(parent_dir)
            .with_context(|| {
                format!(
                    "Failed to create temporary file in {}",
                    parent_dir.display()
                )
            })?;

        // 2. Write the rewritten content to the temporary file.
        temp_file
            .write_all(output_content.as_bytes())
            .with_context(|| "Failed to write to temporary file")?;

        // 3. Atomically replace the original file with the temporary file.
        // `persist` handles the atomic rename/move operation.
        temp_file
            .persist(&file)
            .with_context(|| format!("Failed to replace original file {}", file.display()))?;

        println!("Successfully processed and updated {}", file.display());
    }

    Ok(())
}
