//! The docgen command: scan a directory tree and print variant tables.
//!
//! Control flow is a straight pipeline: locate every `types.rs` file under
//! the root, read each one to completion, render its Markdown block, print it
//! to stdout followed by a blank line. Files are processed one at a time and
//! any filesystem error aborts the run; Markdown already printed for earlier
//! files is not rolled back.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::extractor::render_file;
use crate::locator::find_target_files;

pub fn run_docgen(dir: &Path, verbose: bool) -> Result<()> {
    let files = find_target_files(dir)
        .with_context(|| format!("failed to scan {}", dir.display()))?;

    if verbose {
        eprintln!("Found {} types.rs file(s) under {}", files.len(), dir.display());
    }

    for path in &files {
        if verbose {
            eprintln!("Processing {}", path.display());
        }

        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        println!("{}", render_file(path, &source));
    }

    Ok(())
}
