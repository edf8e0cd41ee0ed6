//! Recursive discovery of `types.rs` files under a root directory.
//!
//! The walk follows subdirectories to any depth and matches the file name
//! exactly (case-sensitive, no extension globbing). Results come back in
//! whatever order the underlying directory enumeration yields them; callers
//! must not assume they are sorted. Any filesystem error during the walk,
//! including a missing or unreadable root, aborts the whole scan.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// The exact file name the scan looks for.
pub const TARGET_FILE_NAME: &str = "types.rs";

#[derive(Error, Debug)]
pub enum LocateError {
    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Collect every file named `types.rs` under `root`, recursively.
pub fn find_target_files(root: &Path) -> Result<Vec<PathBuf>, LocateError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() && entry.file_name() == TARGET_FILE_NAME {
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}
