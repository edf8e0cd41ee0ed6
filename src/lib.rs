//! Library crate root for variantdoc, exposing the scanning pipeline for use
//! by both the CLI binary and tests: the locator finds `types.rs` files, the
//! extractor pulls enum-to-string mapping tables out of their text, and the
//! table module renders each mapping list as a 3-column Markdown table.

pub mod cli;
pub mod commands;
pub mod extractor;
pub mod locator;
pub mod table;

// Re-export main types for convenience
pub use cli::Cli;
pub use commands::run_docgen;
pub use extractor::{file_heading, render_file};
pub use locator::{find_target_files, LocateError, TARGET_FILE_NAME};
pub use table::{format_as_table, NUM_COLS};
