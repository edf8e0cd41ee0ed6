//! Extraction of enum-to-string mapping tables from raw source text.
//!
//! A conversion block is any `impl From<Name> for &str` header followed by a
//! brace-delimited body, found by lazy regex matching rather than real
//! parsing. The lazy quantifier stops at the first close brace it reaches, so
//! a body containing nested braces before its mapping arms truncates the
//! match early. That is the established behavior and the output of prior runs
//! depends on it; do not swap in a brace-depth counter without regenerating
//! all downstream docs.
//!
//! Each file renders as one Markdown block: a heading named after the file's
//! parent directory, then one sub-heading and variant table per conversion
//! block, in source order.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::table::format_as_table;

/// Matches a conversion impl header and lazily captures the type name and the
/// first brace-delimited span that follows.
static FROM_IMPL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"impl From<(\w+)> for &str[\s\S]*?\{([\s\S]*?)\}").unwrap());

/// Matches one mapping arm, capturing the quoted literal.
static MAPPING_ARM: Lazy<Regex> = Lazy::new(|| Regex::new(r#"=>\s*"([^"]*)""#).unwrap());

/// Render the full Markdown block for one file's source text.
///
/// Always emits the file-level heading, even when the text contains no
/// conversion blocks.
pub fn render_file(path: &Path, source: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("### {}\n\n", file_heading(path)));

    for caps in FROM_IMPL.captures_iter(source) {
        let enum_name = caps[1].to_lowercase();
        let body = caps.get(2).map_or("", |m| m.as_str());

        let mappings: Vec<&str> = MAPPING_ARM
            .captures_iter(body)
            .filter_map(|arm| arm.get(1))
            .map(|literal| literal.as_str())
            .collect();

        output.push_str(&format!("#### `{}:`\n", enum_name));
        output.push_str(&format_as_table(&mappings));
        output.push('\n');
    }

    output
}

/// Heading for a file: its parent directory's name, first letter upper-cased.
pub fn file_heading(path: &Path) -> String {
    let dir_name = path
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    capitalize(&dir_name)
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
