//! Markdown table rendering for variant mapping lists.
//!
//! Tables are fixed at three columns with a `Variants` header. Values fill
//! column-major: a list fills down the first column before moving to the
//! second, so `[a, b, c, d]` renders as two rows `a c _` / `b d _`. Cells past
//! the end of the list are left blank rather than collapsing the grid, which
//! keeps every row the same width. Downstream docs rely on this exact layout,
//! so the fill order and the header/separator text must not change.

/// Fixed column count for all rendered tables.
pub const NUM_COLS: usize = 3;

const HEADER_ROW: &str = "| Variants | &nbsp; | &nbsp; |\n";
const SEPARATOR_ROW: &str =
    "|-------------------|-----------------------|-----------------------|\n";

/// Render an ordered list of variant strings as a 3-column Markdown table.
///
/// Produces the header row, the separator row, and `ceil(len / 3)` data rows.
/// An empty list yields just the header and separator. Every value appears
/// exactly once, bolded, in column-major order.
pub fn format_as_table(mappings: &[&str]) -> String {
    let mut table = String::from(HEADER_ROW);
    table.push_str(SEPARATOR_ROW);

    let num_rows = mappings.len().div_ceil(NUM_COLS);

    for row in 0..num_rows {
        table.push('|');
        for col in 0..NUM_COLS {
            // Column-major index: walk down a column before moving right.
            let index = col * num_rows + row;
            if index < mappings.len() {
                table.push_str(&format!(" **{}** |", mappings[index]));
            } else {
                table.push_str(" |");
            }
        }
        table.push('\n');
    }

    table
}
