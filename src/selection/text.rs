//! Text extraction: clipboard-shaped string from the current selection.

use crate::cell::CellFlags;
use crate::grid::GridOracle;
use crate::index::{Column, Line, Point};

use super::Selector;

/// Extract the selected text.
///
/// One segment per materialized range: wide-char spacers are skipped (the
/// leader already carries the glyph), combining marks are preserved, and
/// unwritten cells read as spaces. Rows joined by a soft wrap concatenate
/// without a separator; hard line ends are trimmed of trailing blanks and
/// joined with `\n`.
pub fn extract_text<G: GridOracle>(selector: &Selector<'_, G>) -> String {
    let ranges = selector.selection();
    let mut result = String::new();

    for (i, range) in ranges.iter().enumerate() {
        let mut line_text = String::new();
        for col in range.from_column..=range.to_column {
            let point = Point::new(Line(range.line), Column(col as usize));
            let Some(cell) = selector.grid.cell_at(point) else {
                continue;
            };
            if cell.flags.contains(CellFlags::WIDE_CHAR_SPACER) {
                continue;
            }
            line_text.push_str(&cell.to_utf8());
        }

        let last = i + 1 == ranges.len();
        let wrapped_into_next =
            !last && selector.grid.is_wrapped(Line(ranges[i + 1].line));
        if wrapped_into_next {
            result.push_str(&line_text);
        } else {
            result.push_str(line_text.trim_end());
            if !last {
                result.push('\n');
            }
        }
    }

    result
}
