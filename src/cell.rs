//! Terminal cell types, as consumed by the selection core.
//!
//! A `Cell` is one character position in the terminal grid. The selector
//! never mutates cells; it reads display width, emptiness, and the leading
//! code point for word-boundary classification. Cells with combining marks
//! allocate heap storage via `CellExtra`; everything else stays inline.

use std::fmt;

use bitflags::bitflags;
use unicode_width::UnicodeWidthChar;

bitflags! {
    /// Per-cell flags relevant to selection.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CellFlags: u16 {
        /// Leading half of an East-Asian wide character (display width 2).
        const WIDE_CHAR         = 1 << 0;
        /// Trailing half of a wide pair; occupies a column but renders nothing.
        const WIDE_CHAR_SPACER  = 1 << 1;
        /// The row containing this cell soft-wraps into the next row.
        /// Set on the last cell of the wrapping row.
        const WRAP              = 1 << 2;
    }
}

impl Default for CellFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Heap-allocated optional data for cells that need it.
///
/// Only allocated when a cell carries combining marks. Normal cells keep
/// `extra: None` (zero overhead).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellExtra {
    /// Combining marks and zero-width characters appended to this cell.
    pub zerowidth: Vec<char>,
}

/// One character position in the terminal grid.
///
/// `ch == '\0'` marks a cell that has never been written. A written space
/// is `' '` and counts as content; the distinction matters for the stretch
/// rule, which absorbs unwritten tail cells but stops on typed blanks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// The character stored in this cell.
    pub ch: char,
    /// Cell flags.
    pub flags: CellFlags,
    /// Optional heap data for combining marks.
    pub extra: Option<Box<CellExtra>>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: '\0',
            flags: CellFlags::empty(),
            extra: None,
        }
    }
}

impl Cell {
    /// Returns `true` if this cell carries no printable content.
    pub fn is_empty(&self) -> bool {
        self.ch == '\0' && self.flags.is_empty() && self.extra.is_none()
    }

    /// Display width of this cell's character.
    ///
    /// Respects the `WIDE_CHAR`/`WIDE_CHAR_SPACER` flags and falls back to
    /// `unicode-width`.
    pub fn width(&self) -> usize {
        if self.flags.contains(CellFlags::WIDE_CHAR) {
            return 2;
        }
        if self.flags.contains(CellFlags::WIDE_CHAR_SPACER) {
            return 0;
        }
        UnicodeWidthChar::width(self.ch).unwrap_or(1)
    }

    /// The leading code point of this cell's grapheme cluster.
    pub fn codepoint(&self) -> char {
        self.ch
    }

    /// Textual rendering of this cell for export.
    ///
    /// Unwritten cells render as a space; combining marks are appended.
    pub fn to_utf8(&self) -> String {
        let mut text = String::new();
        text.push(if self.ch == '\0' { ' ' } else { self.ch });
        if let Some(extra) = &self.extra {
            text.extend(extra.zerowidth.iter());
        }
        text
    }

    /// Append a combining mark (zero-width character) to this cell.
    ///
    /// Lazily allocates `CellExtra` on first combining mark.
    pub fn push_zerowidth(&mut self, ch: char) {
        let extra = self.extra.get_or_insert_with(Box::default);
        extra.zerowidth.push(ch);
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_utf8())
    }
}
