//! Read-only grid access for the selector, plus a minimal page buffer.
//!
//! The selector never owns cells. It queries the screen through the
//! [`GridOracle`] capability: any type that can answer a cell lookup and a
//! wrapped-flag lookup works, so the selector runs against a real emulator
//! screen or against the bundled [`PageGrid`] without code changes.

use unicode_width::UnicodeWidthChar;

use crate::cell::{Cell, CellFlags};
use crate::index::{Line, Point};

/// Read-only capability the selector uses to look up cells and wrap flags.
///
/// `cell_at` returns `None` outside the grid; it must be pure. A line is
/// "wrapped" iff it is a soft-wrapped continuation of the line above it.
pub trait GridOracle {
    fn cell_at(&self, point: Point) -> Option<&Cell>;
    fn is_wrapped(&self, line: Line) -> bool;
}

/// A minimal in-memory screen buffer: a visible page plus retired rows.
///
/// Lines at and above zero address the page top-down; negative lines address
/// history, most recent first (`-1` is the row retired last). Wide characters
/// occupy a leader cell plus a `WIDE_CHAR_SPACER` continuation; a row that
/// soft-wraps carries `WRAP` on its last cell.
///
/// This is a reference oracle for hosts, tests, and benchmarks; a full
/// emulator implements [`GridOracle`] on its own screen type instead.
#[derive(Debug, Clone)]
pub struct PageGrid {
    /// Retired rows, oldest first. The last element is line -1.
    history: Vec<Vec<Cell>>,
    /// Visible rows, index 0 = top of page.
    page: Vec<Vec<Cell>>,
    cols: usize,
}

impl PageGrid {
    /// Create an empty grid with the given page dimensions.
    pub fn new(lines: usize, cols: usize) -> Self {
        assert!(cols >= 1, "page must be at least one column wide");
        Self {
            history: Vec::new(),
            page: (0..lines).map(|_| blank_row(cols)).collect(),
            cols,
        }
    }

    /// Page column count.
    pub fn columns(&self) -> usize {
        self.cols
    }

    /// Page rows plus retired rows; the selector's `total_rows` argument.
    pub fn total_rows(&self) -> i32 {
        (self.page.len() + self.history.len()) as i32
    }

    /// Write `text` into the row at `line` starting at column 0.
    ///
    /// Wide characters take a leader plus spacer pair. Writing stops at the
    /// right edge; the fixture does not auto-wrap.
    pub fn put_text(&mut self, line: i32, text: &str) {
        let cols = self.cols;
        let Some(row) = self.row_mut(Line(line)) else {
            return;
        };
        let mut col = 0;
        for ch in text.chars() {
            let width = UnicodeWidthChar::width(ch).unwrap_or(1).max(1);
            if col + width > cols {
                break;
            }
            row[col] = Cell::default();
            row[col].ch = ch;
            if width == 2 {
                row[col].flags |= CellFlags::WIDE_CHAR;
                row[col + 1] = Cell::default();
                row[col + 1].flags = CellFlags::WIDE_CHAR_SPACER;
            }
            col += width;
        }
    }

    /// Mark the row at `line` as a soft-wrapped continuation of the row
    /// above it (sets `WRAP` on the last cell of `line - 1`).
    pub fn set_wrapped(&mut self, line: i32) {
        let cols = self.cols;
        if let Some(row) = self.row_mut(Line(line - 1)) {
            row[cols - 1].flags |= CellFlags::WRAP;
        }
    }

    /// Retire the top page row into history and shift the page up,
    /// appending a blank row at the bottom.
    pub fn scroll_up(&mut self) {
        if self.page.is_empty() {
            return;
        }
        let retired = self.page.remove(0);
        self.history.push(retired);
        self.page.push(blank_row(self.cols));
    }

    fn row(&self, line: Line) -> Option<&Vec<Cell>> {
        if line.0 >= 0 {
            self.page.get(line.0 as usize)
        } else {
            let back = (-line.0) as usize;
            let index = self.history.len().checked_sub(back)?;
            self.history.get(index)
        }
    }

    fn row_mut(&mut self, line: Line) -> Option<&mut Vec<Cell>> {
        if line.0 >= 0 {
            self.page.get_mut(line.0 as usize)
        } else {
            let back = (-line.0) as usize;
            let index = self.history.len().checked_sub(back)?;
            self.history.get_mut(index)
        }
    }
}

impl GridOracle for PageGrid {
    fn cell_at(&self, point: Point) -> Option<&Cell> {
        self.row(point.line)?.get(point.column.0)
    }

    fn is_wrapped(&self, line: Line) -> bool {
        self.row(line - Line(1))
            .and_then(|row| row.last())
            .is_some_and(|cell| cell.flags.contains(CellFlags::WRAP))
    }
}

fn blank_row(cols: usize) -> Vec<Cell> {
    vec![Cell::default(); cols]
}
