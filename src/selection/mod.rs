//! Selection — single-gesture selector over a page-plus-scrollback grid.
//!
//! A [`Selector`] tracks one selection gesture from anchor press to release.
//! It addresses the screen in absolute coordinates (negative lines for
//! history), so new input scrolling the viewport never moves an anchor that
//! points at saved content. Four modes are supported:
//!
//! - **Linear**: character ranges with partial first/last lines.
//! - **WordWise**: like linear, but both endpoints expand to the nearest
//!   word delimiter, following soft-wrapped rows as one logical line.
//! - **FullLine**: whole logical lines (wrapped continuations included).
//! - **Rectangular**: a block bounded by the anchor and drag corner.
//!
//! The selector is single-use: `extend` drives `Waiting -> InProgress`,
//! `stop` finalizes to `Complete`, and a new gesture means a new instance.

mod ranges;
mod text;

pub use ranges::SelectionRange;
pub use text::extract_text;

use std::fmt;

use crate::grid::GridOracle;
use crate::index::{ascending, Column, Line, Point};

/// Selection mode: character, word, logical line, or rectangular block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Linear,
    WordWise,
    FullLine,
    Rectangular,
}

/// Lifecycle of a selection gesture.
///
/// Transitions are monotonic: `extend` moves `Waiting` to `InProgress`,
/// `stop` moves `InProgress` to `Complete`, and `Complete` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Waiting for the gesture to move (anchor pressed, nothing dragged).
    Waiting,
    /// Selection in progress.
    InProgress,
    /// Gesture finished; the selection is available but frozen.
    Complete,
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectionState::Waiting => "Waiting",
            SelectionState::InProgress => "InProgress",
            SelectionState::Complete => "Complete",
        };
        f.write_str(name)
    }
}

/// A single selection gesture over a read-only grid.
///
/// The selector borrows its grid oracle; it never mutates the screen. `from`
/// and `to` are the gesture endpoints in gesture order, so `to < from` for
/// an upward drag; [`Selector::selection`] and [`Selector::contains`]
/// tolerate either orientation.
pub struct Selector<'g, G: GridOracle> {
    state: SelectionState,
    mode: SelectionMode,
    grid: &'g G,
    word_delimiters: String,
    /// Upper bound for line walks: page rows plus history rows.
    total_rows: i32,
    columns: usize,
    /// The anchor press; fixed for the lifetime of the gesture.
    start: Point,
    from: Point,
    to: Point,
}

impl<'g, G: GridOracle> Selector<'g, G> {
    /// Start a linear (character) selection at `from`.
    ///
    /// The selector stays `Waiting` until the first `extend`.
    pub fn new_linear(
        grid: &'g G,
        word_delimiters: &str,
        total_rows: i32,
        columns: usize,
        from: Point,
    ) -> Self {
        Self::with_mode(SelectionMode::Linear, grid, word_delimiters, total_rows, columns, from)
    }

    /// Start a rectangular (block) selection at `from`.
    pub fn new_rectangular(
        grid: &'g G,
        word_delimiters: &str,
        total_rows: i32,
        columns: usize,
        from: Point,
    ) -> Self {
        Self::with_mode(
            SelectionMode::Rectangular,
            grid,
            word_delimiters,
            total_rows,
            columns,
            from,
        )
    }

    /// Start a word-wise selection at `from`, immediately expanded to the
    /// word under the anchor: both endpoints walk to the nearest delimiter,
    /// crossing soft-wrap boundaries. The selector starts `InProgress`.
    pub fn new_word_wise(
        grid: &'g G,
        word_delimiters: &str,
        total_rows: i32,
        columns: usize,
        from: Point,
    ) -> Self {
        let mut selector =
            Self::with_mode(SelectionMode::WordWise, grid, word_delimiters, total_rows, columns, from);
        selector.state = SelectionState::InProgress;
        selector.extend_selection_backward();
        selector.swap_direction();
        selector.extend_selection_forward();
        selector
    }

    /// Start a full-line selection at `from`, immediately covering the
    /// whole logical line under the anchor (wrapped continuations above and
    /// below included). The selector starts `InProgress`.
    pub fn new_full_line(
        grid: &'g G,
        word_delimiters: &str,
        total_rows: i32,
        columns: usize,
        from: Point,
    ) -> Self {
        let mut selector =
            Self::with_mode(SelectionMode::FullLine, grid, word_delimiters, total_rows, columns, from);
        selector.state = SelectionState::InProgress;
        selector.from.column = Column(0);
        selector.to.column = Column(selector.columns);
        while selector.from.line > Line(0) && selector.grid.is_wrapped(selector.from.line) {
            selector.from.line -= Line(1);
        }
        while selector.to.line.0 + 1 < selector.total_rows
            && selector.grid.is_wrapped(selector.to.line + Line(1))
        {
            selector.to.line += Line(1);
        }
        selector
    }

    fn with_mode(
        mode: SelectionMode,
        grid: &'g G,
        word_delimiters: &str,
        total_rows: i32,
        columns: usize,
        from: Point,
    ) -> Self {
        assert!(total_rows >= 0, "total row count must not be negative");
        assert!(columns >= 1, "column count must be at least 1");
        Self {
            state: SelectionState::Waiting,
            mode,
            grid,
            word_delimiters: word_delimiters.to_string(),
            total_rows,
            columns,
            start: from,
            from,
            to: from,
        }
    }

    /// Current gesture state.
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Selection mode, fixed at construction.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// First endpoint, in gesture order.
    pub fn from(&self) -> Point {
        self.from
    }

    /// Second endpoint, in gesture order.
    pub fn to(&self) -> Point {
        self.to
    }

    /// `true` when the gesture runs upwards (`to` precedes `from`).
    pub fn is_reversed(&self) -> bool {
        self.to < self.from
    }

    /// `true` when both endpoints sit on the same line.
    pub fn is_single_line(&self) -> bool {
        self.from.line == self.to.line
    }

    /// Drag the selection endpoint to `to`.
    ///
    /// The column is clamped to `[0, columns]`; the upper bound is inclusive
    /// because a drag past the last cell targets the trailing cell boundary.
    /// Returns a viewport scroll advisory for the host; currently always
    /// `false`.
    ///
    /// # Panics
    ///
    /// Panics when called after [`Selector::stop`]: a completed selection
    /// is frozen, and restarting the gesture requires a new selector.
    pub fn extend(&mut self, to: Point) -> bool {
        assert!(
            self.state != SelectionState::Complete,
            "cannot extend a completed selection"
        );

        let column = Column(to.column.0.min(self.columns));
        let coord = Point::new(to.line, column);

        self.state = SelectionState::InProgress;

        match self.mode {
            SelectionMode::Linear => {
                self.to = self.stretched_column(coord);
            }
            SelectionMode::FullLine => {
                if coord > self.start {
                    self.to = coord;
                    while self.to.line.0 + 1 < self.total_rows
                        && self.grid.is_wrapped(self.to.line + Line(1))
                    {
                        self.to.line += Line(1);
                    }
                } else if coord < self.start {
                    self.from = coord;
                    while self.from.line > Line(0) && self.grid.is_wrapped(self.from.line) {
                        self.from.line -= Line(1);
                    }
                }
            }
            // Word-wise and rectangular drags share the directional
            // branching; only word-wise runs the delimiter walks, so a
            // rectangle stays bounded by the anchor and the drag corner.
            SelectionMode::WordWise | SelectionMode::Rectangular => {
                let word_wise = self.mode == SelectionMode::WordWise;
                if coord > self.start {
                    self.to = coord;
                    if word_wise {
                        self.extend_selection_forward();
                    }
                } else {
                    self.to = coord;
                    if word_wise {
                        self.extend_selection_backward();
                    }
                    self.swap_direction();
                    self.to = self.start;
                    if word_wise {
                        self.extend_selection_forward();
                    }
                }
            }
        }

        false
    }

    /// Mark the selection as completed. Idempotent; a no-op in `Waiting`.
    pub fn stop(&mut self) {
        if self.state == SelectionState::InProgress {
            self.state = SelectionState::Complete;
        }
    }

    /// Exchange `from` and `to`, keeping the growing endpoint in `to` so
    /// the expansion walks always move `to`.
    pub fn swap_direction(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    /// Stretch a drag endpoint rightward so highlights never split a glyph.
    ///
    /// A wide-character leader advances over its continuation cells;
    /// otherwise unwritten tail cells are absorbed until content, a wide
    /// leader, or the right edge stops the scan. The result may sit at
    /// `columns`, one past the last cell, after a fully blank tail.
    pub fn stretched_column(&self, coord: Point) -> Point {
        let mut stretched = coord;

        if let Some(cell) = self.grid.cell_at(coord) {
            if cell.width() > 1 {
                stretched.column += Column(cell.width() - 1);
                return stretched;
            }
        }

        while stretched.column.0 < self.columns {
            match self.grid.cell_at(stretched) {
                Some(cell) if cell.is_empty() => stretched.column += Column(1),
                Some(cell) => {
                    if cell.width() > 1 {
                        stretched.column += Column(cell.width() - 1);
                    }
                    break;
                }
                None => break,
            }
        }

        stretched
    }

    /// Whether the given absolute coordinate lies within the selection.
    ///
    /// Tolerates reversed endpoint pairs for linear and word-wise modes;
    /// full-line membership is by line only, rectangular by line and column
    /// interval.
    pub fn contains(&self, coord: Point) -> bool {
        match self.mode {
            SelectionMode::FullLine => {
                ascending(self.from.line, coord.line, self.to.line)
                    || ascending(self.to.line, coord.line, self.from.line)
            }
            SelectionMode::Linear | SelectionMode::WordWise => {
                ascending(self.from, coord, self.to) || ascending(self.to, coord, self.from)
            }
            SelectionMode::Rectangular => {
                ascending(self.from.line, coord.line, self.to.line)
                    && ascending(self.from.column, coord.column, self.to.column)
            }
        }
    }

    /// A delimiter position terminates word expansion: no cell there, an
    /// unwritten cell, or a configured delimiter code point.
    fn is_word_delimiter_at(&self, coord: Point) -> bool {
        match self.grid.cell_at(coord) {
            Some(cell) => cell.is_empty() || self.word_delimiters.contains(cell.codepoint()),
            None => true,
        }
    }

    /// Walk `to` leftward to the last position before a word delimiter.
    ///
    /// Crosses into the previous row's last column only when the current
    /// row is a wrapped continuation, so a logical line is traversed as
    /// one; column 0 of an unwrapped row stops the walk.
    fn extend_selection_backward(&mut self) {
        let mut last = self.to;
        let mut current = last;
        loop {
            if current.column > Column(0) {
                current.column -= Column(1);
            } else if self.grid.is_wrapped(current.line) {
                current.line -= Line(1);
                current.column = Column(self.columns - 1);
            } else {
                break;
            }

            if self.is_word_delimiter_at(current) {
                break;
            }
            last = current;
        }

        if self.to < self.from {
            self.swap_direction();
        }
        self.to = last;
    }

    /// Walk `to` rightward to the last position before a word delimiter.
    ///
    /// Crosses into the next row's column 0 only when that row is a wrapped
    /// continuation. Every step re-applies the stretch rule so a wide
    /// character is taken whole or not at all.
    fn extend_selection_forward(&mut self) {
        let mut last = self.to;
        let mut current = last;
        loop {
            if current.column.0 + 1 < self.columns {
                current.column += Column(1);
                current = self.stretched_column(current);
            } else if current.line.0 + 1 < self.total_rows
                && self.grid.is_wrapped(current.line + Line(1))
            {
                current.line += Line(1);
                current.column = Column(0);
            } else {
                break;
            }

            if self.is_word_delimiter_at(current) {
                break;
            }
            last = current;
        }

        self.to = self.stretched_column(last);
    }
}

impl<G: GridOracle> fmt::Display for Selector<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} .. {}; state: {})", self.from, self.to, self.state)
    }
}
