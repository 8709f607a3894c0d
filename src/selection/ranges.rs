//! Range materialization: turning the endpoint pair into per-line spans.

use crate::cell::Cell;
use crate::grid::GridOracle;
use crate::index::{Column, Line, Point};

use super::{SelectionMode, Selector};

/// One selected span on a single line, columns inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    pub line: i32,
    pub from_column: i32,
    pub to_column: i32,
}

impl SelectionRange {
    /// Number of columns covered; non-positive for a reversed span.
    pub fn length(&self) -> i32 {
        self.to_column - self.from_column + 1
    }
}

impl<G: GridOracle> Selector<'_, G> {
    /// Materialize the selection as one range per touched line, ordered by
    /// ascending line.
    pub fn selection(&self) -> Vec<SelectionRange> {
        match self.mode {
            SelectionMode::FullLine => self.lines(),
            SelectionMode::Linear | SelectionMode::WordWise => self.linear(),
            SelectionMode::Rectangular => self.rectangular(),
        }
    }

    /// Ranges for a linear selection: partial first and last lines, full
    /// rows in between.
    pub fn linear(&self) -> Vec<SelectionRange> {
        let (from, to) = self.ordered();
        let num_lines = (to.line.0 - from.line.0 + 1) as usize;
        let mut result = Vec::with_capacity(num_lines);

        match num_lines {
            1 => {
                result.push(SelectionRange {
                    line: from.line.0,
                    from_column: from.column.0 as i32,
                    to_column: to.column.0 as i32,
                });
            }
            2 => {
                result.push(SelectionRange {
                    line: from.line.0,
                    from_column: from.column.0 as i32,
                    to_column: self.columns as i32 - 1,
                });
                result.push(SelectionRange {
                    line: to.line.0,
                    from_column: 0,
                    to_column: to.column.0 as i32,
                });
            }
            _ => {
                result.push(SelectionRange {
                    line: from.line.0,
                    from_column: from.column.0 as i32,
                    to_column: self.columns as i32 - 1,
                });
                for n in 1..num_lines - 1 {
                    result.push(SelectionRange {
                        line: from.line.0 + n as i32,
                        from_column: 0,
                        to_column: self.columns as i32 - 1,
                    });
                }
                result.push(SelectionRange {
                    line: to.line.0,
                    from_column: 0,
                    to_column: to.column.0 as i32,
                });
            }
        }

        result
    }

    /// Ranges for a full-line selection.
    ///
    /// Column bounds are the 1-based inclusive pair `[1, columns]`, unlike
    /// [`Selector::linear`]'s 0-based `[0, columns - 1]`; the rendering
    /// layer this grew up with indexes full lines that way, and consumers
    /// translating to cell indices must subtract one.
    pub fn lines(&self) -> Vec<SelectionRange> {
        let (from, to) = self.ordered();
        let num_lines = (to.line.0 - from.line.0 + 1) as usize;

        (0..num_lines)
            .map(|n| SelectionRange {
                line: from.line.0 + n as i32,
                from_column: 1,
                to_column: self.columns as i32,
            })
            .collect()
    }

    /// Ranges for a rectangular selection: the same column pair on every
    /// line. A right-to-left drag leaves `from_column > to_column`; such
    /// ranges have non-positive length and render nothing.
    pub fn rectangular(&self) -> Vec<SelectionRange> {
        let (from, to) = self.ordered();
        let num_lines = (to.line.0 - from.line.0 + 1) as usize;

        (0..num_lines)
            .map(|n| SelectionRange {
                line: from.line.0 + n as i32,
                from_column: from.column.0 as i32,
                to_column: to.column.0 as i32,
            })
            .collect()
    }

    /// Invoke `visitor` for every existing cell in the selection, in range
    /// order. Cells the oracle reports absent are skipped silently.
    pub fn render<V>(&self, mut visitor: V)
    where
        V: FnMut(Point, &Cell),
    {
        for range in self.selection() {
            for col in range.from_column..=range.to_column {
                let point = Point::new(Line(range.line), Column(col as usize));
                if let Some(cell) = self.grid.cell_at(point) {
                    visitor(point, cell);
                }
            }
        }
    }

    /// Endpoints normalized to ascending order.
    fn ordered(&self) -> (Point, Point) {
        if self.to < self.from {
            (self.to, self.from)
        } else {
            (self.from, self.to)
        }
    }
}
