//! Type-safe index newtypes for grid coordinates.
//!
//! `Line` and `Column` prevent mixing up row/column values at compile time.
//! `Point` combines them into a grid coordinate ordered by line, then column.
//! Lines are signed: negative values address scrollback history (-1 is the
//! most recent retired row), zero and positive values address the visible
//! page top-down. Retiring a line never renumbers saved content; history
//! grows in the negative direction.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Generate arithmetic and conversion impls for a newtype index wrapper.
macro_rules! index_ops {
    ($ty:ident, $inner:ty) => {
        impl From<$inner> for $ty {
            fn from(val: $inner) -> Self {
                Self(val)
            }
        }

        impl From<$ty> for $inner {
            fn from(val: $ty) -> Self {
                val.0
            }
        }

        impl Add for $ty {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl Sub for $ty {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                self.0 -= rhs.0;
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

/// Signed line index. Negative values refer to scrollback history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Line(pub i32);

index_ops!(Line, i32);

/// Unsigned column index (0-based, in cell units).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Column(pub usize);

index_ops!(Column, usize);

/// A grid coordinate combining a line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub line: Line,
    pub column: Column,
}

impl Point {
    /// Create a new point at the given line and column.
    pub fn new(line: Line, column: Column) -> Self {
        Self { line, column }
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.line.cmp(&other.line) {
            Ordering::Equal => self.column.cmp(&other.column),
            ord => ord,
        }
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.column)
    }
}

/// Returns `true` when `low <= middle <= high`.
pub fn ascending<T: Ord>(low: T, middle: T, high: T) -> bool {
    low <= middle && middle <= high
}
