//! Text selection core for terminal grids.
//!
//! This crate tracks a user-driven selection gesture over a grid-shaped
//! screen buffer (a visible page plus scrollback history) and materializes
//! it as per-line column ranges for highlighting and clipboard export.
//! It owns no cells and no pixels: the screen is consumed through the
//! read-only [`GridOracle`] capability, which makes the selector usable
//! against any emulator screen, and testable against the bundled
//! [`PageGrid`] without one.
//!
//! Coordinates are absolute: signed lines address history below zero and
//! the page at and above it, so a selection anchored in saved content stays
//! put while new input scrolls the viewport.

#![deny(unsafe_code)]

pub mod cell;
pub mod grid;
pub mod index;
pub mod selection;

pub use cell::{Cell, CellExtra, CellFlags};
pub use grid::{GridOracle, PageGrid};
pub use index::{ascending, Column, Line, Point};
pub use selection::{
    extract_text, SelectionMode, SelectionRange, SelectionState, Selector,
};
