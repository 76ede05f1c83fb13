//! Core data structures for the Lights Out puzzle.
//!
//! This crate provides the puzzle-state engine shared by grid generation and
//! game session management: the board representation, the toggle transition,
//! and win detection.
//!
//! # Overview
//!
//! The crate is organized around two concepts:
//!
//! 1. **Coordinates** - [`position`]: board position (x, y) coordinate type
//!    with in-bounds orthogonal neighbor enumeration
//! 2. **The board** - [`grid`]: the square boolean grid, its value-returning
//!    toggle transition, and the win predicate
//!
//! Grids are immutable values: [`Grid::toggled`] returns a new grid and never
//! modifies its receiver, so a caller holding an earlier snapshot (for
//! display, history, and so on) never observes it change.
//!
//! # Examples
//!
//! ```
//! use lightsout_core::{Grid, Position};
//!
//! // A fresh grid has every light off and counts as solved.
//! let grid = Grid::new(5)?;
//! assert!(grid.is_solved());
//!
//! // Toggling flips the cell and its orthogonal neighbors.
//! let grid = grid.toggled(Position::new(2, 2))?;
//! assert_eq!(grid.lit_count(), 5);
//! assert!(!grid.is_solved());
//!
//! // Toggling the same cell again undoes the move.
//! let grid = grid.toggled(Position::new(2, 2))?;
//! assert!(grid.is_solved());
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

pub mod grid;
pub mod position;

// Re-export commonly used types
pub use self::{
    grid::{Grid, InvalidSizeError, OutOfRangeError, ParseGridError},
    position::Position,
};
