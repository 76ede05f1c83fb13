//! Game session management for Lights Out puzzles.
//!
//! This crate wraps one puzzle grid in a [`Game`] session: the current grid,
//! a move counter, and the derived won flag. The session is the single
//! mutable point of truth for "the game right now"; presentation layers read
//! its state and feed player clicks into [`Game::toggle`], the sole mutation
//! entry point.
//!
//! # Examples
//!
//! ```
//! use lightsout_core::Position;
//! use lightsout_game::Game;
//!
//! let mut game = Game::new(5)?;
//! assert_eq!(game.moves(), 0);
//!
//! // Feed a click into the session; the grid is replaced, never mutated
//! // in place, so snapshots taken earlier stay valid.
//! let before = game.grid().clone();
//! game.toggle(Position::new(2, 2))?;
//! assert_eq!(game.moves(), 1);
//! assert_ne!(&before, game.grid());
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

pub mod game;

// Re-export commonly used types
pub use self::game::{Game, ToggleOutcome};
