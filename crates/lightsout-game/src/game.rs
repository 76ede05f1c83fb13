//! The game session: current grid, move counter, and won flag.

use lightsout_core::{Grid, InvalidSizeError, OutOfRangeError, Position};
use lightsout_generator::{GeneratedGrid, GridGenerator};
use log::debug;

/// A Lights Out game session.
///
/// Holds the current grid, the number of moves played, and whether the
/// puzzle is won (every light off). The session is mutated only through
/// [`Game::toggle`] and replaced wholesale by [`Game::reset`]; the grid
/// itself is a value that is swapped out on each move, never modified in
/// place.
///
/// Once the session is won it is terminal with respect to toggles: further
/// [`Game::toggle`] calls leave the grid and move counter untouched.
///
/// # Example
///
/// ```
/// use lightsout_game::Game;
///
/// let game = Game::new(5)?;
/// assert_eq!(game.grid().size(), 5);
/// assert_eq!(game.moves(), 0);
/// # Ok::<_, lightsout_core::InvalidSizeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: Grid,
    moves: usize,
    won: bool,
}

impl Game {
    /// Starts a new session on a freshly generated solvable grid.
    ///
    /// The move counter starts at zero and the won flag is computed from
    /// the generated grid.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, InvalidSizeError> {
        Ok(Self::from_generated(GridGenerator::new(size)?.generate()))
    }

    /// Starts a new session on an already generated grid.
    ///
    /// Useful when the caller generated (or seeded) the grid itself, for
    /// reproducible sessions.
    ///
    /// # Example
    ///
    /// ```
    /// use lightsout_game::Game;
    /// use lightsout_generator::{GridGenerator, GridSeed};
    ///
    /// let generator = GridGenerator::new(5)?;
    /// let seed = GridSeed::from_phrase("daily");
    /// let a = Game::from_generated(generator.generate_with_seed(seed));
    /// let b = Game::from_generated(generator.generate_with_seed(seed));
    /// assert_eq!(a, b);
    /// # Ok::<_, lightsout_core::InvalidSizeError>(())
    /// ```
    #[must_use]
    pub fn from_generated(generated: GeneratedGrid) -> Self {
        let GeneratedGrid {
            grid,
            scramble: _,
            seed: _,
        } = generated;
        let won = grid.is_solved();
        Self {
            grid,
            moves: 0,
            won,
        }
    }

    /// Returns the current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the number of moves played in this session.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Returns whether the puzzle is won (every light off).
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Plays a toggle at the given position.
    ///
    /// On a live session the current grid is replaced by its toggled
    /// successor, the move counter is incremented, and the won flag is
    /// recomputed; the call reports [`ToggleOutcome::Applied`]. On a won
    /// session nothing changes and the call reports
    /// [`ToggleOutcome::Ignored`].
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `pos` lies outside the grid. The
    /// coordinates are validated even on a won session; a wild position is
    /// a caller bug regardless of game phase.
    ///
    /// # Example
    ///
    /// ```
    /// use lightsout_core::{Grid, Position};
    /// use lightsout_game::{Game, ToggleOutcome};
    /// use lightsout_generator::{GeneratedGrid, GridSeed};
    ///
    /// // A one-move puzzle: the scramble toggled the center of a 3x3 grid.
    /// let generated = GeneratedGrid {
    ///     grid: ".#.\n###\n.#.".parse()?,
    ///     scramble: vec![Position::new(1, 1)],
    ///     seed: GridSeed::from_phrase("doc"),
    /// };
    /// let mut game = Game::from_generated(generated);
    ///
    /// assert_eq!(game.toggle(Position::new(1, 1))?, ToggleOutcome::Applied);
    /// assert!(game.is_won());
    /// assert_eq!(game.moves(), 1);
    ///
    /// // The session is now terminal: further toggles are ignored.
    /// assert_eq!(game.toggle(Position::new(0, 0))?, ToggleOutcome::Ignored);
    /// assert_eq!(game.moves(), 1);
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    pub fn toggle(&mut self, pos: Position) -> Result<ToggleOutcome, OutOfRangeError> {
        let next = self.grid.toggled(pos)?;
        if self.won {
            return Ok(ToggleOutcome::Ignored);
        }
        self.won = next.is_solved();
        self.grid = next;
        self.moves += 1;
        if self.won {
            debug!("puzzle solved in {} moves", self.moves);
        }
        Ok(ToggleOutcome::Applied)
    }

    /// Discards this session and starts a new one.
    ///
    /// Equivalent to [`Game::new`]: a fresh solvable grid is generated and
    /// the move counter returns to zero. Nothing from the old session
    /// survives.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] if `size` is zero; the current session
    /// is left untouched in that case.
    pub fn reset(&mut self, size: usize) -> Result<(), InvalidSizeError> {
        *self = Self::new(size)?;
        Ok(())
    }
}

/// Report of what a [`Game::toggle`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ToggleOutcome {
    /// The toggle was played: grid replaced, move counter incremented.
    Applied,
    /// The session is already won; nothing changed.
    Ignored,
}
