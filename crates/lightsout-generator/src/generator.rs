//! Scramble-based grid generation.

use std::ops::RangeInclusive;

use lightsout_core::{Grid, InvalidSizeError, OutOfRangeError, Position};
use log::debug;
use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg64;

use crate::GridSeed;

/// Default range for the number of scramble moves, bounds inclusive.
///
/// The move count is a difficulty knob, not a correctness requirement: any
/// number of legal toggles yields a solvable grid.
pub const DEFAULT_SCRAMBLE_MOVES: RangeInclusive<usize> = 5..=10;

/// Scrambles that cancel out completely are redrawn this many times before
/// the solved grid is accepted as-is.
const MAX_REROLLS: usize = 8;

/// Generator for guaranteed-solvable grids of a fixed size.
///
/// # Example
///
/// ```
/// use lightsout_generator::GridGenerator;
///
/// let generator = GridGenerator::new(5)?;
/// let generated = generator.generate();
/// assert_eq!(generated.grid.size(), 5);
/// # Ok::<_, lightsout_core::InvalidSizeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGenerator {
    size: usize,
    scramble_moves: RangeInclusive<usize>,
}

impl GridGenerator {
    /// Creates a generator for `size` x `size` grids with the default
    /// scramble-move range.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, InvalidSizeError> {
        if size == 0 {
            return Err(InvalidSizeError { size });
        }
        Ok(Self {
            size,
            scramble_moves: DEFAULT_SCRAMBLE_MOVES,
        })
    }

    /// Sets the inclusive range the scramble-move count is drawn from.
    ///
    /// More moves tends to produce busier, harder grids.
    ///
    /// # Panics
    ///
    /// Panics if `moves` is an empty range.
    #[must_use]
    pub fn scramble_moves(mut self, moves: RangeInclusive<usize>) -> Self {
        assert!(!moves.is_empty(), "scramble-move range must not be empty");
        self.scramble_moves = moves;
        self
    }

    /// Generates a grid from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedGrid {
        self.generate_with_seed(GridSeed::random())
    }

    /// Generates the grid determined by `seed`.
    ///
    /// The same generator configuration and seed always produce the same
    /// [`GeneratedGrid`], scramble included.
    #[must_use]
    pub fn generate_with_seed(&self, seed: GridSeed) -> GeneratedGrid {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let (grid, scramble) = self.generate_with_rng(&mut rng);
        debug!(
            "generated {size}x{size} grid with {moves} scramble moves (seed {seed})",
            size = self.size,
            moves = scramble.len(),
        );
        GeneratedGrid {
            grid,
            scramble,
            seed,
        }
    }

    /// Generates a grid and its scramble from a caller-supplied random
    /// source.
    ///
    /// The grid starts all-off and receives a run of toggles at uniformly
    /// random positions, the count drawn from the configured scramble-move
    /// range. Every generated grid is reachable from the all-off grid by
    /// replaying the returned scramble, and is therefore solvable. A
    /// scramble that cancels out completely (leaving the grid already
    /// solved) is redrawn a bounded number of times; if every attempt
    /// cancels, the solved grid is returned rather than looping forever on
    /// a pathological random source.
    #[must_use]
    pub fn generate_with_rng<R>(&self, rng: &mut R) -> (Grid, Vec<Position>)
    where
        R: Rng + ?Sized,
    {
        let mut result = self.scramble(rng);
        for _ in 0..MAX_REROLLS {
            if !result.0.is_solved() {
                break;
            }
            debug!("scramble cancelled out, redrawing");
            result = self.scramble(rng);
        }
        result
    }

    fn scramble<R>(&self, rng: &mut R) -> (Grid, Vec<Position>)
    where
        R: Rng + ?Sized,
    {
        let count = rng.random_range(self.scramble_moves.clone());
        let mut grid = Grid::new(self.size).expect("generator size is at least 1");
        let mut scramble = Vec::with_capacity(count);
        for _ in 0..count {
            let pos = Position::new(
                rng.random_range(0..self.size),
                rng.random_range(0..self.size),
            );
            grid = grid.toggled(pos).expect("scramble positions are in bounds");
            scramble.push(pos);
        }
        (grid, scramble)
    }
}

/// A generated grid together with its provenance.
///
/// The scramble is the constructive solvability proof: replaying it from the
/// all-off grid reproduces [`grid`](Self::grid), so undoing it in reverse
/// order is a winning move sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedGrid {
    /// The scrambled starting grid.
    pub grid: Grid,
    /// The toggle sequence that produced [`grid`](Self::grid) from the
    /// all-off grid.
    pub scramble: Vec<Position>,
    /// The seed the generation run was driven by.
    pub seed: GridSeed,
}

impl GeneratedGrid {
    /// Replays the recorded scramble from the all-off grid.
    ///
    /// For a generator-produced value the result equals
    /// [`grid`](Self::grid).
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if a recorded move lies outside the
    /// grid; this can only happen for hand-assembled values.
    #[expect(clippy::missing_panics_doc)]
    pub fn replay(&self) -> Result<Grid, OutOfRangeError> {
        // A Grid cannot exist with size zero, so the all-off construction
        // cannot fail.
        let mut grid = Grid::new(self.grid.size()).expect("grid size is at least 1");
        for &pos in &self.scramble {
            grid = grid.toggled(pos)?;
        }
        Ok(grid)
    }
}
