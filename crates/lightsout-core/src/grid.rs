//! The square boolean grid, its toggle transition, and win detection.

use std::{fmt, iter::FusedIterator, ops::Index, str::FromStr};

use crate::Position;

/// A square grid of binary lights, row-major, 0-indexed.
///
/// `true` means the light is on (lit), `false` means it is off. The grid size
/// is fixed at construction time; every operation that produces a new grid
/// preserves it.
///
/// Grids are values: the only transition, [`Grid::toggled`], returns a new
/// grid and leaves its receiver untouched. Callers holding an earlier grid
/// for display or history never observe it change.
///
/// # Example
///
/// ```
/// use lightsout_core::{Grid, Position};
///
/// let grid = Grid::new(3)?;
/// let grid = grid.toggled(Position::new(0, 0))?;
///
/// // The corner cell and its two in-bounds neighbors are now lit.
/// assert_eq!(grid.to_string(), "##.\n#..\n...");
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-off grid of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] if `size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use lightsout_core::Grid;
    ///
    /// let grid = Grid::new(5)?;
    /// assert_eq!(grid.size(), 5);
    /// assert!(grid.is_solved());
    /// # Ok::<_, lightsout_core::InvalidSizeError>(())
    /// ```
    pub fn new(size: usize) -> Result<Self, InvalidSizeError> {
        if size == 0 {
            return Err(InvalidSizeError { size });
        }
        Ok(Self {
            size,
            cells: vec![false; size * size],
        })
    }

    /// Returns the side length of the grid.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at the given position, or `None` if it is out of
    /// bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<bool> {
        pos.is_in_bounds(self.size)
            .then(|| self.cells[self.index_of(pos)])
    }

    /// Returns a new grid with the cell at `pos` and each of its in-bounds
    /// orthogonal neighbors inverted.
    ///
    /// Neighbors outside the grid are skipped; there is no wraparound. The
    /// receiver is left unmodified. The transition is its own inverse:
    /// toggling the same position twice restores the original grid.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `pos` lies outside the grid. Out of
    /// range coordinates are rejected rather than clamped or wrapped; a
    /// wrapped toggle would be a different legal move than the one requested
    /// and would invalidate any move sequence recorded against this grid.
    pub fn toggled(&self, pos: Position) -> Result<Self, OutOfRangeError> {
        if !pos.is_in_bounds(self.size) {
            return Err(OutOfRangeError {
                x: pos.x,
                y: pos.y,
                size: self.size,
            });
        }
        let mut next = self.clone();
        next.flip(pos);
        for neighbor in pos.orthogonal_neighbors(self.size) {
            next.flip(neighbor);
        }
        Ok(next)
    }

    /// Checks whether every light is off.
    ///
    /// This is the win predicate: a puzzle is solved exactly when the grid
    /// is all-off.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    /// Returns the number of lit cells.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    /// Returns all positions of the grid in row-major order.
    #[must_use]
    pub fn positions(&self) -> impl FusedIterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }

    /// Returns the rows of the grid, top to bottom.
    #[must_use]
    pub fn rows(&self) -> impl FusedIterator<Item = &[bool]> {
        self.cells.chunks(self.size)
    }

    #[inline]
    fn index_of(&self, pos: Position) -> usize {
        pos.y * self.size + pos.x
    }

    fn flip(&mut self, pos: Position) {
        let i = self.index_of(pos);
        self.cells[i] = !self.cells[i];
    }
}

impl Index<Position> for Grid {
    type Output = bool;

    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid. Use [`Grid::get`] for checked
    /// access.
    fn index(&self, pos: Position) -> &bool {
        assert!(
            pos.is_in_bounds(self.size),
            "position {pos} out of range for {size}x{size} grid",
            size = self.size,
        );
        &self.cells[self.index_of(pos)]
    }
}

impl fmt::Display for Grid {
    /// Renders the grid as rows of `#` (lit) and `.` (off) separated by
    /// newlines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &lit in row {
                f.write_str(if lit { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses a grid from `#` (lit) and `.` (off) characters.
    ///
    /// Whitespace is insignificant, so both one-row-per-line and flat
    /// single-line forms are accepted. The number of cells must be a perfect
    /// square.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '#' => Ok(true),
                '.' => Ok(false),
                c => Err(ParseGridError::InvalidCell { c }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if cells.is_empty() {
            return Err(ParseGridError::Empty);
        }
        let size = (1..=cells.len()).find(|n| n * n >= cells.len()).unwrap_or(0);
        if size * size != cells.len() {
            return Err(ParseGridError::NonSquareLength { len: cells.len() });
        }
        Ok(Self { size, cells })
    }
}

/// Error returned when a toggle names a position outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("position ({x}, {y}) out of range for {size}x{size} grid")]
pub struct OutOfRangeError {
    /// Column index of the rejected position.
    pub x: usize,
    /// Row index of the rejected position.
    pub y: usize,
    /// Side length of the grid that rejected it.
    pub size: usize,
}

/// Error returned when a grid is requested with size zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("grid size must be at least 1, got {size}")]
pub struct InvalidSizeError {
    /// The rejected size.
    pub size: usize,
}

/// Errors that can occur when parsing a grid from its textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input contained no cell characters.
    #[display("grid text is empty")]
    Empty,
    /// The input contained a character other than `#`, `.`, or whitespace.
    #[display("invalid cell character: {c:?}")]
    InvalidCell {
        /// The offending character.
        c: char,
    },
    /// The number of cells was not a perfect square.
    #[display("cell count {len} is not a perfect square")]
    NonSquareLength {
        /// The number of cell characters found.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn grid(s: &str) -> Grid {
        s.parse().expect("valid grid text")
    }

    #[test]
    fn test_new_grid_is_all_off() {
        let g = Grid::new(4).unwrap();
        assert_eq!(g.size(), 4);
        assert!(g.is_solved());
        assert_eq!(g.lit_count(), 0);
        assert!(g.positions().all(|pos| !g[pos]));
    }

    #[test]
    fn test_new_rejects_zero_size() {
        assert_eq!(Grid::new(0), Err(InvalidSizeError { size: 0 }));
    }

    #[test]
    fn test_toggle_corner_flips_three_cells() {
        let g = Grid::new(2).unwrap();
        let g = g.toggled(Position::new(0, 0)).unwrap();
        assert_eq!(g, grid("##\n#."));

        // Toggling the same cell again restores the all-off grid.
        let g = g.toggled(Position::new(0, 0)).unwrap();
        assert!(g.is_solved());
    }

    #[test]
    fn test_toggle_center_flips_five_cells() {
        let g = Grid::new(3).unwrap();
        let g = g.toggled(Position::new(1, 1)).unwrap();
        assert_eq!(g, grid(".#.\n###\n.#."));
        assert_eq!(g.lit_count(), 5);
    }

    #[test]
    fn test_toggle_edge_flips_four_cells() {
        let g = Grid::new(3).unwrap();
        let g = g.toggled(Position::new(0, 1)).unwrap();
        assert_eq!(g, grid("#..\n##.\n#.."));
    }

    #[test]
    fn test_toggle_single_cell_grid() {
        let g = Grid::new(1).unwrap();
        let g = g.toggled(Position::new(0, 0)).unwrap();
        assert_eq!(g.lit_count(), 1);
        assert!(!g.is_solved());
    }

    #[test]
    fn test_toggle_leaves_receiver_unmodified() {
        let before = grid("#..\n.#.\n..#");
        let after = before.toggled(Position::new(1, 1)).unwrap();
        assert_eq!(before, grid("#..\n.#.\n..#"));
        assert_ne!(before, after);
    }

    #[test]
    fn test_toggle_rejects_out_of_range() {
        let g = Grid::new(3).unwrap();
        assert_eq!(
            g.toggled(Position::new(3, 0)),
            Err(OutOfRangeError { x: 3, y: 0, size: 3 })
        );
        assert_eq!(
            g.toggled(Position::new(0, 3)),
            Err(OutOfRangeError { x: 0, y: 3, size: 3 })
        );
    }

    #[test]
    fn test_is_solved_iff_all_off() {
        assert!(grid("....").is_solved());
        assert!(!grid("...#").is_solved());
        assert!(!grid("####").is_solved());
        assert!(grid(".").is_solved());
    }

    #[test]
    fn test_get_checked_access() {
        let g = grid("#.\n..");
        assert_eq!(g.get(Position::new(0, 0)), Some(true));
        assert_eq!(g.get(Position::new(1, 1)), Some(false));
        assert_eq!(g.get(Position::new(2, 0)), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_panics_out_of_range() {
        let g = Grid::new(2).unwrap();
        let _ = g[Position::new(2, 2)];
    }

    #[test]
    fn test_display_parse_round_trip() {
        let text = "#.#\n.#.\n#.#";
        let g = grid(text);
        assert_eq!(g.to_string(), text);
        assert_eq!(g.size(), 3);
    }

    #[test]
    fn test_parse_flat_form() {
        assert_eq!(grid("#..#"), grid("#.\n.#"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Grid>(), Err(ParseGridError::Empty));
        assert_eq!("  \n ".parse::<Grid>(), Err(ParseGridError::Empty));
        assert_eq!(
            "#.x#".parse::<Grid>(),
            Err(ParseGridError::InvalidCell { c: 'x' })
        );
        assert_eq!(
            "#####".parse::<Grid>(),
            Err(ParseGridError::NonSquareLength { len: 5 })
        );
    }

    #[test]
    fn test_rows_iterates_top_to_bottom() {
        let g = grid("##\n..");
        let rows: Vec<&[bool]> = g.rows().collect();
        assert_eq!(rows, [&[true, true][..], &[false, false][..]]);
    }

    proptest! {
        #[test]
        fn prop_toggle_is_its_own_inverse(
            (size, x, y) in (1usize..8).prop_flat_map(|size| (Just(size), 0..size, 0..size)),
            seed_cells in proptest::collection::vec(any::<bool>(), 64),
        ) {
            let mut g = Grid::new(size).unwrap();
            for (pos, lit) in g.positions().zip(seed_cells) {
                if lit {
                    g = g.toggled(pos).unwrap();
                }
            }
            let pos = Position::new(x, y);
            let round_trip = g.toggled(pos).unwrap().toggled(pos).unwrap();
            prop_assert_eq!(round_trip, g);
        }

        #[test]
        fn prop_toggle_changes_only_the_neighborhood(
            (size, x, y) in (1usize..8).prop_flat_map(|size| (Just(size), 0..size, 0..size)),
        ) {
            let g = Grid::new(size).unwrap();
            let pos = Position::new(x, y);
            let toggled = g.toggled(pos).unwrap();
            let mut neighborhood: Vec<Position> =
                pos.orthogonal_neighbors(size).collect();
            neighborhood.push(pos);
            for p in g.positions() {
                if neighborhood.contains(&p) {
                    prop_assert_ne!(g[p], toggled[p]);
                } else {
                    prop_assert_eq!(g[p], toggled[p]);
                }
            }
        }
    }
}
