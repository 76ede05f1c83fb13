//! Board position (x, y) coordinate types.

use std::iter::FusedIterator;

/// A board position identified by column (`x`) and row (`y`), both 0-indexed.
///
/// Positions are plain coordinates and carry no grid size; whether a position
/// is in bounds is decided by the grid it is used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("({x}, {y})")]
pub struct Position {
    /// Column index (0-based, left to right).
    pub x: usize,
    /// Row index (0-based, top to bottom).
    pub y: usize,
}

impl Position {
    /// Creates a position from column and row indices.
    ///
    /// # Example
    ///
    /// ```
    /// use lightsout_core::Position;
    ///
    /// let pos = Position::new(1, 3);
    /// assert_eq!(pos.x, 1);
    /// assert_eq!(pos.y, 3);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns whether this position lies inside a `size` x `size` grid.
    #[must_use]
    #[inline]
    pub const fn is_in_bounds(self, size: usize) -> bool {
        self.x < size && self.y < size
    }

    /// Returns the orthogonal neighbors (up, down, left, right) that lie
    /// inside a `size` x `size` grid.
    ///
    /// Neighbors falling outside the grid on either axis are skipped; there
    /// is no wraparound. A corner position therefore has two neighbors, an
    /// edge position three, and an interior position four.
    ///
    /// # Example
    ///
    /// ```
    /// use lightsout_core::Position;
    ///
    /// let corner: Vec<_> = Position::new(0, 0).orthogonal_neighbors(3).collect();
    /// assert_eq!(corner, [Position::new(0, 1), Position::new(1, 0)]);
    ///
    /// let center = Position::new(1, 1).orthogonal_neighbors(3).count();
    /// assert_eq!(center, 4);
    /// ```
    pub fn orthogonal_neighbors(
        self,
        size: usize,
    ) -> impl FusedIterator<Item = Position> + use<> {
        let Self { x, y } = self;
        [
            (y > 0).then(|| Self::new(x, y - 1)),
            (y + 1 < size).then(|| Self::new(x, y + 1)),
            (x > 0).then(|| Self::new(x - 1, y)),
            (x + 1 < size).then(|| Self::new(x + 1, y)),
        ]
        .into_iter()
        .flatten()
    }
}

impl From<(usize, usize)> for Position {
    #[inline]
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}
