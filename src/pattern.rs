//! Format-independent data model populated by every decoder.

use std::collections::HashSet;
use std::fmt;

/// 2D integer point.
///
/// Negative values are valid; patterns may extend left of and above the
/// origin before normalization.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// X position, increasing rightwards.
    pub x: i64,
    /// Y position, increasing downwards (the file-format convention).
    pub y: i64,
}
impl Coordinate {
    /// The point `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates the point `(x, y)`.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
    /// Returns this point with its X position replaced.
    pub const fn with_x(self, x: i64) -> Self {
        Self { x, y: self.y }
    }
    /// Returns this point with its Y position replaced.
    pub const fn with_y(self, y: i64) -> Self {
        Self { x: self.x, y }
    }
    /// Returns this point translated along the X axis.
    pub const fn plus_to_x(self, amount: i64) -> Self {
        Self {
            x: self.x + amount,
            y: self.y,
        }
    }
    /// Returns this point translated along the Y axis.
    pub const fn plus_to_y(self, amount: i64) -> Self {
        Self {
            x: self.x,
            y: self.y + amount,
        }
    }
    /// Returns this point translated by `(dx, dy)`.
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A coordinate paired with a cell state.
///
/// Only live cells are ever stored; absence from a pattern's cell set means
/// dead (state 0).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Cell {
    /// Position of the cell.
    pub coordinate: Coordinate,
    /// State of the cell. `1` is the conventional live state; multi-state
    /// automata may use larger values.
    pub state: i64,
}
impl Cell {
    /// Creates a live (state 1) cell at `coordinate`.
    pub const fn live(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            state: 1,
        }
    }
}

/// Contents common to every pattern format: the live-cell set, user
/// comments, and the origin coordinate.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Pattern {
    /// Live cells. Membership, not order, matters; duplicates collapse.
    pub cells: HashSet<Cell>,
    /// Free-text comments, in source order.
    pub comments: Vec<String>,
    /// Reference top-left corner. Life 1.05 re-bases cells against this;
    /// Life 1.06 and RLE store absolute coordinates and keep it as-is.
    pub origin: Coordinate,
}
impl Pattern {
    /// Returns whether a live cell exists at `(x, y)`.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.cells.contains(&Cell::live(Coordinate::new(x, y)))
    }

    /// Writes the cells inside a `width`×`height` window anchored at
    /// `top_left` as an ASCII grid, `*` for live and `.` for dead.
    pub(crate) fn write_grid(
        &self,
        f: &mut fmt::Formatter<'_>,
        top_left: Coordinate,
        width: i64,
        height: i64,
    ) -> fmt::Result {
        for y in 0..height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..width {
                let live = self.contains(top_left.x + x, top_left.y + y);
                write!(f, "{}", if live { '*' } else { '.' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_translation() {
        let c = Coordinate::new(3, -4);
        assert_eq!(Coordinate::new(8, -4), c.plus_to_x(5));
        assert_eq!(Coordinate::new(3, -6), c.plus_to_y(-2));
        assert_eq!(Coordinate::new(0, -4), c.with_x(0));
        assert_eq!(Coordinate::new(3, 7), c.with_y(7));
        assert_eq!(Coordinate::new(2, -5), c.offset(-1, -1));
        assert_eq!(Coordinate::ORIGIN, Coordinate::default());
    }

    #[test]
    fn test_cell_set_collapses_duplicates() {
        let mut cells = HashSet::new();
        cells.insert(Cell::live(Coordinate::new(1, 2)));
        cells.insert(Cell::live(Coordinate::new(1, 2)));
        cells.insert(Cell::live(Coordinate::new(2, 1)));
        assert_eq!(2, cells.len());
    }

    #[test]
    fn test_pattern_contains() {
        let mut pattern = Pattern::default();
        pattern.cells.insert(Cell::live(Coordinate::new(-1, 5)));
        assert!(pattern.contains(-1, 5));
        assert!(!pattern.contains(5, -1));
    }
}
