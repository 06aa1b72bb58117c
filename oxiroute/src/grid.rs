//! The grid model routes are evolved against.
//!
//! The engine never loads or parses maps itself: it only
//! consumes the [`Grid`] capability set. Concrete grids are
//! supplied by collaborators such as the
//! [`OxiRoute-Tiles`](https://crates.io/crates/oxiroute-tiles) crate.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::ops::{Add, Sub};

/// A cell coordinate.
///
/// Depending on context this is either a world coordinate
/// (as handed out by [`Grid::start`] and [`Grid::target`])
/// or a grid-local one, relative to [`Grid::origin`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    /// Returns the sum of the absolute coordinate
    /// differences between two positions.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::Position;
    ///
    /// let a = Position::new(1, -2);
    /// let b = Position::new(-3, 4);
    /// assert_eq!(a.manhattan_distance(b), 10);
    /// ```
    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Traversability classification of a grid cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Cell {
    Accessible,
    NonAccessible,
    /// Unclassified cells. Never entered.
    Unknown,
}

impl Default for Cell {
    fn default() -> Cell {
        Cell::Unknown
    }
}

/// A discrete unit move on the grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Returns the unit offset of the move.
    /// North increases `y`, East increases `x`.
    pub fn offset(self) -> Position {
        match self {
            Direction::North => Position::new(0, 1),
            Direction::South => Position::new(0, -1),
            Direction::East => Position::new(1, 0),
            Direction::West => Position::new(-1, 0),
        }
    }

    /// Returns the position reached by moving
    /// once from `from` in this direction.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::{Direction, Position};
    ///
    /// assert_eq!(Direction::West.step(Position::new(0, 0)), Position::new(-1, 0));
    /// ```
    pub fn step(self, from: Position) -> Position {
        from + self.offset()
    }
}

/// A rectangular, read-only grid of classified cells
/// with a fixed start and target.
///
/// Implementors only supply the raw queries; bounds and
/// legality checks are derived from them. All queries
/// taking a position expect *grid-local* coordinates,
/// i.e. world coordinates minus [`origin`].
///
/// [`origin`]: Grid::origin
pub trait Grid {
    /// World coordinate of the grid's `(0, 0)` cell.
    fn origin(&self) -> Position;

    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// Classification of the cell at a grid-local position.
    /// Only ever called with positions for which
    /// [`contains`](Grid::contains) holds.
    fn cell(&self, local: Position) -> Cell;

    /// Start cell, in world coordinates.
    fn start(&self) -> Position;

    /// Target cell, in world coordinates.
    fn target(&self) -> Position;

    /// Converts a world coordinate into a grid-local one.
    fn to_local(&self, world: Position) -> Position {
        world - self.origin()
    }

    /// Returns whether a grid-local position lies within bounds.
    fn contains(&self, local: Position) -> bool {
        local.x >= 0
            && local.y >= 0
            && (local.x as u32) < self.width()
            && (local.y as u32) < self.height()
    }

    /// Returns whether an agent may stand on a grid-local
    /// position: it must be in bounds and [`Cell::Accessible`].
    fn is_accessible(&self, local: Position) -> bool {
        self.contains(local) && self.cell(local) == Cell::Accessible
    }

    /// Start cell, in grid-local coordinates.
    fn local_start(&self) -> Position {
        self.to_local(self.start())
    }

    /// Target cell, in grid-local coordinates.
    fn local_target(&self) -> Position {
        self.to_local(self.target())
    }
}

impl<G: Grid + ?Sized> Grid for &G {
    fn origin(&self) -> Position {
        (**self).origin()
    }

    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn cell(&self, local: Position) -> Cell {
        (**self).cell(local)
    }

    fn start(&self) -> Position {
        (**self).start()
    }

    fn target(&self) -> Position {
        (**self).target()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal in-crate grid used by the engine's unit tests.
    pub(crate) struct TestGrid {
        pub origin: Position,
        pub width: u32,
        pub height: u32,
        pub blocked: Vec<Position>,
        pub start: Position,
        pub target: Position,
    }

    impl TestGrid {
        pub fn open(width: u32, height: u32, start: Position, target: Position) -> TestGrid {
            TestGrid {
                origin: Position::new(0, 0),
                width,
                height,
                blocked: vec![],
                start,
                target,
            }
        }
    }

    impl Grid for TestGrid {
        fn origin(&self) -> Position {
            self.origin
        }

        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn cell(&self, local: Position) -> Cell {
            if self.blocked.contains(&local) {
                Cell::NonAccessible
            } else {
                Cell::Accessible
            }
        }

        fn start(&self) -> Position {
            self.start
        }

        fn target(&self) -> Position {
            self.target
        }
    }

    #[test]
    fn offsets() {
        let p = Position::new(2, 2);
        assert_eq!(Direction::North.step(p), Position::new(2, 3));
        assert_eq!(Direction::South.step(p), Position::new(2, 1));
        assert_eq!(Direction::East.step(p), Position::new(3, 2));
        assert_eq!(Direction::West.step(p), Position::new(1, 2));
    }

    #[test]
    fn bounds_and_accessibility() {
        let mut grid = TestGrid::open(3, 2, Position::new(0, 0), Position::new(2, 1));
        grid.blocked.push(Position::new(1, 1));
        assert!(grid.contains(Position::new(2, 1)));
        assert!(!grid.contains(Position::new(3, 1)));
        assert!(!grid.contains(Position::new(0, 2)));
        assert!(!grid.contains(Position::new(-1, 0)));
        assert!(!grid.is_accessible(Position::new(1, 1)));
        assert!(grid.is_accessible(Position::new(1, 0)));
        assert!(!grid.is_accessible(Position::new(0, -1)));
    }

    #[test]
    fn local_coordinates_subtract_origin() {
        let mut grid = TestGrid::open(4, 4, Position::new(-5, 3), Position::new(-4, 3));
        grid.origin = Position::new(-5, 3);
        assert_eq!(grid.local_start(), Position::new(0, 0));
        assert_eq!(grid.local_target(), Position::new(1, 0));
    }
}
