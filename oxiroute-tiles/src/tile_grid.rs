use crate::{GridError, Tileset};

use oxiroute::{Cell, Grid, Position};
use serde::{Deserialize, Serialize};

/// A rectangular grid of classified cells, stored row by row
/// from the bottom (`y = 0`) up.
///
/// Suports Serde for convenient map saving and loading.
/// Deserialized grids go through [`TileGrid::new`], so
/// malformed maps are rejected rather than loaded.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "TileGridParts")]
pub struct TileGrid {
    origin: Position,
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    start: Position,
    target: Position,
}

/// Unchecked serialized form of a [`TileGrid`].
#[derive(Deserialize)]
struct TileGridParts {
    origin: Position,
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    start: Position,
    target: Position,
}

impl TryFrom<TileGridParts> for TileGrid {
    type Error = GridError;

    fn try_from(parts: TileGridParts) -> Result<TileGrid, GridError> {
        TileGrid::new(
            parts.origin,
            parts.width,
            parts.height,
            parts.cells,
            parts.start,
            parts.target,
        )
    }
}

impl TileGrid {
    /// Creates a grid from its raw parts. `cells` is row-major,
    /// bottom row first; `start` and `target` are world
    /// coordinates.
    ///
    /// # Errors
    /// Returns an error if either dimension is zero, the
    /// number of cells does not match the dimensions, or the
    /// start or target lie outside the grid.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::{Cell, Grid, Position};
    /// use oxiroute_tiles::TileGrid;
    ///
    /// let grid = TileGrid::new(
    ///     Position::new(-1, -1),
    ///     2,
    ///     1,
    ///     vec![Cell::Accessible, Cell::Accessible],
    ///     Position::new(-1, -1),
    ///     Position::new(0, -1),
    /// )
    /// .unwrap();
    /// assert_eq!(grid.local_target(), Position::new(1, 0));
    /// ```
    pub fn new(
        origin: Position,
        width: u32,
        height: u32,
        cells: Vec<Cell>,
        start: Position,
        target: Position,
    ) -> Result<TileGrid, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        let grid = TileGrid {
            origin,
            width,
            height,
            cells,
            start,
            target,
        };
        for (name, position) in [("start", start), ("target", target)] {
            if !grid.contains(grid.to_local(position)) {
                return Err(GridError::OutOfBounds { name, position });
            }
        }
        Ok(grid)
    }

    /// Builds a grid by looking up the name of the tile at
    /// every world cell within the given bounds, and
    /// classifying it with `tileset`. Cells without a tile
    /// are [`Cell::Unknown`].
    ///
    /// # Errors
    /// As for [`TileGrid::new`].
    ///
    /// # Examples
    /// ```
    /// use oxiroute::{Cell, Grid, Position};
    /// use oxiroute_tiles::{DesertTileset, TileGrid};
    ///
    /// let grid = TileGrid::from_tiles(
    ///     Position::new(0, 0),
    ///     3,
    ///     1,
    ///     |p: Position| match p.x {
    ///         0 => Some("Desert_1_0"),
    ///         1 => Some("Desert_1_7"),
    ///         _ => None,
    ///     },
    ///     &DesertTileset,
    ///     Position::new(0, 0),
    ///     Position::new(2, 0),
    /// )
    /// .unwrap();
    /// assert_eq!(grid.cell(Position::new(1, 0)), Cell::NonAccessible);
    /// assert_eq!(grid.cell(Position::new(2, 0)), Cell::Unknown);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn from_tiles<L, N, T>(
        origin: Position,
        width: u32,
        height: u32,
        mut lookup: L,
        tileset: &T,
        start: Position,
        target: Position,
    ) -> Result<TileGrid, GridError>
    where
        L: FnMut(Position) -> Option<N>,
        N: AsRef<str>,
        T: Tileset + ?Sized,
    {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let world = origin + Position::new(x, y);
                cells.push(match lookup(world) {
                    Some(name) => tileset.classify(name.as_ref()),
                    None => Cell::Unknown,
                });
            }
        }
        TileGrid::new(origin, width, height, cells, start, target)
    }

    /// Returns a copy of the grid with a different start and
    /// target.
    ///
    /// # Errors
    /// Returns an error if either lies outside the grid.
    pub fn with_endpoints(&self, start: Position, target: Position) -> Result<TileGrid, GridError> {
        TileGrid::new(
            self.origin,
            self.width,
            self.height,
            self.cells.clone(),
            start,
            target,
        )
    }

    fn index(&self, local: Position) -> usize {
        local.y as usize * self.width as usize + local.x as usize
    }
}

impl Grid for TileGrid {
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
        if self.contains(local) {
            self.cells[self.index(local)]
        } else {
            Cell::Unknown
        }
    }

    fn start(&self) -> Position {
        self.start
    }

    fn target(&self) -> Position {
        self.target
    }
}
