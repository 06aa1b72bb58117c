use oxiroute::{Cell, Grid, Position, Route};

use std::fmt;

/// Draws a grid as text, top row first, with a route
/// overlaid: `S` and `T` for the endpoints, `*` for visited
/// cells and the map glyphs (`.`, `#`, `?`) elsewhere.
///
/// # Examples
/// ```
/// use oxiroute::{evaluate_route, Direction, Position};
/// use oxiroute_tiles::{RouteMap, TileGrid};
///
/// let grid = TileGrid::parse(Position::new(0, 0), "...\nS#T").unwrap();
/// let outcome = evaluate_route(&grid, &[Direction::North, Direction::East]);
///
/// assert_eq!(RouteMap::new(&grid, &outcome.route).to_string(), "**.\nS#T\n");
/// ```
pub struct RouteMap<'a, G: ?Sized> {
    grid: &'a G,
    route: Option<&'a Route>,
}

impl<'a, G: Grid + ?Sized> RouteMap<'a, G> {
    pub fn new(grid: &'a G, route: &'a Route) -> RouteMap<'a, G> {
        RouteMap {
            grid,
            route: Some(route),
        }
    }

    /// Draws the bare grid.
    pub fn without_route(grid: &'a G) -> RouteMap<'a, G> {
        RouteMap { grid, route: None }
    }

    fn glyph(&self, local: Position) -> char {
        if local == self.grid.local_start() {
            'S'
        } else if local == self.grid.local_target() {
            'T'
        } else if self.route.map_or(false, |r| r.contains(local)) {
            '*'
        } else {
            match self.grid.cell(local) {
                Cell::Accessible => '.',
                Cell::NonAccessible => '#',
                Cell::Unknown => '?',
            }
        }
    }
}

impl<'a, G: Grid + ?Sized> fmt::Display for RouteMap<'a, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.grid.height() as i32).rev() {
            let row: String = (0..self.grid.width() as i32)
                .map(|x| self.glyph(Position::new(x, y)))
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
