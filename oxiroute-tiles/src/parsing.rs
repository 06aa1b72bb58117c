//! Text maps.
//!
//! Each line is a row of the grid, with the *top* line
//! holding the highest `y`. Glyphs:
//!
//! | glyph | cell                      |
//! |-------|---------------------------|
//! | `.`   | accessible                |
//! | `#`   | non-accessible            |
//! | `?`   | unknown                   |
//! | `S`   | start, accessible         |
//! | `T`   | target, accessible        |
//!
//! Surrounding whitespace and blank lines are ignored.

use crate::{GridError, TileGrid};

use oxiroute::{Cell, Position};
use serde::{Deserialize, Serialize};

const START: char = 'S';
const TARGET: char = 'T';

/// A serialisable text map, e.g. stored as RON:
///
/// ```text
/// (
///     origin: (x: 0, y: 0),
///     rows: [
///         "S.#",
///         "..T",
///     ],
/// )
/// ```
///
/// `start` and `target`, when given, override (and make
/// optional) the map's `S` and `T` markers.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct MapDescription {
    #[serde(default)]
    pub origin: Position,
    pub rows: Vec<String>,
    #[serde(default)]
    pub start: Option<Position>,
    #[serde(default)]
    pub target: Option<Position>,
}

impl TileGrid {
    /// Parses a text map whose bottom-left cell lies at `origin`.
    ///
    /// # Errors
    /// Returns an error if the map is empty, its rows differ
    /// in length, it contains an unknown glyph, or it does not
    /// have exactly one `S` and one `T`.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::{Cell, Grid, Position};
    /// use oxiroute_tiles::TileGrid;
    ///
    /// let grid = TileGrid::parse(
    ///     Position::new(0, 0),
    ///     "#.T\n\
    ///      S.?",
    /// )
    /// .unwrap();
    /// assert_eq!(grid.start(), Position::new(0, 0));
    /// assert_eq!(grid.target(), Position::new(2, 1));
    /// assert_eq!(grid.cell(Position::new(0, 1)), Cell::NonAccessible);
    /// assert_eq!(grid.cell(Position::new(2, 0)), Cell::Unknown);
    /// ```
    pub fn parse(origin: Position, text: &str) -> Result<TileGrid, GridError> {
        let rows: Vec<&str> = text.lines().collect();
        parse_rows(origin, &rows, None, None)
    }

    /// Builds a grid from a map description.
    ///
    /// # Errors
    /// As for [`TileGrid::parse`], except that markers
    /// overridden by the description may be absent.
    pub fn from_description(description: &MapDescription) -> Result<TileGrid, GridError> {
        let rows: Vec<&str> = description.rows.iter().map(String::as_str).collect();
        parse_rows(
            description.origin,
            &rows,
            description.start,
            description.target,
        )
    }
}

fn parse_rows(
    origin: Position,
    rows: &[&str],
    start: Option<Position>,
    target: Option<Position>,
) -> Result<TileGrid, GridError> {
    let rows: Vec<Vec<char>> = rows
        .iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .map(|r| r.chars().collect())
        .collect();
    let width = rows.first().map_or(0, Vec::len);
    let height = rows.len();
    if width == 0 {
        return Err(GridError::EmptyGrid);
    }

    let mut cells = vec![Cell::Unknown; width * height];
    let mut markers = Markers::default();
    // Bottom row first.
    for (row_index, row) in rows.iter().rev().enumerate() {
        if row.len() != width {
            return Err(GridError::RaggedRows {
                row: height - 1 - row_index,
                expected: width,
                found: row.len(),
            });
        }
        for (x, &glyph) in row.iter().enumerate() {
            let position = origin + Position::new(x as i32, row_index as i32);
            cells[row_index * width + x] = match glyph {
                '.' => Cell::Accessible,
                '#' => Cell::NonAccessible,
                '?' => Cell::Unknown,
                START | TARGET => {
                    markers.mark(glyph, position)?;
                    Cell::Accessible
                }
                _ => return Err(GridError::UnknownGlyph { glyph, position }),
            };
        }
    }

    let start = start
        .or(markers.start)
        .ok_or(GridError::MissingMarker(START))?;
    let target = target
        .or(markers.target)
        .ok_or(GridError::MissingMarker(TARGET))?;
    TileGrid::new(origin, width as u32, height as u32, cells, start, target)
}

#[derive(Default)]
struct Markers {
    start: Option<Position>,
    target: Option<Position>,
}

impl Markers {
    fn mark(&mut self, glyph: char, position: Position) -> Result<(), GridError> {
        let slot = if glyph == START {
            &mut self.start
        } else {
            &mut self.target
        };
        if slot.replace(position).is_some() {
            return Err(GridError::DuplicateMarker(glyph));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxiroute::Grid;

    #[test]
    fn parse_with_origin() {
        let grid = TileGrid::parse(Position::new(10, -3), "S.\n.T").unwrap();
        assert_eq!(grid.start(), Position::new(10, -2));
        assert_eq!(grid.target(), Position::new(11, -3));
        assert_eq!(grid.local_start(), Position::new(0, 1));
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
    }

    #[test]
    fn ignores_indentation_and_blank_lines() {
        let text = "
            S.#
            ..T
        ";
        let grid = TileGrid::parse(Position::new(0, 0), text).unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.cell(Position::new(2, 1)), Cell::NonAccessible);
    }

    #[test]
    fn errors() {
        let o = Position::new(0, 0);
        assert_eq!(TileGrid::parse(o, ""), Err(GridError::EmptyGrid));
        assert_eq!(
            TileGrid::parse(o, "S..\n.T"),
            Err(GridError::RaggedRows {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            TileGrid::parse(o, "S~T"),
            Err(GridError::UnknownGlyph {
                glyph: '~',
                position: Position::new(1, 0)
            })
        );
        assert_eq!(
            TileGrid::parse(o, "S.."),
            Err(GridError::MissingMarker('T'))
        );
        assert_eq!(
            TileGrid::parse(o, "S.S\n..T"),
            Err(GridError::DuplicateMarker('S'))
        );
    }

    #[test]
    fn description_overrides_markers() {
        let description = MapDescription {
            origin: Position::new(0, 0),
            rows: vec!["...".into(), "S..".into()],
            start: None,
            target: Some(Position::new(2, 1)),
        };
        let grid = TileGrid::from_description(&description).unwrap();
        assert_eq!(grid.start(), Position::new(0, 0));
        assert_eq!(grid.target(), Position::new(2, 1));
    }

    #[test]
    fn description_from_ron() {
        let description: MapDescription = ron::from_str(
            r#"(
                origin: (x: -1, y: 2),
                rows: [
                    "S.#",
                    "..T",
                ],
            )"#,
        )
        .unwrap();
        let grid = TileGrid::from_description(&description).unwrap();
        assert_eq!(grid.start(), Position::new(-1, 3));
        assert_eq!(grid.target(), Position::new(1, 2));
    }
}
