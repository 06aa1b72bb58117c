use oxiroute::Position;

use thiserror::Error;

/// An error type indicating a grid could not
/// be built from the supplied description.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// The grid has no rows or no columns.
    #[error("grid has no cells")]
    EmptyGrid,
    /// The number of cells does not match the dimensions.
    #[error("expected {expected} cells, got {found}")]
    CellCountMismatch { expected: usize, found: usize },
    /// A map row differs in length from the first.
    #[error("map row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A map character is not a known glyph.
    #[error("unknown glyph {glyph:?} at {position}")]
    UnknownGlyph { glyph: char, position: Position },
    /// A start or target marker is absent.
    #[error("map has no {0:?} marker")]
    MissingMarker(char),
    /// A start or target marker appears more than once.
    #[error("map has more than one {0:?} marker")]
    DuplicateMarker(char),
    /// A start or target lies outside the grid.
    #[error("{name} {position} lies outside the grid")]
    OutOfBounds {
        name: &'static str,
        position: Position,
    },
}
