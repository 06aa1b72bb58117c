//! Classification of named map tiles.

use oxiroute::Cell;

/// Maps the names of a tile set's tiles to
/// cell classifications.
pub trait Tileset {
    /// Classifies a tile by name. Names outside the
    /// tile set should be [`Cell::Unknown`].
    fn classify(&self, name: &str) -> Cell;
}

/// The desert tile set: nine tiles named `Desert_1_0`
/// through `Desert_1_8`, of which 0, 1, 2, 4 and 5 are
/// sand and the rest rocks and cacti.
///
/// # Examples
/// ```
/// use oxiroute::Cell;
/// use oxiroute_tiles::{DesertTileset, Tileset};
///
/// assert_eq!(DesertTileset.classify("Desert_1_4"), Cell::Accessible);
/// assert_eq!(DesertTileset.classify("Desert_1_6"), Cell::NonAccessible);
/// assert_eq!(DesertTileset.classify("Grass_0_0"), Cell::Unknown);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DesertTileset;

impl DesertTileset {
    const PREFIX: &'static str = "Desert_1_";
    const ACCESSIBLE: u16 = 1 << 0 | 1 << 1 | 1 << 2 | 1 << 4 | 1 << 5;
    const NON_ACCESSIBLE: u16 = 1 << 3 | 1 << 6 | 1 << 7 | 1 << 8;

    /// Returns the tile's flag, if it belongs to the set.
    fn flag(name: &str) -> Option<u16> {
        let index: u16 = name.strip_prefix(Self::PREFIX)?.parse().ok()?;
        (index <= 8).then(|| 1 << index)
    }
}

impl Tileset for DesertTileset {
    fn classify(&self, name: &str) -> Cell {
        match Self::flag(name) {
            Some(flag) if flag & Self::ACCESSIBLE != 0 => Cell::Accessible,
            Some(flag) if flag & Self::NON_ACCESSIBLE != 0 => Cell::NonAccessible,
            _ => Cell::Unknown,
        }
    }
}

impl<F> Tileset for F
where
    F: Fn(&str) -> Cell,
{
    fn classify(&self, name: &str) -> Cell {
        self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desert_tiles() {
        let accessible = [0, 1, 2, 4, 5];
        for i in 0..=8 {
            let expected = if accessible.contains(&i) {
                Cell::Accessible
            } else {
                Cell::NonAccessible
            };
            assert_eq!(DesertTileset.classify(&format!("Desert_1_{}", i)), expected);
        }
    }

    #[test]
    fn foreign_names_are_unknown() {
        for name in ["Desert_1_9", "Desert_1_", "Desert_2_0", "desert_1_0", "", "Desert_1_-1"] {
            assert_eq!(DesertTileset.classify(name), Cell::Unknown, "{}", name);
        }
    }

    #[test]
    fn closures_are_tilesets() {
        let water = |name: &str| {
            if name == "water" {
                Cell::NonAccessible
            } else {
                Cell::Accessible
            }
        };
        assert_eq!(water.classify("water"), Cell::NonAccessible);
        assert_eq!(water.classify("grass"), Cell::Accessible);
    }
}
