//! Mapping from genome bits to grid moves.

use crate::Direction;

/// Decodes a bit sequence into moves, two bits per move:
///
/// | bits | move  |
/// |------|-------|
/// | `00` | North |
/// | `01` | South |
/// | `10` | East  |
/// | `11` | West  |
///
/// A trailing unpaired bit is ignored; chromosome lengths
/// are validated to be even before any decoding happens.
///
/// # Examples
/// ```
/// use oxiroute::{decode, Direction};
///
/// let moves = decode(&[true, false, false, true]);
/// assert_eq!(moves, vec![Direction::East, Direction::South]);
/// ```
pub fn decode(bits: &[bool]) -> Vec<Direction> {
    bits.chunks_exact(2)
        .map(|pair| Direction::from_bits(pair[0], pair[1]))
        .collect()
}

impl Direction {
    /// Returns the move encoded by a pair of bits.
    pub fn from_bits(first: bool, second: bool) -> Direction {
        match (first, second) {
            (false, false) => Direction::North,
            (false, true) => Direction::South,
            (true, false) => Direction::East,
            (true, true) => Direction::West,
        }
    }

    /// Returns the pair of bits encoding the move.
    pub fn to_bits(self) -> [bool; 2] {
        match self {
            Direction::North => [false, false],
            Direction::South => [false, true],
            Direction::East => [true, false],
            Direction::West => [true, true],
        }
    }
}

/// Encodes moves back into a bit sequence.
/// Inverse of [`decode`].
pub fn encode(moves: &[Direction]) -> Vec<bool> {
    moves.iter().flat_map(|d| d.to_bits()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fixed_mapping() {
        assert_eq!(decode(&[false, false]), [Direction::North]);
        assert_eq!(decode(&[false, true]), [Direction::South]);
        assert_eq!(decode(&[true, false]), [Direction::East]);
        assert_eq!(decode(&[true, true]), [Direction::West]);
    }

    #[test]
    fn empty() {
        assert!(decode(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn one_move_per_bit_pair(pairs in prop::collection::vec(any::<(bool, bool)>(), 0..64)) {
            let bits: Vec<bool> = pairs.iter().flat_map(|&(a, b)| [a, b]).collect();
            let moves = decode(&bits);
            prop_assert_eq!(moves.len(), bits.len() / 2);
            for (m, &(a, b)) in moves.iter().zip(&pairs) {
                prop_assert_eq!(*m, Direction::from_bits(a, b));
            }
            prop_assert_eq!(encode(&moves), bits);
        }
    }
}
