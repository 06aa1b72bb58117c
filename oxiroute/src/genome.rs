use crate::{decode, Direction, RunRng};

use serde::{Deserialize, Serialize};

use std::fmt;

/// A candidate route, encoded as a fixed-length
/// bit string, together with its last fitness score.
///
/// Supports Serde for convenient genome saving and loading.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Genome {
    bits: Vec<bool>,
    fitness: f64,
}

impl Genome {
    /// Returns a genome of `length` random bits, each
    /// set with probability 0.5, and zero fitness.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::{Genome, RunRng};
    ///
    /// let genome = Genome::random(16, &mut RunRng::seeded(1));
    /// assert_eq!(genome.len(), 16);
    /// assert_eq!(genome.fitness(), 0.0);
    /// ```
    pub fn random(length: usize, rng: &mut RunRng) -> Genome {
        Genome {
            bits: (0..length).map(|_| rng.coin()).collect(),
            fitness: 0.0,
        }
    }

    /// Returns a genome with the given bits and zero fitness.
    pub fn from_bits(bits: Vec<bool>) -> Genome {
        Genome { bits, fitness: 0.0 }
    }

    /// Returns a genome encoding the given moves.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::{Direction, Genome};
    ///
    /// let genome = Genome::from_directions(&[Direction::East, Direction::North]);
    /// assert_eq!(genome.bits(), &[true, false, false, false]);
    /// ```
    pub fn from_directions(moves: &[Direction]) -> Genome {
        Genome::from_bits(crate::encode(moves))
    }

    /// Returns the genome's bits.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Returns the chromosome length.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns whether the genome has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Decodes the genome into its sequence of moves.
    pub fn directions(&self) -> Vec<Direction> {
        decode(&self.bits)
    }

    /// Returns the genome's fitness value.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Sets the genome's fitness value.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits: String = self
            .bits
            .iter()
            .map(|&b| if b { '1' } else { '0' })
            .collect();
        write!(f, "Genome {{ bits: {}, fitness: {} }}", bits, self.fitness)
    }
}
