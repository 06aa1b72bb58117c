use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The single pseudo-random source of an evolution run.
///
/// Every random draw of a run (initial bits, roulette
/// spins, crossover coin-flips and points, mutations)
/// goes through one `RunRng`, so that a run is fully
/// reproducible from its seed.
#[derive(Clone, Debug)]
pub struct RunRng(StdRng);

impl RunRng {
    /// Returns a generator seeded with `seed`.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::RunRng;
    ///
    /// let mut a = RunRng::seeded(7);
    /// let mut b = RunRng::seeded(7);
    /// assert_eq!(a.unit(), b.unit());
    /// ```
    pub fn seeded(seed: u64) -> RunRng {
        RunRng(StdRng::seed_from_u64(seed))
    }

    /// Returns a generator seeded from system entropy.
    pub fn from_entropy() -> RunRng {
        RunRng(StdRng::from_entropy())
    }

    /// Returns a uniform value in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }

    /// Returns `true` with probability `chance`.
    ///
    /// A chance of `0.0` is never taken, one of
    /// `1.0` always is.
    pub fn chance(&mut self, chance: f64) -> bool {
        self.unit() < chance
    }

    /// Returns a uniform index in `[0, n)`.
    ///
    /// # Panics
    /// Panics if `n == 0`.
    pub fn index_below(&mut self, n: usize) -> usize {
        self.0.gen_range(0..n)
    }

    /// Returns a fair coin-flip.
    pub fn coin(&mut self) -> bool {
        self.0.gen::<bool>()
    }
}
