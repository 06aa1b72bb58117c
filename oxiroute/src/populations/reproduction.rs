//! Selection, crossover and mutation.

use super::EvolutionConfig;
use crate::{Genome, RunRng};

use log::trace;

/// Auxiliary type for offspring generation.
/// Breeds a full new generation from an evaluated one
/// according to the specified config.
pub(super) struct OffspringFactory<'a> {
    genomes: &'a [Genome],
    total_fitness: f64,
    config: &'a EvolutionConfig,
}

impl<'a> OffspringFactory<'a> {
    pub(super) fn new(
        genomes: &'a [Genome],
        total_fitness: f64,
        config: &'a EvolutionConfig,
    ) -> OffspringFactory<'a> {
        OffspringFactory {
            genomes,
            total_fitness,
            config,
        }
    }

    /// Generates `population_size` offspring, two at a time.
    /// The second child of the last pair is dropped if the
    /// size is odd.
    pub(super) fn generate_offspring(&self, rng: &mut RunRng) -> Vec<Genome> {
        let size = self.config.population_size.get();
        let mut offspring = Vec::with_capacity(size + 1);
        while offspring.len() < size {
            let mum = self.select_parent(rng);
            let dad = self.select_parent(rng);
            trace!("mating genomes {} and {}", mum, dad);
            let (mut baby1, mut baby2) = crossover(
                self.genomes[mum].bits(),
                self.genomes[dad].bits(),
                mum == dad,
                self.config.crossover_rate,
                rng,
            );
            mutate(&mut baby1, self.config.mutation_rate, rng);
            mutate(&mut baby2, self.config.mutation_rate, rng);
            offspring.push(Genome::from_bits(baby1));
            offspring.push(Genome::from_bits(baby2));
        }
        offspring.truncate(size);
        offspring
    }

    /// Spins the roulette wheel once.
    fn select_parent(&self, rng: &mut RunRng) -> usize {
        let slice = rng.unit() * self.total_fitness;
        roulette_index(self.genomes.iter().map(Genome::fitness), slice)
    }
}

/// Returns the index of the first fitness whose running
/// sum exceeds `slice`.
///
/// `slice` is a point on the wheel, drawn uniformly from
/// `[0, total_fitness)`. If no running sum exceeds it, which
/// only happens when every fitness is 0, the first index is
/// returned.
///
/// # Examples
/// ```
/// use oxiroute::roulette_index;
///
/// let fitnesses = [0.1, 0.2, 0.7];
/// assert_eq!(roulette_index(fitnesses, 0.05), 0);
/// assert_eq!(roulette_index(fitnesses, 0.25), 1);
/// assert_eq!(roulette_index(fitnesses, 0.95), 2);
/// ```
pub fn roulette_index<I>(fitnesses: I, slice: f64) -> usize
where
    I: IntoIterator<Item = f64>,
{
    let mut total = 0.0;
    for (i, fitness) in fitnesses.into_iter().enumerate() {
        total += fitness;
        if total > slice {
            return i;
        }
    }
    0
}

/// Recombines two parents into two children.
///
/// With probability `1 - crossover_rate`, or whenever
/// both parents are the same genome, the children are
/// fresh copies of the parents. Otherwise a single point
/// is drawn from `[0, len - 1)` and the parents are
/// [spliced](splice) there.
pub fn crossover(
    mum: &[bool],
    dad: &[bool],
    same_parent: bool,
    crossover_rate: f64,
    rng: &mut RunRng,
) -> (Vec<bool>, Vec<bool>) {
    if rng.unit() > crossover_rate || same_parent || mum.len() < 2 {
        return (mum.to_vec(), dad.to_vec());
    }
    let point = rng.index_below(mum.len() - 1);
    splice(mum, dad, point)
}

/// Single-point crossover at `point`: the first child is
/// `mum[..point] + dad[point..]`, the second
/// `dad[..point] + mum[point..]`.
///
/// # Examples
/// ```
/// use oxiroute::splice;
///
/// let mum = [true, true, true, true];
/// let dad = [false, false, false, false];
/// let (baby1, baby2) = splice(&mum, &dad, 1);
/// assert_eq!(baby1, [true, false, false, false]);
/// assert_eq!(baby2, [false, true, true, true]);
/// ```
pub fn splice(mum: &[bool], dad: &[bool], point: usize) -> (Vec<bool>, Vec<bool>) {
    let baby1 = mum[..point].iter().chain(&dad[point..]).copied().collect();
    let baby2 = dad[..point].iter().chain(&mum[point..]).copied().collect();
    (baby1, baby2)
}

/// Flips every bit independently with probability `rate`.
pub fn mutate(bits: &mut [bool], rate: f64, rng: &mut RunRng) {
    for bit in bits.iter_mut() {
        if rng.chance(rate) {
            *bit = !*bit;
        }
    }
}
