//! A Population is the current generation of genomes.
//! It is scored against a grid, then replaced wholesale
//! by offspring bred through roulette-wheel selection,
//! single-point crossover and bit-flip mutation.
mod config;
mod errors;
pub mod logging;
mod reproduction;

use crate::{evaluate_route, Genome, Grid, Route, RunRng};
pub use config::EvolutionConfig;
pub use errors::{ConfigError, PopulationError};
use reproduction::OffspringFactory;
pub use reproduction::{crossover, mutate, roulette_index, splice};

use log::trace;
use serde::{Deserialize, Serialize};

/// Aggregate results of scoring a whole generation.
#[derive(Clone, Debug, PartialEq)]
pub struct FitnessSummary {
    /// Sum of all fitnesses.
    pub total_fitness: f64,
    /// Index of the first genome with the highest fitness.
    pub best_index: usize,
    /// Highest fitness in the generation.
    pub best_fitness: f64,
    /// Route taken by the best genome.
    pub best_route: Route,
}

/// A fixed-size generation of genomes.
///
/// Deserialization applies the same checks as
/// [`Population::from_genomes`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "PopulationParts")]
pub struct Population {
    genomes: Vec<Genome>,
    total_fitness: f64,
    best_index: usize,
    config: EvolutionConfig,
}

#[derive(Deserialize)]
struct PopulationParts {
    genomes: Vec<Genome>,
    total_fitness: f64,
    best_index: usize,
    config: EvolutionConfig,
}

impl TryFrom<PopulationParts> for Population {
    type Error = PopulationError;

    fn try_from(parts: PopulationParts) -> Result<Population, PopulationError> {
        let mut population = Population::from_genomes(parts.genomes, parts.config)?;
        if parts.best_index >= population.genomes.len() {
            return Err(PopulationError::BestIndexOutOfRange {
                index: parts.best_index,
                size: population.genomes.len(),
            });
        }
        population.total_fitness = parts.total_fitness;
        population.best_index = parts.best_index;
        Ok(population)
    }
}

impl Population {
    /// Creates a population of random genomes.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::{EvolutionConfig, Population, RunRng};
    /// use std::num::NonZeroUsize;
    ///
    /// let config = EvolutionConfig {
    ///     population_size: NonZeroUsize::new(20).unwrap(),
    ///     chromosome_length: NonZeroUsize::new(16).unwrap(),
    ///     ..EvolutionConfig::zero()
    /// };
    /// let population = Population::new(config, &mut RunRng::seeded(0)).unwrap();
    /// assert_eq!(population.genomes().len(), 20);
    /// ```
    pub fn new(config: EvolutionConfig, rng: &mut RunRng) -> Result<Population, PopulationError> {
        config.validate()?;
        let genomes = (0..config.population_size.get())
            .map(|_| Genome::random(config.chromosome_length.get(), rng))
            .collect();
        Ok(Population {
            genomes,
            total_fitness: 0.0,
            best_index: 0,
            config,
        })
    }

    /// Creates a population from the given genomes.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid,
    /// the number of genomes differs from the configured
    /// population size, or any genome's length differs
    /// from the configured chromosome length.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::{EvolutionConfig, Genome, Population, PopulationError};
    ///
    /// let seed = vec![Genome::from_bits(vec![true, false]); 2];
    /// assert!(Population::from_genomes(seed, EvolutionConfig::zero()).is_ok());
    ///
    /// let seed = vec![Genome::from_bits(vec![true, false])];
    /// assert_eq!(
    ///     Population::from_genomes(seed, EvolutionConfig::zero()).unwrap_err(),
    ///     PopulationError::WrongGenomeCount { expected: 2, found: 1 },
    /// );
    /// ```
    pub fn from_genomes(
        genomes: Vec<Genome>,
        config: EvolutionConfig,
    ) -> Result<Population, PopulationError> {
        config.validate()?;
        if genomes.len() != config.population_size.get() {
            return Err(PopulationError::WrongGenomeCount {
                expected: config.population_size.get(),
                found: genomes.len(),
            });
        }
        if let Some((index, genome)) = genomes
            .iter()
            .enumerate()
            .find(|(_, g)| g.len() != config.chromosome_length.get())
        {
            return Err(PopulationError::WrongGenomeLength {
                index,
                expected: config.chromosome_length.get(),
                found: genome.len(),
            });
        }
        Ok(Population {
            genomes,
            total_fitness: 0.0,
            best_index: 0,
            config,
        })
    }

    /// Scores every genome against the grid, storing each
    /// fitness on its genome, and returns the generation's
    /// aggregates along with the best genome's route.
    ///
    /// Every genome is re-decoded and re-simulated; nothing
    /// is carried over from earlier evaluations.
    pub fn evaluate<G: Grid + ?Sized>(&mut self, grid: &G) -> FitnessSummary {
        let mut total_fitness = 0.0;
        let mut best_fitness = 0.0;
        let mut best_index = 0;
        let mut best_route = None;

        for (i, genome) in self.genomes.iter_mut().enumerate() {
            let outcome = evaluate_route(grid, &genome.directions());
            genome.set_fitness(outcome.fitness);
            total_fitness += outcome.fitness;
            if outcome.fitness > best_fitness || best_route.is_none() {
                best_fitness = outcome.fitness;
                best_index = i;
                best_route = Some(outcome.route);
            }
        }

        self.total_fitness = total_fitness;
        self.best_index = best_index;
        trace!(
            "evaluated {} genomes, total fitness {}, best {} at {}",
            self.genomes.len(),
            total_fitness,
            best_fitness,
            best_index
        );
        FitnessSummary {
            total_fitness,
            best_index,
            best_fitness,
            best_route: best_route.unwrap_or_default(),
        }
    }

    /// Replaces the population with a new generation bred
    /// from the current one, using the fitnesses of the
    /// last [evaluation](Population::evaluate).
    ///
    /// If the total fitness is zero (e.g. before any
    /// evaluation) every parent is the first genome.
    pub fn reproduce(&mut self, rng: &mut RunRng) {
        let offspring =
            OffspringFactory::new(&self.genomes, self.total_fitness, &self.config)
                .generate_offspring(rng);
        self.genomes = offspring;
        self.total_fitness = 0.0;
        self.best_index = 0;
    }

    /// Replaces every genome with a fresh random one.
    pub fn randomize(&mut self, rng: &mut RunRng) {
        let length = self.config.chromosome_length.get();
        for genome in &mut self.genomes {
            *genome = Genome::random(length, rng);
        }
        self.total_fitness = 0.0;
        self.best_index = 0;
    }

    /// Returns the best genome of the last evaluation,
    /// or the first genome if none has taken place since
    /// the population was created or reproduced.
    pub fn champion(&self) -> &Genome {
        &self.genomes[self.best_index]
    }

    /// Returns all current genomes.
    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    /// Returns the total fitness of the last evaluation.
    pub fn total_fitness(&self) -> f64 {
        self.total_fitness
    }

    /// Returns the configuration the population was built with.
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }
}
