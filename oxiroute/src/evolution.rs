//! The generation loop.

use crate::logging::{EvolutionLogger, ReportingLevel};
use crate::{EvolutionConfig, Genome, Grid, Population, PopulationError, Route, RunRng};

use log::{debug, info};

/// Lifecycle of an [`Evolution`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum State {
    /// Freshly built; no generation has been evaluated.
    Idle,
    /// Generations are being evaluated and bred.
    Running,
    /// An optimal route was found, or the run was stopped.
    Finished,
}

/// What a presentation layer gets to see after each generation.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationReport {
    /// Number of the generation that was evaluated.
    pub generation: usize,
    /// Its highest fitness.
    pub best_fitness: f64,
    /// Its best genome.
    pub champion: Genome,
    /// The route the best genome takes, in grid-local cells.
    pub best_route: Route,
}

/// Drives a population through evaluate-then-reproduce
/// cycles against a grid until a genome scores a perfect
/// fitness of 1, or the run is stopped.
///
/// The driver never loops on its own accord: each call to
/// [`step`](Evolution::step) runs exactly one generation and
/// returns, so it can be driven by a plain loop, a timer, or
/// a host's frame scheduler alike.
///
/// # Examples
/// ```
/// use oxiroute::{Evolution, EvolutionConfig, Position, State};
/// use oxiroute_tiles::TileGrid;
/// use std::num::NonZeroUsize;
///
/// let grid = TileGrid::parse(
///     Position::new(0, 0),
///     "..#.\n\
///      S..T",
/// )
/// .unwrap();
/// let config = EvolutionConfig {
///     crossover_rate: 0.7,
///     mutation_rate: 0.01,
///     population_size: NonZeroUsize::new(40).unwrap(),
///     chromosome_length: NonZeroUsize::new(12).unwrap(),
/// };
///
/// let mut evolution = Evolution::with_seed(grid, config, 1).unwrap();
/// while evolution.step() == State::Running && evolution.generation() < 500 {}
///
/// let report = evolution.report().unwrap();
/// println!("generation {}: {}", report.generation, report.best_fitness);
/// ```
pub struct Evolution<G> {
    grid: G,
    population: Population,
    rng: RunRng,
    state: State,
    generation: usize,
    report: Option<GenerationReport>,
    logger: Option<EvolutionLogger>,
}

impl<G: Grid> Evolution<G> {
    /// Creates an idle evolution over `grid`, seeded
    /// from system entropy.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn new(grid: G, config: EvolutionConfig) -> Result<Evolution<G>, PopulationError> {
        Self::with_rng(grid, config, RunRng::from_entropy())
    }

    /// Creates an idle evolution over `grid` whose every
    /// random draw derives from `seed`.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn with_seed(
        grid: G,
        config: EvolutionConfig,
        seed: u64,
    ) -> Result<Evolution<G>, PopulationError> {
        Self::with_rng(grid, config, RunRng::seeded(seed))
    }

    fn with_rng(
        grid: G,
        config: EvolutionConfig,
        mut rng: RunRng,
    ) -> Result<Evolution<G>, PopulationError> {
        let population = Population::new(config, &mut rng)?;
        Ok(Evolution {
            grid,
            population,
            rng,
            state: State::Idle,
            generation: 0,
            report: None,
            logger: None,
        })
    }

    /// Enables a generational log at the given reporting level.
    /// Without one, no per-generation history is kept.
    pub fn with_reporting_level(mut self, reporting_level: ReportingLevel) -> Evolution<G> {
        self.logger = Some(EvolutionLogger::new(reporting_level));
        self
    }

    /// Moves an idle evolution into the running state.
    /// Has no effect otherwise.
    pub fn start(&mut self) {
        if self.state == State::Idle {
            info!(
                "starting evolution of {} genomes of {} bits",
                self.population.config().population_size,
                self.population.config().chromosome_length
            );
            self.state = State::Running;
        }
    }

    /// Runs a single generation: scores the population,
    /// publishes the generation's report, then breeds its
    /// replacement. Finishes the run once a genome with a
    /// fitness of 1 has been found.
    ///
    /// An idle evolution is started first; a finished one
    /// is left untouched.
    pub fn step(&mut self) -> State {
        match self.state {
            State::Finished => return State::Finished,
            State::Idle => self.start(),
            State::Running => {}
        }

        let summary = self.population.evaluate(&self.grid);
        if let Some(logger) = &mut self.logger {
            logger.log(self.generation, &self.population);
        }
        debug!(
            "generation {}: best fitness {}, total fitness {}",
            self.generation, summary.best_fitness, summary.total_fitness
        );
        let best_fitness = summary.best_fitness;
        self.report = Some(GenerationReport {
            generation: self.generation,
            best_fitness,
            champion: self.population.champion().clone(),
            best_route: summary.best_route,
        });

        self.population.reproduce(&mut self.rng);
        self.generation += 1;

        if best_fitness >= 1.0 {
            info!("optimal route found after {} generations", self.generation);
            self.state = State::Finished;
        }
        self.state
    }

    /// Steps until the run finishes or `max_generations`
    /// generations have been run in total.
    pub fn run(&mut self, max_generations: usize) -> State {
        self.start();
        while self.state == State::Running && self.generation < max_generations {
            self.step();
        }
        self.state
    }

    /// Disables the evolution. No further generations run.
    pub fn stop(&mut self) {
        if self.state != State::Finished {
            info!("evolution stopped at generation {}", self.generation);
            self.state = State::Finished;
        }
    }

    /// Discards the population and all progress, returning
    /// to an idle state with fresh random genomes. The random
    /// source carries on from where it was.
    pub fn reset(&mut self) {
        self.population.randomize(&mut self.rng);
        self.state = State::Idle;
        self.generation = 0;
        self.report = None;
        if let Some(logger) = &mut self.logger {
            logger.clear();
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns the best fitness of the latest generation,
    /// or 0 before the first one.
    pub fn best_fitness(&self) -> f64 {
        self.report.as_ref().map_or(0.0, |r| r.best_fitness)
    }

    /// Returns the route of the latest generation's best genome.
    pub fn best_route(&self) -> Option<&Route> {
        self.report.as_ref().map(|r| &r.best_route)
    }

    /// Returns the latest generation's report.
    pub fn report(&self) -> Option<&GenerationReport> {
        self.report.as_ref()
    }

    /// Returns the current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Returns the generational log, if one was enabled with
    /// [`with_reporting_level`](Evolution::with_reporting_level).
    pub fn logger(&self) -> Option<&EvolutionLogger> {
        self.logger.as_ref()
    }

    /// Returns the grid routes are evolved against.
    pub fn grid(&self) -> &G {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::tests::TestGrid;
    use crate::{evaluate_route, Position};
    use std::num::NonZeroUsize;

    fn config(size: usize, length: usize) -> EvolutionConfig {
        EvolutionConfig {
            crossover_rate: 0.7,
            mutation_rate: 0.01,
            population_size: NonZeroUsize::new(size).unwrap(),
            chromosome_length: NonZeroUsize::new(length).unwrap(),
        }
    }

    fn adjacent_grid() -> TestGrid {
        TestGrid::open(4, 4, Position::new(0, 0), Position::new(1, 0))
    }

    #[test]
    fn starts_idle() {
        let evolution = Evolution::with_seed(adjacent_grid(), config(10, 8), 0).unwrap();
        assert_eq!(evolution.state(), State::Idle);
        assert_eq!(evolution.generation(), 0);
        assert_eq!(evolution.best_fitness(), 0.0);
        assert!(evolution.report().is_none());
    }

    #[test]
    fn rejects_invalid_config() {
        assert!(Evolution::with_seed(adjacent_grid(), config(10, 7), 0).is_err());
    }

    #[test]
    fn step_runs_one_generation() {
        let grid = TestGrid::open(8, 8, Position::new(0, 0), Position::new(7, 7));
        let mut evolution = Evolution::with_seed(grid, config(10, 8), 0)
            .unwrap()
            .with_reporting_level(ReportingLevel::Champion);
        assert_eq!(evolution.step(), State::Running);
        assert_eq!(evolution.generation(), 1);
        let report = evolution.report().unwrap();
        assert_eq!(report.generation, 0);
        assert!(report.best_fitness > 0.0 && report.best_fitness < 1.0);
        let replay = evaluate_route(evolution.grid(), &report.champion.directions());
        assert_eq!(replay.fitness, report.best_fitness);
        assert_eq!(replay.route, report.best_route);
        assert_eq!(evolution.logger().unwrap().iter().count(), 1);
    }

    #[test]
    fn keeps_no_history_by_default() {
        let grid = TestGrid::open(8, 8, Position::new(0, 0), Position::new(7, 7));
        let mut evolution = Evolution::with_seed(grid, config(10, 8), 0).unwrap();
        evolution.run(100);
        assert!(evolution.logger().is_none());
    }

    #[test]
    fn stop_is_terminal() {
        let mut evolution = Evolution::with_seed(adjacent_grid(), config(10, 8), 0).unwrap();
        evolution.stop();
        assert_eq!(evolution.state(), State::Finished);
        assert_eq!(evolution.step(), State::Finished);
        assert_eq!(evolution.generation(), 0);
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut evolution = Evolution::with_seed(adjacent_grid(), config(10, 8), 0)
            .unwrap()
            .with_reporting_level(ReportingLevel::NoGenomes);
        evolution.run(50);
        evolution.reset();
        assert_eq!(evolution.state(), State::Idle);
        assert_eq!(evolution.generation(), 0);
        assert!(evolution.best_route().is_none());
        assert_eq!(evolution.logger().unwrap().iter().count(), 0);
    }

    #[test]
    fn run_respects_generation_cap() {
        // The target is walled in, so a perfect score is impossible.
        let mut grid = TestGrid::open(5, 5, Position::new(0, 0), Position::new(4, 4));
        grid.blocked = vec![Position::new(3, 4), Position::new(4, 3)];
        let mut evolution = Evolution::with_seed(grid, config(10, 10), 0).unwrap();
        assert_eq!(evolution.run(25), State::Running);
        assert_eq!(evolution.generation(), 25);
    }

    #[test]
    fn finds_adjacent_target_over_many_seeds() {
        let mut solved = 0;
        for seed in 0..50 {
            let mut evolution = Evolution::with_seed(adjacent_grid(), config(20, 8), seed).unwrap();
            if evolution.run(200) == State::Finished {
                assert_eq!(evolution.best_fitness(), 1.0);
                assert!(evolution.best_route().unwrap().reached_target());
                solved += 1;
            }
        }
        assert!(solved >= 48, "only {} of 50 runs converged", solved);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let grid = TestGrid::open(6, 6, Position::new(0, 0), Position::new(5, 5));
        let mut a = Evolution::with_seed(&grid, config(20, 20), 77).unwrap();
        let mut b = Evolution::with_seed(&grid, config(20, 20), 77).unwrap();
        for _ in 0..10 {
            a.step();
            b.step();
            assert_eq!(a.report(), b.report());
        }
    }
}
