use super::Population;
use crate::Genome;

use std::fmt;

/// Defines different possible reporting levels for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportingLevel {
    /// Clones the population champion.
    Champion,
    /// Clones no genomes.
    NoGenomes,
}

/// A snapshot of an evaluated generation.
#[derive(Clone, Debug)]
pub struct Log {
    pub generation_number: usize,
    pub champion: Option<Genome>,
    pub fitness: Stats,
}

impl fmt::Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Log {{\n\
            \tgeneration_number: {:?}\n\
            \tfitness: {:?}\n\
            }}",
            &self.generation_number, &self.fitness,
        )
    }
}

/// A struct for reporting basic statistical data.
#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub maximum: f64,
    pub minimum: f64,
    pub mean: f64,
    pub median: f64,
}

impl Stats {
    /// Returns statistics about numbers in a sequence,
    /// or `None` if it is empty.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::logging::Stats;
    ///
    /// let stats = Stats::from([-2.0, -1.0, 0.5, 1.0, 1.5]).unwrap();
    /// assert_eq!(stats.maximum, 1.5);
    /// assert_eq!(stats.minimum, -2.0);
    /// assert_eq!(stats.mean, 0.0);
    /// assert_eq!(stats.median, 0.5);
    /// ```
    pub fn from(data: impl IntoIterator<Item = f64>) -> Option<Stats> {
        let mut data: Vec<f64> = data.into_iter().collect();
        if data.is_empty() {
            return None;
        }
        data.sort_unstable_by(f64::total_cmp);
        let mid = data.len() / 2;
        let median = if data.len() % 2 == 0 {
            (data[mid - 1] + data[mid]) / 2.0
        } else {
            data[mid]
        };
        Some(Stats {
            maximum: data[data.len() - 1],
            minimum: data[0],
            mean: data.iter().sum::<f64>() / data.len() as f64,
            median,
        })
    }
}

/// A log of the evolution of a population over time.
#[derive(Clone, Debug)]
pub struct EvolutionLogger {
    reporting_level: ReportingLevel,
    logs: Vec<Log>,
}

impl EvolutionLogger {
    /// Returns a logger with the appropiate reporting level.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::logging::{EvolutionLogger, ReportingLevel};
    ///
    /// let logger = EvolutionLogger::new(ReportingLevel::NoGenomes);
    /// ```
    pub fn new(reporting_level: ReportingLevel) -> EvolutionLogger {
        EvolutionLogger {
            reporting_level,
            logs: vec![],
        }
    }

    /// Stores a snapshot of an evaluated population,
    /// labelled with its generation number.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::{EvolutionConfig, Population, Position, RunRng};
    /// use oxiroute::logging::{EvolutionLogger, ReportingLevel};
    /// use oxiroute_tiles::TileGrid;
    ///
    /// let grid = TileGrid::parse(Position::new(0, 0), "S.T").unwrap();
    /// let mut rng = RunRng::seeded(0);
    /// let mut population = Population::new(EvolutionConfig::zero(), &mut rng).unwrap();
    /// population.evaluate(&grid);
    ///
    /// let mut logger = EvolutionLogger::new(ReportingLevel::Champion);
    /// logger.log(0, &population);
    /// assert_eq!(logger.iter().count(), 1);
    /// ```
    pub fn log(&mut self, generation_number: usize, population: &Population) {
        let fitness = match Stats::from(population.genomes().iter().map(Genome::fitness)) {
            Some(stats) => stats,
            None => return,
        };
        self.logs.push(Log {
            generation_number,
            champion: match self.reporting_level {
                ReportingLevel::Champion => Some(population.champion().clone()),
                ReportingLevel::NoGenomes => None,
            },
            fitness,
        })
    }

    /// Iterate over all logged snapshots.
    pub fn iter(&self) -> impl Iterator<Item = &Log> {
        self.logs.iter()
    }

    /// Returns the most recent snapshot.
    pub fn last(&self) -> Option<&Log> {
        self.logs.last()
    }

    /// Discards all snapshots.
    pub fn clear(&mut self) {
        self.logs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_median() {
        let stats = Stats::from([4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.mean, 2.5);
    }

    #[test]
    fn empty() {
        assert_eq!(Stats::from(std::iter::empty()), None);
    }
}
