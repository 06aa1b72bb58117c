use super::ConfigError;

use serde::{Deserialize, Serialize};

use std::num::NonZeroUsize;

/// Configuration data for population generation
/// and evolution.
///
/// # Note
/// Configurations are checked with [`validate`] before
/// any population is built from them; rates must lie in
/// `[0.0, 1.0]` and both sizes must be even.
///
/// [`validate`]: EvolutionConfig::validate
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Chance that two selected parents
    /// are recombined instead of copied.
    pub crossover_rate: f64,
    /// Per-bit chance of a flip in offspring.
    pub mutation_rate: f64,
    /// Number of genomes in every generation.
    pub population_size: NonZeroUsize,
    /// Number of bits per genome. Each move takes two.
    pub chromosome_length: NonZeroUsize,
}

impl EvolutionConfig {
    /// Returns a "zero-valued" default configuration.
    /// Rates are 0, and both sizes are 2, the smallest
    /// valid values.
    ///
    /// # Note
    /// This value is not suitable for use in most experiments.
    /// It is meant as a way to abbreviate configuration
    /// instantiation, or to fill in unused values.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::EvolutionConfig;
    ///
    /// let cfg1 = EvolutionConfig::zero();
    ///
    /// let cfg2 = EvolutionConfig {
    ///     // Specify some values here...
    ///     mutation_rate: 0.001,
    ///     // Default the rest...
    ///     ..EvolutionConfig::zero()
    /// };
    /// # assert!(cfg2.validate().is_ok());
    /// ```
    pub const fn zero() -> EvolutionConfig {
        EvolutionConfig {
            crossover_rate: 0.0,
            mutation_rate: 0.0,
            // SAFETY: 2 is a valid NonZeroUsize.
            population_size: unsafe { NonZeroUsize::new_unchecked(2) },
            // SAFETY: 2 is a valid NonZeroUsize.
            chromosome_length: unsafe { NonZeroUsize::new_unchecked(2) },
        }
    }

    /// Checks that the configuration describes a runnable
    /// evolution.
    ///
    /// # Errors
    /// Returns the first violated constraint: an odd
    /// chromosome length or population size, or a rate
    /// outside `[0.0, 1.0]` (including NaN).
    ///
    /// # Examples
    /// ```
    /// use oxiroute::{ConfigError, EvolutionConfig};
    /// use std::num::NonZeroUsize;
    ///
    /// let config = EvolutionConfig {
    ///     chromosome_length: NonZeroUsize::new(7).unwrap(),
    ///     ..EvolutionConfig::zero()
    /// };
    /// assert_eq!(config.validate(), Err(ConfigError::OddChromosomeLength(7)));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chromosome_length.get() % 2 != 0 {
            return Err(ConfigError::OddChromosomeLength(
                self.chromosome_length.get(),
            ));
        }
        if self.population_size.get() % 2 != 0 {
            return Err(ConfigError::OddPopulationSize(self.population_size.get()));
        }
        for (name, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RateOutOfRange { name, value });
            }
        }
        Ok(())
    }

    /// Builds a configuration from raw sizes, as read from
    /// untyped sources, and validates it.
    ///
    /// # Errors
    /// Returns an error for zero sizes, as well as for
    /// anything [`validate`](EvolutionConfig::validate) rejects.
    pub fn from_parts(
        crossover_rate: f64,
        mutation_rate: f64,
        population_size: usize,
        chromosome_length: usize,
    ) -> Result<EvolutionConfig, ConfigError> {
        let config = EvolutionConfig {
            crossover_rate,
            mutation_rate,
            population_size: NonZeroUsize::new(population_size)
                .ok_or(ConfigError::ZeroPopulationSize)?,
            chromosome_length: NonZeroUsize::new(chromosome_length)
                .ok_or(ConfigError::ZeroChromosomeLength)?,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_valid() {
        assert_eq!(EvolutionConfig::zero().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_sizes() {
        assert_eq!(
            EvolutionConfig::from_parts(0.7, 0.001, 0, 10),
            Err(ConfigError::ZeroPopulationSize)
        );
        assert_eq!(
            EvolutionConfig::from_parts(0.7, 0.001, 10, 0),
            Err(ConfigError::ZeroChromosomeLength)
        );
    }

    #[test]
    fn rejects_odd_population() {
        assert_eq!(
            EvolutionConfig::from_parts(0.7, 0.001, 11, 10),
            Err(ConfigError::OddPopulationSize(11))
        );
    }

    #[test]
    fn rejects_rates_out_of_range() {
        assert_eq!(
            EvolutionConfig::from_parts(1.5, 0.001, 10, 10),
            Err(ConfigError::RateOutOfRange {
                name: "crossover_rate",
                value: 1.5
            })
        );
        assert!(matches!(
            EvolutionConfig::from_parts(0.7, f64::NAN, 10, 10),
            Err(ConfigError::RateOutOfRange {
                name: "mutation_rate",
                ..
            })
        ));
        assert!(EvolutionConfig::from_parts(1.0, 0.0, 10, 10).is_ok());
    }

    #[test]
    fn serde_roundtrip() {
        let config = EvolutionConfig::from_parts(0.7, 0.001, 140, 70).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<EvolutionConfig>(&json).unwrap(), config);
    }
}
