use thiserror::Error;

/// An error type indicating an unusable
/// [`EvolutionConfig`](super::EvolutionConfig).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("chromosome length must be even, got {0}")]
    OddChromosomeLength(usize),
    #[error("chromosome length must be positive")]
    ZeroChromosomeLength,
    #[error("population size must be even, got {0}")]
    OddPopulationSize(usize),
    #[error("population size must be positive")]
    ZeroPopulationSize,
    #[error("{name} must lie in [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
}

/// An error type indicating a population
/// could not be built.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PopulationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// The number of seed genomes differs from the population size.
    #[error("expected {expected} genomes, got {found}")]
    WrongGenomeCount { expected: usize, found: usize },
    /// A seed genome's length differs from the chromosome length.
    #[error("genome {index} has {found} bits, expected {expected}")]
    WrongGenomeLength {
        index: usize,
        expected: usize,
        found: usize,
    },
    /// A stored champion index lies outside the population.
    #[error("best index {index} out of range for {size} genomes")]
    BestIndexOutOfRange { index: usize, size: usize },
}
