//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{check_count, check_rate, Error, Result};
use crate::fitness::Evaluator;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_staffing::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 60);
/// assert_eq!(config.max_generations, 500);
/// assert_eq!(config.elitism, 1);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_staffing::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(120)
///     .with_crossover_rate(0.8)
///     .with_mutation_rate(0.1)
///     .with_elitism(4)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations to run. There is no early exit.
    pub max_generations: usize,

    /// Probability that a selected pair is recombined (0.0–1.0).
    ///
    /// Otherwise the pair is copied unchanged.
    pub crossover_rate: f64,

    /// Per-gene probability of being marked for a pairwise swap (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of best individuals copied unchanged into the next generation.
    pub elitism: usize,

    /// Fitness model.
    pub evaluator: Evaluator,

    /// Whether to record an [`IterationRecord`](crate::trace::IterationRecord)
    /// per generation.
    pub record_trace: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 60,
            max_generations: 500,
            crossover_rate: 0.77,
            mutation_rate: 0.2,
            elitism: 1,
            evaluator: Evaluator::default(),
            record_trace: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the elite count.
    pub fn with_elitism(mut self, n: usize) -> Self {
        self.elitism = n;
        self
    }

    /// Sets the fitness model.
    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Enables or disables the per-generation trace.
    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        check_count("population_size", self.population_size)?;
        check_count("max_generations", self.max_generations)?;
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        if self.elitism > self.population_size {
            return Err(Error::config(
                "elitism",
                format!(
                    "must not exceed population_size ({}), got {}",
                    self.population_size, self.elitism
                ),
            ));
        }
        self.evaluator.validate()
    }
}
