//! ACO configuration.

use crate::error::{check_count, check_finite, check_rate, Error, Result};
use crate::fitness::Evaluator;

/// Configuration for Ant Colony Optimization.
///
/// # Examples
///
/// ```
/// use u_staffing::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(60)
///     .with_evaporation_rate(0.1)
///     .with_deposit_constant(30.0)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Ants (constructed solutions) per iteration.
    pub num_ants: usize,

    /// Number of colonies to build. There is no early exit.
    pub max_iterations: usize,

    /// Fraction of every pheromone weight removed per iteration (0.0–1.0).
    pub evaporation_rate: f64,

    /// Pheromone an ant matching the best-ever fitness deposits per task.
    pub deposit_constant: f64,

    /// Uniform starting weight of every (task, employee) cell.
    pub initial_pheromone: f64,

    /// Fitness model.
    pub evaluator: Evaluator,

    /// Whether to record an [`IterationRecord`](crate::trace::IterationRecord)
    /// per iteration.
    pub record_trace: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 120,
            max_iterations: 500,
            evaporation_rate: 0.15,
            deposit_constant: 60.0,
            initial_pheromone: 1.0,
            evaluator: Evaluator::default(),
            record_trace: true,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the colony size.
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    /// Sets the deposit constant.
    pub fn with_deposit_constant(mut self, q: f64) -> Self {
        self.deposit_constant = q;
        self
    }

    /// Sets the initial pheromone weight.
    pub fn with_initial_pheromone(mut self, tau0: f64) -> Self {
        self.initial_pheromone = tau0;
        self
    }

    /// Sets the fitness model.
    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Enables or disables the per-iteration trace.
    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        check_count("num_ants", self.num_ants)?;
        check_count("max_iterations", self.max_iterations)?;
        check_rate("evaporation_rate", self.evaporation_rate)?;
        check_finite("deposit_constant", self.deposit_constant)?;
        if self.deposit_constant < 0.0 {
            return Err(Error::config("deposit_constant", "must be non-negative"));
        }
        check_finite("initial_pheromone", self.initial_pheromone)?;
        if self.initial_pheromone <= 0.0 {
            return Err(Error::config("initial_pheromone", "must be positive"));
        }
        self.evaluator.validate()
    }
}
