//! PSO configuration.

use crate::error::{check_count, check_finite, Result};
use crate::fitness::Evaluator;

/// Configuration for Particle Swarm Optimization.
///
/// # Examples
///
/// ```
/// use u_staffing::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_swarm_size(180)
///     .with_inertia(0.7)
///     .with_seed(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Number of particles.
    pub swarm_size: usize,

    /// Number of iterations. There is no early exit.
    pub max_iterations: usize,

    /// Inertia weight `w` applied to the previous velocity.
    pub inertia: f64,

    /// Cognitive coefficient `c1` (pull toward the personal best).
    pub cognitive: f64,

    /// Social coefficient `c2` (pull toward the global best).
    pub social: f64,

    /// Fitness model.
    pub evaluator: Evaluator,

    /// Whether to record an [`IterationRecord`](crate::trace::IterationRecord)
    /// per iteration.
    pub record_trace: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            swarm_size: 90,
            max_iterations: 500,
            inertia: 0.95,
            cognitive: 1.5,
            social: 1.3,
            evaluator: Evaluator::default(),
            record_trace: true,
            seed: None,
        }
    }
}

impl PsoConfig {
    /// Sets the number of particles.
    pub fn with_swarm_size(mut self, n: usize) -> Self {
        self.swarm_size = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the inertia weight.
    pub fn with_inertia(mut self, w: f64) -> Self {
        self.inertia = w;
        self
    }

    /// Sets the cognitive coefficient.
    pub fn with_cognitive(mut self, c1: f64) -> Self {
        self.cognitive = c1;
        self
    }

    /// Sets the social coefficient.
    pub fn with_social(mut self, c2: f64) -> Self {
        self.social = c2;
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
        check_count("swarm_size", self.swarm_size)?;
        check_count("max_iterations", self.max_iterations)?;
        check_finite("inertia", self.inertia)?;
        check_finite("cognitive", self.cognitive)?;
        check_finite("social", self.social)?;
        self.evaluator.validate()
    }
}
