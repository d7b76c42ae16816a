//! Swarm particles and the discrete position update.

use rand::Rng;

use crate::fitness::Evaluator;
use crate::model::Problem;
use crate::solution::Solution;

/// One member of the swarm.
///
/// Positions are assignment vectors (gene values in `[1, num_employees]`);
/// velocities are continuous, one entry per task.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle {
    /// Current position.
    pub position: Vec<usize>,
    /// Current velocity.
    pub velocity: Vec<f64>,
    /// Best position this particle has visited.
    pub best_position: Vec<usize>,
    /// Fitness at `best_position`.
    pub best_fitness: f64,
    /// Cost at `best_position`.
    pub cost: f64,
    /// Violations at the current position.
    pub violations: f64,
}

impl Particle {
    /// Creates a particle at a uniformly random position with zero
    /// velocity and evaluates it.
    pub fn random<R: Rng>(problem: &Problem, evaluator: &Evaluator, rng: &mut R) -> Self {
        let mut candidate = Solution::random(problem.num_tasks(), problem.num_employees(), rng);
        evaluator.evaluate_one(problem, &mut candidate);

        Self {
            velocity: vec![0.0; candidate.len()],
            best_position: candidate.genes.clone(),
            best_fitness: candidate.fitness,
            cost: candidate.cost,
            violations: candidate.total_violations(),
            position: candidate.genes,
        }
    }

    /// Advances velocity and position one step.
    ///
    /// Per dimension, with fresh `r1, r2 ∈ [0, 1)`:
    /// `v = w·v + c1·r1·(pbest − x) + c2·r2·(gbest − x)` and
    /// `x = clamp(round(x + v), 1, num_employees)`, rounding half to even.
    pub fn step<R: Rng>(
        &mut self,
        global_best: &[usize],
        coefficients: (f64, f64, f64),
        num_employees: usize,
        rng: &mut R,
    ) {
        let (w, c1, c2) = coefficients;
        for i in 0..self.position.len() {
            let r1: f64 = rng.random();
            let r2: f64 = rng.random();
            let x = self.position[i] as f64;

            self.velocity[i] = w * self.velocity[i]
                + c1 * r1 * (self.best_position[i] as f64 - x)
                + c2 * r2 * (global_best[i] as f64 - x);

            self.position[i] = discretize(x + self.velocity[i], num_employees);
        }
    }
}

/// Rounds a continuous coordinate to a valid employee reference.
pub(crate) fn discretize(x: f64, num_employees: usize) -> usize {
    let upper = num_employees as f64;
    if x.is_nan() {
        return 1;
    }
    x.round_ties_even().clamp(1.0, upper) as usize
}
