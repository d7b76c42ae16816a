//! Candidate assignments and their derived scores.

use rand::Rng;

/// Gene value meaning "task left unassigned".
pub const UNASSIGNED: usize = 0;

/// The five penalty components of a [`Solution`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Penalties {
    /// Hours assigned beyond each employee's capacity, summed.
    pub overload: f64,
    /// Number of tasks given to an employee lacking the required skill.
    pub skill: f64,
    /// Summed difficulty shortfall of assignees.
    pub difficulty: f64,
    /// Summed lateness over all employees' processing-time-ordered queues.
    pub deadline: f64,
    /// Number of unassigned tasks.
    pub unassigned: f64,
}

impl Penalties {
    /// Sum of the five components.
    pub fn total(&self) -> f64 {
        self.overload + self.skill + self.difficulty + self.deadline + self.unassigned
    }
}

/// A candidate assignment: gene `i` is the 1-based employee for task `i`.
///
/// The score fields are written by [`crate::fitness::Evaluator::evaluate`]
/// and are only meaningful after the latest evaluation. Cloning produces an
/// independent copy; engines never share a `Solution` between populations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Employee reference per task.
    pub genes: Vec<usize>,
    /// Penalty breakdown.
    pub penalties: Penalties,
    /// Weighted penalty sum. Lower is better.
    pub cost: f64,
    /// `1 / (cost + epsilon)`. Higher is better.
    pub fitness: f64,
    /// Share of the population's total fitness.
    pub fitness_ratio: f64,
    /// Prefix sum of fitness ratios in population order.
    pub cumulative_probability: f64,
}

impl Solution {
    /// Wraps a gene vector with zeroed scores.
    pub fn new(genes: Vec<usize>) -> Self {
        Self {
            genes,
            penalties: Penalties::default(),
            cost: 0.0,
            fitness: 0.0,
            fitness_ratio: 0.0,
            cumulative_probability: 0.0,
        }
    }

    /// Creates a fully assigned solution with genes drawn uniformly from
    /// `[1, num_employees]`.
    pub fn random<R: Rng>(num_tasks: usize, num_employees: usize, rng: &mut R) -> Self {
        Self::new(
            (0..num_tasks)
                .map(|_| rng.random_range(1..=num_employees))
                .collect(),
        )
    }

    /// Zeroes every derived field, keeping the genes.
    pub fn reset(&mut self) {
        self.penalties = Penalties::default();
        self.cost = 0.0;
        self.fitness = 0.0;
        self.fitness_ratio = 0.0;
        self.cumulative_probability = 0.0;
    }

    /// Sum of the five penalties.
    pub fn total_violations(&self) -> f64 {
        self.penalties.total()
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the solution has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

/// Index of the highest-fitness solution; earliest wins ties.
///
/// Returns `None` for an empty slice.
pub fn best_index(population: &[Solution]) -> Option<usize> {
    population
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, s)| match best {
            Some((_, f)) if f >= s.fitness => best,
            _ => Some((i, s.fitness)),
        })
        .map(|(i, _)| i)
}
