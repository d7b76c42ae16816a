//! ACO execution loop.

use tracing::{debug, info};

use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use crate::error::Result;
use crate::model::Problem;
use crate::random::rng_from_seed;
use crate::solution::Solution;
use crate::trace::{IterationRecord, Recorder};

/// Result of an ACO run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// Highest-fitness assignment built by any ant in any iteration.
    pub best_genes: Vec<usize>,

    /// Fitness of `best_genes`.
    pub best_fitness: f64,

    /// Lowest cost of any ant in any iteration.
    pub best_cost: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Pheromone matrix after the last deposit.
    pub pheromone: PheromoneMatrix,

    /// One record per iteration (1-based). Empty when tracing is disabled.
    pub trace: Vec<IterationRecord>,
}

/// Executes Ant Colony Optimization.
///
/// Each iteration every ant builds a full assignment task by task, sampling
/// employees proportionally to pheromone. The colony is evaluated, the
/// best-ever solution is updated, then all cells evaporate and every ant
/// deposits `Q / (1 + (best_fitness - ant_fitness))` on each of its
/// (task, employee) pairs.
///
/// # References
///
/// - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
///   Colony of Cooperating Agents"
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO optimization.
    pub fn run(problem: &Problem, config: &AcoConfig) -> Result<AcoResult> {
        config.validate()?;

        let evaluator = &config.evaluator;
        let num_tasks = problem.num_tasks();
        let mut rng = rng_from_seed(config.seed);
        let mut recorder = Recorder::new(config.record_trace, config.max_iterations);
        let mut pheromone = PheromoneMatrix::new(
            num_tasks,
            problem.num_employees(),
            config.initial_pheromone,
        );

        info!(
            ants = config.num_ants,
            iterations = config.max_iterations,
            evaporation_rate = config.evaporation_rate,
            deposit_constant = config.deposit_constant,
            "starting ant colony optimization"
        );

        let mut best_genes: Vec<usize> = Vec::new();
        let mut best_fitness = f64::NEG_INFINITY;
        let mut best_cost = f64::INFINITY;

        for iteration in 1..=config.max_iterations {
            // Construct
            let mut colony: Vec<Solution> = (0..config.num_ants)
                .map(|_| {
                    Solution::new(
                        (0..num_tasks)
                            .map(|task| pheromone.sample(task, &mut rng))
                            .collect(),
                    )
                })
                .collect();

            evaluator.evaluate(problem, &mut colony);

            // Best-ever bookkeeping
            for ant in &colony {
                if ant.fitness > best_fitness {
                    best_fitness = ant.fitness;
                    best_genes.clone_from(&ant.genes);
                }
                best_cost = best_cost.min(ant.cost);
            }

            let violations: f64 = colony.iter().map(Solution::total_violations).sum();
            recorder.record(iteration, best_cost, violations);
            debug!(iteration, best_cost, violations, "colony complete");

            // Evaporate, then deposit
            pheromone.evaporate(config.evaporation_rate);
            pheromone.deposit_colony(&colony, best_fitness, config.deposit_constant);
        }

        info!(best_cost, genes = ?best_genes, "ant colony optimization finished");

        Ok(AcoResult {
            best_genes,
            best_fitness,
            best_cost,
            iterations: config.max_iterations,
            pheromone,
            trace: recorder.finish(),
        })
    }
}
