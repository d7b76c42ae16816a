//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → elitism → selection → crossover →
//! mutation → replacement → evaluation → repeat.

use rand::Rng;
use tracing::{debug, info};

use super::config::GaConfig;
use super::operators::{pairwise_swap_mutation, single_point_crossover};
use super::selection::roulette;
use crate::error::Result;
use crate::fitness::accumulate;
use crate::model::Problem;
use crate::random::rng_from_seed;
use crate::solution::{best_index, Solution};
use crate::trace::{IterationRecord, Recorder};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The highest-fitness individual of the final population.
    pub best: Solution,

    /// Cost of `best`.
    pub best_cost: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Generation 0 (initial population) followed by one record per
    /// generation. Empty when tracing is disabled.
    pub trace: Vec<IterationRecord>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_staffing::ga::{GaConfig, GaRunner};
/// use u_staffing::model::{Employee, Problem, Task};
///
/// let problem = Problem::new(
///     vec![Task::new("t1", 2.0, 1.0, 5.0, "A"), Task::new("t2", 1.0, 1.0, 5.0, "A")],
///     vec![Employee::new("e1", 8.0, 2.0, ["A"])],
/// )
/// .unwrap();
/// let config = GaConfig::default().with_max_generations(20).with_seed(42);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.best.genes, vec![1, 1]);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// Returns an error if the configuration is invalid; a valid run always
    /// executes `max_generations` generations.
    pub fn run(problem: &Problem, config: &GaConfig) -> Result<GaResult> {
        config.validate()?;

        let evaluator = &config.evaluator;
        let size = config.population_size;
        let mut rng = rng_from_seed(config.seed);
        let mut recorder = Recorder::new(config.record_trace, config.max_generations + 1);

        info!(
            population = size,
            generations = config.max_generations,
            crossover_rate = config.crossover_rate,
            mutation_rate = config.mutation_rate,
            elitism = config.elitism,
            "starting genetic algorithm"
        );

        // 1. Initialize population
        let mut population: Vec<Solution> = (0..size)
            .map(|_| Solution::random(problem.num_tasks(), problem.num_employees(), &mut rng))
            .collect();

        // 2. Evaluate initial population
        evaluator.evaluate(problem, &mut population);
        let (cost, violations) = summarize(&population);
        recorder.push(0, cost, 0.0, violations);

        // 3. Evolutionary loop
        for gen in 1..=config.max_generations {
            // Sort by fitness (descending = best first) and re-spin the wheel
            // so cumulative probabilities follow the sorted order.
            population.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
            accumulate(&mut population);

            // Elite preservation
            let mut next_gen: Vec<Solution> = population[..config.elitism].to_vec();

            // Generate offspring in pairs
            while next_gen.len() < size {
                let p1 = &population[roulette(&population, &mut rng)];
                let p2 = &population[roulette(&population, &mut rng)];

                let (mut c1, mut c2) = if rng.random::<f64>() < config.crossover_rate {
                    single_point_crossover(&p1.genes, &p2.genes, &mut rng)
                } else {
                    (p1.genes.clone(), p2.genes.clone())
                };

                pairwise_swap_mutation(&mut c1, config.mutation_rate, &mut rng);
                pairwise_swap_mutation(&mut c2, config.mutation_rate, &mut rng);

                next_gen.push(Solution::new(c1));
                next_gen.push(Solution::new(c2));
            }

            // Odd sizes overshoot by one child.
            next_gen.truncate(size);
            population = next_gen;

            evaluator.evaluate(problem, &mut population);

            let (cost, violations) = summarize(&population);
            recorder.record(gen, cost, violations);
            debug!(generation = gen, best_cost = cost, violations, "generation complete");
        }

        let best = population.swap_remove(best_index(&population).unwrap_or(0));
        info!(best_cost = best.cost, genes = ?best.genes, "genetic algorithm finished");

        Ok(GaResult {
            best_cost: best.cost,
            best,
            generations: config.max_generations,
            trace: recorder.finish(),
        })
    }
}

/// Cost of the best individual and summed violations of the population.
fn summarize(population: &[Solution]) -> (f64, f64) {
    let cost = best_index(population)
        .map(|i| population[i].cost)
        .unwrap_or(f64::INFINITY);
    let violations = population.iter().map(Solution::total_violations).sum();
    (cost, violations)
}

// ============================================================================
// Tests
// ============================================================================
