//! PSO execution loop.

use tracing::{debug, info};

use super::config::PsoConfig;
use super::particle::Particle;
use crate::error::Result;
use crate::model::Problem;
use crate::random::rng_from_seed;
use crate::solution::Solution;
use crate::trace::{IterationRecord, Recorder};

/// Result of a PSO run.
#[derive(Debug, Clone)]
pub struct PsoResult {
    /// Global-best position.
    pub best_genes: Vec<usize>,

    /// Cost of `best_genes`.
    pub best_cost: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Final state of every particle.
    pub swarm: Vec<Particle>,

    /// One record per iteration (1-based). Empty when tracing is disabled.
    pub trace: Vec<IterationRecord>,
}

/// Executes discrete Particle Swarm Optimization.
///
/// Particles move in continuous space and are rounded back onto valid
/// employee references after every step. A particle's personal best is
/// replaced when its new fitness is strictly higher; the global best is
/// replaced only by such an improvement that also lowers the global cost.
///
/// # References
///
/// - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
/// - Shi & Eberhart (1998), "A Modified Particle Swarm Optimizer"
pub struct PsoRunner;

impl PsoRunner {
    /// Runs PSO optimization.
    pub fn run(problem: &Problem, config: &PsoConfig) -> Result<PsoResult> {
        config.validate()?;

        let evaluator = &config.evaluator;
        let num_employees = problem.num_employees();
        let coefficients = (config.inertia, config.cognitive, config.social);
        let mut rng = rng_from_seed(config.seed);
        let mut recorder = Recorder::new(config.record_trace, config.max_iterations);

        info!(
            particles = config.swarm_size,
            iterations = config.max_iterations,
            inertia = config.inertia,
            cognitive = config.cognitive,
            social = config.social,
            "starting particle swarm optimization"
        );

        let mut swarm: Vec<Particle> = (0..config.swarm_size)
            .map(|_| Particle::random(problem, evaluator, &mut rng))
            .collect();

        // Global best: lowest-cost particle, earliest on ties.
        let leader = swarm
            .iter()
            .enumerate()
            .fold(0, |best, (i, p)| if p.cost < swarm[best].cost { i } else { best });
        let mut global_best = swarm[leader].position.clone();
        let mut global_best_cost = swarm[leader].cost;

        for iteration in 1..=config.max_iterations {
            for particle in &mut swarm {
                particle.step(&global_best, coefficients, num_employees, &mut rng);

                let mut candidate = Solution::new(particle.position.clone());
                evaluator.evaluate_one(problem, &mut candidate);
                particle.violations = candidate.total_violations();

                if candidate.fitness > particle.best_fitness {
                    particle.best_position.clone_from(&particle.position);
                    particle.best_fitness = candidate.fitness;
                    particle.cost = candidate.cost;

                    if candidate.cost < global_best_cost {
                        global_best.clone_from(&particle.position);
                        global_best_cost = candidate.cost;
                    }
                }
            }

            let violations: f64 = swarm.iter().map(|p| p.violations).sum();
            recorder.record(iteration, global_best_cost, violations);
            debug!(
                iteration,
                best_cost = global_best_cost,
                violations,
                "swarm step complete"
            );
        }

        info!(
            best_cost = global_best_cost,
            genes = ?global_best,
            "particle swarm optimization finished"
        );

        Ok(PsoResult {
            best_genes: global_best,
            best_cost: global_best_cost,
            iterations: config.max_iterations,
            swarm,
            trace: recorder.finish(),
        })
    }
}
