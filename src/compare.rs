//! Side-by-side runs of all three engines on one problem.
//!
//! The engines share the penalty model, so their costs are directly
//! comparable.

use tracing::info;

use crate::aco::{AcoConfig, AcoRunner};
use crate::error::Result;
use crate::ga::{GaConfig, GaRunner};
use crate::model::Problem;
use crate::pso::{PsoConfig, PsoRunner};
use crate::trace::IterationRecord;

/// Which engine produced an [`EngineSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Engine {
    /// Genetic Algorithm.
    Genetic,
    /// Ant Colony Optimization.
    AntColony,
    /// Particle Swarm Optimization.
    ParticleSwarm,
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Engine::Genetic => "GA",
            Engine::AntColony => "ACO",
            Engine::ParticleSwarm => "PSO",
        })
    }
}

/// Outcome of one engine run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineSummary {
    /// The engine.
    pub engine: Engine,
    /// Best assignment found.
    pub best_genes: Vec<usize>,
    /// Its cost.
    pub best_cost: f64,
    /// The engine's iteration trace.
    pub trace: Vec<IterationRecord>,
}

/// Results of running every engine.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    /// One summary per engine, in GA, ACO, PSO order.
    pub summaries: Vec<EngineSummary>,
}

impl Comparison {
    /// Summary with the lowest cost; GA wins ties, then ACO.
    pub fn winner(&self) -> Option<&EngineSummary> {
        self.summaries.iter().fold(None, |best, s| match best {
            Some(b) if b.best_cost <= s.best_cost => Some(b),
            _ => Some(s),
        })
    }

    /// Summary of one engine.
    pub fn get(&self, engine: Engine) -> Option<&EngineSummary> {
        self.summaries.iter().find(|s| s.engine == engine)
    }
}

/// Runs GA, ACO and PSO in sequence on `problem`.
///
/// All three configurations are validated before any engine starts.
pub fn compare(
    problem: &Problem,
    ga: &GaConfig,
    aco: &AcoConfig,
    pso: &PsoConfig,
) -> Result<Comparison> {
    ga.validate()?;
    aco.validate()?;
    pso.validate()?;

    let ga = GaRunner::run(problem, ga)?;
    let aco = AcoRunner::run(problem, aco)?;
    let pso = PsoRunner::run(problem, pso)?;

    let summaries = vec![
        EngineSummary {
            engine: Engine::Genetic,
            best_genes: ga.best.genes,
            best_cost: ga.best_cost,
            trace: ga.trace,
        },
        EngineSummary {
            engine: Engine::AntColony,
            best_genes: aco.best_genes,
            best_cost: aco.best_cost,
            trace: aco.trace,
        },
        EngineSummary {
            engine: Engine::ParticleSwarm,
            best_genes: pso.best_genes,
            best_cost: pso.best_cost,
            trace: pso.trace,
        },
    ];

    for s in &summaries {
        info!(engine = %s.engine, best_cost = s.best_cost, genes = ?s.best_genes, "engine result");
    }

    Ok(Comparison { summaries })
}
