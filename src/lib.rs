//! Staff-to-task assignment with three metaheuristics.
//!
//! Assigns every task to one employee while penalizing overload, missing
//! skills, insufficient competency, late finishes and unassigned tasks.
//! Three independent stochastic engines search the same representation
//! and share one fitness model, so their results are comparable:
//!
//! - **Genetic Algorithm (GA)**: elitism, roulette wheel selection,
//!   single-point crossover and pairwise swap mutation.
//! - **Ant Colony Optimization (ACO)**: pheromone-guided construction
//!   with evaporation and fitness-relative deposit.
//! - **Particle Swarm Optimization (PSO)**: continuous velocity updates
//!   rounded and clamped onto valid employee references.
//!
//! # Architecture
//!
//! [`model::Problem`] is built once and only borrowed. [`solution::Solution`]
//! holds one 1-based employee reference per task (`0` = unassigned) plus
//! derived scores written by [`fitness::Evaluator`]. Each engine owns its
//! population and a single seeded RNG for the whole run.
//!
//! # Example
//!
//! ```
//! use u_staffing::ga::{GaConfig, GaRunner};
//! use u_staffing::model::{Employee, Problem, Task};
//!
//! let problem = Problem::new(
//!     vec![
//!         Task::new("design", 3.0, 2.0, 6.0, "ux"),
//!         Task::new("api", 4.0, 3.0, 8.0, "backend"),
//!     ],
//!     vec![
//!         Employee::new("ana", 6.0, 3.0, ["ux"]),
//!         Employee::new("bo", 8.0, 3.0, ["backend"]),
//!     ],
//! )?;
//!
//! let result = GaRunner::run(&problem, &GaConfig::default().with_seed(7))?;
//! assert_eq!(result.best.genes, vec![1, 2]);
//! assert_eq!(result.best_cost, 0.0);
//! # Ok::<(), u_staffing::Error>(())
//! ```

pub mod aco;
pub mod compare;
pub mod error;
pub mod fitness;
pub mod ga;
pub mod model;
pub mod pso;
pub mod random;
pub mod solution;
pub mod trace;

pub use error::{Error, Result};
