//! Ant Colony Optimization (ACO).
//!
//! A constructive metaheuristic: ants build assignments by sampling
//! employees per task in proportion to a learned pheromone matrix, and
//! good assignments reinforce the pairs they used.
//!
//! # References
//!
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod config;
mod pheromone;
mod runner;

pub use config::AcoConfig;
pub use pheromone::PheromoneMatrix;
pub use runner::{AcoResult, AcoRunner};
