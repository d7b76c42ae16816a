//! Genetic Algorithm engine.
//!
//! Evolves a population of assignment vectors. Each generation keeps the
//! top `elitism` individuals, then fills the rest with offspring produced
//! by roulette wheel selection, single-point crossover and pairwise swap
//! mutation.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, elitism)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best individual of the final population plus trace
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and pairwise swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::roulette;
