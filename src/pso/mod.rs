//! Particle Swarm Optimization (PSO).
//!
//! A swarm of particles moves through continuous space, pulled toward
//! each particle's own best position and the swarm's best position.
//! Every step is rounded and clamped back onto valid employee references.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Kennedy & Eberhart (1997), "A Discrete Binary Version of the Particle
//!   Swarm Algorithm"

mod config;
mod particle;
mod runner;

pub use config::PsoConfig;
pub use particle::Particle;
pub use runner::{PsoResult, PsoRunner};
