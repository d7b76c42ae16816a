//! Roulette wheel selection over cumulative probabilities.
//!
//! Relies on [`Evaluator::evaluate`](crate::fitness::Evaluator::evaluate)
//! having filled `cumulative_probability` for the population in its
//! current order.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, Ch. 1

use rand::Rng;

use crate::solution::Solution;

/// Selects a parent index by fitness-proportionate sampling.
///
/// Draws `r` in `[0, 1)` and returns the first individual whose cumulative
/// probability is at least `r`, or the last individual when rounding
/// leaves every cumulative value below `r`.
///
/// # Complexity
/// O(n) per selection (linear scan)
///
/// # Panics
/// Panics if `population` is empty.
pub fn roulette<R: Rng>(population: &[Solution], rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let r: f64 = rng.random();
    spin(population, r)
}

/// Roulette lookup for a fixed draw.
pub(crate) fn spin(population: &[Solution], r: f64) -> usize {
    population
        .iter()
        .position(|s| r <= s.cumulative_probability)
        .unwrap_or(population.len() - 1)
}
