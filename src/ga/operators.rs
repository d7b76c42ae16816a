//! Assignment-vector genetic operators.
//!
//! Both operators work on `&[usize]` gene vectors and never invent gene
//! values: crossover exchanges a prefix between two parents, mutation
//! permutes positions within one child.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: exchange the prefix before a random cut
//!
//! # Mutation Operators
//!
//! - [`pairwise_swap_mutation`]: swap genes in pairs of independently
//!   marked positions; preserves the multiset of gene values
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// Picks a cut in `[1, n-1]` and returns two children: the first takes
/// `parent2[..cut]` followed by `parent1[cut..]`, the second the reverse.
/// Parents are never modified.
///
/// For `n < 2` no cut exists and the children are plain copies.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let cut = rng.random_range(1..n);
    crossover_at(parent1, parent2, cut)
}

/// Crossover with a fixed cut; see [`single_point_crossover`].
pub(crate) fn crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    cut: usize,
) -> (Vec<usize>, Vec<usize>) {
    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();
    child1[..cut].copy_from_slice(&parent2[..cut]);
    child2[..cut].copy_from_slice(&parent1[..cut]);
    (child1, child2)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Pairwise swap mutation.
///
/// Scans genes in order; each position is marked with probability `rate`.
/// Whenever two positions are marked their values are swapped and the
/// marks are cleared. An odd trailing mark is dropped.
///
/// Returns the number of swaps performed.
pub fn pairwise_swap_mutation<R: Rng>(genes: &mut [usize], rate: f64, rng: &mut R) -> usize {
    let mut pending: Option<usize> = None;
    let mut swaps = 0;

    for i in 0..genes.len() {
        if rng.random::<f64>() < rate {
            match pending.take() {
                Some(j) => {
                    genes.swap(i, j);
                    swaps += 1;
                }
                None => pending = Some(i),
            }
        }
    }

    swaps
}
