//! Parent selection.
//!
//! Tournament selection with replacement: draw `k` individuals uniformly
//! at random and keep the one with the highest penalized fitness.
//! `k = 2` is the binary tournament; larger `k` raises selection pressure.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Individual;
use rand::Rng;

/// Returns the index of the tournament winner.
///
/// Ties keep the earlier draw. `k = 0` is treated as 1.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Individual], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k.max(1) {
        let idx = rng.random_range(0..n);
        if population[idx].penalized() > population[best_idx].penalized() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Fills a mating pool of `size` parents by repeated tournaments.
pub fn mating_pool<R: Rng>(
    population: &[Individual],
    size: usize,
    k: usize,
    rng: &mut R,
) -> Vec<usize> {
    (0..size).map(|_| tournament(population, k, rng)).collect()
}
