//! Binary genetic operators.
//!
//! # Initialization
//!
//! - [`random_chromosome`]: independent fair coin per gene
//! - [`latin_hypercube`]: stratified sampling per gene column
//! - [`greedy_chromosome`]: problem repair from empty, plus random extras
//!
//! # Variation
//!
//! - [`two_point_crossover`]: swap the gene segment between two cuts, O(n)
//! - [`bit_flip_mutation`]: flip each gene with a fixed probability, O(n)
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - McKay, Beckman & Conover (1979), "A Comparison of Three Methods for
//!   Selecting Values of Input Variables in the Analysis of Output from a
//!   Computer Code"

use super::types::{Chromosome, GaProblem};
use crate::error::Result;
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Probability of switching on each extra gene after the greedy cover.
pub const GREEDY_EXTRA_RATE: f64 = 0.3;

// ============================================================================
// Initialization
// ============================================================================

/// Each gene set independently with probability 0.5.
pub fn random_chromosome<R: Rng>(len: usize, rng: &mut R) -> Chromosome {
    Chromosome::new((0..len).map(|_| rng.random_bool(0.5)).collect())
}

/// Latin-hypercube population of `count` chromosomes of length `len`.
///
/// For every gene column the strata `0..count` are shuffled and assigned
/// one per individual; individual `i` draws `u = (stratum + U[0,1)) / count`
/// and sets the gene iff `u >= 0.5`. Each stratum is used exactly once per
/// column.
///
/// # Complexity
/// O(count · len)
pub fn latin_hypercube<R: Rng>(count: usize, len: usize, rng: &mut R) -> Vec<Chromosome> {
    let mut genes = vec![vec![false; len]; count];
    let mut strata: Vec<usize> = (0..count).collect();
    for locus in 0..len {
        strata.shuffle(rng);
        for (individual, &stratum) in strata.iter().enumerate() {
            let u = (stratum as f64 + rng.random::<f64>()) / count as f64;
            genes[individual][locus] = u >= 0.5;
        }
    }
    genes.into_iter().map(Chromosome::new).collect()
}

/// Repaired empty chromosome with each remaining gene switched on with
/// probability [`GREEDY_EXTRA_RATE`].
pub fn greedy_chromosome<P: GaProblem, R: Rng>(problem: &P, rng: &mut R) -> Result<Chromosome> {
    let mut chromosome = Chromosome::zeros(problem.chromosome_len());
    problem.repair(&mut chromosome)?;
    for gene in chromosome.genes_mut() {
        if !*gene && rng.random_bool(GREEDY_EXTRA_RATE) {
            *gene = true;
        }
    }
    Ok(chromosome)
}

// ============================================================================
// Variation
// ============================================================================

/// Two-point crossover.
///
/// Draws two distinct cut positions in `0..=n` (inclusive of `n`) and
/// swaps the genes in `[lo, hi)` between the parents. Cuts are boundaries
/// between genes, so `n` is a valid position: the last gene can be swapped
/// and `[0, n)` swaps whole chromosomes. Distinct cuts keep the segment
/// non-empty, so every crossover exchanges at least one gene.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn two_point_crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();
    if n == 0 {
        return (child1, child2);
    }

    let (lo, hi) = cut_points(n, rng);
    child1.genes_mut()[lo..hi].copy_from_slice(&parent2.genes()[lo..hi]);
    child2.genes_mut()[lo..hi].copy_from_slice(&parent1.genes()[lo..hi]);
    (child1, child2)
}

/// Flips each gene with probability `rate`; returns the number flipped.
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
pub fn bit_flip_mutation<R: Rng>(chromosome: &mut Chromosome, rate: f64, rng: &mut R) -> usize {
    let mut flipped = 0;
    for gene in chromosome.genes_mut() {
        if rng.random_bool(rate) {
            *gene = !*gene;
            flipped += 1;
        }
    }
    flipped
}

// ============================================================================
// Helpers
// ============================================================================

/// Two distinct cut positions `lo < hi` in `0..=n`.
fn cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let cuts = index::sample(rng, n + 1, 2);
    let (a, b) = (cuts.index(0), cuts.index(1));
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::FitnessRecord;
    use crate::random::create_rng;
    use crate::solution::Solution;

    // ---- Initialization ----

    #[test]
    fn test_random_chromosome_length_and_balance() {
        let mut rng = create_rng(42);
        let mut ones = 0;
        for _ in 0..200 {
            let c = random_chromosome(50, &mut rng);
            assert_eq!(c.len(), 50);
            ones += c.ones().count();
        }
        let ratio = ones as f64 / 10_000.0;
        assert!((0.45..0.55).contains(&ratio), "ratio = {ratio}");
    }

    #[test]
    fn test_latin_hypercube_columns_are_stratified() {
        let mut rng = create_rng(42);
        let pop = latin_hypercube(10, 30, &mut rng);
        assert_eq!(pop.len(), 10);
        for locus in 0..30 {
            // Strata 5..10 lie in [0.5, 1): exactly half the column is set.
            let ones = pop.iter().filter(|c| c.get(locus)).count();
            assert_eq!(ones, 5, "column {locus}");
        }
    }

    #[test]
    fn test_latin_hypercube_odd_population() {
        let mut rng = create_rng(3);
        let pop = latin_hypercube(5, 40, &mut rng);
        for locus in 0..40 {
            // Strata 3, 4 are always set, 0, 1 never; stratum 2 straddles 0.5.
            let ones = pop.iter().filter(|c| c.get(locus)).count();
            assert!((2..=3).contains(&ones), "column {locus}: {ones}");
        }
    }

    #[test]
    fn test_latin_hypercube_varies_across_columns() {
        let mut rng = create_rng(11);
        let pop = latin_hypercube(8, 20, &mut rng);
        let first = &pop[0];
        assert!(pop.iter().skip(1).any(|c| c != first));
    }

    struct CoverFirst;

    impl GaProblem for CoverFirst {
        fn chromosome_len(&self) -> usize {
            6
        }
        fn decode(&self, chromosome: &Chromosome) -> Solution {
            chromosome.ones().collect()
        }
        fn fitness(&self, _chromosome: &Chromosome) -> FitnessRecord {
            FitnessRecord::new(0.0, 0)
        }
        fn repair(&self, chromosome: &mut Chromosome) -> Result<usize> {
            let added = usize::from(!chromosome.get(0));
            chromosome.set(0, true);
            Ok(added)
        }
    }

    #[test]
    fn test_greedy_chromosome_starts_from_repair() {
        let mut rng = create_rng(42);
        for _ in 0..20 {
            let c = greedy_chromosome(&CoverFirst, &mut rng).unwrap();
            assert!(c.get(0));
            assert_eq!(c.len(), 6);
        }
    }

    // ---- Crossover ----

    #[test]
    fn test_two_point_crossover_swaps_one_segment() {
        let mut rng = create_rng(42);
        let p1 = Chromosome::new(vec![false; 12]);
        let p2 = Chromosome::new(vec![true; 12]);
        for _ in 0..100 {
            let (c1, c2) = two_point_crossover(&p1, &p2, &mut rng);
            let taken: Vec<usize> = c1.ones().collect();
            assert!(!taken.is_empty(), "segment must be non-empty");
            // Contiguous run of ones.
            assert_eq!(taken.len(), taken[taken.len() - 1] - taken[0] + 1);
            // Children are complementary.
            for i in 0..12 {
                assert_ne!(c1.get(i), c2.get(i));
            }
        }
    }

    #[test]
    fn test_crossover_identical_parents() {
        let mut rng = create_rng(42);
        let p = Chromosome::new(vec![true, false, true, true, false]);
        let (c1, c2) = two_point_crossover(&p, &p, &mut rng);
        assert_eq!(c1, p);
        assert_eq!(c2, p);
    }

    #[test]
    fn test_crossover_single_gene() {
        let mut rng = create_rng(42);
        let p1 = Chromosome::new(vec![true]);
        let p2 = Chromosome::new(vec![false]);
        let (c1, c2) = two_point_crossover(&p1, &p2, &mut rng);
        assert_eq!(c1, p2);
        assert_eq!(c2, p1);
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_crossover_length_mismatch_panics() {
        let mut rng = create_rng(42);
        two_point_crossover(&Chromosome::zeros(3), &Chromosome::zeros(4), &mut rng);
    }

    #[test]
    fn test_cut_points_bounds() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let (lo, hi) = cut_points(10, &mut rng);
            assert!(lo < hi);
            assert!(hi <= 10);
        }
    }

    #[test]
    fn test_cut_points_reach_both_ends() {
        let mut rng = create_rng(42);
        let mut seen_full = false;
        let mut seen_last_gene = false;
        for _ in 0..1000 {
            match cut_points(3, &mut rng) {
                (0, 3) => seen_full = true,
                (2, 3) => seen_last_gene = true,
                _ => {}
            }
        }
        assert!(seen_full && seen_last_gene);
    }

    // ---- Mutation ----

    #[test]
    fn test_mutation_rate_extremes() {
        let mut rng = create_rng(42);
        let mut c = Chromosome::new(vec![true, false, true, false]);
        assert_eq!(bit_flip_mutation(&mut c, 0.0, &mut rng), 0);
        assert_eq!(c, Chromosome::new(vec![true, false, true, false]));
        assert_eq!(bit_flip_mutation(&mut c, 1.0, &mut rng), 4);
        assert_eq!(c, Chromosome::new(vec![false, true, false, true]));
    }

    #[test]
    fn test_mutation_rate_frequency() {
        let mut rng = create_rng(7);
        let mut c = Chromosome::zeros(10_000);
        let flipped = bit_flip_mutation(&mut c, 0.1, &mut rng);
        assert_eq!(flipped, c.ones().count());
        assert!((800..1200).contains(&flipped), "flipped = {flipped}");
    }
}
