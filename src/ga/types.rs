//! Core types for the GA engine.
//!
//! [`GaProblem`] is the contract between the generic generational loop
//! and a concrete binary problem: how to decode a [`Chromosome`], how to
//! restore feasibility and how to score it.

use crate::error::Result;
use crate::evaluator::FitnessRecord;
use crate::solution::Solution;

/// Fixed-length binary genotype. Gene `i` set means variable `i` is selected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<bool>,
}

impl Chromosome {
    pub fn new(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// All genes off.
    pub fn zeros(len: usize) -> Self {
        Self {
            genes: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    pub fn genes_mut(&mut self) -> &mut [bool] {
        &mut self.genes
    }

    pub fn get(&self, locus: usize) -> bool {
        self.genes[locus]
    }

    pub fn set(&mut self, locus: usize, value: bool) {
        self.genes[locus] = value;
    }

    pub fn flip(&mut self, locus: usize) {
        self.genes[locus] = !self.genes[locus];
    }

    /// Indices of the set genes, ascending.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter(|(_, &g)| g)
            .map(|(i, _)| i)
    }

    /// Whether every gene set in `other` is also set here.
    pub fn covers(&self, other: &Chromosome) -> bool {
        self.genes
            .iter()
            .zip(&other.genes)
            .all(|(&mine, &theirs)| mine || !theirs)
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(genes: Vec<bool>) -> Self {
        Self::new(genes)
    }
}

/// A chromosome together with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    pub chromosome: Chromosome,
    pub fitness: FitnessRecord,
}

impl Individual {
    pub fn penalized(&self) -> f64 {
        self.fitness.penalized
    }
}

/// Defines a binary GA problem.
///
/// The engine owns selection, crossover, mutation and replacement; the
/// problem supplies the three steps that depend on what the genes mean.
///
/// Higher [`FitnessRecord::penalized`] is better (maximization).
pub trait GaProblem {
    /// Number of genes per chromosome.
    fn chromosome_len(&self) -> usize;

    /// Maps a chromosome to its selected-variable solution, with cost set.
    fn decode(&self, chromosome: &Chromosome) -> Solution;

    /// Scores a chromosome.
    fn fitness(&self, chromosome: &Chromosome) -> FitnessRecord;

    /// Restores feasibility in place and returns the number of genes changed.
    ///
    /// The default is a no-op for unconstrained problems.
    fn repair(&self, _chromosome: &mut Chromosome) -> Result<usize> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ones_and_flip() {
        let mut c = Chromosome::new(vec![true, false, true]);
        assert_eq!(c.ones().collect::<Vec<_>>(), vec![0, 2]);
        c.flip(1);
        c.flip(0);
        assert_eq!(c.ones().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_covers() {
        let big = Chromosome::new(vec![true, true, false]);
        let small = Chromosome::new(vec![true, false, false]);
        assert!(big.covers(&small));
        assert!(!small.covers(&big));
        assert!(Chromosome::zeros(3).covers(&Chromosome::zeros(3)));
    }
}
