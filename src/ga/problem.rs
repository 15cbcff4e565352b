//! Chromosome codecs for the QBF problems.
//!
//! Gene `i` maps to variable `i`. Decoding collects the set genes into a
//! [`Solution`] in index order and attaches its objective value.

use super::types::{Chromosome, GaProblem};
use crate::cover;
use crate::error::Result;
use crate::evaluator::{Evaluator, FitnessRecord, Qbf, QbfSc};
use crate::instance::{CoefficientMatrix, Instance};
use crate::solution::Solution;

fn decode_with<E: Evaluator>(evaluator: &E, chromosome: &Chromosome) -> Solution {
    let mut solution: Solution = chromosome.ones().collect();
    solution.set_cost(evaluator.evaluate(&solution));
    solution
}

/// MAX-QBF without constraints. Every chromosome is feasible.
#[derive(Debug, Clone, Copy)]
pub struct QbfProblem<'a> {
    evaluator: Qbf<'a>,
}

impl<'a> QbfProblem<'a> {
    pub fn new(matrix: &'a CoefficientMatrix) -> Self {
        Self {
            evaluator: Qbf::new(matrix),
        }
    }
}

impl GaProblem for QbfProblem<'_> {
    fn chromosome_len(&self) -> usize {
        self.evaluator.domain_size()
    }

    fn decode(&self, chromosome: &Chromosome) -> Solution {
        decode_with(&self.evaluator, chromosome)
    }

    fn fitness(&self, chromosome: &Chromosome) -> FitnessRecord {
        FitnessRecord::new(self.decode(chromosome).cost(), 0)
    }
}

/// MAX-SC-QBF: the quadratic objective under the set-cover constraint,
/// with greedy repair.
#[derive(Debug, Clone, Copy)]
pub struct SetCoverProblem<'a> {
    evaluator: QbfSc<'a>,
}

impl<'a> SetCoverProblem<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            evaluator: QbfSc::new(instance),
        }
    }

    pub fn evaluator(&self) -> &QbfSc<'a> {
        &self.evaluator
    }

    pub fn instance(&self) -> &'a Instance {
        self.evaluator.instance()
    }
}

impl GaProblem for SetCoverProblem<'_> {
    fn chromosome_len(&self) -> usize {
        self.evaluator.domain_size()
    }

    fn decode(&self, chromosome: &Chromosome) -> Solution {
        decode_with(&self.evaluator, chromosome)
    }

    fn fitness(&self, chromosome: &Chromosome) -> FitnessRecord {
        let solution = self.decode(chromosome);
        FitnessRecord::new(solution.cost(), self.evaluator.uncovered_count(&solution))
    }

    fn repair(&self, chromosome: &mut Chromosome) -> Result<usize> {
        cover::repair(self.instance(), chromosome.genes_mut())
    }
}
