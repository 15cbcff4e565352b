//! Objective evaluation.
//!
//! The [`Evaluator`] trait is the capability contract the GA scores
//! solutions with: the full quadratic form `x'Ax`, incremental deltas for
//! single-variable moves, and a feasibility measure that feeds the
//! penalty in [`FitnessRecord`].
//!
//! Two variants share the quadratic machinery through the trait's default
//! methods:
//!
//! - [`Qbf`]: the unconstrained quadratic binary function.
//! - [`QbfSc`]: the same objective under the set-cover constraint.
//!
//! All methods are pure; nothing is cached between calls.

mod qbf;
mod qbf_sc;

pub use qbf::Qbf;
pub use qbf_sc::QbfSc;

use crate::instance::CoefficientMatrix;
use crate::solution::Solution;

/// Fitness deducted per uncovered universe element.
///
/// Large enough that any infeasible selection scores below every feasible
/// one on instances with moderate coefficients.
pub const PENALTY: f64 = 10_000.0;

/// Score of one candidate: raw objective, constraint violation and the
/// penalized value the GA maximizes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessRecord {
    /// `x'Ax` of the decoded selection.
    pub raw: f64,
    /// Number of universe elements no selected set covers.
    pub uncovered: usize,
    /// `raw` if feasible, otherwise `raw - uncovered * PENALTY`.
    pub penalized: f64,
}

impl FitnessRecord {
    pub fn new(raw: f64, uncovered: usize) -> Self {
        let penalized = if uncovered == 0 {
            raw
        } else {
            raw - uncovered as f64 * PENALTY
        };
        Self {
            raw,
            uncovered,
            penalized,
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.uncovered == 0
    }
}

/// Objective function over subsets of `0..domain_size()`.
///
/// Implementors supply the coefficient matrix; evaluation and the
/// incremental deltas come for free. Constrained variants override
/// [`uncovered_count`](Evaluator::uncovered_count).
pub trait Evaluator {
    /// The quadratic form's coefficients.
    fn matrix(&self) -> &CoefficientMatrix;

    /// Number of decision variables.
    fn domain_size(&self) -> usize {
        self.matrix().dim()
    }

    /// `sum_{i in sel} sum_{j in sel} A[i][j]`.
    fn evaluate(&self, selection: &Solution) -> f64 {
        self.matrix().quadratic_value(&selection.to_vec())
    }

    /// `evaluate(sel + {i}) - evaluate(sel)`; zero if `i` is already selected.
    fn insertion_delta(&self, selection: &Solution, i: usize) -> f64 {
        if selection.contains(i) {
            return 0.0;
        }
        self.matrix().contribution(i, selection.iter())
    }

    /// `evaluate(sel - {i}) - evaluate(sel)`; zero if `i` is not selected.
    fn removal_delta(&self, selection: &Solution, i: usize) -> f64 {
        if !selection.contains(i) {
            return 0.0;
        }
        -self.matrix().contribution(i, selection.iter())
    }

    /// Objective change from swapping `out` for `into`.
    fn exchange_delta(&self, selection: &Solution, out: usize, into: usize) -> f64 {
        if out == into {
            return 0.0;
        }
        if selection.contains(into) {
            return self.removal_delta(selection, out);
        }
        if !selection.contains(out) {
            return self.insertion_delta(selection, into);
        }
        let m = self.matrix();
        m.contribution(into, selection.iter()) - m.contribution(out, selection.iter())
            - (m.get(into, out) + m.get(out, into))
    }

    /// Universe elements left uncovered by `selection`. Unconstrained
    /// objectives report zero.
    fn uncovered_count(&self, _selection: &Solution) -> usize {
        0
    }

    /// Raw objective, violation and penalized fitness in one record.
    fn fitness(&self, selection: &Solution) -> FitnessRecord {
        FitnessRecord::new(self.evaluate(selection), self.uncovered_count(selection))
    }
}
