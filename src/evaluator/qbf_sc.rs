use super::Evaluator;
use crate::cover::CoverageTracker;
use crate::instance::{CoefficientMatrix, Instance};
use crate::solution::Solution;

/// Quadratic binary function under the set-cover constraint.
///
/// Shares evaluation and deltas with [`super::Qbf`]; a selection is
/// feasible when the union of its sets is the whole universe.
#[derive(Debug, Clone, Copy)]
pub struct QbfSc<'a> {
    instance: &'a Instance,
}

impl<'a> QbfSc<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Coverage induced by `selection`, built from scratch.
    pub fn coverage(&self, selection: &Solution) -> CoverageTracker<'a> {
        CoverageTracker::from_selection(self.instance, selection.iter())
    }

    pub fn is_feasible(&self, selection: &Solution) -> bool {
        self.uncovered_count(selection) == 0
    }

    /// Uncovered universe elements, 0-based and ascending.
    pub fn uncovered_elements(&self, selection: &Solution) -> Vec<usize> {
        self.coverage(selection).uncovered_elements()
    }
}

impl Evaluator for QbfSc<'_> {
    fn matrix(&self) -> &CoefficientMatrix {
        self.instance.matrix()
    }

    fn uncovered_count(&self, selection: &Solution) -> usize {
        self.coverage(selection).uncovered_count()
    }
}
