use super::Evaluator;
use crate::instance::CoefficientMatrix;

/// Unconstrained quadratic binary function `f(x) = x'Ax`.
#[derive(Debug, Clone, Copy)]
pub struct Qbf<'a> {
    matrix: &'a CoefficientMatrix,
}

impl<'a> Qbf<'a> {
    pub fn new(matrix: &'a CoefficientMatrix) -> Self {
        Self { matrix }
    }
}

impl Evaluator for Qbf<'_> {
    fn matrix(&self) -> &CoefficientMatrix {
        self.matrix
    }
}
