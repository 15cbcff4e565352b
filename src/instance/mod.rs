//! MAX-SC-QBF problem instances.
//!
//! An [`Instance`] couples an upper-triangular [`CoefficientMatrix`] with
//! one covering set per decision variable. Variable `i` covers the
//! universe elements in `sets[i]`; the universe is `0..n`.
//!
//! Instances are immutable once built and every constructor validates
//! that each universe element belongs to at least one set, so a full
//! cover always exists. With the `serde` feature, deserialization goes
//! through the same checks.

mod parser;

use crate::error::{QbfScError, Result};
use std::path::Path;

/// Dense `n x n` coefficient matrix of the quadratic form.
///
/// Only the upper triangle (`i <= j`) carries coefficients; the lower
/// triangle is stored as zero, so `x'Ax` counts each off-diagonal pair once.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMatrix"))]
pub struct CoefficientMatrix {
    n: usize,
    coeffs: Vec<f64>,
}

impl CoefficientMatrix {
    /// Builds a matrix from upper-triangular rows: row `i` holds
    /// `A[i][i..n]`, i.e. `n - i` values.
    pub fn from_upper_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        let mut coeffs = vec![0.0; n * n];
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n - i {
                return Err(QbfScError::malformed(
                    0,
                    format!(
                        "matrix row {} has {} values, expected {}",
                        i + 1,
                        row.len(),
                        n - i
                    ),
                ));
            }
            for (offset, &value) in row.iter().enumerate() {
                coeffs[i * n + i + offset] = value;
            }
        }
        Ok(Self { n, coeffs })
    }

    /// Matrix dimension.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Coefficient `A[i][j]`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.coeffs[i * self.n + j]
    }

    /// `sum_{i in sel} sum_{j in sel} A[i][j]` for an arbitrary index list.
    pub fn quadratic_value(&self, selection: &[usize]) -> f64 {
        selection
            .iter()
            .map(|&i| selection.iter().map(|&j| self.get(i, j)).sum::<f64>())
            .sum()
    }

    /// Objective change from switching `i` on, given the other selected
    /// variables: `A[i][i] + sum_{j != i} (A[i][j] + A[j][i])`.
    pub fn contribution<I>(&self, i: usize, selected: I) -> f64
    where
        I: IntoIterator<Item = usize>,
    {
        let cross: f64 = selected
            .into_iter()
            .filter(|&j| j != i)
            .map(|j| self.get(i, j) + self.get(j, i))
            .sum();
        self.get(i, i) + cross
    }
}

/// An immutable MAX-SC-QBF instance.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawInstance"))]
pub struct Instance {
    pub(crate) matrix: CoefficientMatrix,
    /// `sets[i]`: sorted, de-duplicated 0-based elements covered by variable `i`.
    pub(crate) sets: Vec<Vec<usize>>,
}

impl Instance {
    /// Builds and validates an instance from 0-based sets and a matrix.
    ///
    /// # Errors
    /// [`QbfScError::MalformedInstance`] when the set count or an element
    /// is out of range, or when some element belongs to no set.
    pub fn new(sets: Vec<Vec<usize>>, matrix: CoefficientMatrix) -> Result<Self> {
        let n = matrix.dim();
        if n == 0 {
            return Err(QbfScError::malformed(0, "instance has no variables"));
        }
        if sets.len() != n {
            return Err(QbfScError::malformed(
                0,
                format!("expected {n} sets, got {}", sets.len()),
            ));
        }

        let mut normalized = Vec::with_capacity(n);
        let mut coverable = vec![false; n];
        for (i, mut set) in sets.into_iter().enumerate() {
            set.sort_unstable();
            set.dedup();
            if let Some(&bad) = set.iter().find(|&&e| e >= n) {
                return Err(QbfScError::malformed(
                    0,
                    format!("set {} contains element {} outside 1..={n}", i + 1, bad + 1),
                ));
            }
            for &e in &set {
                coverable[e] = true;
            }
            normalized.push(set);
        }

        let missing: Vec<usize> = (0..n).filter(|&e| !coverable[e]).map(|e| e + 1).collect();
        if !missing.is_empty() {
            return Err(QbfScError::malformed(
                0,
                format!("elements {missing:?} cannot be covered by any set"),
            ));
        }

        Ok(Self {
            matrix,
            sets: normalized,
        })
    }

    /// Parses an instance from its textual form.
    pub fn parse(text: &str) -> Result<Self> {
        parser::parse(text)
    }

    /// Reads and parses an instance file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Number of decision variables, which is also the universe size.
    pub fn size(&self) -> usize {
        self.matrix.dim()
    }

    pub fn matrix(&self) -> &CoefficientMatrix {
        &self.matrix
    }

    /// Elements covered by variable `i`.
    pub fn set(&self, i: usize) -> &[usize] {
        &self.sets[i]
    }

    pub fn sets(&self) -> &[Vec<usize>] {
        &self.sets
    }
}

/// Deserialized matrix before shape checks.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix {
    n: usize,
    coeffs: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for CoefficientMatrix {
    type Error = QbfScError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        let RawMatrix { n, coeffs } = raw;
        if n.checked_mul(n) != Some(coeffs.len()) {
            return Err(QbfScError::malformed(
                0,
                format!(
                    "{n}x{n} matrix needs {} coefficients, got {}",
                    n.saturating_mul(n),
                    coeffs.len()
                ),
            ));
        }
        for i in 1..n {
            if coeffs[i * n..i * n + i].iter().any(|&v| v != 0.0) {
                return Err(QbfScError::malformed(
                    0,
                    format!("matrix row {} has non-zero entries below the diagonal", i + 1),
                ));
            }
        }
        Ok(Self { n, coeffs })
    }
}

/// Deserialized instance before [`Instance::new`] validation.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInstance {
    matrix: CoefficientMatrix,
    sets: Vec<Vec<usize>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInstance> for Instance {
    type Error = QbfScError;

    fn try_from(raw: RawInstance) -> Result<Self> {
        Instance::new(raw.sets, raw.matrix)
    }
}
