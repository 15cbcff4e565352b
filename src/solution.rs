//! Candidate solutions: a set of selected variables plus its cost.

use std::collections::BTreeSet;
use std::fmt;

/// Selected variable indices with an attached objective value.
///
/// Indices are unique and iterate in ascending order, so printing and
/// comparison are reproducible regardless of insertion order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    elements: BTreeSet<usize>,
    cost: f64,
}

impl Default for Solution {
    fn default() -> Self {
        Self::new()
    }
}

impl Solution {
    /// An empty selection with zero cost.
    pub fn new() -> Self {
        Self {
            elements: BTreeSet::new(),
            cost: 0.0,
        }
    }

    /// Builds a selection from indices; duplicates collapse. Cost is zero
    /// until set by an evaluator.
    pub fn from_indices<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        Self {
            elements: indices.into_iter().collect(),
            cost: 0.0,
        }
    }

    /// Inserts `i`, returning `false` if it was already selected.
    pub fn insert(&mut self, i: usize) -> bool {
        self.elements.insert(i)
    }

    /// Removes `i`, returning `false` if it was not selected.
    pub fn remove(&mut self, i: usize) -> bool {
        self.elements.remove(&i)
    }

    pub fn contains(&self, i: usize) -> bool {
        self.elements.contains(&i)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Selected indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.elements.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn set_cost(&mut self, cost: f64) {
        self.cost = cost;
    }

    /// Whether every index of `other` is also selected here.
    pub fn is_superset(&self, other: &Solution) -> bool {
        self.elements.is_superset(&other.elements)
    }
}

impl FromIterator<usize> for Solution {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_indices(iter)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Solution: cost=[{}], size=[{}], elements={:?}",
            self.cost,
            self.len(),
            self.to_vec()
        )
    }
}
