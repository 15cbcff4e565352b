//! Incremental coverage counts.

use crate::instance::Instance;

/// Summary of how often each universe element is covered.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageStats {
    /// Elements covered at least once.
    pub covered: usize,
    pub min: u32,
    pub max: u32,
    pub mean: f64,
}

/// Tracks, for every universe element, how many selected sets cover it.
///
/// The tracker mirrors one selection: callers report each variable they
/// switch on or off and the counts stay equal to a from-scratch recount.
#[derive(Debug, Clone)]
pub struct CoverageTracker<'a> {
    instance: &'a Instance,
    counts: Vec<u32>,
    uncovered: usize,
}

impl<'a> CoverageTracker<'a> {
    /// Tracker for the empty selection: everything uncovered.
    pub fn new(instance: &'a Instance) -> Self {
        let n = instance.size();
        Self {
            instance,
            counts: vec![0; n],
            uncovered: n,
        }
    }

    /// Builds the coverage induced by `selection` with a full scan.
    pub fn from_selection<I>(instance: &'a Instance, selection: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut tracker = Self::new(instance);
        for i in selection {
            tracker.on_insert(i);
        }
        tracker
    }

    /// Coverage of the variables whose gene is set.
    pub fn from_genes(instance: &'a Instance, genes: &[bool]) -> Self {
        Self::from_selection(
            instance,
            genes.iter().enumerate().filter(|(_, &g)| g).map(|(i, _)| i),
        )
    }

    /// Records that variable `i` was switched on.
    pub fn on_insert(&mut self, i: usize) {
        for &e in self.instance.set(i) {
            if self.counts[e] == 0 {
                self.uncovered -= 1;
            }
            self.counts[e] += 1;
        }
    }

    /// Records that variable `i` was switched off.
    ///
    /// # Panics
    /// Panics if an element of `S_i` has a zero count, i.e. `i` was not
    /// part of the tracked selection.
    pub fn on_remove(&mut self, i: usize) {
        for &e in self.instance.set(i) {
            assert!(
                self.counts[e] > 0,
                "removing variable {i} that does not cover element {e}"
            );
            self.counts[e] -= 1;
            if self.counts[e] == 0 {
                self.uncovered += 1;
            }
        }
    }

    /// Cover count per universe element.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn is_covered(&self, element: usize) -> bool {
        self.counts[element] > 0
    }

    pub fn uncovered_count(&self) -> usize {
        self.uncovered
    }

    pub fn is_feasible(&self) -> bool {
        self.uncovered == 0
    }

    /// Uncovered elements in ascending order.
    pub fn uncovered_elements(&self) -> Vec<usize> {
        (0..self.counts.len())
            .filter(|&e| !self.is_covered(e))
            .collect()
    }

    /// Number of currently uncovered elements variable `i` would cover.
    pub fn marginal_gain(&self, i: usize) -> usize {
        self.instance
            .set(i)
            .iter()
            .filter(|&&e| !self.is_covered(e))
            .count()
    }

    /// Recounts `selection` from scratch and compares with the tracked state.
    pub fn is_consistent_with<I>(&self, selection: I) -> bool
    where
        I: IntoIterator<Item = usize>,
    {
        let fresh = Self::from_selection(self.instance, selection);
        fresh.counts == self.counts && fresh.uncovered == self.uncovered
    }

    /// Selected variables that can be dropped without uncovering anything.
    ///
    /// Each candidate is checked against the current counts on its own;
    /// dropping two of them together may still break the cover. Returns an
    /// empty list when the selection is not a cover.
    pub fn removable_variables<I>(&self, selection: I) -> Vec<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        if !self.is_feasible() {
            return Vec::new();
        }
        selection
            .into_iter()
            .filter(|&i| self.instance.set(i).iter().all(|&e| self.counts[e] > 1))
            .collect()
    }

    pub fn stats(&self) -> CoverageStats {
        let covered = self.counts.len() - self.uncovered;
        let min = self.counts.iter().copied().min().unwrap_or(0);
        let max = self.counts.iter().copied().max().unwrap_or(0);
        let total: u64 = self.counts.iter().map(|&c| c as u64).sum();
        let mean = if self.counts.is_empty() {
            0.0
        } else {
            total as f64 / self.counts.len() as f64
        };
        CoverageStats {
            covered,
            min,
            max,
            mean,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::fixtures::small_instance;

    #[test]
    fn test_empty_tracker() {
        let inst = small_instance();
        let t = CoverageTracker::new(&inst);
        assert_eq!(t.uncovered_count(), 5);
        assert_eq!(t.counts(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_insert_and_remove() {
        let inst = small_instance();
        let mut t = CoverageTracker::new(&inst);
        t.on_insert(1); // {2, 3, 4}
        t.on_insert(4); // {4, 5}
        assert_eq!(t.counts(), &[0, 1, 1, 2, 1]);
        assert_eq!(t.uncovered_count(), 1);
        assert_eq!(t.uncovered_elements(), vec![0]);
        assert!(!t.is_covered(0));
        assert!(t.is_covered(3));

        t.on_remove(1);
        assert_eq!(t.counts(), &[0, 0, 0, 1, 1]);
        assert_eq!(t.uncovered_count(), 3);
        assert!(t.is_consistent_with([4]));
    }

    #[test]
    fn test_consistency_detects_divergence() {
        let inst = small_instance();
        let t = CoverageTracker::from_selection(&inst, [0, 3]);
        assert!(t.is_consistent_with([3, 0]));
        assert!(!t.is_consistent_with([0]));
    }

    #[test]
    fn test_from_genes() {
        let inst = small_instance();
        let t = CoverageTracker::from_genes(&inst, &[true, true, false, true, false]);
        assert!(t.is_feasible());
        assert!(t.is_consistent_with([0, 1, 3]));
    }

    #[test]
    fn test_marginal_gain() {
        let inst = small_instance();
        let t = CoverageTracker::from_selection(&inst, [0]);
        assert_eq!(t.marginal_gain(1), 2); // 3, 4 new
        assert_eq!(t.marginal_gain(2), 1); // only 4 new
        assert_eq!(t.marginal_gain(0), 0);
    }

    #[test]
    fn test_removable_variables() {
        let inst = small_instance();
        // Counts: e1=1, e2=2, e3=2, e4=2, e5=2.
        let sel = [0, 1, 3, 4];
        let t = CoverageTracker::from_selection(&inst, sel);
        // S1 is the only set covering element 1; the others are redundant.
        assert_eq!(t.removable_variables(sel), vec![1, 3, 4]);

        let partial = CoverageTracker::from_selection(&inst, [0]);
        assert!(partial.removable_variables([0]).is_empty());
    }

    #[test]
    fn test_stats() {
        let inst = small_instance();
        let t = CoverageTracker::from_selection(&inst, [0, 1, 3]);
        let s = t.stats();
        assert_eq!(s.covered, 5);
        assert_eq!(s.min, 1);
        assert_eq!(s.max, 2);
        assert!((s.mean - 7.0 / 5.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "does not cover")]
    fn test_remove_unselected_panics() {
        let inst = small_instance();
        let mut t = CoverageTracker::new(&inst);
        t.on_remove(2);
    }
}
