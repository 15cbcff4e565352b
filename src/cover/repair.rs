//! Greedy feasibility repair.
//!
//! Completes a selection to a full cover by repeatedly switching on the
//! unselected variable that covers the most still-uncovered elements
//! (lowest index on ties). This is the classic greedy set-cover
//! heuristic, so the number of added variables is within a logarithmic
//! factor of the minimum, not necessarily minimal.
//!
//! Repair only ever switches genes on; over-covering selections are left
//! untouched.
//!
//! # References
//!
//! - Chvátal (1979), "A Greedy Heuristic for the Set-Covering Problem"

use super::tracker::CoverageTracker;
use crate::error::{QbfScError, Result};
use crate::instance::Instance;

/// Repairs `genes` in place so the selection covers the whole universe.
///
/// Returns the number of genes switched on.
///
/// # Errors
/// [`QbfScError::InfeasibleInstance`] if some element belongs to no set.
pub fn repair(instance: &Instance, genes: &mut [bool]) -> Result<usize> {
    let mut tracker = CoverageTracker::from_genes(instance, genes);
    repair_with_tracker(&mut tracker, genes)
}

/// Repairs `genes` using an existing tracker that mirrors them.
///
/// The tracker is updated alongside every added gene and ends up
/// describing the repaired selection.
pub fn repair_with_tracker(tracker: &mut CoverageTracker<'_>, genes: &mut [bool]) -> Result<usize> {
    let mut added = 0;
    while tracker.uncovered_count() > 0 {
        let mut best: Option<(usize, usize)> = None;
        for (i, _) in genes.iter().enumerate().filter(|(_, &g)| !g) {
            let gain = tracker.marginal_gain(i);
            if gain > best.map_or(0, |(_, g)| g) {
                best = Some((i, gain));
            }
        }

        let Some((var, _)) = best else {
            return Err(QbfScError::InfeasibleInstance {
                uncovered: tracker.uncovered_count(),
            });
        };
        genes[var] = true;
        tracker.on_insert(var);
        added += 1;
    }
    Ok(added)
}
