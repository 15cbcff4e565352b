//! Set-cover feasibility: coverage bookkeeping and greedy repair.
//!
//! - [`CoverageTracker`]: per-element cover counts for the current selection,
//!   updated incrementally as variables are switched on or off.
//! - [`repair`]: greedy completion of an infeasible selection to a full cover.

mod repair;
mod tracker;

pub use repair::{repair, repair_with_tracker};
pub use tracker::{CoverageStats, CoverageTracker};
