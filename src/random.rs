//! Seeded random number generation.
//!
//! Every stochastic decision in a run is drawn from a single generator
//! created here, so a fixed seed reproduces the whole trajectory.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the run's random number generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Resolves an optional seed, drawing a fresh one from the OS when absent.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}
