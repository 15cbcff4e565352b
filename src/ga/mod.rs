//! Genetic Algorithm for binary selection problems.
//!
//! A generational GA over fixed-length bit strings. The loop itself is
//! problem-agnostic; a problem plugs in through [`GaProblem`], which says
//! how to decode, repair and score a [`Chromosome`].
//!
//! # Core Traits
//!
//! - [`GaProblem`]: decode / repair / fitness for one problem
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, strategies, presets)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final optimization result with statistics
//! - [`GenerationReport`]: Per-generation snapshot passed to observers
//! - [`SetCoverProblem`], [`QbfProblem`]: the MAX-SC-QBF and MAX-QBF codecs
//!
//! # Submodules
//!
//! - [`operators`]: initialization, two-point crossover and bit-flip mutation
//! - [`selection`]: tournament selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Beasley & Chu (1996), "A genetic algorithm for the set covering problem"

mod config;
pub mod operators;
mod problem;
mod runner;
pub mod selection;
mod types;

pub use config::{GaConfig, InitStrategy, MutationStrategy};
pub use problem::{QbfProblem, SetCoverProblem};
pub use runner::{GaResult, GaRunner, GenerationReport};
pub use types::{Chromosome, GaProblem, Individual};
