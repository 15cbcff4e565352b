//! Genetic algorithm for the maximum quadratic binary function with
//! set-cover constraints (MAX-SC-QBF).
//!
//! Given an upper-triangular coefficient matrix `A` and one covering set
//! per decision variable, find the binary vector `x` that maximizes
//! `x'Ax` while the selected sets together cover the universe `1..=n`.
//!
//! - **Instances** ([`instance`]): the coefficient matrix and covering
//!   sets, parsed from the plain-text instance format.
//! - **Evaluation** ([`evaluator`]): the quadratic objective, incremental
//!   move deltas and the penalized fitness record.
//! - **Coverage** ([`cover`]): incremental coverage bookkeeping and the
//!   greedy repair that turns any selection into a cover.
//! - **Genetic Algorithm** ([`ga`]): a seeded generational GA with
//!   tournament selection, two-point crossover, bit-flip mutation,
//!   repair-then-evaluate and single-elite replacement.
//!
//! # Example
//!
//! ```
//! use qbf_sc_ga::ga::{GaConfig, GaRunner, SetCoverProblem};
//! use qbf_sc_ga::Instance;
//!
//! let text = "3\n1\n2\n3\n1 2 3\n1 1\n-5\n";
//! let instance = Instance::parse(text)?;
//! let problem = SetCoverProblem::new(&instance);
//! let result = GaRunner::run(&problem, &GaConfig::fast().with_seed(1))?;
//! assert!(result.best_fitness.is_feasible());
//! # Ok::<(), qbf_sc_ga::QbfScError>(())
//! ```

pub mod cover;
pub mod error;
pub mod evaluator;
pub mod ga;
pub mod instance;
pub mod random;
pub mod solution;

pub use error::{QbfScError, Result};
pub use evaluator::{Evaluator, FitnessRecord, Qbf, QbfSc, PENALTY};
pub use instance::{CoefficientMatrix, Instance};
pub use solution::Solution;
