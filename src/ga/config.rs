//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop,
//! together with the initialization and mutation-rate strategies.

use crate::error::{QbfScError, Result};

/// How the initial population is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitStrategy {
    /// Every gene is set independently with probability 0.5.
    #[default]
    Random,

    /// Latin-hypercube sampling per gene column.
    ///
    /// `[0, 1)` is cut into `population_size` strata; each column assigns
    /// the strata to individuals by a random permutation, draws one point
    /// per stratum and sets the gene when the point is `>= 0.5`. Every
    /// column is therefore exactly half ones (up to one stratum), spread
    /// evenly across the population.
    ///
    /// Reference: McKay, Beckman & Conover (1979)
    LatinHypercube,

    /// Greedy cover from the empty selection, then each remaining gene is
    /// switched on with probability [`GREEDY_EXTRA_RATE`](super::operators::GREEDY_EXTRA_RATE).
    Greedy,
}

/// Per-generation mutation rate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MutationStrategy {
    /// Constant [`GaConfig::mutation_rate`].
    #[default]
    Fixed,

    /// Linear decay: `rate(g) = initial * (1 - g/G) + final_rate * g/G`.
    ///
    /// Explores early, refines late. [`GaConfig::mutation_rate`] is
    /// ignored under this strategy.
    Adaptive {
        /// Rate at generation 0.
        initial: f64,
        /// Rate at the last generation.
        final_rate: f64,
    },
}

impl MutationStrategy {
    /// Linear decay from 0.1 to 0.001.
    pub fn adaptive() -> Self {
        MutationStrategy::Adaptive {
            initial: 0.1,
            final_rate: 0.001,
        }
    }

    /// Mutation rate for `generation` out of `total`.
    pub fn rate_at(&self, base_rate: f64, generation: usize, total: usize) -> f64 {
        match *self {
            MutationStrategy::Fixed => base_rate,
            MutationStrategy::Adaptive {
                initial,
                final_rate,
            } => {
                let progress = if total == 0 {
                    0.0
                } else {
                    (generation as f64 / total as f64).min(1.0)
                };
                initial * (1.0 - progress) + final_rate * progress
            }
        }
    }
}

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use qbf_sc_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use qbf_sc_ga::ga::{GaConfig, InitStrategy, MutationStrategy};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_init_strategy(InitStrategy::LatinHypercube)
///     .with_mutation_strategy(MutationStrategy::adaptive())
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. At least 2.
    pub population_size: usize,

    /// Number of generations after the initial one.
    pub generations: usize,

    /// Per-gene flip probability under [`MutationStrategy::Fixed`].
    ///
    /// Must lie in `[0, 1]`; builders do not clamp, [`validate`](Self::validate)
    /// rejects out-of-range values.
    pub mutation_rate: f64,

    pub init_strategy: InitStrategy,

    pub mutation_strategy: MutationStrategy,

    /// Individuals drawn per tournament. 2 is binary tournament.
    pub tournament_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed; the seed actually used is reported in
    /// the result.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked between generations, so a run may overshoot by one
    /// generation's worth of work. A run stopped by the limit is not
    /// reproducible from its seed alone.
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 1000,
            mutation_rate: 0.01,
            init_strategy: InitStrategy::Random,
            mutation_strategy: MutationStrategy::Fixed,
            tournament_size: 2,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_init_strategy(mut self, strategy: InitStrategy) -> Self {
        self.init_strategy = strategy;
        self
    }

    pub fn with_mutation_strategy(mut self, strategy: MutationStrategy) -> Self {
        self.mutation_strategy = strategy;
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Small population, few generations, 10s limit.
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            time_limit_ms: Some(10_000),
            ..Self::default()
        }
    }

    /// Moderate population and generations, 30s limit.
    pub fn balanced() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            time_limit_ms: Some(30_000),
            ..Self::default()
        }
    }

    /// Large population, adaptive mutation, 60s limit.
    pub fn quality() -> Self {
        Self {
            population_size: 150,
            generations: 2000,
            mutation_strategy: MutationStrategy::adaptive(),
            time_limit_ms: Some(60_000),
            ..Self::default()
        }
    }

    /// Picks a preset from the number of decision variables.
    ///
    /// - `n < 50` → [`fast()`](Self::fast)
    /// - `50 ≤ n < 200` → [`balanced()`](Self::balanced)
    /// - `n ≥ 200` → [`quality()`](Self::quality)
    pub fn auto_select(n: usize) -> Self {
        if n < 50 {
            Self::fast()
        } else if n < 200 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }

    /// Mutation rate in effect at `generation`.
    pub fn mutation_rate_at(&self, generation: usize) -> f64 {
        self.mutation_strategy
            .rate_at(self.mutation_rate, generation, self.generations)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`QbfScError::InvalidConfig`] describing the first invalid parameter.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(QbfScError::InvalidConfig(msg.into()));
        let in_unit = |x: f64| (0.0..=1.0).contains(&x);

        if self.population_size < 2 {
            return invalid("population_size must be at least 2");
        }
        if self.generations == 0 {
            return invalid("generations must be at least 1");
        }
        if !in_unit(self.mutation_rate) {
            return invalid("mutation_rate must lie in [0, 1]");
        }
        if let MutationStrategy::Adaptive {
            initial,
            final_rate,
        } = self.mutation_strategy
        {
            if !in_unit(initial) || !in_unit(final_rate) {
                return invalid("adaptive mutation rates must lie in [0, 1]");
            }
        }
        if self.tournament_size == 0 {
            return invalid("tournament_size must be at least 1");
        }
        if self.time_limit_ms == Some(0) {
            return invalid("time_limit_ms must be positive or None");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.generations, 1000);
        assert!((config.mutation_rate - 0.01).abs() < 1e-12);
        assert_eq!(config.init_strategy, InitStrategy::Random);
        assert_eq!(config.mutation_strategy, MutationStrategy::Fixed);
        assert_eq!(config.tournament_size, 2);
        assert!(config.seed.is_none());
        assert!(config.time_limit_ms.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_generations(50)
            .with_mutation_rate(0.05)
            .with_init_strategy(InitStrategy::Greedy)
            .with_tournament_size(3)
            .with_seed(42)
            .with_time_limit_ms(500);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.generations, 50);
        assert!((config.mutation_rate - 0.05).abs() < 1e-12);
        assert_eq!(config.init_strategy, InitStrategy::Greedy);
        assert_eq!(config.tournament_size, 3);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.time_limit_ms, Some(500));
    }

    #[test]
    fn test_validate_population_too_small() {
        let err = GaConfig::default().with_population_size(1).validate();
        assert!(matches!(err, Err(QbfScError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_zero_generations() {
        assert!(GaConfig::default().with_generations(0).validate().is_err());
    }

    #[test]
    fn test_validate_mutation_rate_range() {
        assert!(GaConfig::default().with_mutation_rate(-0.1).validate().is_err());
        assert!(GaConfig::default().with_mutation_rate(1.5).validate().is_err());
        assert!(GaConfig::default().with_mutation_rate(f64::NAN).validate().is_err());
        assert!(GaConfig::default().with_mutation_rate(0.0).validate().is_ok());
        assert!(GaConfig::default().with_mutation_rate(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_adaptive_rates() {
        let config = GaConfig::default().with_mutation_strategy(MutationStrategy::Adaptive {
            initial: 2.0,
            final_rate: 0.0,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_tournament_and_time_limit() {
        assert!(GaConfig::default().with_tournament_size(0).validate().is_err());
        assert!(GaConfig::default().with_time_limit_ms(0).validate().is_err());
    }

    #[test]
    fn test_fixed_rate_is_constant() {
        let config = GaConfig::default().with_mutation_rate(0.03);
        assert_eq!(config.mutation_rate_at(0), 0.03);
        assert_eq!(config.mutation_rate_at(999), 0.03);
    }

    #[test]
    fn test_adaptive_rate_decays_linearly() {
        let config = GaConfig::default()
            .with_generations(100)
            .with_mutation_strategy(MutationStrategy::adaptive());
        assert!((config.mutation_rate_at(0) - 0.1).abs() < 1e-12);
        assert!((config.mutation_rate_at(50) - 0.0505).abs() < 1e-12);
        assert!((config.mutation_rate_at(100) - 0.001).abs() < 1e-12);
        assert!(config.mutation_rate_at(10) > config.mutation_rate_at(90));
    }

    #[test]
    fn test_presets_validate() {
        for config in [GaConfig::fast(), GaConfig::balanced(), GaConfig::quality()] {
            assert!(config.validate().is_ok());
        }
        assert_eq!(GaConfig::auto_select(10).population_size, 50);
        assert_eq!(GaConfig::auto_select(50).population_size, 100);
        assert_eq!(GaConfig::auto_select(200).population_size, 150);
    }
}
