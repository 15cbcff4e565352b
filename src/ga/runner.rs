//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the generational process:
//! initialization → repair/evaluation → tournament selection →
//! two-point crossover → bit-flip mutation → repair/evaluation →
//! elitist replacement → repeat.

use super::config::{GaConfig, InitStrategy};
use super::operators::{
    bit_flip_mutation, greedy_chromosome, latin_hypercube, random_chromosome, two_point_crossover,
};
use super::selection::mating_pool;
use super::types::{Chromosome, GaProblem, Individual};
use crate::error::Result;
use crate::evaluator::FitnessRecord;
use crate::random::{create_rng, resolve_seed};
use crate::solution::Solution;
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Snapshot of the incumbent after one generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    /// 0 for the initial population.
    pub generation: usize,
    pub fitness: FitnessRecord,
    pub cost: f64,
    pub size: usize,
    pub selected: Vec<usize>,
    pub mutation_rate: f64,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Decoded best individual, with cost set.
    pub best: Solution,

    pub best_chromosome: Chromosome,

    pub best_fitness: FitnessRecord,

    /// Generations executed after the initial population.
    pub generations: usize,

    /// Best-ever penalized fitness, initial population first.
    pub fitness_history: Vec<f64>,

    pub elapsed: Duration,

    /// Whether the run stopped on `time_limit_ms`.
    pub timed_out: bool,

    /// Seed the run was started from.
    pub seed: u64,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use qbf_sc_ga::ga::{GaConfig, GaRunner, SetCoverProblem};
/// use qbf_sc_ga::instance::Instance;
///
/// let instance = Instance::parse("2\n1 2\n1\n1 2\n1 0\n1\n")?;
/// let problem = SetCoverProblem::new(&instance);
/// let config = GaConfig::default()
///     .with_population_size(10)
///     .with_generations(20)
///     .with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// assert!(result.best_fitness.is_feasible());
/// # Ok::<(), qbf_sc_ga::QbfScError>(())
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Errors
    /// [`QbfScError::InvalidConfig`](crate::QbfScError::InvalidConfig) if
    /// the configuration does not validate; any error raised by
    /// [`GaProblem::repair`].
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_observer(problem, config, |_| {})
    }

    /// Runs the GA, calling `observer` once for the initial population and
    /// once after every generation.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            variables = problem.chromosome_len(),
            population = config.population_size,
            generations = config.generations,
        )
    )]
    pub fn run_with_observer<P, F>(problem: &P, config: &GaConfig, mut observer: F) -> Result<GaResult>
    where
        P: GaProblem,
        F: FnMut(&GenerationReport),
    {
        config.validate()?;

        let seed = resolve_seed(config.seed);
        let mut rng = create_rng(seed);
        let start = Instant::now();
        let time_limit = config.time_limit_ms.map(Duration::from_millis);
        info!(seed, "starting GA run");

        // 1. Initialize and evaluate
        let initial = initial_population(problem, config, &mut rng)?;
        let mut population = evaluate_all(problem, initial)?;

        // 2. Track best
        let mut best = population[fittest(&population)].clone();
        let mut best_solution = problem.decode(&best.chromosome);
        let mut fitness_history = Vec::new();
        fitness_history.push(best.penalized());
        observer(&report(0, &best, &best_solution, config.mutation_rate_at(0)));

        let mut generations = 0;
        let mut timed_out = false;

        // 3. Evolutionary loop
        for generation in 1..=config.generations {
            if time_limit.is_some_and(|limit| start.elapsed() >= limit) {
                timed_out = true;
                info!(generation, "time limit reached");
                break;
            }

            let rate = config.mutation_rate_at(generation);
            let offspring = breed(&population, config, rate, &mut rng);
            let mut next = evaluate_all(problem, offspring)?;
            preserve_elite(&mut next, &best);

            let gen_best = &next[fittest(&next)];
            if gen_best.penalized() > best.penalized() {
                best = gen_best.clone();
                best_solution = problem.decode(&best.chromosome);
                info!(
                    generation,
                    fitness = best.penalized(),
                    size = best_solution.len(),
                    "new best"
                );
            }

            population = next;
            generations = generation;
            fitness_history.push(best.penalized());

            debug!(generation, best = best.penalized(), mutation_rate = rate);
            observer(&report(generation, &best, &best_solution, rate));
        }

        let elapsed = start.elapsed();
        info!(
            generations,
            fitness = best.penalized(),
            elapsed_ms = elapsed.as_millis() as u64,
            "GA run finished"
        );

        Ok(GaResult {
            best: best_solution,
            best_fitness: best.fitness,
            best_chromosome: best.chromosome,
            generations,
            fitness_history,
            elapsed,
            timed_out,
            seed,
        })
    }
}

fn initial_population<P: GaProblem, R: Rng>(
    problem: &P,
    config: &GaConfig,
    rng: &mut R,
) -> Result<Vec<Chromosome>> {
    let len = problem.chromosome_len();
    let size = config.population_size;
    match config.init_strategy {
        InitStrategy::Random => Ok((0..size).map(|_| random_chromosome(len, rng)).collect()),
        InitStrategy::LatinHypercube => Ok(latin_hypercube(size, len, rng)),
        InitStrategy::Greedy => (0..size).map(|_| greedy_chromosome(problem, rng)).collect(),
    }
}

/// Repairs then scores every chromosome.
fn evaluate_all<P: GaProblem>(problem: &P, chromosomes: Vec<Chromosome>) -> Result<Vec<Individual>> {
    chromosomes
        .into_iter()
        .map(|mut chromosome| {
            problem.repair(&mut chromosome)?;
            let fitness = problem.fitness(&chromosome);
            Ok(Individual {
                chromosome,
                fitness,
            })
        })
        .collect()
}

/// Selection, crossover of consecutive pool pairs, then mutation.
fn breed<R: Rng>(
    population: &[Individual],
    config: &GaConfig,
    mutation_rate: f64,
    rng: &mut R,
) -> Vec<Chromosome> {
    let pool = mating_pool(population, config.population_size, config.tournament_size, rng);
    let mut offspring = Vec::with_capacity(pool.len());

    let mut pairs = pool.chunks_exact(2);
    for pair in &mut pairs {
        let (c1, c2) = two_point_crossover(
            &population[pair[0]].chromosome,
            &population[pair[1]].chromosome,
            rng,
        );
        offspring.push(c1);
        offspring.push(c2);
    }
    if let &[last] = pairs.remainder() {
        offspring.push(population[last].chromosome.clone());
    }

    for child in &mut offspring {
        bit_flip_mutation(child, mutation_rate, rng);
    }
    offspring
}

/// Puts the incumbent in place of the worst offspring if it is better.
fn preserve_elite(population: &mut [Individual], best: &Individual) {
    let worst = population
        .iter()
        .enumerate()
        .fold(0, |worst, (i, ind)| {
            if ind.penalized() < population[worst].penalized() {
                i
            } else {
                worst
            }
        });
    if population[worst].penalized() < best.penalized() {
        population[worst] = best.clone();
    }
}

/// Index of the highest penalized fitness; the first one on ties.
fn fittest(population: &[Individual]) -> usize {
    population
        .iter()
        .enumerate()
        .fold(0, |best, (i, ind)| {
            if ind.penalized() > population[best].penalized() {
                i
            } else {
                best
            }
        })
}

fn report(
    generation: usize,
    best: &Individual,
    solution: &Solution,
    mutation_rate: f64,
) -> GenerationReport {
    GenerationReport {
        generation,
        fitness: best.fitness,
        cost: solution.cost(),
        size: solution.len(),
        selected: solution.to_vec(),
        mutation_rate,
    }
}

// ============================================================================
// Tests
// ============================================================================
