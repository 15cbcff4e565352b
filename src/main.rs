//! qbf-sc-ga: genetic algorithm for MAX-SC-QBF instances.
//!
//! Reads an instance file, runs the GA and prints the best cover found
//! together with its coverage statistics.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use qbf_sc_ga::ga::{GaConfig, GaRunner, InitStrategy, MutationStrategy, SetCoverProblem};
use qbf_sc_ga::Instance;
use std::path::PathBuf;
use tracing::info;

const RULE: &str = "======================================================================";

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "qbf-sc-ga")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Instance file
    #[arg(value_name = "FILE")]
    instance: PathBuf,
    /// Number of generations
    #[arg(short, long, default_value_t = 1000)]
    generations: usize,
    /// Population size
    #[arg(short, long, default_value_t = 100)]
    population: usize,
    /// Per-gene mutation probability
    #[arg(short, long, default_value_t = 0.01)]
    mutation_rate: f64,
    /// Random seed
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
    /// Initial population sampling
    #[arg(short, long, value_enum, default_value_t = Init::Random)]
    init: Init,
    /// Decay the mutation rate linearly from 0.1 to 0.001
    #[arg(long)]
    adaptive: bool,
    /// Tournament size
    #[arg(short, long, default_value_t = 2)]
    tournament: usize,
    /// Wall-clock limit in milliseconds
    #[arg(long, value_name = "MS")]
    time_limit_ms: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Init {
    Random,
    LatinHypercube,
    Greedy,
}

impl From<Init> for InitStrategy {
    fn from(init: Init) -> Self {
        match init {
            Init::Random => InitStrategy::Random,
            Init::LatinHypercube => InitStrategy::LatinHypercube,
            Init::Greedy => InitStrategy::Greedy,
        }
    }
}

impl Args {
    fn config(&self) -> GaConfig {
        let mut config = GaConfig::default()
            .with_generations(self.generations)
            .with_population_size(self.population)
            .with_mutation_rate(self.mutation_rate)
            .with_init_strategy(self.init.into())
            .with_tournament_size(self.tournament)
            .with_seed(self.seed);
        if self.adaptive {
            config = config.with_mutation_strategy(MutationStrategy::adaptive());
        }
        if let Some(ms) = self.time_limit_ms {
            config = config.with_time_limit_ms(ms);
        }
        config
    }
}

/// Mutation rate as the run will apply it.
fn mutation_summary(config: &GaConfig) -> String {
    match config.mutation_strategy {
        MutationStrategy::Fixed => format!("{}", config.mutation_rate),
        MutationStrategy::Adaptive {
            initial,
            final_rate,
        } => format!("{initial} -> {final_rate} (adaptive)"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let instance = Instance::from_file(&args.instance)
        .with_context(|| format!("failed to load instance {}", args.instance.display()))?;
    let config = args.config();
    config.validate()?;
    info!(path = %args.instance.display(), n = instance.size(), "instance loaded");

    println!("{RULE}");
    println!("Genetic Algorithm for QBF with Set Cover");
    println!("{RULE}");
    println!("Instance:      {}", args.instance.display());
    println!("Generations:   {}", config.generations);
    println!("Pop Size:      {}", config.population_size);
    println!("Mutation Rate: {}", mutation_summary(&config));
    println!("{RULE}");

    let problem = SetCoverProblem::new(&instance);
    let result = GaRunner::run(&problem, &config)?;
    let best = &result.best;
    let coverage = problem.evaluator().coverage(best);

    println!();
    println!("{RULE}");
    println!("Final Results");
    println!("{RULE}");
    println!("Best Solution: {best}");
    println!("Cost:          {}", best.cost());
    println!("Size:          {} variables selected", best.len());
    println!("Feasible:      {}", coverage.is_feasible());
    println!("Time:          {:.2} seconds", result.elapsed.as_secs_f64());
    if result.timed_out {
        println!("Stopped:       time limit after {} generations", result.generations);
    }

    println!();
    if coverage.is_feasible() {
        let stats = coverage.stats();
        let removable = coverage.removable_variables(best.iter());
        println!("Solution Statistics:");
        println!("  Coverage:");
        println!("    - Min: {}", stats.min);
        println!("    - Max: {}", stats.max);
        println!("    - Avg: {:.2}", stats.mean);
        println!("  Removable variables: {}", removable.len());
    } else {
        println!("WARNING: Solution is INFEASIBLE!");
        println!("  Uncovered elements: {}", coverage.uncovered_count());
    }
    println!("{RULE}");

    Ok(())
}
