use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use string_evo::prelude::*;

/// Evolve random strings until one matches the target.
///
/// Prints every generation, one candidate per line, then the generation at
/// which the target was reached. Generation 0 is the random seed, so the
/// reported number counts bred generations only.
#[derive(Parser, Debug)]
#[command(name = "string-evo")]
#[command(
    author,
    version,
    about = "Evolves random strings toward a target string",
    after_help = "The reported generation is the index of the first converged bred generation; the random seed population is generation 0."
)]
struct Cli {
    /// String to evolve toward
    #[arg(default_value = "logos")]
    target: String,

    /// Population size of every generation
    #[arg(short = 'n', long, default_value = "15")]
    size: usize,

    /// Random seed (default: seeded from the OS)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many bred generations even without convergence
    #[arg(short = 'g', long)]
    max_generations: Option<usize>,

    /// Best fitness at which the run stops
    #[arg(long, default_value_t = DEFAULT_CONVERGENCE_THRESHOLD)]
    threshold: f64,

    /// Per-position mutation probability
    #[arg(long, default_value_t = DEFAULT_MUTATION_RATE)]
    mutation_rate: f64,

    /// Do not print intermediate generations
    #[arg(short, long)]
    quiet: bool,

    /// Print the final result as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let target = Target::new(&cli.target).context("Invalid target")?;
    let config = EvolverConfig {
        population_size: cli.size,
        convergence_threshold: cli.threshold,
        mutation_rate: cli.mutation_rate,
        max_generations: cli.max_generations,
        record_history: cli.json,
    };
    let evolver = Evolver::new(config, target).context("Invalid configuration")?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let show_progress = !cli.quiet && !cli.json;
    let mut last_rendering = String::new();
    let result = evolver.run_with_observer(&mut rng, |_, population| {
        last_rendering = population.to_string();
        if show_progress {
            println!("{}", last_rendering);
        }
    })?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if cli.quiet {
        print!("{}", last_rendering);
    }
    if result.converged {
        println!("Generation: {}", result.generations);
    } else {
        println!(
            "Stopped at generation {} without converging (best {:?}, fitness {:.4})",
            result.generations,
            result.best_genome.to_string(),
            result.best_fitness
        );
    }

    Ok(())
}
