//! Generational string evolver
//!
//! This module implements the driver loop: seed generation 0 at random, then
//! breed each generation from the previous one until a termination criterion fires.

use std::time::Instant;

use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::diagnostics::{EvolutionResult, GenerationStats};
use crate::error::{EvoResult, EvolutionError};
use crate::genome::target::Target;
use crate::population::candidate::DEFAULT_MUTATION_RATE;
use crate::population::generation::{Generation, DEFAULT_CONVERGENCE_THRESHOLD};
use crate::termination::{
    AnyOf, Converged, EvolutionState, MaxGenerations, TerminationCriterion,
};

/// Configuration for the Evolver
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolverConfig {
    /// Population size of every generation
    pub population_size: usize,
    /// Best fitness at which the run stops
    pub convergence_threshold: f64,
    /// Per-position mutation probability for bred candidates
    pub mutation_rate: f64,
    /// Optional cap on the number of bred generations
    pub max_generations: Option<usize>,
    /// Whether to keep per-generation statistics in the result
    ///
    /// History grows by one entry per generation. With `max_generations`
    /// unset and an unreachable target it grows without bound, so long
    /// uncapped runs should disable it or use `run_with_observer`.
    pub record_history: bool,
}

impl Default for EvolverConfig {
    fn default() -> Self {
        Self {
            population_size: 15,
            convergence_threshold: DEFAULT_CONVERGENCE_THRESHOLD,
            mutation_rate: DEFAULT_MUTATION_RATE,
            max_generations: None,
            record_history: true,
        }
    }
}

impl EvolverConfig {
    /// Check that every field is in range
    pub fn validate(&self) -> EvoResult<()> {
        if self.population_size == 0 {
            return Err(EvolutionError::Configuration(
                "Population size must be at least 1".to_string(),
            ));
        }
        if !(self.convergence_threshold > 0.0 && self.convergence_threshold <= 1.0) {
            return Err(EvolutionError::Configuration(format!(
                "Convergence threshold must be in (0, 1], got {}",
                self.convergence_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(EvolutionError::Configuration(format!(
                "Mutation rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.max_generations == Some(0) {
            return Err(EvolutionError::Configuration(
                "Maximum generations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Evolver
#[derive(Clone, Debug, Default)]
pub struct EvolverBuilder {
    config: EvolverConfig,
}

impl EvolverBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: EvolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the convergence threshold
    pub fn convergence_threshold(mut self, threshold: f64) -> Self {
        self.config.convergence_threshold = threshold;
        self
    }

    /// Set the per-position mutation rate
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.config.mutation_rate = rate;
        self
    }

    /// Cap the number of bred generations
    pub fn max_generations(mut self, max: usize) -> Self {
        self.config.max_generations = Some(max);
        self
    }

    /// Enable or disable per-generation statistics in the result
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.config.record_history = enabled;
        self
    }

    /// Build the Evolver instance
    pub fn build(self, target: Target) -> EvoResult<Evolver> {
        Evolver::new(self.config, target)
    }
}

/// Evolves random strings toward a target
///
/// Generation 0 is random and is never tested for termination. Without a
/// generation cap the loop runs until convergence.
pub struct Evolver {
    config: EvolverConfig,
    target: Target,
    termination: AnyOf,
}

impl Evolver {
    /// Create a builder for Evolver
    pub fn builder() -> EvolverBuilder {
        EvolverBuilder::new()
    }

    /// Create an evolver from a validated configuration
    pub fn new(config: EvolverConfig, target: Target) -> EvoResult<Self> {
        config.validate()?;

        let attainable = target.max_attainable_fitness();
        if config.convergence_threshold > attainable {
            warn!(
                "Target has {} symbol(s) outside the alphabet; best attainable fitness {:.4} is below threshold {:.4}",
                target.unreachable_positions(),
                attainable,
                config.convergence_threshold
            );
        }

        let mut criteria: Vec<Box<dyn TerminationCriterion>> =
            vec![Box::new(Converged::new(config.convergence_threshold))];
        if let Some(max) = config.max_generations {
            criteria.push(Box::new(MaxGenerations::new(max)));
        }

        Ok(Self {
            config,
            target,
            termination: AnyOf::new(criteria),
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &EvolverConfig {
        &self.config
    }

    /// Get the target
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Run the evolver
    pub fn run<R: Rng>(&self, rng: &mut R) -> EvoResult<EvolutionResult> {
        self.run_with_observer(rng, |_, _| {})
    }

    /// Run the evolver, reporting every generation (including generation 0) to `observer`
    pub fn run_with_observer<R, O>(&self, rng: &mut R, mut observer: O) -> EvoResult<EvolutionResult>
    where
        R: Rng,
        O: FnMut(&GenerationStats, &Generation),
    {
        let start_time = Instant::now();
        let size = self.config.population_size;
        info!(
            "Evolving toward {:?} with population {} (threshold {}, mutation rate {})",
            self.target.to_string(),
            size,
            self.config.convergence_threshold,
            self.config.mutation_rate
        );

        let mut history = Vec::new();
        let mut population = Generation::seed_random(size, &self.target, rng);
        let mut generation = 0;
        self.record(&population, generation, &mut history, &mut observer);

        let reason = loop {
            population = Generation::breed_from_with_rate(
                &population,
                size,
                &self.target,
                self.config.mutation_rate,
                rng,
            )?;
            generation += 1;
            self.record(&population, generation, &mut history, &mut observer);

            let state = EvolutionState {
                generation,
                population: &population,
            };
            if let Some(criterion) = self.termination.triggered(&state) {
                break criterion.reason();
            }
        };

        let best = population.best().ok_or(EvolutionError::EmptyPopulation)?;
        let converged = population.has_converged(self.config.convergence_threshold);
        info!(
            "{} at generation {}: {:?} (fitness {:.4})",
            reason,
            generation,
            best.to_string(),
            best.fitness()
        );

        Ok(EvolutionResult {
            best_genome: best.genome().clone(),
            best_fitness: best.fitness(),
            generations: generation,
            converged,
            termination_reason: reason.to_string(),
            history,
            runtime_ms: 0.0,
        }
        .with_runtime(start_time.elapsed()))
    }

    fn record<O>(
        &self,
        population: &Generation,
        generation: usize,
        history: &mut Vec<GenerationStats>,
        observer: &mut O,
    ) where
        O: FnMut(&GenerationStats, &Generation),
    {
        let stats = GenerationStats::from_generation(population, generation);
        debug!(
            "gen {:>5}: best {:.4} mean {:.4} :: {}",
            generation, stats.best_fitness, stats.mean_fitness, stats.best
        );
        observer(&stats, population);
        if self.config.record_history {
            history.push(stats);
        }
    }
}
