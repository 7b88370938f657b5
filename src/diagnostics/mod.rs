//! Diagnostics and statistics
//!
//! This module provides per-generation statistics and the summary of a run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::genome::string_genome::StringGenome;
use crate::population::generation::Generation;

/// Statistics for a single generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number
    pub generation: usize,
    /// Best fitness in this generation
    pub best_fitness: f64,
    /// Mean fitness
    pub mean_fitness: f64,
    /// Worst fitness in this generation
    pub worst_fitness: f64,
    /// Average pairwise Hamming distance
    pub diversity: f64,
    /// Rendering of the best candidate
    pub best: String,
}

impl GenerationStats {
    /// Compute statistics from a generation
    pub fn from_generation(population: &Generation, generation: usize) -> Self {
        Self {
            generation,
            best_fitness: population.max_fitness(),
            mean_fitness: population.mean_fitness().unwrap_or(0.0),
            worst_fitness: population.min_fitness().unwrap_or(0.0),
            diversity: population.diversity(),
            best: population
                .best()
                .map(|c| c.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Result of an evolution run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvolutionResult {
    /// Best genome of the final generation
    pub best_genome: StringGenome,
    /// Its fitness
    pub best_fitness: f64,
    /// Index of the final generation
    pub generations: usize,
    /// Whether the convergence threshold was reached
    pub converged: bool,
    /// Reason the loop stopped
    pub termination_reason: String,
    /// Statistics per generation, starting at generation 0 (empty when not recorded)
    pub history: Vec<GenerationStats>,
    /// Total runtime in milliseconds
    pub runtime_ms: f64,
}

impl EvolutionResult {
    /// Set the total runtime
    pub fn with_runtime(mut self, duration: Duration) -> Self {
        self.runtime_ms = duration.as_secs_f64() * 1000.0;
        self
    }

    /// History of best fitness values
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.history.iter().map(|g| g.best_fitness).collect()
    }

    /// Get a summary of the evolution run
    pub fn summary(&self) -> String {
        format!(
            "Evolution Summary:\n\
             - Generations: {}\n\
             - Best: {}\n\
             - Best fitness: {:.4}\n\
             - Runtime: {:.2}ms\n\
             - Termination: {}",
            self.generations,
            self.best_genome,
            self.best_fitness,
            self.runtime_ms,
            self.termination_reason
        )
    }
}

pub mod prelude {
    pub use super::{EvolutionResult, GenerationStats};
}
