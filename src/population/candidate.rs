//! Candidate type
//!
//! This module provides the Candidate type that pairs a genome with the target it is scored against.

use std::cell::OnceCell;

use rand::Rng;

use crate::error::GenomeError;
use crate::genome::string_genome::StringGenome;
use crate::genome::target::Target;

/// Per-position mutation probability applied once to every bred candidate
pub const DEFAULT_MUTATION_RATE: f64 = 0.15;

/// A genome scored against a target string
///
/// Fitness is computed on first access and cached. Mutation clears the cache,
/// though in a normal run a candidate is mutated once before it is ever scored.
#[derive(Clone, Debug)]
pub struct Candidate {
    genome: StringGenome,
    target: Target,
    fitness: OnceCell<f64>,
}

impl Candidate {
    /// Wrap an existing genome
    pub fn new(genome: StringGenome, target: Target) -> Self {
        Self {
            genome,
            target,
            fitness: OnceCell::new(),
        }
    }

    /// Create a candidate with a random genome as long as the target
    pub fn random<R: Rng>(target: Target, rng: &mut R) -> Self {
        let genome = StringGenome::random(target.len(), rng);
        Self::new(genome, target)
    }

    /// Create a child by recombining two parents into a genome as long as the target
    pub fn from_parents<R: Rng>(
        first_parent: &Candidate,
        second_parent: &Candidate,
        target: Target,
        rng: &mut R,
    ) -> Result<Self, GenomeError> {
        let genome = StringGenome::recombine(
            &first_parent.genome,
            &second_parent.genome,
            target.len(),
            rng,
        )?;
        Ok(Self::new(genome, target))
    }

    /// Fraction of positions where the genome matches the target
    ///
    /// Only the first `min(target.len(), genome.len())` positions are compared;
    /// the count is divided by the genome length. An empty genome scores 0.
    pub fn fitness(&self) -> f64 {
        *self.fitness.get_or_init(|| {
            if self.genome.is_empty() {
                return 0.0;
            }
            let matches = self
                .genome
                .symbols()
                .iter()
                .zip(self.target.symbols())
                .filter(|(g, t)| g == t)
                .count();
            matches as f64 / self.genome.len() as f64
        })
    }

    /// Mutate the genome at [`DEFAULT_MUTATION_RATE`]
    pub fn mutate<R: Rng>(&mut self, rng: &mut R) {
        self.mutate_with_rate(DEFAULT_MUTATION_RATE, rng);
    }

    /// Mutate the genome at the given per-position rate
    pub fn mutate_with_rate<R: Rng>(&mut self, rate: f64, rng: &mut R) {
        self.genome.mutate(rate, rng);
        self.fitness = OnceCell::new();
    }

    /// Get a reference to the genome
    pub fn genome(&self) -> &StringGenome {
        &self.genome
    }

    /// Take the genome out of this candidate
    pub fn into_genome(self) -> StringGenome {
        self.genome
    }

    /// Get the target this candidate is scored against
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Check if the genome spells the target exactly
    pub fn matches_target(&self) -> bool {
        self.genome.symbols() == self.target.symbols()
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.genome)
    }
}
