//! Generation type
//!
//! This module provides the fixed-size population of candidates at one point in evolutionary time.

use std::cell::OnceCell;

use rand::Rng;

use crate::error::{EvoResult, EvolutionError};
use crate::genome::target::Target;
use crate::operators::selection::ParentPool;
use crate::population::candidate::{Candidate, DEFAULT_MUTATION_RATE};

/// Best fitness at or above which a generation counts as converged
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 0.99;

/// A population of candidates sharing one target
///
/// Candidates are never mutated after construction, so the cached maximum
/// fitness stays valid for the lifetime of the generation.
#[derive(Clone, Debug)]
pub struct Generation {
    candidates: Vec<Candidate>,
    target: Target,
    max_fitness: OnceCell<f64>,
}

impl Generation {
    /// Create a generation of `size` independently random candidates
    pub fn seed_random<R: Rng>(size: usize, target: &Target, rng: &mut R) -> Self {
        let candidates = (0..size)
            .map(|_| Candidate::random(target.clone(), rng))
            .collect();
        Self::from_candidates(candidates, target.clone())
    }

    /// Breed a generation from `previous` at [`DEFAULT_MUTATION_RATE`]
    pub fn breed_from<R: Rng>(
        previous: &Generation,
        size: usize,
        target: &Target,
        rng: &mut R,
    ) -> EvoResult<Self> {
        Self::breed_from_with_rate(previous, size, target, DEFAULT_MUTATION_RATE, rng)
    }

    /// Breed a generation from `previous`
    ///
    /// Each child recombines two parents drawn with replacement from the
    /// fitness-weighted [`ParentPool`], then receives exactly one mutation pass.
    pub fn breed_from_with_rate<R: Rng>(
        previous: &Generation,
        size: usize,
        target: &Target,
        mutation_rate: f64,
        rng: &mut R,
    ) -> EvoResult<Self> {
        let pool = ParentPool::new(&previous.candidates, previous.max_fitness());

        let mut candidates = Vec::with_capacity(size);
        for _ in 0..size {
            let first = pool.choose(rng).ok_or(EvolutionError::EmptyPopulation)?;
            let second = pool.choose(rng).ok_or(EvolutionError::EmptyPopulation)?;

            let mut child = Candidate::from_parents(first, second, target.clone(), rng)?;
            child.mutate_with_rate(mutation_rate, rng);
            candidates.push(child);
        }

        Ok(Self::from_candidates(candidates, target.clone()))
    }

    /// Create a generation from existing candidates
    pub fn from_candidates(candidates: Vec<Candidate>, target: Target) -> Self {
        Self {
            candidates,
            target,
            max_fitness: OnceCell::new(),
        }
    }

    /// Highest fitness among the candidates (0 for an empty generation)
    pub fn max_fitness(&self) -> f64 {
        *self.max_fitness.get_or_init(|| {
            self.candidates
                .iter()
                .map(Candidate::fitness)
                .fold(0.0, f64::max)
        })
    }

    /// Check if the best candidate reaches `threshold`
    ///
    /// Only the single best candidate is considered, not the whole population.
    pub fn has_converged(&self, threshold: f64) -> bool {
        self.max_fitness() >= threshold
    }

    /// Get the best candidate (first one on ties)
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates.iter().reduce(|best, c| {
            if c.fitness() > best.fitness() {
                c
            } else {
                best
            }
        })
    }

    /// Lowest fitness among the candidates
    pub fn min_fitness(&self) -> Option<f64> {
        self.candidates
            .iter()
            .map(Candidate::fitness)
            .reduce(f64::min)
    }

    /// Mean fitness of the candidates
    pub fn mean_fitness(&self) -> Option<f64> {
        if self.candidates.is_empty() {
            return None;
        }
        let total: f64 = self.candidates.iter().map(Candidate::fitness).sum();
        Some(total / self.candidates.len() as f64)
    }

    /// Average pairwise Hamming distance between genomes
    pub fn diversity(&self) -> f64 {
        if self.len() < 2 {
            return 0.0;
        }

        let mut total_distance = 0usize;
        let mut count = 0usize;
        for i in 0..self.len() {
            for j in (i + 1)..self.len() {
                total_distance += self.candidates[i]
                    .genome()
                    .hamming_distance(self.candidates[j].genome());
                count += 1;
            }
        }

        total_distance as f64 / count as f64
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Check if the generation is empty
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Get an iterator over the candidates
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    /// Get the underlying candidates
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Get the shared target
    pub fn target(&self) -> &Target {
        &self.target
    }
}

impl std::ops::Index<usize> for Generation {
    type Output = Candidate;

    fn index(&self, index: usize) -> &Self::Output {
        &self.candidates[index]
    }
}

impl<'a> IntoIterator for &'a Generation {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

/// One line per candidate, each terminated by a newline
impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for candidate in &self.candidates {
            writeln!(f, "{}", candidate)?;
        }
        Ok(())
    }
}
