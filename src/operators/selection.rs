//! Parent selection
//!
//! This module provides the fitness-weighted parent pool used for breeding.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::population::candidate::Candidate;

/// Floor applied to the generation's best fitness before weighting
pub const MIN_WEIGHT_DIVISOR: f64 = 0.1;

/// Weighted pool of parents drawn from a previous generation
///
/// Each candidate appears `floor(fitness / max(best_fitness, 0.1))` times, so
/// candidates well below the best contribute no copies. When every weight
/// rounds down to zero the pool falls back to each candidate once.
#[derive(Debug)]
pub struct ParentPool<'a> {
    parents: Vec<&'a Candidate>,
    weighted: bool,
}

impl<'a> ParentPool<'a> {
    /// Build the pool from candidates and their best fitness
    pub fn new(candidates: &'a [Candidate], best_fitness: f64) -> Self {
        let divisor = best_fitness.max(MIN_WEIGHT_DIVISOR);

        let parents: Vec<&Candidate> = candidates
            .iter()
            .flat_map(|c| {
                let copies = (c.fitness() / divisor).floor() as usize;
                std::iter::repeat(c).take(copies)
            })
            .collect();

        if parents.is_empty() {
            log::trace!("all parent weights rounded to zero, using unweighted pool");
            Self {
                parents: candidates.iter().collect(),
                weighted: false,
            }
        } else {
            Self {
                parents,
                weighted: true,
            }
        }
    }

    /// Draw one parent uniformly, with replacement
    ///
    /// Returns `None` only if the pool was built from no candidates.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Option<&'a Candidate> {
        self.parents.choose(rng).copied()
    }

    /// Number of entries in the pool, counting copies
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Check if the pool has no entries
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Whether the fitness weighting produced the pool, or the unweighted fallback did
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }
}
