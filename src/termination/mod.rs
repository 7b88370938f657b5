//! Termination criteria
//!
//! This module provides the stopping rules checked after each bred generation.

use crate::population::generation::Generation;

/// Evolution state for termination checking
#[derive(Clone, Copy, Debug)]
pub struct EvolutionState<'a> {
    /// Index of the current generation (the random seed generation is 0)
    pub generation: usize,
    /// Reference to the current generation
    pub population: &'a Generation,
}

/// Termination criterion trait
pub trait TerminationCriterion {
    /// Check if evolution should terminate
    fn should_terminate(&self, state: &EvolutionState<'_>) -> bool;

    /// Get a description of why termination occurred
    fn reason(&self) -> &'static str;
}

/// Terminate once the best candidate reaches a fitness threshold
#[derive(Clone, Debug)]
pub struct Converged {
    /// Minimum best fitness
    pub threshold: f64,
}

impl Converged {
    /// Create a new convergence criterion
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl TerminationCriterion for Converged {
    fn should_terminate(&self, state: &EvolutionState<'_>) -> bool {
        state.population.has_converged(self.threshold)
    }

    fn reason(&self) -> &'static str {
        "Converged on target"
    }
}

/// Terminate after a maximum number of generations
#[derive(Clone, Debug)]
pub struct MaxGenerations(pub usize);

impl MaxGenerations {
    /// Create a new max generations criterion
    pub fn new(max: usize) -> Self {
        Self(max)
    }
}

impl TerminationCriterion for MaxGenerations {
    fn should_terminate(&self, state: &EvolutionState<'_>) -> bool {
        state.generation >= self.0
    }

    fn reason(&self) -> &'static str {
        "Maximum generations reached"
    }
}

/// Combine criteria with OR logic (any one triggers termination)
///
/// Criteria are checked in order; the first that fires supplies the reason.
pub struct AnyOf {
    criteria: Vec<Box<dyn TerminationCriterion>>,
}

impl AnyOf {
    /// Create a new AnyOf combinator
    pub fn new(criteria: Vec<Box<dyn TerminationCriterion>>) -> Self {
        Self { criteria }
    }

    /// The first criterion that fires for `state`, if any
    pub fn triggered(&self, state: &EvolutionState<'_>) -> Option<&dyn TerminationCriterion> {
        self.criteria
            .iter()
            .find(|c| c.should_terminate(state))
            .map(|c| &**c)
    }
}

impl TerminationCriterion for AnyOf {
    fn should_terminate(&self, state: &EvolutionState<'_>) -> bool {
        self.triggered(state).is_some()
    }

    fn reason(&self) -> &'static str {
        "One of multiple criteria met"
    }
}

pub mod prelude {
    pub use super::{AnyOf, Converged, EvolutionState, MaxGenerations, TerminationCriterion};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::string_genome::StringGenome;
    use crate::genome::target::Target;
    use crate::population::candidate::Candidate;

    fn population(genomes: &[&str], target: &str) -> Generation {
        let target = Target::new(target).unwrap();
        let candidates = genomes
            .iter()
            .map(|g| Candidate::new(StringGenome::parse(g).unwrap(), target.clone()))
            .collect();
        Generation::from_candidates(candidates, target)
    }

    #[test]
    fn test_converged() {
        let criterion = Converged::new(0.99);

        let pop = population(&["cax", "xxx"], "cat");
        let state = EvolutionState {
            generation: 3,
            population: &pop,
        };
        assert!(!criterion.should_terminate(&state));

        let pop = population(&["cat", "xxx"], "cat");
        let state = EvolutionState {
            generation: 3,
            population: &pop,
        };
        assert!(criterion.should_terminate(&state));
    }

    #[test]
    fn test_max_generations() {
        let criterion = MaxGenerations::new(100);
        let pop = population(&["xxx"], "cat");

        let state = EvolutionState {
            generation: 50,
            population: &pop,
        };
        assert!(!criterion.should_terminate(&state));

        let state = EvolutionState {
            generation: 100,
            population: &pop,
        };
        assert!(criterion.should_terminate(&state));
    }

    #[test]
    fn test_any_of() {
        let criterion = AnyOf::new(vec![
            Box::new(Converged::new(0.99)),
            Box::new(MaxGenerations::new(10)),
        ]);

        let poor = population(&["xxx"], "cat");
        let state = EvolutionState {
            generation: 5,
            population: &poor,
        };
        assert!(!criterion.should_terminate(&state));
        assert!(criterion.triggered(&state).is_none());

        let state = EvolutionState {
            generation: 10,
            population: &poor,
        };
        assert_eq!(
            criterion.triggered(&state).unwrap().reason(),
            "Maximum generations reached"
        );

        // Convergence is listed first, so it wins when both fire
        let exact = population(&["cat"], "cat");
        let state = EvolutionState {
            generation: 10,
            population: &exact,
        };
        assert_eq!(
            criterion.triggered(&state).unwrap().reason(),
            "Converged on target"
        );
    }

    #[test]
    fn test_any_of_empty() {
        let criterion = AnyOf::new(Vec::new());
        let pop = population(&["cat"], "cat");
        let state = EvolutionState {
            generation: 1,
            population: &pop,
        };
        assert!(!criterion.should_terminate(&state));
    }
}
