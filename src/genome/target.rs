//! Target string
//!
//! The immutable string every candidate is scored against.

use std::fmt;
use std::sync::Arc;

use crate::error::GenomeError;
use crate::genome::alphabet::Alphabet;

/// A non-empty target string shared by every candidate in a run
///
/// Cloning is cheap; all clones share one buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    symbols: Arc<[char]>,
}

impl Target {
    /// Create a target from a string
    ///
    /// Symbols outside the [`Alphabet`] are accepted but can never be matched.
    pub fn new(target: &str) -> Result<Self, GenomeError> {
        let symbols: Arc<[char]> = target.chars().collect();
        if symbols.is_empty() {
            return Err(GenomeError::EmptyTarget);
        }
        Ok(Self { symbols })
    }

    /// Number of symbols in the target
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the target is empty
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The target symbols
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of positions holding a symbol outside the alphabet
    pub fn unreachable_positions(&self) -> usize {
        self.symbols
            .iter()
            .filter(|&&s| !Alphabet::contains(s))
            .count()
    }

    /// Highest fitness any genome can reach against this target
    pub fn max_attainable_fitness(&self) -> f64 {
        (self.len() - self.unreachable_positions()) as f64 / self.len() as f64
    }
}

impl std::ops::Index<usize> for Target {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        &self.symbols[index]
    }
}

impl std::str::FromStr for Target {
    type Err = GenomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols.iter() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_new() {
        let target = Target::new("cat").unwrap();
        assert_eq!(target.len(), 3);
        assert!(!target.is_empty());
        assert_eq!(target.symbols(), &['c', 'a', 't']);
        assert_eq!(target[1], 'a');
        assert_eq!(target.to_string(), "cat");
    }

    #[test]
    fn test_target_empty_rejected() {
        assert_eq!(Target::new(""), Err(GenomeError::EmptyTarget));
    }

    #[test]
    fn test_target_unreachable_positions() {
        let target = Target::new("ab#1").unwrap();
        assert_eq!(target.unreachable_positions(), 2);
        assert_eq!(target.max_attainable_fitness(), 0.5);

        let target = Target::new("Hello, world!").unwrap();
        assert_eq!(target.unreachable_positions(), 0);
        assert_eq!(target.max_attainable_fitness(), 1.0);
    }

    #[test]
    fn test_target_clone_shares_buffer() {
        let target = Target::new("logos").unwrap();
        let clone = target.clone();
        assert!(Arc::ptr_eq(&target.symbols, &clone.symbols));
    }

    #[test]
    fn test_target_from_str() {
        let target: Target = "logos".parse().unwrap();
        assert_eq!(target.len(), 5);
    }
}
