//! Error types for string-evo
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for genome and target construction
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenomeError {
    /// The target string has no symbols
    #[error("Target string must contain at least one symbol")]
    EmptyTarget,

    /// A symbol outside the fixed alphabet was supplied
    #[error("Symbol {symbol:?} at position {position} is not in the alphabet")]
    InvalidSymbol { symbol: char, position: usize },

    /// Malformed input to a genome operator
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Top-level error type for evolution operations
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// Genome error
    #[error("Genome error: {0}")]
    Genome(#[from] GenomeError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Empty population
    #[error("Empty population")]
    EmptyPopulation,
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;
