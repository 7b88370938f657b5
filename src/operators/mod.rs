//! Genetic operators
//!
//! Crossover and mutation live on `StringGenome`; this module provides parent selection.

pub mod selection;

pub mod prelude {
    pub use super::selection::*;
}
