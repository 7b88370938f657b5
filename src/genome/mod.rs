//! Genome representation
//!
//! This module provides the fixed alphabet, the target string, and the
//! `StringGenome` type evolved toward it.

pub mod alphabet;
pub mod string_genome;
pub mod target;

pub mod prelude {
    pub use super::alphabet::*;
    pub use super::string_genome::*;
    pub use super::target::*;
}
