//! Evolutionary algorithms
//!
//! This module provides the generational evolver that drives a run to convergence.

pub mod evolver;

pub mod prelude {
    pub use super::evolver::{Evolver, EvolverBuilder, EvolverConfig};
}
