//! # string-evo
//!
//! A genetic algorithm that evolves random character strings toward a target string.
//!
//! Each run starts from a generation of random strings. Every following
//! generation is bred from the previous one by fitness-weighted parent
//! selection, single-point crossover, and per-position mutation, until some
//! candidate matches the target closely enough.
//!
//! ## Core Concepts
//!
//! - **Genome**: a fixed-length sequence of symbols from a fixed [`Alphabet`](genome::alphabet::Alphabet)
//! - **Candidate**: a genome scored by the fraction of positions matching the target
//! - **Generation**: a fixed-size population that breeds the next one
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use string_evo::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let result = Evolver::builder()
//!     .population_size(15)
//!     .build(Target::new("logos")?)?
//!     .run(&mut rng)?;
//!
//! println!("{} after {} generations", result.best_genome, result.generations);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod algorithms;
pub mod diagnostics;
pub mod error;
pub mod genome;
pub mod operators;
pub mod population;
pub mod termination;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::genome::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
    pub use crate::termination::prelude::*;
}
