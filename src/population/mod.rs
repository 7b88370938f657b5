//! Population management
//!
//! This module provides the Candidate and Generation types.

pub mod candidate;
pub mod generation;

pub mod prelude {
    pub use super::candidate::*;
    pub use super::generation::*;
}
