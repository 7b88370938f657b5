//! String genome
//!
//! This module provides the fixed-length symbol sequence evolved toward a target string.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenomeError;
use crate::genome::alphabet::Alphabet;

/// Fixed-length sequence of alphabet symbols
///
/// A genome never changes length after construction. Every symbol it holds
/// belongs to the [`Alphabet`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StringGenome {
    symbols: Vec<char>,
}

impl StringGenome {
    /// Create a genome with `length` symbols drawn independently and uniformly
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        let symbols = (0..length).map(|_| Alphabet::sample(rng)).collect();
        Self { symbols }
    }

    /// Create a genome from explicit symbols, rejecting any outside the alphabet
    pub fn parse(symbols: &str) -> Result<Self, GenomeError> {
        let symbols = symbols
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                if Alphabet::contains(symbol) {
                    Ok(symbol)
                } else {
                    Err(GenomeError::InvalidSymbol { symbol, position })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { symbols })
    }

    /// Single-point crossover with random-fill padding
    ///
    /// The parents are ordered so the shorter one donates the head. A pivot is
    /// drawn uniformly from `0..first.len()`; positions up to and including the
    /// pivot come from the first parent, later ones from the second. Positions
    /// past the second parent's length are filled with fresh random symbols.
    pub fn recombine<R: Rng>(
        parent_a: &Self,
        parent_b: &Self,
        length: usize,
        rng: &mut R,
    ) -> Result<Self, GenomeError> {
        let (first, second) = if parent_b.len() < parent_a.len() {
            (parent_b, parent_a)
        } else {
            (parent_a, parent_b)
        };

        if first.is_empty() {
            return Err(GenomeError::InvalidArgument(
                "cannot recombine a zero-length parent".to_string(),
            ));
        }

        let pivot = rng.gen_range(0..first.len());
        let inherited = length.min(second.len());

        let mut symbols = Vec::with_capacity(length);
        symbols.extend((0..inherited).map(|i| {
            if i <= pivot {
                first.symbols[i]
            } else {
                second.symbols[i]
            }
        }));
        symbols.extend((inherited..length).map(|_| Alphabet::sample(rng)));

        Ok(Self { symbols })
    }

    /// Resample each position independently with probability `rate`
    pub fn mutate<R: Rng>(&mut self, rate: f64, rng: &mut R) {
        for symbol in &mut self.symbols {
            if rng.gen::<f64>() < rate {
                *symbol = Alphabet::sample(rng);
            }
        }
    }

    /// Get the length of the genome
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the genome is empty
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get the symbols as a slice
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Get a specific symbol
    pub fn get(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Number of positions at which two genomes differ
    ///
    /// Only the overlapping prefix is compared.
    pub fn hamming_distance(&self, other: &Self) -> usize {
        self.symbols
            .iter()
            .zip(other.symbols.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl std::ops::Index<usize> for StringGenome {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        &self.symbols[index]
    }
}

impl std::str::FromStr for StringGenome {
    type Err = GenomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for StringGenome {
    type Error = GenomeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StringGenome> for String {
    fn from(genome: StringGenome) -> Self {
        genome.symbols.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a StringGenome {
    type Item = &'a char;
    type IntoIter = std::slice::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

impl std::fmt::Display for StringGenome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
