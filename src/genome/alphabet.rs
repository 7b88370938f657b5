//! The fixed symbol alphabet
//!
//! Every symbol that ever appears in a genome is drawn from this set.

use rand::Rng;

const SYMBOLS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J',
    'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', ',',
    '.', '?', '!',
];

/// Ordered set of allowed genome symbols
///
/// Lowercase and uppercase ASCII letters, space, and the punctuation `, . ? !`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Alphabet;

impl Alphabet {
    /// All symbols, in order
    pub fn symbols() -> &'static [char] {
        SYMBOLS
    }

    /// Number of symbols
    pub fn len() -> usize {
        SYMBOLS.len()
    }

    /// Check if a symbol belongs to the alphabet
    pub fn contains(symbol: char) -> bool {
        SYMBOLS.contains(&symbol)
    }

    /// Draw a symbol uniformly at random
    pub fn sample<R: Rng>(rng: &mut R) -> char {
        SYMBOLS[rng.gen_range(0..SYMBOLS.len())]
    }
}
