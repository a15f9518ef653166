//! Alphabet: ordered set of encodable symbols.
//!
//! Maps each symbol to a dense 0-based index and back. Built once per
//! machine configuration and shared read-only (behind an `Arc`) by every
//! permutation, rotor and machine that uses it.

use crate::error::{EnigmaError, Result};

/// Symbols of the default alphabet.
pub const DEFAULT_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Bijection between symbols and the indices `0..size()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Default for Alphabet {
    /// The 26 upper-case Latin letters.
    fn default() -> Self {
        Alphabet {
            symbols: DEFAULT_SYMBOLS.chars().collect(),
        }
    }
}

impl Alphabet {
    /// Creates an alphabet from the symbols of `chars`, in order.
    ///
    /// Repeated symbols are dropped silently; the first occurrence keeps its
    /// index.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Configuration`] if `chars` is empty or holds
    /// whitespace, which separates symbols everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Alphabet;
    ///
    /// let alpha = Alphabet::new("ABCA").unwrap();
    /// assert_eq!(alpha.size(), 3);
    /// assert_eq!(alpha.to_index('C').unwrap(), 2);
    /// ```
    pub fn new(chars: &str) -> Result<Self> {
        let mut symbols: Vec<char> = Vec::with_capacity(chars.len());
        for ch in chars.chars() {
            if ch.is_whitespace() {
                return Err(EnigmaError::configuration(
                    "alphabet must not contain whitespace",
                ));
            }
            if !symbols.contains(&ch) {
                symbols.push(ch);
            }
        }
        if symbols.is_empty() {
            return Err(EnigmaError::configuration("alphabet must not be empty"));
        }
        Ok(Alphabet { symbols })
    }

    /// Returns the number of symbols.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if `symbol` belongs to this alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Returns the index of `symbol`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSymbol`] if `symbol` is not a member.
    pub fn to_index(&self, symbol: char) -> Result<usize> {
        self.symbols
            .iter()
            .position(|&c| c == symbol)
            .ok_or(EnigmaError::InvalidSymbol { symbol })
    }

    /// Returns the symbol at `index`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::IndexOutOfRange`] if `index >= size()`.
    pub fn to_symbol(&self, index: usize) -> Result<char> {
        self.symbols
            .get(index)
            .copied()
            .ok_or(EnigmaError::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    /// Iterates over the symbols in index order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    /// Reduces `value` modulo the alphabet size into `0..size()`.
    pub(crate) fn wrap(&self, value: i64) -> usize {
        value.rem_euclid(self.size() as i64) as usize
    }
}
