//! Permutation: a bijection on alphabet indices given in cycle notation.
//!
//! The cycle text is parsed once into a forward and an inverse table of
//! length `alphabet.size()`, so every lookup is a single array read.

use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::error::{EnigmaError, Result};

/// Permutation of the indices of an [`Alphabet`].
///
/// Symbols that appear in no cycle are fixed points.
#[derive(Debug, Clone)]
pub struct Permutation {
    alphabet: Arc<Alphabet>,
    forward: Vec<usize>,
    inverse: Vec<usize>,
}

impl Permutation {
    /// Parses `cycles`, a string of the form `"(cccc) (cc) ..."`, over
    /// `alphabet`.
    ///
    /// Whitespace anywhere is ignored. A singleton group `(c)` is the same as
    /// leaving `c` out, and an empty string yields the identity.
    ///
    /// # Errors
    /// - [`EnigmaError::MalformedCycleSpec`] for unbalanced or nested
    ///   parentheses, a symbol outside any group, or a symbol used twice.
    /// - [`EnigmaError::InvalidSymbol`] for a symbol missing from `alphabet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use enigma::{Alphabet, Permutation};
    ///
    /// let alpha = Arc::new(Alphabet::new("ABCD").unwrap());
    /// let perm = Permutation::new("(BACD)", alpha).unwrap();
    /// assert_eq!(perm.permute_symbol('B').unwrap(), 'A');
    /// assert_eq!(perm.permute_symbol('D').unwrap(), 'B');
    /// assert_eq!(perm.invert_symbol('B').unwrap(), 'D');
    /// ```
    pub fn new(cycles: &str, alphabet: Arc<Alphabet>) -> Result<Self> {
        Self::check_groups(cycles)?;

        let size = alphabet.size();
        let mut forward: Vec<usize> = (0..size).collect();
        let mut seen = vec![false; size];

        // Groups are balanced and flat here: each piece after a '(' holds
        // one group's members up to its ')'.
        for piece in cycles.split('(').skip(1) {
            let body = piece.split(')').next().unwrap_or_default();
            let mut members = Vec::new();
            for symbol in body.chars().filter(|c| !c.is_whitespace()) {
                let index = alphabet.to_index(symbol)?;
                if seen[index] {
                    return Err(EnigmaError::malformed_cycles(
                        cycles,
                        format!("symbol '{}' appears in more than one position", symbol),
                    ));
                }
                seen[index] = true;
                members.push(index);
            }
            Self::close_cycle(&members, &mut forward);
        }

        let mut inverse = vec![0usize; size];
        for (from, &to) in forward.iter().enumerate() {
            inverse[to] = from;
        }

        Ok(Permutation {
            alphabet,
            forward,
            inverse,
        })
    }

    /// Identity permutation over `alphabet`.
    pub fn identity(alphabet: Arc<Alphabet>) -> Self {
        let size = alphabet.size();
        Permutation {
            alphabet,
            forward: (0..size).collect(),
            inverse: (0..size).collect(),
        }
    }

    /// Checks the group structure alone: no nesting, no unmatched or
    /// unclosed parenthesis, no symbol outside a group.
    fn check_groups(cycles: &str) -> Result<()> {
        let mut open = false;
        for ch in cycles.chars().filter(|c| !c.is_whitespace()) {
            match (ch, open) {
                ('(', true) => return Err(EnigmaError::malformed_cycles(cycles, "nested '('")),
                ('(', false) => open = true,
                (')', true) => open = false,
                (')', false) => {
                    return Err(EnigmaError::malformed_cycles(cycles, "unmatched ')'"));
                }
                (symbol, false) => {
                    return Err(EnigmaError::malformed_cycles(
                        cycles,
                        format!("symbol '{}' outside of a cycle", symbol),
                    ));
                }
                (_, true) => {}
            }
        }
        if open {
            return Err(EnigmaError::malformed_cycles(cycles, "unclosed '('"));
        }
        Ok(())
    }

    /// Links each member of a cycle to its successor, the last to the first.
    fn close_cycle(members: &[usize], forward: &mut [usize]) {
        for (pos, &from) in members.iter().enumerate() {
            forward[from] = members[(pos + 1) % members.len()];
        }
    }

    /// Returns the size of the alphabet permuted.
    pub fn size(&self) -> usize {
        self.forward.len()
    }

    /// Returns the alphabet this permutation is defined over.
    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    /// Returns the image of `index`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::IndexOutOfRange`] if `index >= size()`.
    pub fn permute(&self, index: usize) -> Result<usize> {
        self.forward
            .get(index)
            .copied()
            .ok_or(EnigmaError::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    /// Returns the preimage of `index`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::IndexOutOfRange`] if `index >= size()`.
    pub fn invert(&self, index: usize) -> Result<usize> {
        self.inverse
            .get(index)
            .copied()
            .ok_or(EnigmaError::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    /// Applies the permutation to `symbol`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSymbol`] if `symbol` is not in the alphabet.
    pub fn permute_symbol(&self, symbol: char) -> Result<char> {
        let index = self.alphabet.to_index(symbol)?;
        self.alphabet.to_symbol(self.forward[index])
    }

    /// Applies the inverse permutation to `symbol`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSymbol`] if `symbol` is not in the alphabet.
    pub fn invert_symbol(&self, symbol: char) -> Result<char> {
        let index = self.alphabet.to_index(symbol)?;
        self.alphabet.to_symbol(self.inverse[index])
    }

    /// Returns true iff no index maps to itself.
    pub fn is_derangement(&self) -> bool {
        self.forward
            .iter()
            .enumerate()
            .all(|(from, &to)| from != to)
    }

    /// Table lookup for indices already known to be in range.
    pub(crate) fn forward_unchecked(&self, index: usize) -> usize {
        self.forward[index]
    }

    /// Inverse table lookup for indices already known to be in range.
    pub(crate) fn inverse_unchecked(&self, index: usize) -> usize {
        self.inverse[index]
    }
}
