//! Rotors: permutations with a rotating offset.
//!
//! A [`RotorSpec`] is the immutable description read from configuration
//! (name, wiring, kind) and may be shared between machines. A [`Rotor`] is
//! one machine's live instance of a spec: the shared spec plus its own
//! mutable setting.

use std::sync::Arc;

use crate::error::{EnigmaError, Result};
use crate::permutation::Permutation;

/// Stepping capability of a rotor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotorKind {
    /// Advances under a pawl. `notches` are the settings at which the rotor
    /// lets its left neighbour step.
    Moving { notches: Vec<usize> },
    /// Never advances.
    Fixed,
    /// Never advances and provides the return path of the signal.
    Reflector,
}

/// Immutable description of an available rotor.
#[derive(Debug, Clone)]
pub struct RotorSpec {
    name: String,
    permutation: Permutation,
    kind: RotorKind,
}

impl RotorSpec {
    /// A moving rotor whose notches sit at the symbols of `notches`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSymbol`] if a notch symbol is not in the
    /// permutation's alphabet.
    pub fn moving(name: &str, permutation: Permutation, notches: &str) -> Result<Self> {
        let alphabet = permutation.alphabet().clone();
        let mut positions = Vec::with_capacity(notches.len());
        for symbol in notches.chars() {
            let index = alphabet.to_index(symbol)?;
            if !positions.contains(&index) {
                positions.push(index);
            }
        }
        Ok(RotorSpec {
            name: name.to_string(),
            permutation,
            kind: RotorKind::Moving { notches: positions },
        })
    }

    /// A rotor that never advances.
    pub fn fixed(name: &str, permutation: Permutation) -> Self {
        RotorSpec {
            name: name.to_string(),
            permutation,
            kind: RotorKind::Fixed,
        }
    }

    /// A reflector.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Configuration`] if `permutation` maps some
    /// symbol to itself.
    pub fn reflector(name: &str, permutation: Permutation) -> Result<Self> {
        if !permutation.is_derangement() {
            return Err(EnigmaError::configuration(format!(
                "reflector {} must not map any symbol to itself",
                name
            )));
        }
        Ok(RotorSpec {
            name: name.to_string(),
            permutation,
            kind: RotorKind::Reflector,
        })
    }

    /// Returns the rotor's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rotor's wiring at setting 0.
    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    /// Returns the stepping capability.
    pub fn kind(&self) -> &RotorKind {
        &self.kind
    }
}

/// A rotor mounted in a machine slot.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use enigma::{Alphabet, Permutation, Rotor, RotorSpec};
///
/// let alpha = Arc::new(Alphabet::default());
/// let perm = Permutation::new("(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)", alpha).unwrap();
/// let mut rotor = Rotor::new(Arc::new(RotorSpec::moving("I", perm, "Q").unwrap()));
///
/// rotor.set_symbol('Q').unwrap();
/// assert!(rotor.at_notch());
/// rotor.advance();
/// assert_eq!(rotor.setting(), 17);
/// ```
#[derive(Debug, Clone)]
pub struct Rotor {
    spec: Arc<RotorSpec>,
    setting: usize,
}

impl Rotor {
    /// Mounts `spec` at setting 0.
    pub fn new(spec: Arc<RotorSpec>) -> Self {
        Rotor { spec, setting: 0 }
    }

    /// Returns the rotor's name.
    pub fn name(&self) -> &str {
        self.spec.name()
    }

    /// Returns the stepping capability.
    pub fn kind(&self) -> &RotorKind {
        self.spec.kind()
    }

    /// Returns the rotor's wiring at setting 0.
    pub fn permutation(&self) -> &Permutation {
        self.spec.permutation()
    }

    /// Returns the shared description this rotor was mounted from.
    pub fn spec(&self) -> &Arc<RotorSpec> {
        &self.spec
    }

    /// Returns the number of positions the rotor can take.
    pub fn size(&self) -> usize {
        self.spec.permutation.size()
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.spec.kind, RotorKind::Moving { .. })
    }

    pub fn is_reflector(&self) -> bool {
        matches!(self.spec.kind, RotorKind::Reflector)
    }

    /// Returns the current setting in `0..size()`.
    pub fn setting(&self) -> usize {
        self.setting
    }

    /// Sets the rotor to `position`, taken modulo `size()`.
    pub fn set(&mut self, position: usize) {
        self.setting = position % self.size();
    }

    /// Sets the rotor to the position of `symbol`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSymbol`] if `symbol` is not in the
    /// rotor's alphabet.
    pub fn set_symbol(&mut self, symbol: char) -> Result<()> {
        let position = self.spec.permutation.alphabet().to_index(symbol)?;
        self.set(position);
        Ok(())
    }

    /// Returns true if the rotor sits at one of its notches.
    ///
    /// Always false for fixed rotors and reflectors.
    pub fn at_notch(&self) -> bool {
        match &self.spec.kind {
            RotorKind::Moving { notches } => notches.contains(&self.setting),
            RotorKind::Fixed | RotorKind::Reflector => false,
        }
    }

    /// Advances a moving rotor by one position; inert for the other kinds.
    pub fn advance(&mut self) {
        if let RotorKind::Moving { .. } = self.spec.kind {
            self.setting = (self.setting + 1) % self.size();
        }
    }

    /// Passes `index` through the wiring from the entry (right) side.
    ///
    /// `index` must be below `size()`.
    pub fn convert_forward(&self, index: usize) -> usize {
        let size = self.size();
        let contact = (index + self.setting) % size;
        let out = self.spec.permutation.forward_unchecked(contact);
        (out + size - self.setting) % size
    }

    /// Passes `index` back through the wiring from the left side.
    ///
    /// `index` must be below `size()`.
    pub fn convert_backward(&self, index: usize) -> usize {
        let size = self.size();
        let contact = (index + self.setting) % size;
        let out = self.spec.permutation.inverse_unchecked(contact);
        (out + size - self.setting) % size
    }
}
