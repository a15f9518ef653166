//! Machine configuration reader.
//!
//! A configuration is a whitespace-separated token stream:
//!
//! ```text
//! ABCDEFGHIJKLMNOPQRSTUVWXYZ      alphabet (optional, A-Z when absent)
//! 5 3                             rotor slots, pawls
//! I    MQ  (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
//! Beta N   (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
//! B    R   (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)
//! ```
//!
//! Each rotor record is a name (anything but a number or a cycle group),
//! a type token (`M` followed by the notch
//! symbols, `N` for fixed, `R` for reflector) and the rotor's cycles, which
//! may continue over several lines.

use std::iter::Peekable;
use std::str::SplitWhitespace;
use std::sync::Arc;

use tracing::debug;

use crate::alphabet::Alphabet;
use crate::error::{EnigmaError, Result};
use crate::machine::Machine;
use crate::permutation::Permutation;
use crate::rotor::RotorSpec;

/// Whitespace token stream shared by the configuration and setting readers.
pub(crate) struct Tokens<'a> {
    inner: Peekable<SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Tokens {
            inner: text.split_whitespace().peekable(),
        }
    }

    pub(crate) fn peek(&mut self) -> Option<&'a str> {
        self.inner.peek().copied()
    }

    pub(crate) fn next_token(&mut self) -> Option<&'a str> {
        self.inner.next()
    }

    /// Returns the next token or a [`EnigmaError::TruncatedInput`] naming
    /// what was expected.
    pub(crate) fn expect(&mut self, what: &str) -> Result<&'a str> {
        self.inner
            .next()
            .ok_or_else(|| EnigmaError::truncated(format!("expected {}", what)))
    }

    /// Collects the parenthesised groups starting at the current token.
    ///
    /// A group may span several tokens; collection stops at the first token
    /// that neither opens a group nor continues an open one.
    pub(crate) fn take_cycles(&mut self) -> String {
        let mut cycles = String::new();
        let mut depth: i32 = 0;
        while let Some(token) = self.peek() {
            if depth <= 0 && !token.starts_with('(') {
                break;
            }
            for ch in token.chars() {
                match ch {
                    '(' => depth += 1,
                    ')' => depth -= 1,
                    _ => {}
                }
            }
            if !cycles.is_empty() {
                cycles.push(' ');
            }
            cycles.push_str(token);
            self.inner.next();
        }
        cycles
    }
}

/// A parsed configuration: the alphabet, the slot layout and every
/// available rotor.
#[derive(Debug, Clone)]
pub struct MachineConfig {
    alphabet: Arc<Alphabet>,
    num_rotors: usize,
    num_pawls: usize,
    rotors: Vec<Arc<RotorSpec>>,
}

impl MachineConfig {
    /// Parses a configuration from `text`.
    ///
    /// # Errors
    /// - [`EnigmaError::TruncatedInput`] if the text ends inside the header
    ///   or a rotor record.
    /// - [`EnigmaError::Configuration`] for a bad alphabet token, bad counts,
    ///   an unknown rotor type, notches on a non-moving rotor, or any slot and
    ///   pool error [`Machine::new`] reports.
    /// - [`EnigmaError::MalformedCycleSpec`] / [`EnigmaError::InvalidSymbol`]
    ///   for bad rotor wiring.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::MachineConfig;
    ///
    /// let config = MachineConfig::parse(
    ///     "AB 2 1\n R1 MA (AB)\n RF R (AB)\n",
    /// ).unwrap();
    /// assert_eq!(config.num_rotors(), 2);
    /// assert_eq!(config.rotor_names().collect::<Vec<_>>(), ["R1", "RF"]);
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = Tokens::new(text);

        let alphabet = Arc::new(Self::read_alphabet(text)?);
        if Self::has_alphabet_token(text) {
            tokens.next_token();
        }

        let num_rotors = Self::read_count(&mut tokens, "number of rotor slots")?;
        let num_pawls = Self::read_count(&mut tokens, "number of pawls")?;
        if num_pawls >= num_rotors {
            return Err(EnigmaError::configuration(format!(
                "too many pawls: {} pawls for {} rotor slots",
                num_pawls, num_rotors
            )));
        }

        let mut rotors = Vec::new();
        while tokens.peek().is_some() {
            rotors.push(Arc::new(Self::read_rotor(&mut tokens, &alphabet)?));
        }

        let config = MachineConfig {
            alphabet,
            num_rotors,
            num_pawls,
            rotors,
        };
        // Report slot and pool errors here rather than at first use.
        config.build()?;
        debug!(
            alphabet_size = config.alphabet.size(),
            num_rotors, num_pawls,
            available = config.rotors.len(),
            "configuration parsed"
        );
        Ok(config)
    }

    /// Builds a fresh machine with no rotors inserted.
    ///
    /// Every call returns an independent machine; rotor specifications are
    /// shared, settings are not.
    pub fn build(&self) -> Result<Machine> {
        Machine::new(
            self.alphabet.clone(),
            self.num_rotors,
            self.num_pawls,
            self.rotors.iter().cloned(),
        )
    }

    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    pub fn num_rotors(&self) -> usize {
        self.num_rotors
    }

    pub fn num_pawls(&self) -> usize {
        self.num_pawls
    }

    /// Returns the names of the available rotors in file order.
    pub fn rotor_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.rotors.iter().map(|spec| spec.name())
    }

    /// The alphabet token is omitted when the file opens directly with the
    /// two counts, i.e. the first two tokens are numbers and the third is
    /// not (a digit alphabet is followed by two more numbers). Rotor names
    /// may not be numbers, so the third token of a file without an alphabet
    /// is never numeric.
    fn has_alphabet_token(text: &str) -> bool {
        let head: Vec<&str> = text.split_whitespace().take(3).collect();
        let numeric = |t: &&str| t.parse::<usize>().is_ok();
        let counts_first = head.len() >= 2 && numeric(&head[0]) && numeric(&head[1]);
        !(counts_first && !head.get(2).is_some_and(numeric))
    }

    fn read_alphabet(text: &str) -> Result<Alphabet> {
        if !Self::has_alphabet_token(text) {
            return Ok(Alphabet::default());
        }
        let token = Tokens::new(text).expect("alphabet")?;
        if token.contains(['*', '(', ')']) {
            return Err(EnigmaError::configuration(format!(
                "wrong format for alphabet \"{}\"",
                token
            )));
        }
        Alphabet::new(token)
    }

    fn read_count(tokens: &mut Tokens<'_>, what: &str) -> Result<usize> {
        let token = tokens.expect(what)?;
        token.parse::<usize>().map_err(|_| {
            EnigmaError::configuration(format!("expected {}, found \"{}\"", what, token))
        })
    }

    fn read_rotor(tokens: &mut Tokens<'_>, alphabet: &Arc<Alphabet>) -> Result<RotorSpec> {
        let name = tokens.expect("rotor name")?;
        if name.starts_with(['(', ')']) || name.parse::<usize>().is_ok() {
            return Err(EnigmaError::configuration(format!(
                "wrong format for rotor name \"{}\"",
                name
            )));
        }
        let info = tokens.expect(&format!("type of rotor {}", name))?;
        let mut chars = info.chars();
        let kind = chars.next().unwrap_or_default();
        let notches = chars.as_str();
        if kind != 'M' && !notches.is_empty() {
            return Err(EnigmaError::configuration(format!(
                "can't have notches on non-moving rotor {}",
                name
            )));
        }

        let cycles = tokens.take_cycles();
        let permutation = Permutation::new(&cycles, alphabet.clone())?;
        match kind {
            'M' => RotorSpec::moving(name, permutation, notches),
            'N' => Ok(RotorSpec::fixed(name, permutation)),
            'R' => RotorSpec::reflector(name, permutation),
            other => Err(EnigmaError::configuration(format!(
                "wrong type '{}' for rotor {}",
                other, name
            ))),
        }
    }
}
