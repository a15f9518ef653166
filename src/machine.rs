//! Machine: rotor slots, stepping and the signal path.
//!
//! Slot 0 holds the reflector; the highest slot is where the signal enters
//! from the keyboard. Each key press first steps the rotors (with the
//! double-step of the middle rotors) and then sends the signal through the
//! plugboard, right to left through every rotor up to the reflector, back
//! left to right, and through the plugboard again.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::alphabet::Alphabet;
use crate::error::{EnigmaError, Result};
use crate::permutation::Permutation;
use crate::rotor::{Rotor, RotorKind, RotorSpec};

/// A complete rotor machine.
///
/// The machine owns its mounted rotors, so each machine's settings are its
/// own even when the rotor specifications are shared with other machines.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use enigma::{Alphabet, Machine, Permutation, RotorSpec};
///
/// let alpha = Arc::new(Alphabet::default());
/// let perm = |cycles: &str| Permutation::new(cycles, alpha.clone()).unwrap();
/// let b = "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)";
/// let i = "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)";
/// let ii = "(FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)";
/// let iii = "(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)";
/// let pool = vec![
///     RotorSpec::reflector("B", perm(b)).unwrap(),
///     RotorSpec::fixed("Beta", perm("(ALBEVFCYODJWUGNMQTZSKPR) (HIX)")),
///     RotorSpec::moving("I", perm(i), "Q").unwrap(),
///     RotorSpec::moving("II", perm(ii), "E").unwrap(),
///     RotorSpec::moving("III", perm(iii), "V").unwrap(),
/// ];
///
/// let mut machine = Machine::new(alpha.clone(), 5, 3, pool).unwrap();
/// machine.insert_rotors(&["B", "Beta", "I", "II", "III"]).unwrap();
/// machine.set_rotors("AAAA").unwrap();
/// assert_eq!(machine.convert_message("HELLO WORLD").unwrap(), "ILBDAAMTAZ");
/// ```
#[derive(Debug, Clone)]
pub struct Machine {
    alphabet: Arc<Alphabet>,
    num_rotors: usize,
    num_pawls: usize,
    available: Vec<Arc<RotorSpec>>,
    rotors: Vec<Rotor>,
    plugboard: Option<Permutation>,
}

impl Machine {
    /// Creates a machine with `num_rotors` slots, of which the rightmost
    /// `num_pawls` are driven by pawls, choosing rotors from `available`.
    ///
    /// No rotors are mounted until [`insert_rotors`](Self::insert_rotors).
    ///
    /// # Errors
    /// Returns [`EnigmaError::Configuration`] if `num_rotors < 2`, if
    /// `num_pawls >= num_rotors`, if two available rotors share a name, or if
    /// a rotor is wired over a different alphabet.
    pub fn new<I, S>(
        alphabet: Arc<Alphabet>,
        num_rotors: usize,
        num_pawls: usize,
        available: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<RotorSpec>>,
    {
        if num_rotors < 2 {
            return Err(EnigmaError::configuration(format!(
                "a machine needs at least 2 rotor slots, got {}",
                num_rotors
            )));
        }
        if num_pawls >= num_rotors {
            return Err(EnigmaError::configuration(format!(
                "too many pawls: {} pawls for {} rotor slots",
                num_pawls, num_rotors
            )));
        }

        let mut pool: Vec<Arc<RotorSpec>> = Vec::new();
        for spec in available {
            let spec = spec.into();
            if pool.iter().any(|known| known.name() == spec.name()) {
                return Err(EnigmaError::configuration(format!(
                    "rotor {} is defined more than once",
                    spec.name()
                )));
            }
            if **spec.permutation().alphabet() != *alphabet {
                return Err(EnigmaError::configuration(format!(
                    "rotor {} is wired over a different alphabet",
                    spec.name()
                )));
            }
            pool.push(spec);
        }

        Ok(Machine {
            alphabet,
            num_rotors,
            num_pawls,
            available: pool,
            rotors: Vec::with_capacity(num_rotors),
            plugboard: None,
        })
    }

    /// Returns the number of rotor slots.
    pub fn num_rotors(&self) -> usize {
        self.num_rotors
    }

    /// Returns the number of pawls, and so of moving rotor slots.
    pub fn num_pawls(&self) -> usize {
        self.num_pawls
    }

    /// Returns the machine's alphabet.
    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    /// Returns true if a rotor called `name` is available to this machine.
    pub fn has_rotor(&self, name: &str) -> bool {
        self.available.iter().any(|spec| spec.name() == name)
    }

    /// Returns the mounted rotors, reflector first. Empty before insertion.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// Mounts the rotors named in `names`, reflector first, each at setting 0.
    ///
    /// Nothing changes if validation fails.
    ///
    /// # Errors
    /// - [`EnigmaError::UnknownRotorName`] if a name is not available.
    /// - [`EnigmaError::Configuration`] if the number of names is not
    ///   `num_rotors()`, a rotor is named twice, there is more than one
    ///   reflector, or a reflector, fixed or moving rotor is in the wrong slot.
    pub fn insert_rotors<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        if names.len() != self.num_rotors {
            return Err(EnigmaError::configuration(format!(
                "expected {} rotors, got {}",
                self.num_rotors,
                names.len()
            )));
        }

        let mut specs: Vec<Arc<RotorSpec>> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let spec = self
                .available
                .iter()
                .find(|spec| spec.name() == name)
                .ok_or_else(|| EnigmaError::UnknownRotorName {
                    name: name.to_string(),
                })?;
            if specs.iter().any(|used| used.name() == name) {
                return Err(EnigmaError::configuration(format!(
                    "rotor {} is used more than once",
                    name
                )));
            }
            specs.push(spec.clone());
        }

        let reflectors = specs
            .iter()
            .filter(|spec| matches!(spec.kind(), RotorKind::Reflector))
            .count();
        if reflectors > 1 {
            return Err(EnigmaError::configuration(
                "can't have more than one reflector",
            ));
        }

        let first_moving = self.num_rotors - self.num_pawls;
        for (slot, spec) in specs.iter().enumerate() {
            let misplaced = match spec.kind() {
                RotorKind::Reflector => slot != 0,
                RotorKind::Fixed => slot == 0 || slot >= first_moving,
                RotorKind::Moving { .. } => slot < first_moving,
            };
            if slot == 0 && !matches!(spec.kind(), RotorKind::Reflector) {
                return Err(EnigmaError::configuration(format!(
                    "wrong position for reflector: slot 0 holds {}",
                    spec.name()
                )));
            }
            if misplaced {
                let role = match spec.kind() {
                    RotorKind::Reflector => "reflector",
                    RotorKind::Fixed => "fixed rotor",
                    RotorKind::Moving { .. } => "moving rotor",
                };
                return Err(EnigmaError::configuration(format!(
                    "wrong position for {} {} (slot {})",
                    role,
                    spec.name(),
                    slot
                )));
            }
        }

        self.rotors = specs.into_iter().map(Rotor::new).collect();
        debug!(
            rotors = ?self.rotors.iter().map(Rotor::name).collect::<Vec<_>>(),
            "inserted rotors"
        );
        Ok(())
    }

    /// Sets the non-reflector rotors from `setting`, one symbol per rotor,
    /// leftmost first.
    ///
    /// # Errors
    /// - [`EnigmaError::Configuration`] if no rotors are mounted.
    /// - [`EnigmaError::MalformedSettingLine`] if `setting` does not have
    ///   `num_rotors() - 1` symbols.
    /// - [`EnigmaError::InvalidSymbol`] if a symbol is not in the alphabet.
    pub fn set_rotors(&mut self, setting: &str) -> Result<()> {
        self.require_rotors()?;
        let positions = self.setting_positions(setting)?;
        for (rotor, position) in self.rotors[1..].iter_mut().zip(positions) {
            rotor.set(position);
        }
        debug!(setting, "rotor settings applied");
        Ok(())
    }

    /// Installs `plugboard`, or removes it with `None`.
    ///
    /// The plugboard may be defined over a smaller alphabet; symbols outside
    /// it pass through unchanged.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSymbol`] if the plugboard's alphabet
    /// holds a symbol the machine does not know.
    pub fn set_plugboard(&mut self, plugboard: Option<Permutation>) -> Result<()> {
        if let Some(board) = &plugboard {
            if let Some(symbol) = board
                .alphabet()
                .symbols()
                .find(|&symbol| !self.alphabet.contains(symbol))
            {
                return Err(EnigmaError::InvalidSymbol { symbol });
            }
        }
        debug!(installed = plugboard.is_some(), "plugboard updated");
        self.plugboard = plugboard;
        Ok(())
    }

    /// Returns the current settings of the non-reflector rotors as symbols,
    /// leftmost first. Empty before insertion.
    pub fn settings(&self) -> String {
        self.rotors
            .iter()
            .skip(1)
            .filter_map(|rotor| self.alphabet.to_symbol(rotor.setting()).ok())
            .collect()
    }

    /// Steps the rotors, then converts the symbol at `index`.
    ///
    /// # Errors
    /// - [`EnigmaError::IndexOutOfRange`] if `index` is not below the
    ///   alphabet size.
    /// - [`EnigmaError::Configuration`] if no rotors are mounted.
    pub fn convert(&mut self, index: usize) -> Result<usize> {
        self.require_rotors()?;
        if index >= self.alphabet.size() {
            return Err(EnigmaError::IndexOutOfRange {
                index,
                size: self.alphabet.size(),
            });
        }

        self.step();

        let mut c = self.plug(index)?;
        for rotor in self.rotors.iter().rev() {
            c = rotor.convert_forward(c);
        }
        for rotor in &self.rotors[1..] {
            c = rotor.convert_backward(c);
        }
        let out = self.plug(c)?;
        trace!(input = index, output = out, settings = %self.settings(), "converted");
        Ok(out)
    }

    /// Converts every symbol of `msg`, skipping whitespace separators.
    ///
    /// Separators do not step the rotors and are not copied to the output.
    /// The machine keeps its settings between calls.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSymbol`] for a symbol outside the
    /// alphabet; the whole message is checked first, so the settings are left
    /// untouched in that case.
    pub fn convert_message(&mut self, msg: &str) -> Result<String> {
        self.require_rotors()?;
        let indices = msg
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| self.alphabet.to_index(ch))
            .collect::<Result<Vec<usize>>>()?;

        let mut output = String::with_capacity(indices.len());
        for index in indices {
            let converted = self.convert(index)?;
            output.push(self.alphabet.to_symbol(converted)?);
        }
        Ok(output)
    }

    /// Advances the rotors for one key press.
    ///
    /// A slot steps when its right neighbour is at a notch, or when it is at
    /// its own notch and its left neighbour is a moving rotor (the
    /// double-step). Every decision reads the state before this key press,
    /// so the slots are visited left to right. The rightmost rotor always
    /// steps.
    fn step(&mut self) {
        let last = self.num_rotors - 1;
        for slot in 1..last {
            let pushed = self.rotors[slot + 1].at_notch();
            let double =
                self.rotors[slot].at_notch() && self.rotors[slot - 1].is_moving();
            if pushed || double {
                self.rotors[slot].advance();
            }
        }
        self.rotors[last].advance();
    }

    /// Swaps `index` through the plugboard, if there is one and it covers
    /// the symbol.
    fn plug(&self, index: usize) -> Result<usize> {
        let board = match &self.plugboard {
            Some(board) => board,
            None => return Ok(index),
        };
        if Arc::ptr_eq(board.alphabet(), &self.alphabet) {
            return board.permute(index);
        }
        let symbol = self.alphabet.to_symbol(index)?;
        if !board.alphabet().contains(symbol) {
            return Ok(index);
        }
        self.alphabet.to_index(board.permute_symbol(symbol)?)
    }

    /// Validates `setting` against the slot count and alphabet without
    /// touching the rotors.
    pub(crate) fn setting_positions(&self, setting: &str) -> Result<Vec<usize>> {
        let symbols: Vec<char> = setting.chars().collect();
        if symbols.len() != self.num_rotors - 1 {
            return Err(EnigmaError::malformed_setting(
                setting,
                format!(
                    "expected {} setting symbols, got {}",
                    self.num_rotors - 1,
                    symbols.len()
                ),
            ));
        }
        symbols
            .iter()
            .map(|&symbol| self.alphabet.to_index(symbol))
            .collect()
    }

    fn require_rotors(&self) -> Result<()> {
        if self.rotors.len() != self.num_rotors {
            return Err(EnigmaError::configuration("rotors have not been inserted"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAVAL: [(&str, &str, &str); 8] = [
        ("I", "MQ", "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)"),
        ("II", "ME", "(FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)"),
        ("III", "MV", "(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)"),
        ("IV", "MJ", "(AEPLIYWCOXMRFZBSTGJQNH) (DV) (KU)"),
        ("Beta", "N", "(ALBEVFCYODJWUGNMQTZSKPR) (HIX)"),
        ("Gamma", "N", "(AFNIRLBSQWVXGUZDKMTPCOYJHE)"),
        ("B", "R", "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)"),
        ("C", "R", "(AR) (BD) (CO) (EJ) (FN) (GT) (HK) (IV) (LM) (PW) (QZ) (SX) (UY)"),
    ];

    fn pool(alpha: &Arc<Alphabet>) -> Vec<RotorSpec> {
        NAVAL
            .iter()
            .map(|(name, kind, cycles)| {
                let perm = Permutation::new(cycles, alpha.clone()).unwrap();
                match &kind[..1] {
                    "M" => RotorSpec::moving(name, perm, &kind[1..]).unwrap(),
                    "N" => RotorSpec::fixed(name, perm),
                    _ => RotorSpec::reflector(name, perm).unwrap(),
                }
            })
            .collect()
    }

    fn machine() -> Machine {
        let alpha = Arc::new(Alphabet::default());
        Machine::new(alpha.clone(), 5, 3, pool(&alpha)).unwrap()
    }

    fn ready(names: [&str; 5], setting: &str) -> Machine {
        let mut m = machine();
        m.insert_rotors(&names).unwrap();
        m.set_rotors(setting).unwrap();
        m
    }

    fn expect_config_error(result: Result<()>, fragment: &str) {
        match result {
            Err(EnigmaError::Configuration(msg)) => {
                assert!(msg.contains(fragment), "'{}' lacks '{}'", msg, fragment)
            }
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_new_validates_counts() {
        let alpha = Arc::new(Alphabet::default());
        assert!(Machine::new(alpha.clone(), 1, 0, pool(&alpha)).is_err());
        match Machine::new(alpha.clone(), 5, 5, pool(&alpha)) {
            Err(EnigmaError::Configuration(msg)) => assert!(msg.contains("too many pawls")),
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
        let m = Machine::new(alpha.clone(), 5, 0, pool(&alpha)).unwrap();
        assert_eq!(m.num_rotors(), 5);
        assert_eq!(m.num_pawls(), 0);
    }

    #[test]
    fn test_new_rejects_duplicate_names() {
        let alpha = Arc::new(Alphabet::default());
        let mut specs = pool(&alpha);
        specs.push(specs[0].clone());
        assert!(matches!(
            Machine::new(alpha, 5, 3, specs),
            Err(EnigmaError::Configuration(_))
        ));
    }

    #[test]
    fn test_new_rejects_alphabet_mismatch() {
        let small = Arc::new(Alphabet::new("ABCD").unwrap());
        let spec = RotorSpec::fixed("X", Permutation::new("(AB)", small).unwrap());
        let alpha = Arc::new(Alphabet::default());
        assert!(Machine::new(alpha, 2, 0, vec![spec]).is_err());

        // Same size, different symbols.
        let abcd = Arc::new(Alphabet::new("ABCD").unwrap());
        let wxyz = Arc::new(Alphabet::new("WXYZ").unwrap());
        let reflector =
            RotorSpec::reflector("R", Permutation::new("(AB) (CD)", abcd.clone()).unwrap())
                .unwrap();
        let foreign = RotorSpec::moving("M", Permutation::new("(WX)", wxyz).unwrap(), "W").unwrap();
        expect_config_error(
            Machine::new(abcd.clone(), 2, 1, vec![reflector.clone(), foreign]).map(|_| ()),
            "different alphabet",
        );

        // An equal alphabet behind another Arc is accepted.
        let copy = Arc::new(Alphabet::new("ABCD").unwrap());
        let native = RotorSpec::moving("M", Permutation::new("(AC)", copy).unwrap(), "A").unwrap();
        assert!(Machine::new(abcd, 2, 1, vec![reflector, native]).is_ok());
    }

    #[test]
    fn test_has_rotor() {
        let m = machine();
        assert!(m.has_rotor("Beta"));
        assert!(m.has_rotor("III"));
        assert!(!m.has_rotor("IX"));
    }

    #[test]
    fn test_hello_world_scenario() {
        let mut m = ready(["B", "Beta", "I", "II", "III"], "AAAA");
        let cipher = m.convert_message("HELLO WORLD").unwrap();
        assert_eq!(cipher, "ILBDAAMTAZ");

        let mut d = ready(["B", "Beta", "I", "II", "III"], "AAAA");
        assert_eq!(d.convert_message(&cipher).unwrap(), "HELLOWORLD");
    }

    #[test]
    fn test_reference_message_with_plugboard() {
        let mut m = ready(["B", "Beta", "III", "IV", "I"], "AXLE");
        let board = Permutation::new("(HQ) (EX) (IP) (TR) (BY)", m.alphabet().clone()).unwrap();
        m.set_plugboard(Some(board)).unwrap();
        assert_eq!(
            m.convert_message("FROM HIS SHOULDER HIAWATHA").unwrap(),
            "QVPQSOKOILPUBKJZPISFXDW"
        );
        assert_eq!(m.settings(), "AXMB");
    }

    #[test]
    fn test_plugboard_over_smaller_alphabet() {
        let mut full = ready(["B", "Beta", "III", "IV", "I"], "AXLE");
        let board = Permutation::new("(HQ) (EX)", full.alphabet().clone()).unwrap();
        full.set_plugboard(Some(board)).unwrap();

        let mut partial = ready(["B", "Beta", "III", "IV", "I"], "AXLE");
        let plugged = Arc::new(Alphabet::new("HQEX").unwrap());
        partial
            .set_plugboard(Some(Permutation::new("(HQ) (EX)", plugged).unwrap()))
            .unwrap();

        let msg = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";
        assert_eq!(
            full.convert_message(msg).unwrap(),
            partial.convert_message(msg).unwrap()
        );
    }

    #[test]
    fn test_plugboard_with_foreign_symbol_rejected() {
        let mut m = ready(["B", "Beta", "I", "II", "III"], "AAAA");
        let foreign = Arc::new(Alphabet::new("A1").unwrap());
        let board = Permutation::new("(A1)", foreign).unwrap();
        assert!(matches!(
            m.set_plugboard(Some(board)),
            Err(EnigmaError::InvalidSymbol { symbol: '1' })
        ));
    }

    #[test]
    fn test_double_step() {
        let mut m = ready(["B", "Beta", "I", "II", "III"], "AADU");
        let mut seen = Vec::new();
        for _ in 0..4 {
            m.convert(0).unwrap();
            seen.push(m.settings());
        }
        assert_eq!(seen, vec!["AADV", "AAEW", "ABFX", "ABFY"]);
    }

    #[test]
    fn test_leftmost_pawl_rotor_does_not_self_step() {
        // Rotor I sits at its notch Q next to the fixed Beta: it only moves
        // when II pushes it.
        let mut m = ready(["B", "Beta", "I", "II", "III"], "AQAA");
        m.convert(0).unwrap();
        assert_eq!(m.settings(), "AQAB");
    }

    #[test]
    fn test_separator_does_not_step() {
        let mut a = ready(["B", "Beta", "I", "II", "III"], "AAAA");
        let mut b = ready(["B", "Beta", "I", "II", "III"], "AAAA");
        assert_eq!(
            a.convert_message("HEL LO").unwrap(),
            b.convert_message("HELLO").unwrap()
        );
        assert_eq!(a.settings(), b.settings());
        assert_eq!(a.settings(), "AAAF");
    }

    #[test]
    fn test_state_persists_between_messages() {
        let mut m = ready(["B", "Beta", "I", "II", "III"], "AAAA");
        let first = m.convert_message("HELLOWORLD").unwrap();
        let second = m.convert_message("HELLOWORLD").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_invalid_symbol_leaves_state() {
        let mut m = ready(["B", "Beta", "I", "II", "III"], "AAAA");
        assert!(matches!(
            m.convert_message("HELLO, WORLD"),
            Err(EnigmaError::InvalidSymbol { symbol: ',' })
        ));
        assert_eq!(m.settings(), "AAAA");
    }

    #[test]
    fn test_convert_index_out_of_range() {
        let mut m = ready(["B", "Beta", "I", "II", "III"], "AAAA");
        assert!(matches!(
            m.convert(26),
            Err(EnigmaError::IndexOutOfRange { index: 26, size: 26 })
        ));
        assert_eq!(m.settings(), "AAAA");
    }

    #[test]
    fn test_convert_before_insert() {
        let mut m = machine();
        assert!(matches!(m.convert(0), Err(EnigmaError::Configuration(_))));
        assert!(matches!(
            m.set_rotors("AAAA"),
            Err(EnigmaError::Configuration(_))
        ));
        assert_eq!(m.settings(), "");
    }

    #[test]
    fn test_insert_wrong_count() {
        let mut m = machine();
        expect_config_error(m.insert_rotors(&["B", "Beta", "I"]), "expected 5 rotors");
    }

    #[test]
    fn test_insert_unknown_name() {
        let mut m = machine();
        assert!(matches!(
            m.insert_rotors(&["B", "Beta", "I", "II", "IX"]),
            Err(EnigmaError::UnknownRotorName { name }) if name == "IX"
        ));
    }

    #[test]
    fn test_insert_position_rules() {
        let mut m = machine();
        expect_config_error(
            m.insert_rotors(&["Beta", "B", "I", "II", "III"]),
            "wrong position for reflector",
        );
        expect_config_error(
            m.insert_rotors(&["I", "Beta", "B", "II", "III"]),
            "wrong position for reflector",
        );
        expect_config_error(
            m.insert_rotors(&["B", "Beta", "Gamma", "II", "III"]),
            "wrong position for fixed rotor",
        );
        expect_config_error(
            m.insert_rotors(&["B", "I", "II", "III", "IV"]),
            "wrong position for moving rotor",
        );
        expect_config_error(
            m.insert_rotors(&["B", "C", "I", "II", "III"]),
            "more than one reflector",
        );
        expect_config_error(
            m.insert_rotors(&["B", "Beta", "I", "I", "III"]),
            "more than once",
        );
        assert!(m.rotors().is_empty());
    }

    #[test]
    fn test_set_rotors_errors() {
        let mut m = ready(["B", "Beta", "I", "II", "III"], "AAAA");
        assert!(matches!(
            m.set_rotors("AAA"),
            Err(EnigmaError::MalformedSettingLine { .. })
        ));
        assert!(matches!(
            m.set_rotors("AA1A"),
            Err(EnigmaError::InvalidSymbol { symbol: '1' })
        ));
        assert_eq!(m.settings(), "AAAA");
    }

    #[test]
    fn test_reinsert_resets_settings() {
        let mut m = ready(["B", "Beta", "I", "II", "III"], "ZZZZ");
        m.insert_rotors(&["B", "Gamma", "IV", "II", "III"]).unwrap();
        assert_eq!(m.settings(), "AAAA");
    }

    #[test]
    fn test_machine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Machine>();
    }
}
