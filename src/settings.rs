//! Setting lines: `* REFLECTOR ROTOR... SETTING (PLUG PAIRS)...`.
//!
//! A setting line names the rotors for every slot (reflector first), gives
//! the initial position of each non-reflector rotor, and lists the plugboard
//! as two-symbol cycles.

use tracing::debug;

use crate::config::Tokens;
use crate::error::{EnigmaError, Result};
use crate::machine::Machine;
use crate::permutation::Permutation;

/// Marker token that opens a setting line.
pub const SETTING_MARKER: &str = "*";

/// A parsed setting line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingLine {
    rotors: Vec<String>,
    setting: String,
    plugboard: String,
}

impl SettingLine {
    /// Returns true if `line` starts with the setting marker.
    pub fn is_setting_line(line: &str) -> bool {
        line.trim_start().starts_with(SETTING_MARKER)
    }

    /// Parses `line` for a machine with `num_rotors` slots.
    ///
    /// # Errors
    /// - [`EnigmaError::MalformedSettingLine`] if the marker or the setting
    ///   token is missing, a plugboard group is not a pair, or anything
    ///   follows the plugboard.
    /// - [`EnigmaError::TruncatedInput`] if fewer than `num_rotors` names
    ///   are given.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::SettingLine;
    ///
    /// let line = SettingLine::parse("* B Beta III IV I AXLE (HQ) (EX)", 5).unwrap();
    /// assert_eq!(line.rotors(), ["B", "Beta", "III", "IV", "I"]);
    /// assert_eq!(line.setting(), "AXLE");
    /// assert_eq!(line.plugboard(), "(HQ) (EX)");
    /// ```
    pub fn parse(line: &str, num_rotors: usize) -> Result<Self> {
        let mut tokens = Tokens::new(line);
        match tokens.next_token() {
            Some(SETTING_MARKER) => {}
            Some(token) if token.starts_with(SETTING_MARKER) => {
                return Err(EnigmaError::malformed_setting(
                    line,
                    "marker must be a separate token",
                ))
            }
            _ => {
                return Err(EnigmaError::malformed_setting(
                    line,
                    "must start with an asterisk",
                ))
            }
        }

        let mut rotors = Vec::with_capacity(num_rotors);
        for slot in 0..num_rotors {
            let name = tokens.expect(&format!(
                "{} rotor names on setting line, found {}",
                num_rotors, slot
            ))?;
            rotors.push(name.to_string());
        }

        let setting = match tokens.next_token() {
            Some(token) if !token.starts_with('(') => token.to_string(),
            _ => {
                return Err(EnigmaError::malformed_setting(
                    line,
                    "missing rotor settings",
                ))
            }
        };

        let plugboard = tokens.take_cycles();
        if let Some(extra) = tokens.peek() {
            return Err(EnigmaError::malformed_setting(
                line,
                format!("unexpected \"{}\" after plugboard", extra),
            ));
        }
        Self::check_pairs(line, &plugboard)?;

        Ok(SettingLine {
            rotors,
            setting,
            plugboard,
        })
    }

    /// Each plugboard group must swap exactly two symbols.
    fn check_pairs(line: &str, plugboard: &str) -> Result<()> {
        let mut size: Option<usize> = None;
        for ch in plugboard.chars().filter(|c| !c.is_whitespace()) {
            match (ch, size) {
                ('(', _) => size = Some(0),
                (')', Some(2)) => size = None,
                (')', _) => {
                    return Err(EnigmaError::malformed_setting(
                        line,
                        "plugboard cycles must be pairs",
                    ))
                }
                (_, Some(n)) => size = Some(n + 1),
                (_, None) => {}
            }
        }
        Ok(())
    }

    /// Rotor names, reflector first.
    pub fn rotors(&self) -> &[String] {
        &self.rotors
    }

    /// Initial positions of the non-reflector rotors, leftmost first.
    pub fn setting(&self) -> &str {
        &self.setting
    }

    /// Plugboard cycles, empty when no plugs are used.
    pub fn plugboard(&self) -> &str {
        &self.plugboard
    }

    /// Inserts the rotors, sets their positions and installs the plugboard.
    ///
    /// Every part is validated before the machine is touched, so a failed
    /// call leaves its rotors, settings and plugboard as they were.
    ///
    /// # Errors
    /// Propagates the errors of [`Machine::insert_rotors`],
    /// [`Machine::set_rotors`] and of parsing the plugboard over the
    /// machine's alphabet.
    pub fn apply(&self, machine: &mut Machine) -> Result<()> {
        let plugboard = if self.plugboard.is_empty() {
            None
        } else {
            Some(Permutation::new(&self.plugboard, machine.alphabet().clone())?)
        };
        machine.setting_positions(&self.setting)?;
        machine.insert_rotors(&self.rotors)?;
        machine.set_rotors(&self.setting)?;
        machine.set_plugboard(plugboard)?;
        debug!(
            rotors = ?self.rotors,
            setting = %self.setting,
            plugboard = %self.plugboard,
            "machine set up"
        );
        Ok(())
    }
}
