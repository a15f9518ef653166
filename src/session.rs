//! Session: drives a machine over a stream of setting and message lines.
//!
//! Setting lines (see [`SettingLine`]) reconfigure the machine; every other
//! line is converted with the current settings and emitted in groups of
//! five. The first non-blank line must be a setting line.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::error::{EnigmaError, Result};
use crate::machine::Machine;
use crate::settings::SettingLine;
use crate::utils::grouping::group_in_fives;

/// A machine together with the line protocol that drives it.
#[derive(Debug)]
pub struct Session {
    machine: Machine,
    configured: bool,
}

impl Session {
    /// Wraps `machine`; no message is accepted until a setting line is seen.
    pub fn new(machine: Machine) -> Self {
        Session {
            machine,
            configured: false,
        }
    }

    /// Returns the machine in its current state.
    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Consumes the session and returns the machine.
    pub fn into_machine(self) -> Machine {
        self.machine
    }

    /// Handles one input line.
    ///
    /// Returns `None` for a setting line (or a blank line before the first
    /// setting), and the grouped conversion for a message line.
    ///
    /// # Errors
    /// - [`EnigmaError::MalformedSettingLine`] if a message comes before any
    ///   setting line.
    /// - Any error from parsing or applying a setting line, or from
    ///   converting the message.
    pub fn feed_line(&mut self, line: &str) -> Result<Option<String>> {
        if SettingLine::is_setting_line(line) {
            let setting = SettingLine::parse(line, self.machine.num_rotors())?;
            setting.apply(&mut self.machine)?;
            self.configured = true;
            return Ok(None);
        }
        if !self.configured {
            if line.trim().is_empty() {
                return Ok(None);
            }
            return Err(EnigmaError::malformed_setting(line, "need a setting first"));
        }
        let converted = self.machine.convert_message(line)?;
        Ok(Some(group_in_fives(&converted)))
    }

    /// Reads every line of `input` and writes the converted messages to
    /// `output`, one output line per message line.
    ///
    /// # Errors
    /// Stops at the first failing line; I/O failures surface as
    /// [`EnigmaError::Io`].
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{MachineConfig, Session};
    ///
    /// let config = MachineConfig::parse("AB 2 1 R1 MA (AB) RF R (AB)").unwrap();
    /// let mut session = Session::new(config.build().unwrap());
    /// let mut out = Vec::new();
    /// session.process("* RF R1 A\nAAAA\n".as_bytes(), &mut out).unwrap();
    /// // No symbol is ever enciphered to itself.
    /// assert_eq!(String::from_utf8(out).unwrap(), "BBBB\n");
    /// ```
    pub fn process<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        let mut messages = 0usize;
        for (number, line) in input.lines().enumerate() {
            let line = line?;
            match self.feed_line(&line) {
                Ok(Some(converted)) => {
                    writeln!(output, "{}", converted)?;
                    messages += 1;
                }
                Ok(None) => debug!(line = number + 1, "setting line applied"),
                Err(err) => {
                    debug!(line = number + 1, error = %err, "line rejected");
                    return Err(err);
                }
            }
        }
        output.flush()?;
        info!(messages, "session finished");
        Ok(())
    }
}
