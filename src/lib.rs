//! Enigma rotor cipher machine simulator.
//!
//! Models a rotor machine symbol by symbol: an alphabet, rotors wired as
//! permutations of it, a stepping mechanism with the double-step of the
//! middle rotors, a reflector, and a plugboard. Pressing a key steps the
//! rotors first and then sends the signal through
//! plugboard → rotors (right to left) → reflector → rotors (left to right) →
//! plugboard.
//!
//! # Architecture
//!
//! ```text
//! Alphabet     (symbols <-> dense indices, shared read-only)
//!     ↓
//! Permutation  (cycle notation compiled to forward/inverse tables)
//!     ↓
//! RotorSpec    (immutable: name, wiring, Moving/Fixed/Reflector)
//!     ↓ mounted as
//! Rotor        (spec + this machine's setting)
//!     ↓ N slots
//! Machine      (stepping, signal path, plugboard)
//! ```
//!
//! [`MachineConfig`], [`SettingLine`] and [`Session`] read the text formats
//! used by the `enigma` binary.
//!
//! # Examples
//!
//! Encipher and decipher with two machines set up identically:
//!
//! ```
//! use enigma::{MachineConfig, SettingLine};
//!
//! let config = MachineConfig::parse(
//!     "ABCDEFGHIJKLMNOPQRSTUVWXYZ 5 3
//!      I MQ (AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)
//!      II ME (FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)
//!      III MV (ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)
//!      Beta N (ALBEVFCYODJWUGNMQTZSKPR) (HIX)
//!      B R (AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)",
//! ).unwrap();
//! let setting = SettingLine::parse("* B Beta I II III AAAA (AQ) (TZ)", 5).unwrap();
//!
//! let mut encoder = config.build().unwrap();
//! setting.apply(&mut encoder).unwrap();
//! let cipher = encoder.convert_message("ATTACK AT DAWN").unwrap();
//!
//! let mut decoder = config.build().unwrap();
//! setting.apply(&mut decoder).unwrap();
//! assert_eq!(decoder.convert_message(&cipher).unwrap(), "ATTACKATDAWN");
//! ```

#![deny(clippy::all)]

pub mod error;

mod alphabet;
mod config;
mod machine;
mod permutation;
mod rotor;
mod session;
mod settings;
pub mod utils;

pub use alphabet::{Alphabet, DEFAULT_SYMBOLS};
pub use config::MachineConfig;
pub use error::{EnigmaError, Result};
pub use machine::Machine;
pub use permutation::Permutation;
pub use rotor::{Rotor, RotorKind, RotorSpec};
pub use session::Session;
pub use settings::{SettingLine, SETTING_MARKER};
