//! Error types for the Enigma machine library.

use thiserror::Error;

/// Errors produced by the Enigma machine library.
///
/// Every variant is a validation failure of the configuration or of the
/// input being converted; none of them is transient.
#[derive(Debug, Error)]
pub enum EnigmaError {
    /// A symbol outside the bound alphabet was looked up.
    #[error("symbol '{symbol}' is not in the alphabet")]
    InvalidSymbol { symbol: char },

    /// An index outside `[0, size)` was looked up.
    #[error("index {index} is out of range for an alphabet of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// Cycle notation is unbalanced, nested or repeats a symbol.
    #[error("malformed cycle specification \"{cycles}\": {reason}")]
    MalformedCycleSpec { cycles: String, reason: String },

    /// Rotor placement, reflector count or pawl count is invalid.
    #[error("{0}")]
    Configuration(String),

    /// A rotor name is not present in the pool of available rotors.
    #[error("rotor \"{name}\" is not available in this machine")]
    UnknownRotorName { name: String },

    /// A setting line does not follow `* ROTORS SETTING (PLUGBOARD)...`.
    #[error("malformed setting line \"{line}\": {reason}")]
    MalformedSettingLine { line: String, reason: String },

    /// The configuration or setting stream ended early.
    #[error("input truncated: {context}")]
    TruncatedInput { context: String },

    /// Reading messages or writing results failed.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

impl EnigmaError {
    pub(crate) fn configuration(msg: impl Into<String>) -> Self {
        EnigmaError::Configuration(msg.into())
    }

    pub(crate) fn malformed_cycles(cycles: &str, reason: impl Into<String>) -> Self {
        EnigmaError::MalformedCycleSpec {
            cycles: cycles.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_setting(line: &str, reason: impl Into<String>) -> Self {
        EnigmaError::MalformedSettingLine {
            line: line.trim().to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn truncated(context: impl Into<String>) -> Self {
        EnigmaError::TruncatedInput {
            context: context.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EnigmaError>;
