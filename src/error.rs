//! Unified error types for the alarm firmware.
//!
//! All variants are `Copy` so they can be carried inside events and log
//! records without allocation.  Communication errors are never fatal: the
//! monitor logs them and the next poll cycle re-issues the same sequence.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The modem link failed.
    Modem(ModemError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Modem(e) => write!(f, "modem: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Modem errors
// ---------------------------------------------------------------------------

/// A failed exchange on the modem UART.
///
/// `step` is the zero-based index of the command inside its AT sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModemError {
    /// The UART driver rejected the write.
    WriteFailed { step: usize },
    /// Fewer bytes were queued than the command holds.
    ShortWrite {
        step: usize,
        written: usize,
        expected: usize,
    },
    /// The UART driver rejected the read.
    ReadFailed,
}

impl fmt::Display for ModemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteFailed { step } => write!(f, "write failed at step {step}"),
            Self::ShortWrite {
                step,
                written,
                expected,
            } => write!(f, "short write at step {step} ({written}/{expected} bytes)"),
            Self::ReadFailed => write!(f, "read failed"),
        }
    }
}

impl std::error::Error for ModemError {}

impl From<ModemError> for Error {
    fn from(e: ModemError) -> Self {
        Self::Modem(e)
    }
}

impl From<crate::config::InvalidConfig> for Error {
    fn from(e: crate::config::InvalidConfig) -> Self {
        Self::Config(e.0)
    }
}
