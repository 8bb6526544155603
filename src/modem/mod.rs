//! GSM modem protocol layer.
//!
//! The modem is driven open-loop: each AT command is written, then the
//! driver waits a fixed settle time before the next one.  Responses are
//! never parsed on the send path; the only read is a single drain after
//! the "check stored message" sequence, scanned for command tokens.
//!
//! ```text
//!  AlarmMonitor ──▶ AtDriver ──▶ ModemPort (UART)
//!                      │
//!                      └──▶ DelayNs (settle pacing)
//! ```

pub mod at;
mod driver;

pub use driver::{AtDriver, INBOUND_MAX_LEN, InboundMessage, ReadStatus};
