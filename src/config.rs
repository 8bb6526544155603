//! System configuration parameters
//!
//! Every tunable lives here as a compile-time constant.  [`AlarmConfig`]
//! bundles them so the monitor and AT driver can be built with other
//! values in tests without touching the constants.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Pause after each AT command so the modem can process it.
pub const AT_SETTLE_MS: u32 = 500;
/// Pause after the inbound read exchange, before the sensor is sampled.
pub const EXCHANGE_SETTLE_MS: u32 = 200;
/// Pause on either side of the delete sequence after a command matched.
pub const COMMAND_SETTLE_MS: u32 = 200;
/// Pause after the notification SMS has been submitted.
pub const TRIGGER_SETTLE_MS: u32 = 200;
/// Idle time between poll cycles.  Each cycle costs 3–8 AT exchanges.
pub const IDLE_MS: u32 = 5_000;
/// How long a single inbound read waits for bytes.
pub const READ_TIMEOUT_MS: u32 = 20;

/// Phone number the alarm SMS is sent to.
pub const RECIPIENT_NUMBER: &str = "+358401234567";
/// Fixed body of the alarm SMS.
pub const ALARM_BODY: &str = "Wake up, this is for real!! Motion detected.";

/// Longest recipient number accepted (E.164 plus slack).
pub const MAX_RECIPIENT_LEN: usize = 20;
/// A single-part GSM 7-bit SMS.
pub const MAX_BODY_LEN: usize = 160;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmConfig {
    // --- AT pacing ---
    /// Settle delay after every AT command write (milliseconds)
    pub at_settle_ms: u32,
    /// Inbound read timeout (milliseconds)
    pub read_timeout_ms: u32,

    // --- Poll cycle ---
    /// Delay after the inbound exchange (milliseconds)
    pub exchange_settle_ms: u32,
    /// Delay around the delete sequence on a matched command (milliseconds)
    pub command_settle_ms: u32,
    /// Delay after sending the alarm SMS (milliseconds)
    pub trigger_settle_ms: u32,
    /// Idle delay closing every poll cycle (milliseconds)
    pub idle_ms: u32,

    // --- Notification ---
    /// Destination number for the alarm SMS
    pub recipient: heapless::String<MAX_RECIPIENT_LEN>,
    /// Alarm SMS text
    pub body: heapless::String<MAX_BODY_LEN>,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        let mut recipient = heapless::String::new();
        let _ = recipient.push_str(RECIPIENT_NUMBER);
        let mut body = heapless::String::new();
        let _ = body.push_str(ALARM_BODY);

        Self {
            at_settle_ms: AT_SETTLE_MS,
            read_timeout_ms: READ_TIMEOUT_MS,

            exchange_settle_ms: EXCHANGE_SETTLE_MS,
            command_settle_ms: COMMAND_SETTLE_MS,
            trigger_settle_ms: TRIGGER_SETTLE_MS,
            idle_ms: IDLE_MS,

            recipient,
            body,
        }
    }
}

/// A config field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidConfig(pub &'static str);

impl fmt::Display for InvalidConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid config: {}", self.0)
    }
}

impl AlarmConfig {
    /// Reject values the modem cannot work with.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.at_settle_ms == 0 {
            return Err(InvalidConfig("at_settle_ms must be non-zero"));
        }
        if self.recipient.is_empty() {
            return Err(InvalidConfig("recipient is empty"));
        }
        if !self
            .recipient
            .chars()
            .enumerate()
            .all(|(i, c)| c.is_ascii_digit() || (i == 0 && c == '+'))
        {
            return Err(InvalidConfig("recipient must be digits with optional leading '+'"));
        }
        if self.body.is_empty() {
            return Err(InvalidConfig("body is empty"));
        }
        // 0x1A inside the body would submit the SMS early.
        if self.body.bytes().any(|b| b == 0x1A) {
            return Err(InvalidConfig("body contains the Ctrl-Z terminator"));
        }
        Ok(())
    }

    /// Worst-case length of one poll cycle in milliseconds: read, command,
    /// delete, notification and idle all happening in the same cycle.
    pub fn worst_case_cycle_ms(&self) -> u32 {
        let read = 3 * self.at_settle_ms + self.read_timeout_ms;
        let command = 2 * self.command_settle_ms + 3 * self.at_settle_ms;
        let notify = 5 * self.at_settle_ms + self.trigger_settle_ms;
        read + command + self.exchange_settle_ms + notify + self.idle_ms
    }
}
