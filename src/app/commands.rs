//! Inbound remote commands.
//!
//! The owner arms and disarms the alarm by texting the SIM.  The stored
//! message is read back verbatim (modem echo, `+CMGR:` header and body
//! all in one blob), so commands are recognised by plain substring search.

/// Token that arms the alarm.
pub const ARM_TOKEN: &[u8] = b"TURN ON";
/// Token that disarms the alarm.
pub const DISARM_TOKEN: &[u8] = b"TURN OFF";

/// Commands the owner can send by SMS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteCommand {
    /// Arm the alarm (LED on, start watching the PIR).
    Arm,
    /// Disarm the alarm (LED off, stop watching).
    Disarm,
}

impl RemoteCommand {
    /// Classify raw modem text.
    ///
    /// Matching is case-sensitive.  If both tokens are present the disarm
    /// wins.  Anything else, including empty or garbled input, is `None`.
    pub fn classify(text: &[u8]) -> Option<Self> {
        if contains(text, DISARM_TOKEN) {
            Some(Self::Disarm)
        } else if contains(text, ARM_TOKEN) {
            Some(Self::Arm)
        } else {
            None
        }
    }

    /// LED level commanded alongside this command.
    pub const fn led_active(self) -> bool {
        matches!(self, Self::Arm)
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
