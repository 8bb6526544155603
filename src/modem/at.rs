//! AT command set used by the alarm (SIM800 text-mode SMS subset).
//!
//! Every command line ends in CR-LF.  The SMS body is the one exception:
//! it is closed by a bare Ctrl-Z (0x1A), which tells the modem to submit.

use core::fmt::Write;

use crate::config::{MAX_BODY_LEN, MAX_RECIPIENT_LEN};

/// Attention.  Wakes the modem's autobaud and checks it is responsive.
pub const ATTENTION: &[u8] = b"AT\r\n";
/// Select SMS text mode.
pub const TEXT_MODE: &[u8] = b"AT+CMGF=1\r\n";
/// Read the message stored in SIM slot 1.
pub const READ_SLOT_1: &[u8] = b"AT+CMGR=1\r\n";
/// Delete the message stored in SIM slot 1.
pub const DELETE_SLOT_1: &[u8] = b"AT+CMGD=1\r\n";
/// Ctrl-Z: submits the SMS body.
pub const CTRL_Z: &[u8] = &[0x1A];

/// Line terminator for commands and the body line.
const CRLF: &str = "\r\n";

/// Capacity of `AT+CMGS="<number>"\r\n`.
pub const SEND_TO_LINE_LEN: usize = 12 + MAX_RECIPIENT_LEN;
/// Capacity of `<body>\r\n`.
pub const BODY_LINE_LEN: usize = MAX_BODY_LEN + 2;

/// Commands sent before every inbound read.
pub const CHECK_MESSAGE: [&[u8]; 3] = [ATTENTION, TEXT_MODE, READ_SLOT_1];
/// Commands that consume the stored message once it has been acted on.
pub const DELETE_MESSAGE: [&[u8]; 3] = [ATTENTION, TEXT_MODE, DELETE_SLOT_1];

/// Build the `AT+CMGS` addressing line for `recipient`.
pub fn send_to_line(recipient: &str) -> heapless::String<SEND_TO_LINE_LEN> {
    let mut line = heapless::String::new();
    // Capacity covers the longest recipient `AlarmConfig` can hold.
    let _ = write!(line, "AT+CMGS=\"{recipient}\"{CRLF}");
    line
}

/// Build the body line for the alarm SMS.
pub fn body_line(body: &str) -> heapless::String<BODY_LINE_LEN> {
    let mut line = heapless::String::new();
    let _ = write!(line, "{body}{CRLF}");
    line
}
