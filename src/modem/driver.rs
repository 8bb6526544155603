//! Open-loop AT command sequencer.

use std::borrow::Cow;

use embedded_hal::delay::DelayNs;
use log::{debug, info, warn};

use crate::app::commands::RemoteCommand;
use crate::app::ports::ModemPort;
use crate::config::{AlarmConfig, MAX_RECIPIENT_LEN};
use crate::error::ModemError;
use crate::pins::MODEM_BUF_SIZE;

use super::at::{self, BODY_LINE_LEN, SEND_TO_LINE_LEN};

/// Most bytes kept from a single inbound read.  One slot of the scratch
/// buffer is reserved, matching a NUL-terminated C string of the same size.
pub const INBOUND_MAX_LEN: usize = MODEM_BUF_SIZE - 1;

/// How the inbound read ended.  Only used for diagnostics: every status
/// without a token in the text means "no command pending".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStatus {
    /// At least one byte arrived.
    Received,
    /// Nothing arrived before the timeout.
    Empty,
    /// The UART driver returned an error.
    Failed,
}

/// Text drained from the modem after the "check stored message" sequence.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    text: heapless::Vec<u8, INBOUND_MAX_LEN>,
    status: ReadStatus,
    fault: Option<ModemError>,
}

impl InboundMessage {
    /// Raw text, cut at the first NUL byte.
    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    /// Text for log output; invalid UTF-8 is replaced.
    pub fn text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }

    pub fn status(&self) -> ReadStatus {
        self.status
    }

    /// First modem error hit while querying or reading, if any.
    pub fn fault(&self) -> Option<ModemError> {
        self.fault
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Remote command carried by this text, if any.
    pub fn command(&self) -> Option<RemoteCommand> {
        RemoteCommand::classify(&self.text)
    }
}

/// Writes fixed AT sequences to a [`ModemPort`], pacing each command.
pub struct AtDriver<M> {
    modem: M,
    settle_ms: u32,
    read_timeout_ms: u32,
    recipient: heapless::String<MAX_RECIPIENT_LEN>,
    send_to: heapless::String<SEND_TO_LINE_LEN>,
    body: heapless::String<BODY_LINE_LEN>,
}

impl<M: ModemPort> AtDriver<M> {
    /// Take ownership of the modem link.  The addressing and body lines are
    /// rendered once here.
    pub fn new(modem: M, config: &AlarmConfig) -> Self {
        Self {
            modem,
            settle_ms: config.at_settle_ms,
            read_timeout_ms: config.read_timeout_ms,
            recipient: config.recipient.clone(),
            send_to: at::send_to_line(&config.recipient),
            body: at::body_line(&config.body),
        }
    }

    /// Write each command in order, waiting the settle time after each one.
    ///
    /// Every command is attempted even if an earlier one failed; the first
    /// failure is returned once the whole sequence has gone out.
    pub fn run_sequence(
        &mut self,
        commands: &[&[u8]],
        delay: &mut impl DelayNs,
    ) -> Result<(), ModemError> {
        write_sequence(&mut self.modem, self.settle_ms, commands, delay)
    }

    /// Ask the modem for the message in slot 1 and drain whatever it sent
    /// back in one read.
    pub fn read_inbound(&mut self, delay: &mut impl DelayNs) -> InboundMessage {
        let mut fault = self.run_sequence(&at::CHECK_MESSAGE, delay).err();

        let mut buf = [0u8; MODEM_BUF_SIZE];
        let (len, status) = match self.modem.read(&mut buf[..INBOUND_MAX_LEN], self.read_timeout_ms) {
            Ok(0) => (0, ReadStatus::Empty),
            Ok(n) => (n.min(INBOUND_MAX_LEN), ReadStatus::Received),
            Err(e) => {
                debug!("modem: read failed: {:?}", e);
                fault = fault.or(Some(ModemError::ReadFailed));
                (0, ReadStatus::Failed)
            }
        };

        let end = buf[..len].iter().position(|&b| b == 0).unwrap_or(len);
        let mut text = heapless::Vec::new();
        // `end` never exceeds INBOUND_MAX_LEN.
        let _ = text.extend_from_slice(&buf[..end]);

        let msg = InboundMessage {
            text,
            status,
            fault,
        };
        match status {
            ReadStatus::Received => info!("modem <- {}", msg.text_lossy().trim_end()),
            ReadStatus::Empty => debug!("modem: no reply within {} ms", self.read_timeout_ms),
            ReadStatus::Failed => {}
        }
        msg
    }

    /// Delete the message in slot 1 so it is not acted on again.
    pub fn delete_stored_message(&mut self, delay: &mut impl DelayNs) -> Result<(), ModemError> {
        self.run_sequence(&at::DELETE_MESSAGE, delay)
    }

    /// Submit the alarm SMS to the configured recipient.
    pub fn send_notification(&mut self, delay: &mut impl DelayNs) -> Result<(), ModemError> {
        let steps: [&[u8]; 5] = [
            at::ATTENTION,
            at::TEXT_MODE,
            self.send_to.as_bytes(),
            self.body.as_bytes(),
            at::CTRL_Z,
        ];
        write_sequence(&mut self.modem, self.settle_ms, &steps, delay)
    }

    /// Number the alarm SMS goes to.
    pub fn recipient(&self) -> &heapless::String<MAX_RECIPIENT_LEN> {
        &self.recipient
    }

    pub fn modem(&self) -> &M {
        &self.modem
    }

    pub fn modem_mut(&mut self) -> &mut M {
        &mut self.modem
    }
}

fn write_sequence<M: ModemPort>(
    modem: &mut M,
    settle_ms: u32,
    commands: &[&[u8]],
    delay: &mut impl DelayNs,
) -> Result<(), ModemError> {
    let mut first_fault = None;

    for (step, cmd) in commands.iter().enumerate() {
        debug!("modem -> {}", cmd.escape_ascii());
        let fault = match modem.write(cmd) {
            Ok(n) if n == cmd.len() => None,
            Ok(written) => Some(ModemError::ShortWrite {
                step,
                written,
                expected: cmd.len(),
            }),
            Err(e) => {
                debug!("modem: write error {:?}", e);
                Some(ModemError::WriteFailed { step })
            }
        };
        if let Some(f) = fault {
            warn!("modem: {}", f);
            first_fault = first_fault.or(Some(f));
        }
        delay.delay_ms(settle_ms);
    }

    first_fault.map_or(Ok(()), Err)
}
