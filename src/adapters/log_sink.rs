//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured alarm events to the
//! ESP-IDF logger (which goes to the console UART in production).

use log::{info, warn};

use crate::app::events::AlarmEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AlarmEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AlarmEvent) {
        match event {
            AlarmEvent::Started(state) => {
                info!("START | initial_state={}", state);
            }
            AlarmEvent::CommandReceived(cmd) => {
                info!("CMD   | {:?}", cmd);
            }
            AlarmEvent::StateChanged { from, to } => {
                info!("STATE | {} -> {}", from, to);
            }
            AlarmEvent::NotificationSent { recipient } => {
                info!("ALARM | SMS submitted to {}", recipient);
            }
            AlarmEvent::ModemFault(e) => {
                warn!("MODEM | {}", e);
            }
        }
    }
}
