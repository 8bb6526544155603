//! Outbound application events.
//!
//! The [`AlarmMonitor`](super::service::AlarmMonitor) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them (serial log today).

use crate::app::commands::RemoteCommand;
use crate::error::ModemError;
use crate::fsm::AlarmState;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlarmEvent {
    /// The monitor has started (carries initial state).
    Started(AlarmState),

    /// A remote command was recognised in the stored SMS.
    CommandReceived(RemoteCommand),

    /// The alarm status changed.
    StateChanged { from: AlarmState, to: AlarmState },

    /// The alarm SMS sequence was written to the modem.
    NotificationSent { recipient: heapless::String<{ crate::config::MAX_RECIPIENT_LEN }> },

    /// A modem exchange failed; the cycle carried on regardless.
    ModemFault(ModemError),
}
