//! Alarm status state machine.
//!
//! ```text
//!             TURN ON                 motion
//!  Disarmed ──────────▶ Armed ────────────────▶ Triggered
//!     ▲                   │  ▲                      │
//!     │     TURN OFF      │  │       TURN ON        │
//!     └───────────────────┘  └──────────────────────┤
//!     ▲                         TURN OFF            │
//!     └─────────────────────────────────────────────┘
//! ```
//!
//! Transitions are total functions of the current state and one input, so
//! there is no invalid combination to guard against.  Hardware side effects
//! (LED, modem traffic) are owned by
//! [`AlarmMonitor`](crate::app::service::AlarmMonitor); this module is pure.

use crate::app::commands::RemoteCommand;

/// Alarm status.  Exactly one value holds at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum AlarmState {
    /// Not watching the sensor.  LED off.
    #[default]
    Disarmed = 0,
    /// Watching the sensor.  LED on.
    Armed = 1,
    /// Motion seen while armed and the SMS has gone out.  Stays here until
    /// the next remote command; there is no self-clearing timeout.
    Triggered = 2,
}

impl AlarmState {
    /// Total number of states.
    pub const COUNT: usize = 3;

    /// Human-readable name for log output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Disarmed => "DISARMED",
            Self::Armed => "ARMED",
            Self::Triggered => "TRIGGERED",
        }
    }

    /// Next state after a remote command.  Valid from every state: a
    /// disarm always lands in `Disarmed`, an arm always lands in `Armed`
    /// (re-arming a triggered alarm included).
    pub const fn on_command(self, cmd: RemoteCommand) -> Self {
        match cmd {
            RemoteCommand::Arm => Self::Armed,
            RemoteCommand::Disarm => Self::Disarmed,
        }
    }

    /// Next state after sampling the motion sensor.
    pub const fn on_motion(self, motion: bool) -> Self {
        match self {
            Self::Armed if motion => Self::Triggered,
            other => other,
        }
    }

    /// Whether the sensor is sampled in this state.
    pub const fn watches_motion(self) -> bool {
        matches!(self, Self::Armed)
    }

    /// Level the status LED mirrors for this state.
    pub const fn led_active(self) -> bool {
        !matches!(self, Self::Disarmed)
    }
}

impl core::fmt::Display for AlarmState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
