//! Alarm monitor — the hexagonal core.
//!
//! [`AlarmMonitor`] owns the alarm status, the hardware ports, the AT
//! driver and the delay source.  One call to [`AlarmMonitor::poll_cycle`]
//! is one pass of the firmware's forever-loop.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │      AlarmMonitor       │
//! ActuatorPort ◀──│  AlarmState · AtDriver  │──▶ ModemPort
//!                 └────────────────────────┘
//! ```
//!
//! Every step blocks the single control thread for a fixed time.  The
//! pacing is a timing assumption about the modem, not a synchronisation
//! primitive, so the order of writes and delays below is part of the
//! contract.

use embedded_hal::delay::DelayNs;
use log::{info, warn};

use crate::config::AlarmConfig;
use crate::error::ModemError;
use crate::fsm::AlarmState;
use crate::modem::{AtDriver, InboundMessage};

use super::commands::RemoteCommand;
use super::events::AlarmEvent;
use super::ports::{ActuatorPort, EventSink, ModemPort, SensorPort};

// ───────────────────────────────────────────────────────────────
// AlarmMonitor
// ───────────────────────────────────────────────────────────────

pub struct AlarmMonitor<H, M, D> {
    hw: H,
    at: AtDriver<M>,
    delay: D,
    state: AlarmState,
    exchange_settle_ms: u32,
    command_settle_ms: u32,
    trigger_settle_ms: u32,
    idle_ms: u32,
    cycle_count: u64,
    notifications_sent: u32,
}

impl<H, M, D> AlarmMonitor<H, M, D>
where
    H: SensorPort + ActuatorPort,
    M: ModemPort,
    D: DelayNs,
{
    /// Construct the monitor around already-initialised hardware.
    ///
    /// Does **not** touch the hardware — call [`start`](Self::start) next.
    pub fn new(config: &AlarmConfig, hw: H, modem: M, delay: D) -> Self {
        Self {
            hw,
            at: AtDriver::new(modem, config),
            delay,
            state: AlarmState::default(),
            exchange_settle_ms: config.exchange_settle_ms,
            command_settle_ms: config.command_settle_ms,
            trigger_settle_ms: config.trigger_settle_ms,
            idle_ms: config.idle_ms,
            cycle_count: 0,
            notifications_sent: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive the LED to match the initial state and announce startup.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        self.hw.set_status_led(self.state.led_active());
        sink.emit(&AlarmEvent::Started(self.state));
        info!("AlarmMonitor started in {}", self.state);
    }

    /// Run [`poll_cycle`](Self::poll_cycle) forever.
    pub fn run(&mut self, sink: &mut impl EventSink) -> ! {
        loop {
            self.poll_cycle(sink);
        }
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// One pass of the control loop:
    ///
    /// 1. read the stored SMS and apply any arm/disarm command,
    /// 2. let the UART exchange settle,
    /// 3. if armed, sample the PIR and raise the alarm on motion,
    /// 4. idle until the next cycle.
    ///
    /// Returns the state the cycle ended in.
    pub fn poll_cycle(&mut self, sink: &mut impl EventSink) -> AlarmState {
        self.cycle_count += 1;

        // 1. Inbound command
        let inbound = self.at.read_inbound(&mut self.delay);
        self.handle_inbound(&inbound, sink);

        // 2. Settle
        self.delay.delay_ms(self.exchange_settle_ms);

        // 3. Motion check
        if self.state.watches_motion() && self.hw.motion_detected() {
            self.raise_alarm(sink);
        }

        // 4. Idle
        self.delay.delay_ms(self.idle_ms);

        self.state
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current alarm status.
    pub fn state(&self) -> AlarmState {
        self.state
    }

    /// Poll cycles run since construction.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Alarm SMS sequences sent since construction.
    pub fn notifications_sent(&self) -> u32 {
        self.notifications_sent
    }

    pub fn hardware(&self) -> &H {
        &self.hw
    }

    pub fn modem(&self) -> &M {
        self.at.modem()
    }

    pub fn modem_mut(&mut self) -> &mut M {
        self.at.modem_mut()
    }

    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hw
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    pub fn delay_mut(&mut self) -> &mut D {
        &mut self.delay
    }

    // ── Internal ──────────────────────────────────────────────

    fn handle_inbound(&mut self, inbound: &InboundMessage, sink: &mut impl EventSink) {
        if let Some(fault) = inbound.fault() {
            self.report_fault(fault, sink);
        }

        // Timeouts, read errors and unrelated text all land here.
        let Some(cmd) = inbound.command() else {
            return;
        };
        self.apply_command(cmd, sink);
    }

    fn apply_command(&mut self, cmd: RemoteCommand, sink: &mut impl EventSink) {
        info!("Remote command: {:?}", cmd);
        sink.emit(&AlarmEvent::CommandReceived(cmd));

        self.hw.set_status_led(cmd.led_active());
        self.delay.delay_ms(self.command_settle_ms);
        if let Err(e) = self.at.delete_stored_message(&mut self.delay) {
            self.report_fault(e, sink);
        }
        self.delay.delay_ms(self.command_settle_ms);

        self.transition(self.state.on_command(cmd), sink);
    }

    fn raise_alarm(&mut self, sink: &mut impl EventSink) {
        warn!("Motion detected while armed, sending alarm SMS");

        // The SMS counts as sent once the sequence has been written; the
        // modem never acknowledges it on this path.
        if let Err(e) = self.at.send_notification(&mut self.delay) {
            self.report_fault(e, sink);
        }
        self.notifications_sent += 1;
        sink.emit(&AlarmEvent::NotificationSent {
            recipient: self.at.recipient().clone(),
        });
        self.delay.delay_ms(self.trigger_settle_ms);

        self.transition(self.state.on_motion(true), sink);
    }

    fn transition(&mut self, next: AlarmState, sink: &mut impl EventSink) {
        let prev = self.state;
        self.state = next;
        if next != prev {
            sink.emit(&AlarmEvent::StateChanged {
                from: prev,
                to: next,
            });
        }
    }

    fn report_fault(&mut self, fault: ModemError, sink: &mut impl EventSink) {
        warn!("Modem fault ignored until next cycle: {}", fault);
        sink.emit(&AlarmEvent::ModemFault(fault));
    }
}
