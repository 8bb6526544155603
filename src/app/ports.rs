//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AlarmMonitor (domain)
//! ```
//!
//! Driven adapters (PIR input, LED output, modem UART, event sinks)
//! implement these traits.  The [`AlarmMonitor`](super::service::AlarmMonitor)
//! owns them via generics, so the domain core never touches hardware
//! directly.  Blocking delays come in through
//! [`embedded_hal::delay::DelayNs`] rather than a port of our own.

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to sample the motion sensor.
pub trait SensorPort {
    /// `true` while the PIR output is active.  A failed read reports `false`.
    fn motion_detected(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive the status LED.
pub trait ActuatorPort {
    /// Drive the status LED (true = on).
    fn set_status_led(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Modem port (driven adapter: domain ↔ GSM modem UART)
// ───────────────────────────────────────────────────────────────

/// Byte-oriented, full-duplex link to the modem.
///
/// Implementations must not interpret the bytes; AT framing belongs to
/// [`AtDriver`](crate::modem::AtDriver).
pub trait ModemPort {
    /// Error type for this link.
    type Error: core::fmt::Debug;

    /// Queue `data` for transmission.  Returns the number of bytes queued.
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error>;

    /// Block for at most `timeout_ms` waiting for bytes, then copy up to
    /// `buf.len()` of them into `buf`.  Returns 0 on timeout.
    fn read(&mut self, buf: &mut [u8], timeout_ms: u32) -> Result<usize, Self::Error>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AlarmEvent`](super::events::AlarmEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AlarmEvent);
}
