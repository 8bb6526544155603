//! GPIO / peripheral pin assignments for the alarm board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// GSM modem (SIM800-class, TTL UART)
// ---------------------------------------------------------------------------

/// Dedicated UART controller for the modem (UART0 stays on the console).
pub const MODEM_UART_PORT: i32 = 2;
/// ESP32 TX → modem RX.
pub const MODEM_TX_GPIO: i32 = 4;
/// ESP32 RX ← modem TX.
pub const MODEM_RX_GPIO: i32 = 5;
/// RTS/CTS are not wired; hardware flow control stays disabled.
pub const MODEM_PIN_NO_CHANGE: i32 = -1;
/// Line rate.  SIM800 modules autobaud, 9600 8N1 is the safe default.
pub const MODEM_BAUD_RATE: u32 = 9_600;

/// Size of the inbound scratch buffer used for one modem read.
pub const MODEM_BUF_SIZE: usize = 1024;
/// Driver-side RX ring buffer (the TX side is unbuffered).
pub const MODEM_RX_RING_SIZE: i32 = (MODEM_BUF_SIZE * 2) as i32;

// ---------------------------------------------------------------------------
// Status LED
// ---------------------------------------------------------------------------

/// Digital output: HIGH = armed (or triggered), LOW = disarmed.
pub const STATUS_LED_GPIO: i32 = 19;

// ---------------------------------------------------------------------------
// Motion sensor (HC-SR501 PIR)
// ---------------------------------------------------------------------------

/// Digital input: HIGH while motion is detected.  The PIR module drives the
/// line push-pull, so no internal pull resistor is enabled.
pub const PIR_GPIO: i32 = 18;
