//! GSM modem link on a dedicated UART.
//!
//! Thin [`ModemPort`] wrapper over the UART helpers in [`hw_init`]; the
//! driver itself is installed by `hw_init::init_peripherals()`.
//!
//! On host/test the UART accepts every write and never receives anything.

use crate::app::ports::ModemPort;
use crate::drivers::hw_init;

/// Negative return code from the ESP-IDF UART driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UartError(pub i32);

impl core::fmt::Display for UartError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "UART driver error (rc={})", self.0)
    }
}

pub struct UartModem {
    port: i32,
}

impl UartModem {
    pub fn new(port: i32) -> Self {
        Self { port }
    }

    pub fn port(&self) -> i32 {
        self.port
    }
}

impl ModemPort for UartModem {
    type Error = UartError;

    fn write(&mut self, data: &[u8]) -> Result<usize, UartError> {
        hw_init::uart_write(self.port, data).map_err(UartError)
    }

    fn read(&mut self, buf: &mut [u8], timeout_ms: u32) -> Result<usize, UartError> {
        hw_init::uart_read(self.port, buf, timeout_ms).map_err(UartError)
    }
}
