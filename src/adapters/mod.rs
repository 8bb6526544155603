//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements         | Connects to              |
//! |----------------|--------------------|--------------------------|
//! | `hardware`     | SensorPort         | PIR input pin            |
//! |                | ActuatorPort       | Status LED output pin    |
//! | `log_sink`     | EventSink          | Serial log output        |
//! | `time`         | DelayNs            | FreeRTOS / std sleep     |
//!
//! The modem UART implements `ModemPort` directly in
//! [`drivers::uart_modem`](crate::drivers::uart_modem).

pub mod hardware;
pub mod log_sink;
pub mod time;
