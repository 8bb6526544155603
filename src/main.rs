//! Burglar Alarm Firmware — Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter      UartModem      LogEventSink  SystemDelay │
//! │  (Sensor+Actuator)    (ModemPort)    (EventSink)   (DelayNs)   │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │            AlarmMonitor (pure logic)                   │    │
//! │  │  AlarmState · AtDriver                                 │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use burglar_alarm::adapters::hardware::HardwareAdapter;
use burglar_alarm::adapters::log_sink::LogEventSink;
use burglar_alarm::adapters::time::SystemDelay;
use burglar_alarm::app::service::AlarmMonitor;
use burglar_alarm::config::AlarmConfig;
use burglar_alarm::drivers::gpio::{InputLine, OutputLine};
use burglar_alarm::drivers::hw_init;
use burglar_alarm::drivers::uart_modem::UartModem;
use burglar_alarm::error::Error;
use burglar_alarm::pins;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Burglar Alarm v{}                ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Compile-time configuration ─────────────────────────
    let config = AlarmConfig::default();
    config.validate().map_err(Error::from)?;
    info!(
        "Config: recipient={} settle={}ms idle={}ms (worst-case cycle {}ms)",
        config.recipient,
        config.at_settle_ms,
        config.idle_ms,
        config.worst_case_cycle_ms()
    );

    // ── 3. Initialise hardware peripherals ────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // A misconfigured UART or GPIO cannot be recovered at runtime.
        log::error!("HAL init failed: {}, halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 4. Construct adapters ─────────────────────────────────
    let hw = HardwareAdapter::new(
        OutputLine::new(pins::STATUS_LED_GPIO),
        InputLine::new(pins::PIR_GPIO),
    );
    let modem = UartModem::new(pins::MODEM_UART_PORT);
    let mut log_sink = LogEventSink::new();

    // ── 5. Construct and start the monitor ────────────────────
    let mut monitor = AlarmMonitor::new(&config, hw, modem, SystemDelay::new());
    monitor.start(&mut log_sink);

    info!("System ready. Entering poll loop.");

    // ── 6. Poll loop (never returns) ──────────────────────────
    monitor.run(&mut log_sink)
}
