//! Hardware adapter — bridges real pins to domain port traits.
//!
//! Owns the status LED output and the PIR input, exposing them through
//! [`ActuatorPort`] and [`SensorPort`].  Generic over `embedded-hal`
//! digital pins so the same adapter drives [`OutputLine`]/[`InputLine`] on
//! the board and plain fakes in tests.
//!
//! [`OutputLine`]: crate::drivers::gpio::OutputLine
//! [`InputLine`]: crate::drivers::gpio::InputLine

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use log::warn;

use crate::app::ports::{ActuatorPort, SensorPort};

/// Concrete adapter that combines the LED and PIR behind port traits.
pub struct HardwareAdapter<L, P> {
    led: L,
    pir: P,
    led_on: bool,
}

impl<L: OutputPin, P: InputPin> HardwareAdapter<L, P> {
    pub fn new(led: L, pir: P) -> Self {
        Self {
            led,
            pir,
            led_on: false,
        }
    }

    /// Last level successfully commanded on the LED.
    pub fn led_on(&self) -> bool {
        self.led_on
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<L: OutputPin, P: InputPin> SensorPort for HardwareAdapter<L, P> {
    fn motion_detected(&mut self) -> bool {
        match self.pir.is_high() {
            Ok(level) => level,
            Err(e) => {
                warn!("PIR read failed: {:?}", e);
                false
            }
        }
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<L: OutputPin, P: InputPin> ActuatorPort for HardwareAdapter<L, P> {
    fn set_status_led(&mut self, on: bool) {
        match self.led.set_state(PinState::from(on)) {
            Ok(()) => self.led_on = on,
            Err(e) => warn!("Status LED write failed: {:?}", e),
        }
    }
}
