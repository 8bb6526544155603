//! Single-pin GPIO lines exposed through `embedded-hal` digital traits.
//!
//! The pins are configured once by [`hw_init`]; these wrappers only read
//! and write levels, so they cannot fail.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: real GPIO registers via hw_init.
//! On host/test: hw_init's in-memory pin bank.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};

use crate::drivers::hw_init;

/// A push-pull output line (status LED).
pub struct OutputLine {
    gpio: i32,
    high: bool,
}

impl OutputLine {
    pub fn new(gpio: i32) -> Self {
        Self { gpio, high: false }
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }
}

impl ErrorType for OutputLine {
    type Error = Infallible;
}

impl OutputPin for OutputLine {
    fn set_low(&mut self) -> Result<(), Infallible> {
        hw_init::gpio_write(self.gpio, false);
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        hw_init::gpio_write(self.gpio, true);
        self.high = true;
        Ok(())
    }
}

impl StatefulOutputPin for OutputLine {
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.high)
    }
}

/// A floating input line (PIR sensor output).
pub struct InputLine {
    gpio: i32,
}

impl InputLine {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }
}

impl ErrorType for InputLine {
    type Error = Infallible;
}

impl InputPin for InputLine {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(hw_init::gpio_read(self.gpio))
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!hw_init::gpio_read(self.gpio))
    }
}
