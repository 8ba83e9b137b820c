//! Raspberry Pi GPIO adapter.
//!
//! Implements [`GpioPort`] on top of `rppal`, which drives the BCM GPIO
//! block through `/dev/gpiomem`.  The claimed pin is wrapped in
//! [`ButtonPin`] so the domain only sees the `embedded-hal` [`InputPin`]
//! trait.  Dropping a [`ButtonPin`] restores the pin's previous mode and
//! pull state.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin};
use log::{debug, info};
use rppal::gpio::Gpio;

use crate::app::ports::{ConfigError, GpioPort};

/// Entry point to the SoC GPIO block.
pub struct RpiGpio;

impl RpiGpio {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RpiGpio {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioPort for RpiGpio {
    type Pin = ButtonPin;

    fn claim_input_pullup(&mut self, pin: u8) -> Result<ButtonPin, ConfigError> {
        let unavailable = |e: rppal::gpio::Error| ConfigError::PinUnavailable {
            pin,
            reason: e.to_string(),
        };
        let gpio = Gpio::new().map_err(unavailable)?;
        let mut input = gpio.get(pin).map_err(unavailable)?.into_input_pullup();
        input.set_reset_on_drop(true);
        info!("GPIO {} claimed as input with pull-up", pin);
        Ok(ButtonPin { pin: input })
    }
}

/// Exclusively owned button input.
pub struct ButtonPin {
    pin: rppal::gpio::InputPin,
}

// Register reads through /dev/gpiomem cannot fail once the pin is claimed.
impl ErrorType for ButtonPin {
    type Error = Infallible;
}

impl InputPin for ButtonPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.pin.is_high())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.pin.is_low())
    }
}

impl Drop for ButtonPin {
    fn drop(&mut self) {
        debug!("GPIO {} released", self.pin.pin());
    }
}
