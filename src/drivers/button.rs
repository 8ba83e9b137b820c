//! Button input driver: level sampling with failure accounting.
//!
//! ## Hardware
//!
//! Momentary switch between the GPIO and GND, internal pull-up enabled.
//!
//! | Mode | Idle level | Pressed level |
//! |------|------------|---------------|
//! | NO   | HIGH       | LOW           |
//! | NC   | LOW        | HIGH          |
//!
//! A failed read counts as "not pressed".  The failure counter resets on
//! the next good read; reaching [`MAX_CONSECUTIVE_READ_FAILURES`] in a row
//! is reported as [`Error::HardwareFault`].

use embedded_hal::digital::{Error as _, InputPin};
use log::warn;

use crate::config::{ButtonMode, MAX_CONSECUTIVE_READ_FAILURES};
use crate::error::{Error, Result};

/// Outcome of one pin sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Pressed,
    Released,
    /// The read failed and is treated as released.
    ReadFailed { consecutive: u32 },
}

impl Sample {
    pub const fn is_pressed(self) -> bool {
        matches!(self, Self::Pressed)
    }
}

pub struct ButtonInput<P> {
    pin: P,
    pin_id: u8,
    mode: ButtonMode,
    consecutive_failures: u32,
}

impl<P: InputPin> ButtonInput<P> {
    pub fn new(pin: P, pin_id: u8, mode: ButtonMode) -> Self {
        Self {
            pin,
            pin_id,
            mode,
            consecutive_failures: 0,
        }
    }

    /// GPIO this button is attached to.
    pub fn pin_id(&self) -> u8 {
        self.pin_id
    }

    /// Failed reads since the last good one.
    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// Read the pin once and classify the level.
    pub fn sample(&mut self) -> Result<Sample> {
        match self.pin.is_high() {
            Ok(high) => {
                self.consecutive_failures = 0;
                if self.mode.is_pressed(high) {
                    Ok(Sample::Pressed)
                } else {
                    Ok(Sample::Released)
                }
            }
            Err(e) => {
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
                warn!(
                    "GPIO {} read failed ({:?}), {} in a row",
                    self.pin_id,
                    e.kind(),
                    self.consecutive_failures
                );
                if self.consecutive_failures >= MAX_CONSECUTIVE_READ_FAILURES {
                    return Err(Error::HardwareFault {
                        pin: self.pin_id,
                        consecutive_failures: self.consecutive_failures,
                    });
                }
                Ok(Sample::ReadFailed {
                    consecutive: self.consecutive_failures,
                })
            }
        }
    }
}
