//! Blocking delay adapter.
//!
//! Implements `embedded_hal::delay::DelayNs` with `std::thread::sleep`,
//! the only suspension point of the poll loop.

use std::time::Duration;

use embedded_hal::delay::DelayNs;

pub struct StdDelay;

impl StdDelay {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(ns.into()));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(ms.into()));
    }
}
