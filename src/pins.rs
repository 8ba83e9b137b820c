//! GPIO pin assignments for the power button.
//!
//! Single source of truth for pin numbering.  All numbers are BCM
//! (Broadcom SoC) GPIO numbers, not physical header positions.

/// Default button input: BCM GPIO 3 (physical header pin 5).
///
/// GPIO 3 doubles as the SoC wake-from-halt line, so a button wired here
/// both shuts the board down and powers it back up.
pub const DEFAULT_BUTTON_GPIO: u8 = 3;

/// Highest BCM GPIO routed to the 40-pin header.
pub const MAX_HEADER_GPIO: u8 = 27;

/// Whether `pin` is a BCM GPIO exposed on the 40-pin header.
pub const fn is_header_gpio(pin: u8) -> bool {
    pin <= MAX_HEADER_GPIO
}
