//! Port traits — the boundary between the monitor and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ButtonMonitor (domain)
//! ```
//!
//! Driven adapters (GPIO, `wall`, `shutdown`, logging, config file)
//! implement these traits.  The [`ButtonMonitor`](super::service::ButtonMonitor)
//! consumes them via generics, so the debounce logic never touches real
//! hardware and can be driven by a scripted pin in tests.
//!
//! Pin reads and sleeps use the `embedded-hal` 1.0 traits directly
//! ([`InputPin`], [`DelayNs`](embedded_hal::delay::DelayNs)); only the
//! operations embedded-hal has no vocabulary for live here.

use embedded_hal::digital::InputPin;

use crate::config::ButtonConfig;

// ───────────────────────────────────────────────────────────────
// GPIO port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Claims exclusive ownership of an input pin.
///
/// The returned pin is released (reset to its previous mode) when it is
/// dropped, so every exit path of the monitor releases the hardware.
pub trait GpioPort {
    type Pin: InputPin;

    /// Configure `pin` (BCM numbering) as an input with the internal
    /// pull-up enabled.
    fn claim_input_pullup(&mut self, pin: u8) -> Result<Self::Pin, ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Notification port (driven adapter: domain → logged-in users)
// ───────────────────────────────────────────────────────────────

/// Broadcasts a message to every interactive session on the host.
///
/// Best effort: implementations must not block for long, and callers
/// treat failure as non-fatal.
pub trait NotifyPort {
    fn broadcast(&mut self, message: &str) -> Result<(), NotifyError>;
}

// ───────────────────────────────────────────────────────────────
// Power port (driven adapter: domain → host shutdown)
// ───────────────────────────────────────────────────────────────

/// Invokes the host's safe-shutdown procedure.
pub trait PowerPort {
    fn power_off(&mut self) -> Result<(), PowerError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The monitor emits structured [`MonitorEvent`](super::events::MonitorEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::MonitorEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: config file → domain)
// ───────────────────────────────────────────────────────────────

/// Loads the button configuration once at startup.
///
/// Implementations MUST return a validated config; out-of-range values
/// are rejected with [`ConfigError::ValidationFailed`], never clamped.
pub trait ConfigPort {
    fn load(&self) -> Result<ButtonConfig, ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors raised while loading config or claiming the pin.  All fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An explicitly named config file does not exist.
    NotFound(String),
    /// The config file exists but could not be read.
    Io(String),
    /// The config file is not valid JSON for [`ButtonConfig`].
    Parse(String),
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// The GPIO layer refused the pin (in use, no permission, no such pin).
    PinUnavailable { pin: u8, reason: String },
}

/// Errors from [`NotifyPort`].  Logged and swallowed by the monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// The broadcast command could not be started.
    Spawn(String),
}

/// Errors from [`PowerPort`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerError {
    /// The shutdown command could not be started.
    Spawn(String),
    /// The shutdown command ran and reported failure.
    /// `None` when it was killed by a signal.
    Status(Option<i32>),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "config file {} not found", path),
            Self::Io(msg) => write!(f, "config read failed: {}", msg),
            Self::Parse(msg) => write!(f, "config parse failed: {}", msg),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::PinUnavailable { pin, reason } => {
                write!(f, "GPIO {} unavailable: {}", pin, reason)
            }
        }
    }
}

impl core::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spawn(msg) => write!(f, "broadcast could not start: {}", msg),
        }
    }
}

impl core::fmt::Display for PowerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spawn(msg) => write!(f, "shutdown command could not start: {}", msg),
            Self::Status(Some(code)) => write!(f, "shutdown command exited with status {}", code),
            Self::Status(None) => write!(f, "shutdown command terminated by signal"),
        }
    }
}
